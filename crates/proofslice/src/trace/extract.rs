//! Two-pass extraction of axioms and lemmas from a proof trace.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

use super::line::classify;

static NEGATED_CONJECTURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"negated conjecture\s+([0-9]+)").expect("valid regex"));

/// Ordered content extracted from one proof trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceContent {
    /// Input formulas, in trace order, excluding the conjecture line.
    pub axioms: Vec<String>,
    /// Derived formulas from recognized inference steps, in trace order.
    pub lemmas: Vec<String>,
    /// Step id of the conjecture input, if the trace names one.
    pub conjecture_id: Option<usize>,
}

/// Find the id of the conjecture input.
///
/// Returns the integer captured by the first line carrying a
/// `negated conjecture <id>` annotation, or `None` if the trace has no
/// such line (a pure axiom run).
pub fn find_conjecture_id(trace: &str) -> Option<usize> {
    trace.lines().find_map(|line| {
        NEGATED_CONJECTURE_RE
            .captures(line)
            .and_then(|caps| caps[1].parse().ok())
    })
}

/// Partition a trace into axioms and lemmas.
///
/// Two passes over the text: the first locates the conjecture id,
/// which the second needs before any line can be classified — an input
/// line restating the conjecture must not become an axiom. Without a
/// conjecture marker every input line is an axiom.
pub fn extract(trace: &str) -> TraceContent {
    let conjecture_id = find_conjecture_id(trace);

    let mut axioms = Vec::new();
    let mut lemmas = Vec::new();
    for line in trace.lines() {
        let Some(step) = classify(line) else { continue };
        if step.is_input() && Some(step.id) != conjecture_id {
            axioms.push(step.formula);
        } else if step.is_real_inference() {
            lemmas.push(step.formula);
        } else {
            debug!(id = step.id, tag = %step.tag, "dropping step");
        }
    }

    info!(
        axioms = axioms.len(),
        lemmas = lemmas.len(),
        conjecture_id,
        "trace extracted"
    );
    TraceContent {
        axioms,
        lemmas,
        conjecture_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACE: &str = "\
% Refutation found by the prover
1. ! [X0,X1] : op(op(X0,X1),X1) = X0 [input]
2. ! [X0,X1] : op(X0,op(X0,X1)) = X1 [input]
3. op(a,op(a,b)) != b [negated conjecture 2]
4. op(op(a,b),b) = a [superposition 1,3]
5. op(a,a) = op(b,b) [demodulation 4,2]
6. $false [subsumption resolution 5,3]
Refutation found.
";

    #[test]
    fn test_conjecture_id_is_first_match() {
        assert_eq!(find_conjecture_id(TRACE), Some(2));
        let twice = "3. p [negated conjecture 7]\n9. q [negated conjecture 8]\n";
        assert_eq!(find_conjecture_id(twice), Some(7));
    }

    #[test]
    fn test_no_conjecture_marker_means_none() {
        assert_eq!(find_conjecture_id("1. p(a) [input]\n"), None);
    }

    #[test]
    fn test_axioms_exclude_the_conjecture_input() {
        let content = extract(TRACE);
        assert_eq!(content.conjecture_id, Some(2));
        // input 2 is the conjecture, so only input 1 is an axiom
        assert_eq!(
            content.axioms,
            vec!["! [X0,X1] : op(op(X0,X1),X1) = X0".to_string()]
        );
    }

    #[test]
    fn test_lemmas_preserve_trace_order() {
        let content = extract(TRACE);
        assert_eq!(
            content.lemmas,
            vec![
                "op(op(a,b),b) = a".to_string(),
                "op(a,a) = op(b,b)".to_string(),
                "$false".to_string(),
            ]
        );
    }

    #[test]
    fn test_without_conjecture_every_input_is_an_axiom() {
        let trace = "1. p(a) [input]\n2. q(b) [input]\n3. r(c) [resolution 1,2]\n";
        let content = extract(trace);
        assert_eq!(content.conjecture_id, None);
        assert_eq!(content.axioms.len(), 2);
        assert_eq!(content.lemmas, vec!["r(c)".to_string()]);
    }

    #[test]
    fn test_unrecognized_inference_steps_are_dropped() {
        let trace = "\
1. p(a) [input]
2. p(a) | q(a) [cnf transformation 1]
3. q(a) [resolution 1,2]
";
        let content = extract(trace);
        assert_eq!(content.axioms.len(), 1);
        assert_eq!(content.lemmas, vec!["q(a)".to_string()]);
    }
}

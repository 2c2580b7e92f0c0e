//! Classification of single proof-trace lines.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Inference kinds whose conclusions are collected as lemmas.
///
/// Steps justified by any other rule (rewriting bookkeeping, splitting,
/// etc.) are dropped during extraction.
pub const REAL_INFERENCE_MARKERS: [&str; 3] = ["demodulation", "superposition", "resolution"];

static PROOF_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.(.*)$").expect("valid regex"));

/// One numbered derivation step of a prover trace.
///
/// The formula is kept as raw text; only the bracketed annotation is
/// interpreted, and only by substring matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofLine {
    /// Step number assigned by the prover.
    pub id: usize,
    /// Formula text between the step number and the annotation, trimmed.
    pub formula: String,
    /// Raw bracketed annotation, brackets included.
    pub tag: String,
}

impl ProofLine {
    /// Whether this step restates one of the prover's input formulas.
    pub fn is_input(&self) -> bool {
        self.tag.contains("input")
    }

    /// Whether this step was derived by one of the recognized
    /// inference kinds.
    pub fn is_real_inference(&self) -> bool {
        REAL_INFERENCE_MARKERS.iter().any(|m| self.tag.contains(m))
    }
}

/// Classify one trace line.
///
/// A line is a proof line iff it starts with digits followed by `.`
/// and contains a `[`. Comments (leading `%`) and anything else return
/// `None` and are discarded by the caller.
pub fn classify(line: &str) -> Option<ProofLine> {
    if line.starts_with('%') {
        return None;
    }
    let caps = PROOF_LINE_RE.captures(line)?;
    let rest = caps.get(2).map_or("", |m| m.as_str());
    if !rest.contains('[') {
        return None;
    }
    let id = match caps[1].parse() {
        Ok(id) => id,
        Err(_) => {
            warn!(line, "step number does not fit in usize, discarding line");
            return None;
        }
    };
    let (formula, tag) = split_formula_and_tag(rest, id);
    Some(ProofLine { id, formula, tag })
}

/// Split the text after the step id into formula and annotation.
///
/// The formula is everything before the last `[`; the annotation runs
/// from that `[` to its closing `]`. An unterminated annotation
/// degrades to an empty formula so extraction can continue.
fn split_formula_and_tag(rest: &str, id: usize) -> (String, String) {
    // rest is guaranteed to contain '[' by classify
    let open = match rest.rfind('[') {
        Some(open) => open,
        None => return (String::new(), String::new()),
    };
    match rest[open..].find(']') {
        Some(close) => {
            let formula = rest[..open].trim().to_string();
            let tag = rest[open..open + close + 1].to_string();
            (formula, tag)
        }
        None => {
            warn!(id, "unterminated annotation bracket, dropping formula");
            (String::new(), rest[open..].to_string())
        }
    }
}

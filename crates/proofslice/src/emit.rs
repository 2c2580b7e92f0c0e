//! Problem assembly: canonical clauses and per-lemma file emission.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::GeneratorConfig;
use crate::error::{Result, SliceError};
use crate::formula::{
    abstract_repeated_term, normalize_variables, normalize_variables_with_y,
    strip_leading_quantifiers,
};

/// Context selection for the generated problem files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Axioms plus the target lemma as conjecture.
    Single,
    /// Axioms plus all earlier lemmas, target lemma as conjecture.
    History,
    /// Like single, with one repeated subterm of the target abstracted.
    Abstract,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Single => "single",
            Mode::History => "history",
            Mode::Abstract => "abstract",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SliceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single" => Ok(Mode::Single),
            "history" => Ok(Mode::History),
            "abstract" => Ok(Mode::Abstract),
            _ => Err(SliceError::UnknownMode(s.to_string())),
        }
    }
}

/// Role of an emitted clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Axiom,
    Lemma,
    Conjecture,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Axiom => "axiom",
            Role::Lemma => "lemma",
            Role::Conjecture => "conjecture",
        }
    }
}

/// A canonicalized clause ready for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub name: String,
    pub role: Role,
    /// Quantified variables, in renaming order. Empty means ground.
    pub vars: Vec<String>,
    pub body: String,
}

impl Clause {
    /// Canonicalize `formula`: strip the leading quantifier block,
    /// renumber every variable, record the rebuilt prefix.
    pub fn canonical(name: impl Into<String>, role: Role, formula: &str) -> Self {
        let stripped = strip_leading_quantifiers(formula);
        let (vars, body) = normalize_variables(stripped);
        Clause {
            name: name.into(),
            role,
            vars,
            body,
        }
    }

    /// Like [`Clause::canonical`], but abstraction variables keep
    /// their Y-names. Used for abstract-mode conjectures.
    pub fn canonical_keep_y(name: impl Into<String>, role: Role, formula: &str) -> Self {
        let stripped = strip_leading_quantifiers(formula);
        let (vars, body) = normalize_variables_with_y(stripped);
        Clause {
            name: name.into(),
            role,
            vars,
            body,
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fof({}, {}, ", self.name, self.role.as_str())?;
        if !self.vars.is_empty() {
            write!(f, "! [{}] : ", self.vars.join(", "))?;
        }
        write!(f, "({})).", self.body)
    }
}

/// Render the problem file for lemma `index` (1-based).
///
/// The file holds every axiom clause, the mode-dependent lemma context,
/// and exactly one conjecture clause, separated by blank lines.
pub fn build_problem(
    axioms: &[String],
    lemmas: &[String],
    index: usize,
    mode: Mode,
) -> Result<String> {
    let out_of_range = || SliceError::LemmaIndex {
        index,
        count: lemmas.len(),
    };
    let target_idx = index.checked_sub(1).ok_or_else(out_of_range)?;
    let target = lemmas.get(target_idx).ok_or_else(out_of_range)?;

    let mut clauses: Vec<Clause> = axioms
        .iter()
        .enumerate()
        .map(|(i, formula)| Clause::canonical(format!("a{}", i + 1), Role::Axiom, formula))
        .collect();

    let conjecture_name = format!("conjecture_{:04}", index);
    match mode {
        Mode::Single => {
            clauses.push(Clause::canonical(conjecture_name, Role::Conjecture, target));
        }
        Mode::History => {
            for (j, formula) in lemmas[..target_idx].iter().enumerate() {
                clauses.push(Clause::canonical(
                    format!("lemma_{:04}", j + 1),
                    Role::Lemma,
                    formula,
                ));
            }
            clauses.push(Clause::canonical(conjecture_name, Role::Conjecture, target));
        }
        Mode::Abstract => {
            let abstracted = abstract_repeated_term(target);
            clauses.push(Clause::canonical_keep_y(
                conjecture_name,
                Role::Conjecture,
                &abstracted,
            ));
        }
    }

    let mut content = clauses
        .iter()
        .map(Clause::to_string)
        .collect::<Vec<_>>()
        .join("\n\n");
    content.push('\n');
    Ok(content)
}

/// One failed lemma index with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionFailure {
    pub index: usize,
    pub message: String,
}

/// Aggregate outcome of one emission batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionReport {
    pub mode: Mode,
    /// Paths written, in lemma-index order.
    pub written: Vec<PathBuf>,
    /// Indices that failed, with messages. Never aborts the batch.
    pub failures: Vec<EmissionFailure>,
}

impl EmissionReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Write one problem file per lemma into `config.output_dir`.
///
/// The directory is created if absent. A failure on one index is
/// logged and recorded, and the batch continues; only failure to set
/// up the output directory itself is fatal.
pub fn write_problem_files(
    axioms: &[String],
    lemmas: &[String],
    mode: Mode,
    config: &GeneratorConfig,
) -> Result<EmissionReport> {
    fs::create_dir_all(&config.output_dir)?;

    let mut report = EmissionReport {
        mode,
        written: Vec::with_capacity(lemmas.len()),
        failures: Vec::new(),
    };
    for index in 1..=lemmas.len() {
        match emit_one(axioms, lemmas, index, mode, &config.output_dir) {
            Ok(path) => report.written.push(path),
            Err(e) => {
                warn!(index, error = %e, "skipping lemma problem");
                report.failures.push(EmissionFailure {
                    index,
                    message: e.to_string(),
                });
            }
        }
    }

    info!(
        mode = %mode,
        written = report.written.len(),
        failed = report.failures.len(),
        "emission finished"
    );
    Ok(report)
}

fn emit_one(
    axioms: &[String],
    lemmas: &[String],
    index: usize,
    mode: Mode,
    out_dir: &Path,
) -> Result<PathBuf> {
    let content = build_problem(axioms, lemmas, index, mode)?;
    let path = out_dir.join(format!("{}_lemma_{:04}.p", mode, index));
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_axioms() -> Vec<String> {
        vec![
            "! [X0,X1] : op(op(X0,X1),X1) = X0".to_string(),
            "! [X2] : op(X2,e) = X2".to_string(),
        ]
    }

    fn sample_lemmas() -> Vec<String> {
        vec![
            "op(a,op(a,b)) = b".to_string(),
            "op(X3,X3) = op(X1,X1)".to_string(),
            "op(op(c,d),op(c,d)) = e".to_string(),
        ]
    }

    #[test]
    fn test_mode_round_trips_through_strings() {
        for mode in [Mode::Single, Mode::History, Mode::Abstract] {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
        assert!(matches!(
            "full".parse::<Mode>(),
            Err(SliceError::UnknownMode(ref s)) if s == "full"
        ));
    }

    #[test]
    fn test_clause_rendering() {
        let clause = Clause::canonical("a1", Role::Axiom, "! [X0,X1] : op(op(X0,X1),X1) = X0");
        assert_eq!(
            clause.to_string(),
            "fof(a1, axiom, ! [X0, X1] : (op(op(X0,X1),X1) = X0))."
        );
    }

    #[test]
    fn test_ground_clause_has_no_prefix() {
        let clause = Clause::canonical("a1", Role::Axiom, "op(a,b) = c");
        assert_eq!(clause.to_string(), "fof(a1, axiom, (op(a,b) = c)).");
    }

    #[test]
    fn test_single_mode_contains_axioms_and_one_conjecture() {
        let content = build_problem(&sample_axioms(), &sample_lemmas(), 1, Mode::Single).unwrap();
        assert_eq!(content.matches(", axiom,").count(), 2);
        assert_eq!(content.matches(", conjecture,").count(), 1);
        assert_eq!(content.matches(", lemma,").count(), 0);
        assert!(content.contains("fof(conjecture_0001, conjecture, (op(a,op(a,b)) = b))."));
        assert!(content.ends_with(".\n"));
    }

    #[test]
    fn test_history_mode_carries_earlier_lemmas() {
        let content = build_problem(&sample_axioms(), &sample_lemmas(), 3, Mode::History).unwrap();
        assert_eq!(content.matches(", lemma,").count(), 2);
        assert_eq!(content.matches(", conjecture,").count(), 1);
        assert!(content.contains("fof(lemma_0001, lemma,"));
        assert!(content.contains("fof(lemma_0002, lemma,"));
        assert!(content.contains("fof(conjecture_0003, conjecture,"));
        // first file has no history at all
        let first = build_problem(&sample_axioms(), &sample_lemmas(), 1, Mode::History).unwrap();
        assert_eq!(first.matches(", lemma,").count(), 0);
    }

    #[test]
    fn test_abstract_mode_generalizes_the_target() {
        let content = build_problem(&sample_axioms(), &sample_lemmas(), 3, Mode::Abstract).unwrap();
        // op(c,d) repeats in lemma 3 and is abstracted to Y0, which the
        // conjecture then quantifies alongside the X-variables
        assert!(content.contains("fof(conjecture_0003, conjecture, ! [Y0] : (op(Y0,Y0) = e))."));
    }

    #[test]
    fn test_abstract_mode_matches_single_when_abstraction_is_noop() {
        let lemmas = vec!["op(X5,a) = X5".to_string()];
        let single = build_problem(&sample_axioms(), &lemmas, 1, Mode::Single).unwrap();
        let abstracted = build_problem(&sample_axioms(), &lemmas, 1, Mode::Abstract).unwrap();
        // op(X5,a) occurs once: fallback abstracts it, so the two modes
        // only coincide on formulas with no flat compound at all
        assert_ne!(single, abstracted);

        let lemmas = vec!["p(X5) & q(a)".to_string()];
        let single = build_problem(&sample_axioms(), &lemmas, 1, Mode::Single).unwrap();
        let abstracted = build_problem(&sample_axioms(), &lemmas, 1, Mode::Abstract).unwrap();
        assert_eq!(single, abstracted);
    }

    #[test]
    fn test_index_zero_and_out_of_range_are_errors() {
        let err = build_problem(&sample_axioms(), &sample_lemmas(), 0, Mode::Single).unwrap_err();
        assert!(matches!(err, SliceError::LemmaIndex { index: 0, .. }));
        let err = build_problem(&sample_axioms(), &sample_lemmas(), 4, Mode::Single).unwrap_err();
        assert!(matches!(err, SliceError::LemmaIndex { index: 4, count: 3 }));
    }
}

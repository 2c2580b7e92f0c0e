//! proofslice: slice a refutation proof trace into per-lemma TPTP problems.
//!
//! Given the numbered trace of a refutation-based prover, this crate
//! extracts the input axioms and the derived lemmas, rewrites each
//! formula into a canonical clause, and writes one self-contained TPTP
//! problem file per lemma, in one of three context modes:
//!
//! - `single`: axioms + the target lemma as conjecture
//! - `history`: axioms + all earlier lemmas + the target as conjecture
//! - `abstract`: axioms + the target with one repeated subterm
//!   generalized into a fresh variable

pub mod config;
pub mod emit;
pub mod error;
pub mod formula;
pub mod trace;

pub use config::GeneratorConfig;
pub use emit::{
    build_problem, write_problem_files, Clause, EmissionFailure, EmissionReport, Mode, Role,
};
pub use error::{Result, SliceError};
pub use formula::{
    abstract_repeated_term, normalize_variables, normalize_variables_with_y,
    strip_leading_quantifiers, ABSTRACTION_VARIABLE,
};
pub use trace::{classify, extract, find_conjecture_id, ProofLine, TraceContent};

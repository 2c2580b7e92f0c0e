//! Proof-trace scanning: line classification and axiom/lemma extraction.

pub mod extract;
pub mod line;

pub use extract::{extract, find_conjecture_id, TraceContent};
pub use line::{classify, ProofLine, REAL_INFERENCE_MARKERS};

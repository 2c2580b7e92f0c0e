//! Error types for proofslice.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SliceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown mode '{0}' (expected one of: single, history, abstract)")]
    UnknownMode(String),

    #[error("Lemma index {index} out of range (trace has {count} lemmas)")]
    LemmaIndex { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, SliceError>;

//! Generator configuration.

use std::path::PathBuf;

/// Configuration for per-lemma problem generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory receiving the generated problem files. Created on
    /// first use if absent.
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_dir: PathBuf::from("problems"),
        }
    }
}

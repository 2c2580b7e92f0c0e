//! Subterm abstraction for the "abstract" output mode.
//!
//! Generalizes a lemma by replacing one repeated flat compound subterm
//! with a fresh variable before normalization. Deliberately narrow:
//! one abstraction variable per formula, and only flat (one-level)
//! `op(..,..)` terms are candidates.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// The fresh variable substituted for the abstracted term. The
/// Y-naming keeps it disjoint from the X-numbered prover variables.
pub const ABSTRACTION_VARIABLE: &str = "Y0";

/// A flat binary compound: both arguments free of parentheses (and of
/// commas, which would make the term non-binary).
static FLAT_COMPOUND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"op\([^(),]+,[^(),]+\)").expect("valid regex"));

/// Abstract one repeated flat subterm of `formula` into [`ABSTRACTION_VARIABLE`].
///
/// Matches are collected left to right; the chosen term is the first
/// one (in scan order) whose literal text occurs more than once, the
/// first match if nothing repeats, and with no match at all the
/// formula is returned unchanged. Every literal occurrence of the
/// chosen text is replaced, not only the matched spans.
pub fn abstract_repeated_term(formula: &str) -> String {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for m in FLAT_COMPOUND_RE.find_iter(formula) {
        *counts.entry(m.as_str()).or_insert(0) += 1;
    }

    let chosen = counts
        .iter()
        .find(|(_, &n)| n > 1)
        .map(|(term, _)| *term)
        .or_else(|| counts.keys().next().copied());

    match chosen {
        Some(term) => formula.replace(term, ABSTRACTION_VARIABLE),
        None => formula.to_string(),
    }
}

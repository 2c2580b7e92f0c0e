//! Canonical variable renaming and quantifier-prefix handling.
//!
//! Extracted formulas arrive with whatever variable numbering the
//! prover left behind and, usually, a redundant top-level universal
//! quantifier block. Normalization strips that block, renames the free
//! variables to a dense canonical scheme, and lets the emitter rebuild
//! a minimal prefix from the returned name list.

use regex::{Captures, Regex};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

static LEADING_QUANTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*!\s*\[[^\]]*\]\s*:\s*").expect("valid regex"));

/// Variable occurrences are whole tokens of the form `X<n>` or `Y<n>`.
static VARIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[XY][0-9]+\b").expect("valid regex"));

/// Remove a single top-level `! [vars] :` block at the very start of
/// the formula. Quantifiers anywhere else are left untouched.
pub fn strip_leading_quantifiers(formula: &str) -> &str {
    match LEADING_QUANTIFIER_RE.find(formula) {
        Some(m) => &formula[m.end()..],
        None => formula,
    }
}

/// Collect variable occurrences, deduplicated and sorted
/// lexicographically. The sort fixes the renaming order.
fn collect_variables(formula: &str) -> Vec<String> {
    let vars: BTreeSet<String> = VARIABLE_RE
        .find_iter(formula)
        .map(|m| m.as_str().to_string())
        .collect();
    vars.into_iter().collect()
}

/// Apply a precomputed renaming in one whole-token pass.
///
/// The map is complete before any text is rewritten, and every token is
/// matched with word boundaries, so `X1` cannot clobber part of `X10`
/// and no substitution can feed another.
fn apply_renaming(formula: &str, renaming: &BTreeMap<String, String>) -> String {
    VARIABLE_RE
        .replace_all(formula, |caps: &Captures<'_>| {
            let token = &caps[0];
            renaming
                .get(token)
                .cloned()
                .unwrap_or_else(|| token.to_string())
        })
        .into_owned()
}

/// Renumber every variable (X- and Y-named) as X0, X1, … in sorted
/// order. Returns the new names in renaming order and the rewritten
/// formula.
pub fn normalize_variables(formula: &str) -> (Vec<String>, String) {
    let old_names = collect_variables(formula);
    let renaming: BTreeMap<String, String> = old_names
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), format!("X{}", i)))
        .collect();
    let new_names = old_names.iter().map(|v| renaming[v].clone()).collect();
    (new_names, apply_renaming(formula, &renaming))
}

/// Variant for abstracted formulas: only X-named variables are
/// renumbered; Y-named abstraction variables keep their names.
pub fn normalize_variables_with_y(formula: &str) -> (Vec<String>, String) {
    let old_names = collect_variables(formula);
    let mut renaming = BTreeMap::new();
    let mut new_names = Vec::with_capacity(old_names.len());
    let mut next = 0usize;
    for old in &old_names {
        if old.starts_with('X') {
            let new = format!("X{}", next);
            next += 1;
            new_names.push(new.clone());
            renaming.insert(old.clone(), new);
        } else {
            new_names.push(old.clone());
        }
    }
    (new_names, apply_renaming(formula, &renaming))
}

//! Idempotent extension of colon-delimited search paths.
//!
//! A candidate is appended only when the directory exists and is not
//! already present as a whole token. Re-running the extension any number
//! of times leaves the sequence unchanged.

use std::path::{Path, PathBuf};

/// Whether `dir` already appears as a colon-delimited token of `list`.
pub fn contains_token(list: &str, dir: &str) -> bool {
    list.split(':').any(|token| token == dir)
}

/// Append each existing, not-yet-present candidate to `list` in order.
/// `exists` is the directory probe; candidates it rejects are skipped
/// silently.
pub fn extend<F>(list: &str, candidates: &[PathBuf], exists: F) -> String
where
    F: Fn(&Path) -> bool,
{
    let mut out = list.to_string();
    for candidate in candidates {
        let token = candidate.display().to_string();
        if !exists(candidate) || contains_token(&out, &token) {
            continue;
        }
        if out.is_empty() {
            out = token;
        } else {
            out.push(':');
            out.push_str(&token);
        }
    }
    out
}

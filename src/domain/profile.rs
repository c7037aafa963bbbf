//! Idempotent shell-profile block handling.
//!
//! The persisted environment lives in a single region bounded by
//! [`BLOCK_START`] and [`BLOCK_END`]. The decision of whether and what to
//! write is a pure function over the existing file content, so it can be
//! tested without touching a filesystem.
//!
//! The surrounding read-then-write is *not* atomic: two processes
//! persisting at the same instant can both observe a marker-free profile
//! and both append. That matches the suite's historical behavior and is
//! accepted; last-writer semantics apply.

pub const BLOCK_START: &str = "# >>> geomon environment >>>";
pub const BLOCK_END: &str = "# <<< geomon environment <<<";

/// Compute the new profile content, or `None` when the start marker is
/// already present and nothing must be written.
pub fn append_block(existing: &str, body: &str) -> Option<String> {
    if existing.contains(BLOCK_START) {
        return None;
    }

    let mut out = String::with_capacity(existing.len() + body.len() + 64);
    out.push_str(existing);
    if !existing.is_empty() && !existing.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(BLOCK_START);
    out.push('\n');
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(BLOCK_END);
    out.push('\n');
    Some(out)
}

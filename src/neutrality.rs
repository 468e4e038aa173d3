//! Forbidden-term scanning for the no-winner invariant.
//!
//! Narrative templates are never trusted to stay clean on their own; every
//! composed output is re-scanned at runtime before a result is returned.

/// Terms whose presence in any output text violates neutrality.
///
/// "best" also covers "best choice", and "perfect" covers "perfect solution",
/// so the scan list stays minimal while matching the wider forbidden set.
pub const FORBIDDEN_TERMS: [&str; 5] = ["best", "winner", "optimal", "perfect", "ideal choice"];

/// Returns the first forbidden term found in `text`, case-insensitively.
pub fn find_forbidden_term(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    FORBIDDEN_TERMS
        .iter()
        .copied()
        .find(|term| lowered.contains(term))
}

/// Returns true if `text` contains no forbidden term.
pub fn is_neutral(text: &str) -> bool {
    find_forbidden_term(text).is_none()
}

//! Display masking for sensitive values.
//!
//! A masked value keeps only its last few characters readable.  Values
//! no longer than the visible suffix collapse to a fixed placeholder so
//! the mask never discloses the length of a very short secret.

/// Placeholder shown for empty or short values, and for any value that
/// is only held as ciphertext.
pub const MASK_PLACEHOLDER: &str = "****";

/// Default number of trailing characters left visible.
pub const DEFAULT_VISIBLE_SUFFIX: usize = 4;

/// Mask `value`, leaving the last `visible_suffix` characters readable.
///
/// Lengths are counted in characters.  The result is for display only
/// and is never written to storage.
pub fn mask(value: &str, visible_suffix: usize) -> String {
    let len = value.chars().count();
    if len <= visible_suffix {
        return MASK_PLACEHOLDER.to_string();
    }
    let hidden = len - visible_suffix;
    let mut out = "*".repeat(hidden);
    out.extend(value.chars().skip(hidden));
    out
}

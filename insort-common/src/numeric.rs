//! # Permissive Numeric Parsing
//!
//! Best-effort parsing of the leading integer prefix of a string, with the
//! semantics of C's `atoi`/`strtol` family: skip leading whitespace, accept
//! one optional sign, consume the longest run of decimal digits, and ignore
//! whatever follows. Input with no digit at all parses as `0` rather than
//! raising an error.
//!
//! That last rule is deliberately preserved: command-line tools built on this
//! parse treat `"abc"` as `0` instead of rejecting it. Callers that want to
//! notice the quirk can use [`try_leading_i64`] and react to `None`.
//!
//! ## Example
//!
//! ```
//! use insort_common::numeric::{leading_i64, try_leading_i64};
//!
//! assert_eq!(leading_i64("42"), 42);
//! assert_eq!(leading_i64("-7 apples"), -7);
//! assert_eq!(leading_i64("apples"), 0);
//!
//! assert_eq!(try_leading_i64("apples"), None);
//! ```

/// Parses the leading integer prefix of `text`, or `None` if no digit is
/// consumed.
///
/// Leading ASCII whitespace is skipped and a single `+` or `-` sign is
/// accepted before the digits. Values outside the `i64` range clamp to
/// [`i64::MIN`] / [`i64::MAX`], the way `strtol` clamps to `LONG_MIN` /
/// `LONG_MAX`.
///
/// # Example
///
/// ```
/// use insort_common::numeric::try_leading_i64;
///
/// assert_eq!(try_leading_i64("  12abc"), Some(12));
/// assert_eq!(try_leading_i64("+3"), Some(3));
/// assert_eq!(try_leading_i64("-"), None);
/// ```
#[must_use]
pub fn try_leading_i64(text: &str) -> Option<i64> {
    let rest = text.trim_ascii_start();
    let (negative, digits) = match rest.strip_prefix('-') {
        Some(after) => (true, after),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };

    // Accumulate negatively so that i64::MIN is reachable without overflow.
    let mut value: i64 = 0;
    let mut consumed = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        consumed = true;
        value = value
            .saturating_mul(10)
            .saturating_sub(i64::from(byte - b'0'));
    }

    if !consumed {
        return None;
    }
    Some(if negative { value } else { value.saturating_neg() })
}

/// Parses the leading integer prefix of `text`, defaulting to `0`.
///
/// This is the `atoi` behavior: malformed input is silently normalized
/// rather than reported.
#[must_use]
pub fn leading_i64(text: &str) -> i64 {
    try_leading_i64(text).unwrap_or(0)
}

//! Builtin check evaluation
//!
//! Leaf logic shared by the engine: URL shape, anchored pattern compilation,
//! inclusive range tests, and zero-value presence.

use std::sync::LazyLock;

use regex::Regex;

use crate::record::FieldValue;

// Scheme is optional: `www.google.com` is accepted the way form inputs write
// it. The host must be dotted (or `localhost` / an IPv4 literal), which is
// what rejects bare tokens like `wwwgooglecom`.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:https?|ftp)://)?(?:[^\s:@/]+(?::[^\s:@/]*)?@)?(?:localhost|(?:\d{1,3}\.){3}\d{1,3}|(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,})(?::\d{1,5})?(?:/\S*)?$",
    )
    .expect("URL pattern is valid")
});

/// Returns `true` if the string is a syntactically well-formed URL.
#[must_use]
pub(crate) fn is_url(input: &str) -> bool {
    !input.is_empty() && URL_REGEX.is_match(input)
}

/// Compiles a pattern with full-match semantics by anchoring both ends.
pub(crate) fn compile_full_match(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

/// Inclusive integer range. Non-integer values fail.
#[must_use]
pub(crate) fn int_in_range(value: &FieldValue, lo: i64, hi: i64) -> bool {
    matches!(value, FieldValue::Int(n) if (lo..=hi).contains(n))
}

/// Inclusive floating-point range. Integer values are widened; other types
/// fail.
#[must_use]
pub(crate) fn float_in_range(value: &FieldValue, lo: f64, hi: f64) -> bool {
    match value {
        FieldValue::Float(x) => *x >= lo && *x <= hi,
        FieldValue::Int(n) => {
            let x = *n as f64;
            x >= lo && x <= hi
        }
        _ => false,
    }
}

/// The `required` test: present and not the type's zero value.
#[must_use]
pub(crate) fn is_present(value: &FieldValue) -> bool {
    !value.is_zero()
}

// ============================================================================
// TESTS
// ============================================================================

//! Display formatting for prices and URL query values.
//!
//! Prices use the Brazilian convention: `.` groups thousands and `,`
//! separates cents (`12.345,67`). Amounts are rounded to whole cents first so
//! float noise never reaches the UI.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::fmt::Write;

/// Format a price in reais, e.g. `1234.5` -> `1.234,50`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return format_cents(0);
    }
    format_cents((value * 100.0).round() as i64)
}

/// Format an integer amount of cents, e.g. `123450` -> `1.234,50`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let whole = (abs / 100).to_string();
    let fraction = abs % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped},{fraction:02}")
}

/// Percent-encode a query component, leaving only RFC 3986 unreserved bytes.
pub fn encode_query_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// Readable slug for a category name in a URL, e.g. `Ficção Científica` ->
/// `ficção-científica`.
pub fn format_query_param(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

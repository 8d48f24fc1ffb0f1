//! Query-string integer parsing.

/// Parse the leading integer of a query value.
///
/// Leading whitespace and a single sign are accepted, then as many decimal
/// digits as follow; anything after the digits is ignored (`"12abc"` is 12,
/// `"2.7"` is 2). Returns `None` when no digit follows, and saturates on
/// overflow.
pub fn parse_int_param(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));

    Some(if negative { -magnitude } else { magnitude })
}

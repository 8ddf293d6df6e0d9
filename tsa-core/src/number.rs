//! Loose number coercion for CSV text.
//!
//! Two flavours are needed:
//! - [`coerce_number`]: the *whole* value must be numeric (used to decide
//!   whether a sortable column compares numerically). Empty text counts as 0.
//! - [`parse_float_prefix`]: the longest numeric prefix wins, anything else
//!   is `None` (used to coerce the confidence column, with `None` mapped to 0).

/// Coerce a whole field to a number, or `None` when it is not numeric.
///
/// Accepts decimal literals with optional sign, fraction and exponent,
/// `Infinity` with optional sign, and `0x`/`0o`/`0b` integers. Surrounding
/// whitespace is ignored; blank text is 0.
pub fn coerce_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return Some(0.0);
    }
    if let Some(v) = parse_infinity(t) {
        return Some(v);
    }
    if let Some(v) = parse_radix_integer(t) {
        return Some(v);
    }
    if decimal_prefix_len(t) == t.len() {
        return t.parse::<f64>().ok();
    }
    None
}

/// Parse the longest numeric prefix of `s`, ignoring leading whitespace.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let t = s.trim_start();
    for (literal, value) in [
        ("Infinity", f64::INFINITY),
        ("+Infinity", f64::INFINITY),
        ("-Infinity", f64::NEG_INFINITY),
    ] {
        if t.starts_with(literal) {
            return Some(value);
        }
    }
    let len = decimal_prefix_len(t);
    if len == 0 {
        return None;
    }
    t[..len].parse::<f64>().ok()
}

fn parse_infinity(t: &str) -> Option<f64> {
    match t {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

fn parse_radix_integer(t: &str) -> Option<f64> {
    let (radix, digits) = match t.get(..2) {
        Some("0x") | Some("0X") => (16, &t[2..]),
        Some("0o") | Some("0O") => (8, &t[2..]),
        Some("0b") | Some("0B") => (2, &t[2..]),
        _ => return None,
    };
    u64::from_str_radix(digits, radix).ok().map(|v| v as f64)
}

/// Length in bytes of the longest decimal literal at the start of `s`:
/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
fn decimal_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return 0;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

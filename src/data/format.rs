//! Display formatting and ordering of cell text in the tables.

use std::cmp::Ordering;

/// Format a number for display: at most two decimals, trailing zeros
/// removed, integer digits grouped by three with spaces.
///
/// `1234567.1234` becomes `"1 234 567.12"`, `2.50` becomes `"2.5"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) if rest != "0" => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", trimmed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Display text of a raw cell string: numbers go through [`format_number`],
/// anything else is shown as is.
pub fn display_cell(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => format_number(v),
        _ => raw.to_string(),
    }
}

/// Order two cell strings: numbers before text, numbers by value, text
/// lexically.
pub fn cmp_numeric_aware(a: &str, b: &str) -> Ordering {
    let num = |s: &str| {
        let t = s.trim();
        if t.is_empty() {
            None
        } else {
            t.parse::<f64>().ok().filter(|v| v.is_finite())
        }
    };
    match (num(a), num(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

//! Number and percentage extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{NUMBER, PERCENTAGE};

/// Extract the first number in `text`.
///
/// Accepts thousands separators and either `.` or `,` as the decimal mark:
/// "80,000.50", "80.000,50", "80000" and "1,5" all parse.
pub fn extract_number(text: &str) -> Option<Decimal> {
    NUMBER
        .find_iter(text)
        .find_map(|m| parse_number_token(m.as_str()))
}

/// Extract the number written immediately before a `%` sign.
pub fn extract_percentage(text: &str) -> Option<Decimal> {
    let caps = PERCENTAGE.captures(text)?;
    Decimal::from_str(&caps[1].replace(',', ".")).ok()
}

/// Parse one numeric token, resolving which separator is the decimal mark.
///
/// With both separators present the last one is the decimal mark. With a
/// single kind, repeated separators are grouping; a lone separator followed
/// by exactly three digits is grouping too, unless the integer part is zero.
pub fn parse_number_token(token: &str) -> Option<Decimal> {
    let token = token.trim();
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let normalized = match (digits.rfind(','), digits.rfind('.')) {
        (Some(c), Some(d)) if c > d => digits.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => digits.replace(',', ""),
        (Some(_), None) => resolve_single_separator(digits, ','),
        (None, Some(_)) => resolve_single_separator(digits, '.'),
        (None, None) => digits.to_string(),
    };

    let value = Decimal::from_str(&normalized).ok()?;
    Some(if negative { -value } else { value })
}

fn resolve_single_separator(digits: &str, sep: char) -> String {
    let parts: Vec<&str> = digits.split(sep).collect();

    let grouping = parts.len() > 2
        || (parts.len() == 2 && parts[1].len() == 3 && parts[0] != "0");

    if grouping {
        parts.concat()
    } else {
        digits.replace(sep, ".")
    }
}

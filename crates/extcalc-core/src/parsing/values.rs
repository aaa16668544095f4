use crate::model::{DEFAULT_FLOORS, DEFAULT_RESERVE_PERCENT};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a number typed into a form field.
///
/// Handles formats like:
/// - "120" -> 120
/// - "120.5" or "120,5" -> 120.5 (comma decimal separator)
/// - "1 200" or "1\u{a0}200" -> 1200 (space as thousands separator)
/// - "", "abc" -> None
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let compact: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if compact.is_empty() {
        return None;
    }
    Decimal::from_str(&compact).ok()
}

/// Area in m². Empty, non-numeric and negative input coerce to 0.
pub fn parse_area(s: &str) -> Decimal {
    match parse_decimal(s) {
        Some(v) if v.is_sign_positive() => v,
        _ => Decimal::ZERO,
    }
}

/// Floor count. Fractions are truncated; anything below 1 or unparseable
/// becomes 1. Counts beyond `u32` saturate.
pub fn parse_floors(s: &str) -> u32 {
    let Some(v) = parse_decimal(s) else {
        return DEFAULT_FLOORS;
    };
    if v.trunc() < Decimal::ONE {
        return DEFAULT_FLOORS;
    }
    v.trunc().to_u32().unwrap_or(u32::MAX)
}

/// Reserve percentage. An empty field means the default; non-numeric and
/// negative input coerce to 0.
pub fn parse_reserve_percent(s: &str) -> Decimal {
    if s.trim().is_empty() {
        return DEFAULT_RESERVE_PERCENT;
    }
    match parse_decimal(s) {
        Some(v) if v.is_sign_positive() => v,
        _ => Decimal::ZERO,
    }
}

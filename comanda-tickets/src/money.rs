//! Brazilian currency formatting

use rust_decimal::prelude::*;

/// Cents precision, half-up
const DECIMAL_PLACES: u32 = 2;

/// Format a value as `R$ 1.234,56` (negative as `-R$ 5,00`)
pub fn format_brl(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .abs();

    // `{:.2}` on Decimal always yields "<int>.<2 digits>"
    let plain = format!("{:.2}", rounded);
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let sign = if value.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}R$ {},{}", sign, group_thousands(int_part), frac_part)
}

/// Format a percentage without trailing zeros (`10`, `12,5`)
pub fn format_percent(value: Decimal) -> String {
    value
        .round_dp(DECIMAL_PLACES)
        .normalize()
        .to_string()
        .replace('.', ",")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

use rust_decimal::{Decimal, RoundingStrategy};

use crate::scaling::error::ScaleError;

/// Truncates toward zero at `decimals` places. Never rounds a magnitude up.
pub fn truncate_to(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::ToZero)
}

/// Parses a decimal string from an API payload, naming the field on failure.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, ScaleError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| ScaleError::MalformedResponse {
            field,
            value: raw.to_string(),
        })
}

/// Renders a currency amount as `$1,234.56` (banker's rounding to cents).
pub fn format_usd(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{sign}${grouped}.{cents}")
}

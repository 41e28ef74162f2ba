use std::str::FromStr;

use clap::Parser;
use rust_decimal::Decimal;

use crate::types::direction::Direction;

/// Scale a reference account's pending orders to your own position size.
#[derive(Debug, Clone, Parser)]
pub struct Args {
    /// Account to mirror. Overrides HYPERLIQUID_ADDRESS.
    #[arg(long)]
    pub address: Option<String>,

    #[arg(long, default_value = "BTC")]
    pub coin: String,

    /// Your position direction. Prompted for when omitted.
    #[arg(long, value_enum)]
    pub direction: Option<Direction>,

    /// Your position size in base units. Prompted for when omitted.
    #[arg(long, value_parser = parse_positive_size)]
    pub size: Option<Decimal>,
}

/// Accepts plain (`0.5`) and scientific (`5e-1`) notation.
pub fn parse_positive_size(raw: &str) -> Result<Decimal, String> {
    let trimmed = raw.trim();
    let size = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| format!("invalid size: {raw}"))?;

    if size <= Decimal::ZERO {
        return Err("size must be a positive number".to_string());
    }

    Ok(size)
}

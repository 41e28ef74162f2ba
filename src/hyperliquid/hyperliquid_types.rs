use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::account::account_state::AccountState;
use crate::scaling::error::ScaleError;
use crate::types::fill::Fill;
use crate::types::numeric::parse_decimal;
use crate::types::order::Order;
use crate::types::position::Position;
use crate::types::side::Side;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearinghouseState {
    #[serde(default)]
    pub asset_positions: Vec<AssetPosition>,
}

#[derive(Debug, Deserialize)]
pub struct AssetPosition {
    pub position: WirePosition,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePosition {
    pub coin: String,
    /// Signed size as a decimal string.
    pub szi: String,
    pub entry_px: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOrder {
    pub coin: String,
    pub side: String,
    pub sz: String,
    pub limit_px: String,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct WireFill {
    pub coin: String,
    #[serde(default)]
    pub time: Option<i64>,
}

impl TryFrom<ClearinghouseState> for AccountState {
    type Error = ScaleError;

    fn try_from(state: ClearinghouseState) -> Result<Self, Self::Error> {
        let positions = state
            .asset_positions
            .into_iter()
            .map(|asset| Position::try_from(asset.position))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AccountState::new(positions))
    }
}

impl TryFrom<WirePosition> for Position {
    type Error = ScaleError;

    fn try_from(wire: WirePosition) -> Result<Self, Self::Error> {
        let size = parse_decimal("szi", &wire.szi)?;
        let entry_price = parse_decimal("entryPx", &wire.entry_px)?;

        Ok(Position::new(wire.coin, size, entry_price))
    }
}

impl TryFrom<WireOrder> for Order {
    type Error = ScaleError;

    fn try_from(wire: WireOrder) -> Result<Self, Self::Error> {
        let side = Side::from_wire(&wire.side).ok_or_else(|| ScaleError::MalformedResponse {
            field: "side",
            value: wire.side.clone(),
        })?;
        let size = parse_decimal("sz", &wire.sz)?;
        let limit_price = parse_decimal("limitPx", &wire.limit_px)?;

        let order = Order::new(wire.coin, side, size, limit_price);

        Ok(match wire.timestamp.and_then(from_millis) {
            Some(timestamp) => order.with_timestamp(timestamp),
            None => order,
        })
    }
}

impl From<WireFill> for Fill {
    fn from(wire: WireFill) -> Self {
        Fill::new(wire.coin, wire.time.and_then(from_millis))
    }
}

fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

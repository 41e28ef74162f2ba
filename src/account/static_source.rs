use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::account::AccountSource;
use crate::account::account_state::AccountState;
use crate::types::fill::Fill;
use crate::types::order::Order;

/// In-memory account used by tests. `None` fields fail their fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticAccountSource {
    pub state: Option<AccountState>,
    pub orders: Option<Vec<Order>>,
    pub fills: Option<Vec<Fill>>,
}

impl StaticAccountSource {
    pub fn new(state: AccountState, orders: Vec<Order>, fills: Vec<Fill>) -> Self {
        Self {
            state: Some(state),
            orders: Some(orders),
            fills: Some(fills),
        }
    }
}

#[async_trait]
impl AccountSource for StaticAccountSource {
    async fn account_state(&self, _address: &str) -> Result<AccountState> {
        self.state.clone().ok_or_else(|| anyhow!("account state unavailable"))
    }

    async fn open_orders(&self, _address: &str) -> Result<Vec<Order>> {
        self.orders.clone().ok_or_else(|| anyhow!("open orders unavailable"))
    }

    async fn recent_fills(&self, _address: &str) -> Result<Vec<Fill>> {
        self.fills.clone().ok_or_else(|| anyhow!("fills unavailable"))
    }
}

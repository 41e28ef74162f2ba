pub mod account_state;
pub mod snapshot;
#[cfg(test)]
pub mod static_source;

use anyhow::Result;
use async_trait::async_trait;

use crate::account::account_state::AccountState;
use crate::types::fill::Fill;
use crate::types::order::Order;

/// Read-only view of a remote account.
#[async_trait]
pub trait AccountSource: Send + Sync {
    async fn account_state(&self, address: &str) -> Result<AccountState>;
    async fn open_orders(&self, address: &str) -> Result<Vec<Order>>;
    async fn recent_fills(&self, address: &str) -> Result<Vec<Fill>>;
}

pub mod hyperliquid_client;
pub mod hyperliquid_config;
pub mod hyperliquid_types;

pub mod error;
pub mod order_scaler;
pub mod pipeline;
pub mod projection;
pub mod ratio;

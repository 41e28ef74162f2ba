pub mod direction;
pub mod fill;
pub mod instrument_rules;
pub mod numeric;
pub mod order;
pub mod position;
pub mod side;

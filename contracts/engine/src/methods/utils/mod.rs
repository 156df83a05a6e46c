pub mod collateral;
pub mod debt;
pub mod health;
pub mod transfer;
pub mod validation;

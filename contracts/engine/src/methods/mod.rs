pub mod account_information;
pub mod burn;
pub mod deposit;
pub mod deposit_and_mint;
pub mod health_factor;
pub mod initialize;
pub mod liquidate;
pub mod mint;
pub mod redeem_collateral;
pub mod redeem_collateral_for_debt;
pub mod usd_value;
pub mod utils;

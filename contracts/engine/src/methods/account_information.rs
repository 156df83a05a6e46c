use engine_interface::types::account_information::AccountInformation;
use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::price_provider::PriceProvider;

use super::utils::health;

pub fn account_information(env: &Env, who: &Address) -> Result<AccountInformation, Error> {
    health::account_information(env, who, &mut PriceProvider::new(env))
}

pub fn collateral_value(env: &Env, who: &Address) -> Result<i128, Error> {
    health::collateral_value(env, who, &mut PriceProvider::new(env))
}

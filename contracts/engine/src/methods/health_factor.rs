use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::price_provider::PriceProvider;

use super::utils::health;

pub fn health_factor(env: &Env, who: &Address) -> Result<i128, Error> {
    health::health_factor(env, who, &mut PriceProvider::new(env))
}

pub fn calculate_health_factor(
    env: &Env,
    collateral_value: i128,
    total_debt: i128,
) -> Result<i128, Error> {
    health::calculate_health_factor(env, collateral_value, total_debt)
}

use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::price_provider::PriceProvider;

pub fn usd_value(env: &Env, asset: &Address, amount: i128) -> Result<i128, Error> {
    PriceProvider::new(env).usd_value(asset, amount)
}

pub fn token_amount_from_usd(env: &Env, asset: &Address, usd_amount: i128) -> Result<i128, Error> {
    PriceProvider::new(env).token_amount_from_usd(asset, usd_amount)
}

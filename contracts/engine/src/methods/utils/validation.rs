use common::pow10;
use engine_interface::types::error::Error;
use engine_interface::types::price_feed_config_input::PriceFeedConfigInput;
use soroban_sdk::{assert_with_error, Address, Env, Vec};

use crate::storage::{has_price_feed, has_stable_token};

pub fn require_not_initialized(env: &Env) {
    assert_with_error!(env, !has_stable_token(env), Error::AlreadyInitialized);
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

pub fn require_supported_asset(env: &Env, asset: &Address) {
    assert_with_error!(env, has_price_feed(env, asset), Error::UnsupportedAsset);
}

pub fn require_valid_collaterals(env: &Env, collaterals: &Vec<PriceFeedConfigInput>) {
    assert_with_error!(env, !collaterals.is_empty(), Error::InvalidConfiguration);

    for input in collaterals.iter() {
        assert_with_error!(
            env,
            pow10(input.asset_decimals).is_some(),
            Error::InvalidConfiguration
        );
    }
}

pub fn require_unique_collateral(env: &Env, asset: &Address) {
    assert_with_error!(env, !has_price_feed(env, asset), Error::InvalidConfiguration);
}

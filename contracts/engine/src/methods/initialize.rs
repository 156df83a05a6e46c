use engine_interface::types::error::Error;
use engine_interface::types::price_feed_config::PriceFeedConfig;
use engine_interface::types::price_feed_config_input::PriceFeedConfigInput;
use soroban_sdk::{Address, Env, Vec};

use crate::event;
use crate::storage::{write_collateral_assets, write_price_feed, write_stable_token};

use super::utils::validation::{
    require_not_initialized, require_unique_collateral, require_valid_collaterals,
};

pub fn initialize(
    env: &Env,
    stable_token: &Address,
    collaterals: &Vec<PriceFeedConfigInput>,
) -> Result<(), Error> {
    require_not_initialized(env);
    require_valid_collaterals(env, collaterals);

    let mut assets = Vec::new(env);

    for input in collaterals.iter() {
        require_unique_collateral(env, &input.asset);

        write_price_feed(env, &input.asset, &PriceFeedConfig::new(&input));
        assets.push_back(input.asset);
    }

    write_collateral_assets(env, &assets);
    write_stable_token(env, stable_token);

    event::initialized(env, stable_token, &assets);

    Ok(())
}

use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::price_provider::PriceProvider;
use crate::types::reentrancy_guard::ReentrancyGuard;

use super::utils::collateral;
use super::utils::health::require_healthy;
use super::utils::validation::{require_positive_amount, require_supported_asset};

pub fn redeem_collateral(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    let _guard = ReentrancyGuard::acquire(env)?;

    require_positive_amount(env, amount);
    require_supported_asset(env, asset);

    collateral::redeem_collateral(env, asset, amount, who, who)?;

    require_healthy(env, who, &mut PriceProvider::new(env))
}

use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::price_provider::PriceProvider;
use crate::types::reentrancy_guard::ReentrancyGuard;

use super::utils::collateral::redeem_collateral;
use super::utils::debt::burn_debt;
use super::utils::health::require_healthy;
use super::utils::validation::{require_positive_amount, require_supported_asset};

/// Repays `amount` of debt and withdraws the same nominal `amount` of `asset`.
///
/// The amounts are not converted through the oracle: one stable unit buys one
/// raw unit of the collateral token.
pub fn redeem_collateral_for_debt(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    let _guard = ReentrancyGuard::acquire(env)?;

    require_positive_amount(env, amount);
    require_supported_asset(env, asset);

    burn_debt(env, amount, who, who)?;
    redeem_collateral(env, asset, amount, who, who)?;

    require_healthy(env, who, &mut PriceProvider::new(env))
}

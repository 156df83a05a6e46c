use common::{PercentageMath, LIQUIDATION_BONUS, MIN_HEALTH_FACTOR};
use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::types::price_provider::PriceProvider;
use crate::types::reentrancy_guard::ReentrancyGuard;

use super::utils::collateral::redeem_collateral;
use super::utils::debt::burn_debt;
use super::utils::health::{health_factor, require_healthy};
use super::utils::validation::{require_positive_amount, require_supported_asset};

pub fn liquidate(
    env: &Env,
    liquidator: &Address,
    asset: &Address,
    who: &Address,
    debt_to_cover: i128,
) -> Result<(), Error> {
    liquidator.require_auth();

    let _guard = ReentrancyGuard::acquire(env)?;

    let mut prices = PriceProvider::new(env);

    let starting_health_factor = health_factor(env, who, &mut prices)?;
    if starting_health_factor >= MIN_HEALTH_FACTOR {
        return Err(Error::NotLiquidatable);
    }

    require_positive_amount(env, debt_to_cover);
    require_supported_asset(env, asset);

    let covered_amount = prices.token_amount_from_usd(asset, debt_to_cover)?;
    let bonus = covered_amount
        .percent_mul_floor(LIQUIDATION_BONUS)
        .ok_or(Error::MathOverflowError)?;
    let seized = covered_amount
        .checked_add(bonus)
        .ok_or(Error::MathOverflowError)?;

    redeem_collateral(env, asset, seized, who, liquidator)?;
    burn_debt(env, debt_to_cover, who, liquidator)?;

    let ending_health_factor = health_factor(env, who, &mut prices)?;
    if ending_health_factor <= starting_health_factor {
        return Err(Error::HealthFactorNotImproved);
    }

    require_healthy(env, liquidator, &mut prices)?;

    event::liquidation(env, who, liquidator, asset, debt_to_cover, seized);

    Ok(())
}

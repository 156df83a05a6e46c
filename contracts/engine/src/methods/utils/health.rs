use common::{
    mul_div_floor, PercentageMath, LIQUIDATION_THRESHOLD, MAX_HEALTH_FACTOR, MIN_HEALTH_FACTOR,
    PRECISION,
};
use engine_interface::types::account_information::AccountInformation;
use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::{read_collateral, read_collateral_assets, read_debt};
use crate::types::price_provider::PriceProvider;

/// Sum of USD values of every registered collateral held by `who`
pub(crate) fn collateral_value(
    env: &Env,
    who: &Address,
    prices: &mut PriceProvider,
) -> Result<i128, Error> {
    let mut total = 0i128;

    for asset in read_collateral_assets(env) {
        let balance = read_collateral(env, who, &asset);
        if balance == 0 {
            continue;
        }

        total = total
            .checked_add(prices.usd_value(&asset, balance)?)
            .ok_or(Error::MathOverflowError)?;
    }

    Ok(total)
}

pub(crate) fn account_information(
    env: &Env,
    who: &Address,
    prices: &mut PriceProvider,
) -> Result<AccountInformation, Error> {
    Ok(AccountInformation {
        collateral_value: collateral_value(env, who, prices)?,
        total_debt: read_debt(env, who),
    })
}

pub(crate) fn calculate_health_factor(
    env: &Env,
    collateral_value: i128,
    total_debt: i128,
) -> Result<i128, Error> {
    if collateral_value < 0 || total_debt < 0 {
        return Err(Error::InvalidAmount);
    }

    if total_debt == 0 {
        return Ok(MAX_HEALTH_FACTOR);
    }

    let adjusted = collateral_value
        .percent_mul_floor(LIQUIDATION_THRESHOLD)
        .ok_or(Error::MathOverflowError)?;

    mul_div_floor(env, adjusted, PRECISION, total_debt).ok_or(Error::MathOverflowError)
}

pub(crate) fn health_factor(
    env: &Env,
    who: &Address,
    prices: &mut PriceProvider,
) -> Result<i128, Error> {
    let total_debt = read_debt(env, who);
    if total_debt == 0 {
        return Ok(MAX_HEALTH_FACTOR);
    }

    calculate_health_factor(env, collateral_value(env, who, prices)?, total_debt)
}

pub(crate) fn require_healthy(
    env: &Env,
    who: &Address,
    prices: &mut PriceProvider,
) -> Result<(), Error> {
    if health_factor(env, who, prices)? < MIN_HEALTH_FACTOR {
        return Err(Error::HealthFactorTooLow);
    }

    Ok(())
}

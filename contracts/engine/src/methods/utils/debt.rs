use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};
use stable_token_interface::StableTokenClient;

use crate::event;
use crate::storage::{read_debt, read_stable_token, write_debt};
use crate::types::price_provider::PriceProvider;

use super::health::require_healthy;
use super::transfer::transfer;

/// Records `amount` of new debt for `who`, checks solvency, then issues the
/// stable tokens to `who`.
pub(crate) fn do_mint(
    env: &Env,
    who: &Address,
    amount: i128,
    prices: &mut PriceProvider,
) -> Result<(), Error> {
    let stable_token = StableTokenClient::new(env, &read_stable_token(env)?);

    let debt = read_debt(env, who)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_debt(env, who, debt);
    require_healthy(env, who, prices)?;

    if !matches!(stable_token.try_mint(who, &amount), Ok(Ok(()))) {
        return Err(Error::MintFailed);
    }

    event::mint(env, who, amount);

    Ok(())
}

/// Reduces the debt of `on_behalf_of` by `amount`, collects the stable tokens
/// from `payer` and destroys them. Performs no health factor check.
pub(crate) fn burn_debt(
    env: &Env,
    amount: i128,
    on_behalf_of: &Address,
    payer: &Address,
) -> Result<(), Error> {
    let debt = read_debt(env, on_behalf_of);
    if debt < amount {
        return Err(Error::InsufficientDebt);
    }

    write_debt(env, on_behalf_of, debt - amount);

    let stable_token_address = read_stable_token(env)?;
    let engine = env.current_contract_address();

    transfer(env, &stable_token_address, payer, &engine, amount)?;

    let stable_token = StableTokenClient::new(env, &stable_token_address);
    if !matches!(stable_token.try_burn(&engine, &amount), Ok(Ok(()))) {
        return Err(Error::BurnFailed);
    }

    event::burn(env, on_behalf_of, payer, amount);

    Ok(())
}

use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_collateral, write_collateral};

use super::transfer::transfer;

/// Credits `amount` of `asset` to `who` and pulls the tokens into custody.
pub(crate) fn do_deposit(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    let balance = read_collateral(env, who, asset)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_collateral(env, who, asset, balance);
    event::collateral_deposited(env, who, asset, amount);

    transfer(env, asset, who, &env.current_contract_address(), amount)
}

/// Debits `amount` of `asset` from `from` and pushes the tokens out of custody to `to`.
/// Performs no health factor check.
pub(crate) fn redeem_collateral(
    env: &Env,
    asset: &Address,
    amount: i128,
    from: &Address,
    to: &Address,
) -> Result<(), Error> {
    let balance = read_collateral(env, from, asset);
    if balance < amount {
        return Err(Error::InsufficientCollateral);
    }

    write_collateral(env, from, asset, balance - amount);
    event::collateral_redeemed(env, from, to, asset, amount);

    transfer(env, asset, &env.current_contract_address(), to, amount)
}

use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::reentrancy_guard::ReentrancyGuard;

use super::utils::collateral::do_deposit;
use super::utils::validation::{require_positive_amount, require_supported_asset};

pub fn deposit(env: &Env, who: &Address, asset: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    let _guard = ReentrancyGuard::acquire(env)?;

    require_positive_amount(env, amount);
    require_supported_asset(env, asset);

    do_deposit(env, who, asset, amount)
}

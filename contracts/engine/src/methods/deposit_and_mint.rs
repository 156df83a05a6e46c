use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::price_provider::PriceProvider;
use crate::types::reentrancy_guard::ReentrancyGuard;

use super::utils::collateral::do_deposit;
use super::utils::debt::do_mint;
use super::utils::validation::{require_positive_amount, require_supported_asset};

pub fn deposit_and_mint(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
    mint_amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    let _guard = ReentrancyGuard::acquire(env)?;

    require_positive_amount(env, amount);
    require_positive_amount(env, mint_amount);
    require_supported_asset(env, asset);

    do_deposit(env, who, asset, amount)?;
    do_mint(env, who, mint_amount, &mut PriceProvider::new(env))
}

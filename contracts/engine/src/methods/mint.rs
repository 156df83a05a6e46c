use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::price_provider::PriceProvider;
use crate::types::reentrancy_guard::ReentrancyGuard;

use super::utils::debt::do_mint;
use super::utils::validation::require_positive_amount;

pub fn mint(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    let _guard = ReentrancyGuard::acquire(env)?;

    require_positive_amount(env, amount);

    do_mint(env, who, amount, &mut PriceProvider::new(env))
}

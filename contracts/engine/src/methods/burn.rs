use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::reentrancy_guard::ReentrancyGuard;

use super::utils::debt::burn_debt;
use super::utils::validation::require_positive_amount;

pub fn burn(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    let _guard = ReentrancyGuard::acquire(env)?;

    require_positive_amount(env, amount);

    burn_debt(env, amount, who, who)
}

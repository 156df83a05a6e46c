use engine_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

/// Moves `amount` of `asset` with the SEP-41 `transfer`. Any failure of the
/// token contract is reported as `TransferFailed`.
pub(crate) fn transfer(
    env: &Env,
    asset: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let token = token::Client::new(env, asset);

    match token.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

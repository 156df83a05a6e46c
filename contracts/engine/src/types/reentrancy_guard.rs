use engine_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::{is_locked, write_locked};

/// Holds the engine lock until dropped.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, Error> {
        if is_locked(env) {
            return Err(Error::Reentrancy);
        }

        write_locked(env, true);

        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        write_locked(self.env, false);
    }
}

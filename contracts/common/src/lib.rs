#![deny(warnings)]
#![no_std]

mod mul_div;
mod percentage_math;
#[cfg(test)]
mod test;

pub use mul_div::*;
pub use percentage_math::*;

/// Decimals of every USD value and of the stable unit
pub const STABLE_DECIMALS: u32 = 18;

/// 1.0 expressed with `STABLE_DECIMALS`
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

/// Percent representation, 1% - 100, 100% - 10_000
pub const PERCENTAGE_FACTOR: u32 = 10_000;

/// Share of the collateral value counted against debt, 50% (200% collateralization)
pub const LIQUIDATION_THRESHOLD: u32 = 5_000;

/// Extra collateral awarded to the liquidator on top of the covered debt, 10%
pub const LIQUIDATION_BONUS: u32 = 1_000;

/// Health factor below which an account can be liquidated
pub const MIN_HEALTH_FACTOR: i128 = PRECISION;

/// Health factor of an account without debt
pub const MAX_HEALTH_FACTOR: i128 = i128::MAX;

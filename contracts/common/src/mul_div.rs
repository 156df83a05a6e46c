use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, I256};

/// Calculates `x * y / z` rounded towards zero.
///
/// The product is computed in i128 when it fits and in I256 otherwise, so
/// only a result that doesn't fit i128 yields `None`. Division by zero
/// yields `None`. Operands are expected to be non-negative.
pub fn mul_div_floor(env: &Env, x: i128, y: i128, z: i128) -> Option<i128> {
    if z == 0 {
        return None;
    }

    if x.checked_mul(y).is_some() {
        return x.fixed_mul_floor(y, z);
    }

    I256::from_i128(env, x)
        .mul(&I256::from_i128(env, y))
        .div(&I256::from_i128(env, z))
        .to_i128()
}

/// Rescales `value` expressed with `from` decimals to `to` decimals.
/// Scaling down truncates.
pub fn to_precision(value: i128, from: u32, to: u32) -> Option<i128> {
    if from <= to {
        value.checked_mul(10i128.checked_pow(to - from)?)
    } else {
        value.checked_div(10i128.checked_pow(from - to)?)
    }
}

/// Returns `10^decimals`
pub fn pow10(decimals: u32) -> Option<i128> {
    10i128.checked_pow(decimals)
}

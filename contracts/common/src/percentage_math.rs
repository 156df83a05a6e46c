use soroban_fixed_point_math::FixedPoint;

use crate::PERCENTAGE_FACTOR;

pub trait PercentageMath {
    /// result = self * percentage / PERCENTAGE_FACTOR, rounded down
    fn percent_mul_floor(self, percentage: u32) -> Option<i128>;
}

impl<T: Into<i128>> PercentageMath for T {
    fn percent_mul_floor(self, percentage: u32) -> Option<i128> {
        Into::<i128>::into(self)
            .fixed_mul_floor(i128::from(percentage), i128::from(PERCENTAGE_FACTOR))
    }
}

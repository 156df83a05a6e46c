extern crate std;

use soroban_sdk::Env;

use crate::*;

mod mul_div {
    use super::*;

    #[test]
    fn small_operands() {
        let env = Env::default();

        assert_eq!(mul_div_floor(&env, 1000, 7, 8), Some(875));
        assert_eq!(mul_div_floor(&env, 10, 1, 3), Some(3));
        assert_eq!(mul_div_floor(&env, 0, 5, 3), Some(0));
    }

    #[test]
    fn wide_intermediate_product() {
        let env = Env::default();

        // 2000 * 10^18 * 15 * 10^18 doesn't fit i128
        let price = 2_000 * PRECISION;
        let amount = 15 * PRECISION;

        assert_eq!(
            mul_div_floor(&env, price, amount, PRECISION),
            Some(30_000 * PRECISION)
        );
    }

    #[test]
    fn result_overflow() {
        let env = Env::default();

        assert_eq!(mul_div_floor(&env, i128::MAX, i128::MAX, 1), None);
    }

    #[test]
    fn division_by_zero() {
        let env = Env::default();

        assert_eq!(mul_div_floor(&env, 1, 1, 0), None);
        assert_eq!(mul_div_floor(&env, i128::MAX, 2, 0), None);
    }
}

mod precision {
    use super::*;

    #[test]
    fn scale_up() {
        assert_eq!(to_precision(2_000_00000000, 8, 18), Some(2_000 * PRECISION));
    }

    #[test]
    fn scale_down_truncates() {
        assert_eq!(to_precision(123_456_789, 8, 4), Some(12_345));
    }

    #[test]
    fn same_precision() {
        assert_eq!(to_precision(42, 18, 18), Some(42));
    }

    #[test]
    fn pow_overflow() {
        assert_eq!(to_precision(1, 0, 39), None);
        assert_eq!(pow10(39), None);
        assert_eq!(pow10(7), Some(10_000_000));
    }
}

mod percentage {
    use super::*;

    #[test]
    fn percent_mul_floor() {
        assert_eq!(1000i128.percent_mul_floor(500), Some(50));
        assert_eq!(999i128.percent_mul_floor(LIQUIDATION_BONUS), Some(99));
        assert_eq!(
            (30_000 * PRECISION).percent_mul_floor(LIQUIDATION_THRESHOLD),
            Some(15_000 * PRECISION)
        );
    }

    #[test]
    fn full_percentage() {
        assert_eq!(1234i128.percent_mul_floor(PERCENTAGE_FACTOR), Some(1234));
        assert_eq!(1234i128.percent_mul_floor(0), Some(0));
    }
}

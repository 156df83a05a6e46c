use engine_interface::types::error::Error;
use soroban_sdk::testutils::{AuthorizedFunction, Events};
use soroban_sdk::{symbol_short, vec, Address, Env, IntoVal, Symbol};

use crate::tests::sut::{
    init_engine, open_wbtc_position, open_weth_position, usd_cents, Sut, STABLE, TOKEN,
};

/// Borrower holds 10 WETH against 100 of debt, liquidator is funded with
/// 1000 stable units minted against 1 WBTC. WETH then drops to $18, which
/// leaves the borrower at a 0.9 health factor.
fn fill_engine(env: &Env, sut: &Sut) -> (Address, Address) {
    let borrower = open_weth_position(env, sut, 10 * TOKEN, 100 * STABLE);
    let liquidator = open_wbtc_position(env, sut, TOKEN, 1_000 * STABLE);

    sut.set_price(&sut.weth().address, usd_cents(18_00));

    (borrower, liquidator)
}

#[test]
fn should_require_authorized_caller() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (borrower, liquidator) = fill_engine(&env, &sut);
    let weth = sut.weth().address.clone();

    sut.engine
        .liquidate(&liquidator, &weth, &borrower, &(10 * STABLE));

    assert_eq!(
        env.auths().pop().map(|f| f.1.function).unwrap(),
        AuthorizedFunction::Contract((
            sut.engine.address.clone(),
            symbol_short!("liquidate"),
            (liquidator.clone(), weth, borrower.clone(), 10 * STABLE).into_val(&env)
        )),
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #401)")]
fn should_fail_when_good_position() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let borrower = open_weth_position(&env, &sut, 10 * TOKEN, 100 * STABLE);
    let liquidator = open_wbtc_position(&env, &sut, TOKEN, 1_000 * STABLE);

    sut.engine
        .liquidate(&liquidator, &sut.weth().address, &borrower, &(10 * STABLE));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #401)")]
fn should_fail_when_no_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (_, liquidator) = fill_engine(&env, &sut);
    let idle = open_weth_position(&env, &sut, TOKEN, 0);

    sut.engine
        .liquidate(&liquidator, &sut.weth().address, &idle, &STABLE);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #401)")]
fn should_check_health_factor_before_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let borrower = open_weth_position(&env, &sut, 10 * TOKEN, 100 * STABLE);
    let liquidator = open_wbtc_position(&env, &sut, TOKEN, 1_000 * STABLE);

    sut.engine
        .liquidate(&liquidator, &sut.stable_token.address, &borrower, &0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #100)")]
fn should_fail_when_amount_is_zero() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (borrower, liquidator) = fill_engine(&env, &sut);

    sut.engine
        .liquidate(&liquidator, &sut.weth().address, &borrower, &0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #101)")]
fn should_fail_when_asset_is_not_registered() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (borrower, liquidator) = fill_engine(&env, &sut);

    sut.engine.liquidate(
        &liquidator,
        &sut.stable_token.address,
        &borrower,
        &(10 * STABLE),
    );
}

#[test]
fn should_liquidate_fully() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (borrower, liquidator) = fill_engine(&env, &sut);
    let weth = sut.weth().address.clone();

    assert_eq!(sut.engine.health_factor(&borrower), 900_000_000_000_000_000);

    sut.engine
        .liquidate(&liquidator, &weth, &borrower, &(100 * STABLE));

    // 100 / 18 = 5.5555555 WETH plus 10% bonus
    let seized = 55_555_555 + 5_555_555;

    assert_eq!(sut.engine.debt(&borrower), 0);
    assert_eq!(sut.engine.health_factor(&borrower), i128::MAX);
    assert_eq!(
        sut.engine.collateral_balance(&borrower, &weth),
        10 * TOKEN - seized
    );
    assert_eq!(sut.weth().balance(&liquidator), seized);
    assert_eq!(sut.weth().balance(&sut.engine.address), 10 * TOKEN - seized);

    assert_eq!(sut.engine.debt(&liquidator), 1_000 * STABLE);
    assert_eq!(sut.stable_token.balance(&liquidator), 900 * STABLE);
    assert_eq!(sut.stable_token.balance(&borrower), 100 * STABLE);
    assert_eq!(sut.stable_token.total_supply(), 1_000 * STABLE);
}

#[test]
fn should_liquidate_partially() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (borrower, liquidator) = fill_engine(&env, &sut);
    let weth = sut.weth().address.clone();

    sut.engine
        .liquidate(&liquidator, &weth, &borrower, &(10 * STABLE));

    let seized = 5_555_555 + 555_555;

    assert_eq!(sut.engine.debt(&borrower), 90 * STABLE);
    assert_eq!(
        sut.engine.collateral_balance(&borrower, &weth),
        10 * TOKEN - seized
    );
    assert_eq!(sut.weth().balance(&liquidator), seized);
    assert_eq!(sut.engine.health_factor(&borrower), 938_888_900_000_000_000);
}

#[test]
fn should_improve_health_factor_when_overcollateralized() {
    for debt_to_cover in [STABLE, 25 * STABLE, 50 * STABLE, 99 * STABLE] {
        let env = Env::default();
        env.mock_all_auths();

        let sut = init_engine(&env);
        let (borrower, liquidator) = fill_engine(&env, &sut);
        let before = sut.engine.health_factor(&borrower);

        sut.engine
            .liquidate(&liquidator, &sut.weth().address, &borrower, &debt_to_cover);

        assert!(sut.engine.health_factor(&borrower) > before);
    }
}

#[test]
fn should_fail_when_health_factor_not_improved() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (borrower, liquidator) = fill_engine(&env, &sut);
    let weth = sut.weth().address.clone();

    // $105 of collateral against $100 of debt, below the 110% a bonus needs
    sut.set_price(&weth, usd_cents(10_50));

    assert_eq!(
        sut.engine
            .try_liquidate(&liquidator, &weth, &borrower, &(10 * STABLE)),
        Err(Ok(Error::HealthFactorNotImproved))
    );
    assert_eq!(sut.engine.debt(&borrower), 100 * STABLE);
    assert_eq!(sut.engine.collateral_balance(&borrower, &weth), 10 * TOKEN);
    assert_eq!(sut.weth().balance(&liquidator), 0);
    assert_eq!(sut.stable_token.balance(&liquidator), 1_000 * STABLE);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #403)")]
fn should_fail_when_collateral_cannot_cover_bonus() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (borrower, liquidator) = fill_engine(&env, &sut);

    sut.set_price(&sut.weth().address, usd_cents(9_00));

    sut.engine
        .liquidate(&liquidator, &sut.weth().address, &borrower, &(100 * STABLE));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #404)")]
fn should_fail_when_covering_more_than_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (borrower, liquidator) = fill_engine(&env, &sut);

    sut.engine
        .liquidate(&liquidator, &sut.weth().address, &borrower, &(101 * STABLE));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #400)")]
fn should_fail_when_liquidator_becomes_unhealthy() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let borrower = open_weth_position(&env, &sut, 10 * TOKEN, 100 * STABLE);
    // backed by WETH as well, so the price drop hurts the liquidator too
    let liquidator = open_weth_position(&env, &sut, 100 * TOKEN, 1_000 * STABLE);

    sut.set_price(&sut.weth().address, usd_cents(18_00));

    sut.engine
        .liquidate(&liquidator, &sut.weth().address, &borrower, &(10 * STABLE));
}

#[test]
fn should_emit_events() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (borrower, liquidator) = fill_engine(&env, &sut);
    let weth = sut.weth().address.clone();

    sut.engine
        .liquidate(&liquidator, &weth, &borrower, &(100 * STABLE));

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.engine.address.clone(),
                (
                    Symbol::new(&env, "liquidation"),
                    borrower.clone(),
                    liquidator.clone()
                )
                    .into_val(&env),
                (weth, 100 * STABLE, 61_111_110i128).into_val(&env)
            ),
        ]
    );
}

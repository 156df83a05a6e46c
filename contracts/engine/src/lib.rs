#![deny(warnings)]
#![no_std]

use common::{LIQUIDATION_BONUS, LIQUIDATION_THRESHOLD, MIN_HEALTH_FACTOR, PRECISION};
use engine_interface::types::{
    account_information::AccountInformation, error::Error, price_feed_config::PriceFeedConfig,
    price_feed_config_input::PriceFeedConfigInput,
};
use engine_interface::EngineTrait;
use methods::{
    account_information::{account_information, collateral_value},
    burn::burn,
    deposit::deposit,
    deposit_and_mint::deposit_and_mint,
    health_factor::{calculate_health_factor, health_factor},
    initialize::initialize,
    liquidate::liquidate,
    mint::mint,
    redeem_collateral::redeem_collateral,
    redeem_collateral_for_debt::redeem_collateral_for_debt,
    usd_value::{token_amount_from_usd, usd_value},
};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct Engine;

#[contractimpl]
impl EngineTrait for Engine {
    /// Binds the engine to its stable token and registers the collateral assets.
    ///
    /// # Arguments
    ///
    /// - stable_token - The stable token contract. The engine must be its owner.
    /// - collaterals - Collateral assets with their price feeds. The set is fixed for the engine lifetime.
    ///
    /// # Errors
    ///
    /// - AlreadyInitialized
    /// - InvalidConfiguration if `collaterals` is empty, has duplicates or unsupported decimals
    ///
    fn initialize(
        env: Env,
        stable_token: Address,
        collaterals: Vec<PriceFeedConfigInput>,
    ) -> Result<(), Error> {
        initialize(&env, &stable_token, &collaterals)
    }

    fn version() -> u32 {
        1
    }

    /// Deposits collateral into the engine custody.
    ///
    /// # Arguments
    ///
    /// - who - The depositor, authorizes the call.
    /// - asset - Registered collateral asset.
    /// - amount - Amount in the asset's own decimals.
    ///
    /// # Errors
    ///
    /// - InvalidAmount
    /// - UnsupportedAsset
    /// - TransferFailed
    ///
    fn deposit(env: Env, who: Address, asset: Address, amount: i128) -> Result<(), Error> {
        deposit(&env, &who, &asset, amount)
    }

    /// Issues `amount` of stable tokens to `who` against the deposited collateral.
    ///
    /// # Errors
    ///
    /// - InvalidAmount
    /// - HealthFactorTooLow if the position would end up below the minimum health factor
    /// - MintFailed
    ///
    fn mint(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        mint(&env, &who, amount)
    }

    /// Deposits collateral and mints stable tokens in one call.
    fn deposit_and_mint(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        mint_amount: i128,
    ) -> Result<(), Error> {
        deposit_and_mint(&env, &who, &asset, amount, mint_amount)
    }

    /// Withdraws collateral back to `who`.
    ///
    /// # Errors
    ///
    /// - InvalidAmount
    /// - UnsupportedAsset
    /// - InsufficientCollateral
    /// - HealthFactorTooLow
    /// - TransferFailed
    ///
    fn redeem_collateral(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error> {
        redeem_collateral(&env, &who, &asset, amount)
    }

    /// Repays `amount` of debt with stable tokens held by `who`.
    /// Allowed at any health factor.
    ///
    /// # Errors
    ///
    /// - InvalidAmount
    /// - InsufficientDebt
    /// - TransferFailed
    /// - BurnFailed
    ///
    fn burn(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        burn(&env, &who, amount)
    }

    /// Repays `amount` of debt and withdraws `amount` raw units of `asset`.
    fn redeem_collateral_for_debt(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error> {
        redeem_collateral_for_debt(&env, &who, &asset, amount)
    }

    /// Covers `debt_to_cover` of the debt of an unhealthy account and receives
    /// the equivalent collateral plus the liquidation bonus.
    ///
    /// # Arguments
    ///
    /// - liquidator - Pays the stable tokens and receives the collateral, authorizes the call.
    /// - asset - Collateral asset to seize.
    /// - who - The account being liquidated.
    /// - debt_to_cover - Amount of debt to repay, in stable units.
    ///
    /// # Errors
    ///
    /// - InvalidAmount
    /// - UnsupportedAsset
    /// - NotLiquidatable if `who` is at or above the minimum health factor
    /// - InsufficientCollateral if `who` holds less than the seized amount
    /// - InsufficientDebt
    /// - HealthFactorNotImproved
    /// - HealthFactorTooLow if the liquidator's own position becomes unhealthy
    ///
    fn liquidate(
        env: Env,
        liquidator: Address,
        asset: Address,
        who: Address,
        debt_to_cover: i128,
    ) -> Result<(), Error> {
        liquidate(&env, &liquidator, &asset, &who, debt_to_cover)
    }

    fn health_factor(env: Env, who: Address) -> Result<i128, Error> {
        health_factor(&env, &who)
    }

    fn calculate_health_factor(
        env: Env,
        collateral_value: i128,
        total_debt: i128,
    ) -> Result<i128, Error> {
        calculate_health_factor(&env, collateral_value, total_debt)
    }

    fn account_information(env: Env, who: Address) -> Result<AccountInformation, Error> {
        account_information(&env, &who)
    }

    fn collateral_value(env: Env, who: Address) -> Result<i128, Error> {
        collateral_value(&env, &who)
    }

    fn collateral_balance(env: Env, who: Address, asset: Address) -> i128 {
        read_collateral(&env, &who, &asset)
    }

    fn debt(env: Env, who: Address) -> i128 {
        read_debt(&env, &who)
    }

    fn usd_value(env: Env, asset: Address, amount: i128) -> Result<i128, Error> {
        usd_value(&env, &asset, amount)
    }

    fn token_amount_from_usd(env: Env, asset: Address, usd_amount: i128) -> Result<i128, Error> {
        token_amount_from_usd(&env, &asset, usd_amount)
    }

    fn collateral_assets(env: Env) -> Vec<Address> {
        read_collateral_assets(&env)
    }

    fn price_feed(env: Env, asset: Address) -> Option<PriceFeedConfig> {
        read_price_feed(&env, &asset)
    }

    fn stable_token(env: Env) -> Result<Address, Error> {
        read_stable_token(&env)
    }

    fn precision() -> i128 {
        PRECISION
    }

    fn liquidation_threshold() -> u32 {
        LIQUIDATION_THRESHOLD
    }

    fn liquidation_bonus() -> u32 {
        LIQUIDATION_BONUS
    }

    fn min_health_factor() -> i128 {
        MIN_HEALTH_FACTOR
    }
}

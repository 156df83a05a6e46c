#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, Vec};
use types::account_information::AccountInformation;
use types::error::Error;
use types::price_feed_config::PriceFeedConfig;
use types::price_feed_config_input::PriceFeedConfigInput;

pub mod types;

pub struct Spec;

/// Interface for the collateral engine
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "EngineClient")]
pub trait EngineTrait {
    fn initialize(
        env: Env,
        stable_token: Address,
        collaterals: Vec<PriceFeedConfigInput>,
    ) -> Result<(), Error>;

    fn version() -> u32;

    fn deposit(env: Env, who: Address, asset: Address, amount: i128) -> Result<(), Error>;

    fn mint(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn deposit_and_mint(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        mint_amount: i128,
    ) -> Result<(), Error>;

    fn redeem_collateral(env: Env, who: Address, asset: Address, amount: i128)
        -> Result<(), Error>;

    fn burn(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn redeem_collateral_for_debt(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error>;

    fn liquidate(
        env: Env,
        liquidator: Address,
        asset: Address,
        who: Address,
        debt_to_cover: i128,
    ) -> Result<(), Error>;

    fn health_factor(env: Env, who: Address) -> Result<i128, Error>;

    fn calculate_health_factor(
        env: Env,
        collateral_value: i128,
        total_debt: i128,
    ) -> Result<i128, Error>;

    fn account_information(env: Env, who: Address) -> Result<AccountInformation, Error>;

    fn collateral_value(env: Env, who: Address) -> Result<i128, Error>;

    fn collateral_balance(env: Env, who: Address, asset: Address) -> i128;

    fn debt(env: Env, who: Address) -> i128;

    fn usd_value(env: Env, asset: Address, amount: i128) -> Result<i128, Error>;

    fn token_amount_from_usd(env: Env, asset: Address, usd_amount: i128) -> Result<i128, Error>;

    fn collateral_assets(env: Env) -> Vec<Address>;

    fn price_feed(env: Env, asset: Address) -> Option<PriceFeedConfig>;

    fn stable_token(env: Env) -> Result<Address, Error>;

    fn precision() -> i128;

    fn liquidation_threshold() -> u32;

    fn liquidation_bonus() -> u32;

    fn min_health_factor() -> i128;
}

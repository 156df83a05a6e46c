//! Subset of the SEP-40 oracle interface consumed by the engine.
//! Full SEP-40 description:
//! https://github.com/stellar/stellar-protocol/blob/master/ecosystem/sep-0040.md

#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Env, Vec};
use types::asset::Asset;
use types::price_data::PriceData;

pub mod types;

pub struct Spec;

/// Oracle feed interface description
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedTrait {
    /// Return the base asset the price is reported in
    fn base(env: Env) -> Asset;

    /// Return all assets quoted by the price feed
    fn assets(env: Env) -> Vec<Asset>;

    /// Return the number of decimals for all assets quoted by the oracle
    fn decimals(env: Env) -> u32;

    /// Get the most recent price for an asset
    fn lastprice(env: Env, asset: Asset) -> Option<PriceData>;
}

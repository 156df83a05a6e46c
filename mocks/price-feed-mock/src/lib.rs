#![deny(warnings)]
#![no_std]

use price_feed_interface::types::asset::Asset;
use price_feed_interface::types::price_data::PriceData;
use price_feed_interface::PriceFeedTrait;
use soroban_sdk::{contract, contractimpl, symbol_short, Env, Vec};

use crate::storage::*;

mod storage;
mod test;

/// Settable SEP-40 feed. Prices are quoted in USD with 8 decimals unless
/// `set_decimals` says otherwise.
#[contract]
pub struct PriceFeedMock;

#[contractimpl]
impl PriceFeedTrait for PriceFeedMock {
    fn base(_env: Env) -> Asset {
        Asset::Other(symbol_short!("USD"))
    }

    fn assets(env: Env) -> Vec<Asset> {
        read_assets(&env)
    }

    fn decimals(env: Env) -> u32 {
        read_decimals(&env)
    }

    fn lastprice(env: Env, asset: Asset) -> Option<PriceData> {
        read_price(&env, &asset)
    }
}

#[contractimpl]
impl PriceFeedMock {
    pub fn set_decimals(env: Env, decimals: u32) {
        write_decimals(&env, decimals);
    }

    pub fn set_price(env: Env, asset: Asset, price: i128) {
        let price = PriceData {
            price,
            timestamp: env.ledger().timestamp(),
        };

        write_price(&env, &asset, &price);
    }

    pub fn remove_price(env: Env, asset: Asset) {
        delete_price(&env, &asset);
    }
}

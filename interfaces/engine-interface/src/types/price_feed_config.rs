use price_feed_interface::types::asset::Asset;
use soroban_sdk::{contracttype, Address};

use super::price_feed_config_input::PriceFeedConfigInput;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PriceFeedConfig {
    pub feed: Address,
    pub feed_asset: Asset,
    pub asset_decimals: u32,
}

impl PriceFeedConfig {
    pub fn new(input: &PriceFeedConfigInput) -> Self {
        Self {
            feed: input.feed.clone(),
            feed_asset: input.feed_asset.clone(),
            asset_decimals: input.asset_decimals,
        }
    }
}

use price_feed_interface::types::asset::Asset;
use soroban_sdk::{contracttype, Address};

/// Registry entry for one collateral asset
#[derive(Clone)]
#[contracttype]
pub struct PriceFeedConfigInput {
    /// Collateral token contract
    pub asset: Address,
    /// Decimals of the collateral token
    pub asset_decimals: u32,
    /// SEP-40 feed contract
    pub feed: Address,
    /// Identifier of the collateral inside the feed
    pub feed_asset: Asset,
}

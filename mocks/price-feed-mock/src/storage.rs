use price_feed_interface::types::asset::Asset;
use price_feed_interface::types::price_data::PriceData;
use soroban_sdk::{contracttype, Address, Env, Symbol, Vec};

const DEFAULT_DECIMALS: u32 = 8;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Assets,
    Decimals,
    StellarPrice(Address),
    OtherPrice(Symbol),
}

fn price_key(asset: &Asset) -> DataKey {
    match asset {
        Asset::Stellar(asset) => DataKey::StellarPrice(asset.clone()),
        Asset::Other(asset) => DataKey::OtherPrice(asset.clone()),
    }
}

pub fn read_decimals(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Decimals)
        .unwrap_or(DEFAULT_DECIMALS)
}

pub fn write_decimals(env: &Env, decimals: u32) {
    env.storage().instance().set(&DataKey::Decimals, &decimals);
}

pub fn read_assets(env: &Env) -> Vec<Asset> {
    env.storage()
        .instance()
        .get(&DataKey::Assets)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn read_price(env: &Env, asset: &Asset) -> Option<PriceData> {
    env.storage().instance().get(&price_key(asset))
}

pub fn write_price(env: &Env, asset: &Asset, price: &PriceData) {
    let mut assets = read_assets(env);
    if read_price(env, asset).is_none() {
        assets.push_back(asset.clone());
        env.storage().instance().set(&DataKey::Assets, &assets);
    }

    env.storage().instance().set(&price_key(asset), price);
}

pub fn delete_price(env: &Env, asset: &Asset) {
    env.storage().instance().remove(&price_key(asset));
}

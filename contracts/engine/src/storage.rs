use engine_interface::types::error::Error;
use engine_interface::types::price_feed_config::PriceFeedConfig;
use soroban_sdk::{contracttype, Address, Env, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    StableToken,
    CollateralAssets,
    PriceFeed(Address),
    Collateral(Address, Address),
    Debt(Address),
    Locked,
}

pub fn has_stable_token(env: &Env) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().has(&DataKey::StableToken)
}

pub fn write_stable_token(env: &Env, stable_token: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::StableToken, stable_token);
}

pub fn read_stable_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::StableToken)
        .ok_or(Error::Uninitialized)
}

pub fn write_collateral_assets(env: &Env, assets: &Vec<Address>) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::CollateralAssets, assets);
}

pub fn read_collateral_assets(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::CollateralAssets)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn write_price_feed(env: &Env, asset: &Address, config: &PriceFeedConfig) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::PriceFeed(asset.clone()), config);
}

pub fn read_price_feed(env: &Env, asset: &Address) -> Option<PriceFeedConfig> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::PriceFeed(asset.clone()))
}

pub fn has_price_feed(env: &Env, asset: &Address) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .has(&DataKey::PriceFeed(asset.clone()))
}

pub fn read_collateral(env: &Env, who: &Address, asset: &Address) -> i128 {
    let key = DataKey::Collateral(who.clone(), asset.clone());
    let balance = env.storage().persistent().get(&key);

    if balance.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    balance.unwrap_or(0)
}

pub fn write_collateral(env: &Env, who: &Address, asset: &Address, balance: i128) {
    let key = DataKey::Collateral(who.clone(), asset.clone());

    env.storage().persistent().set(&key, &balance);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn read_debt(env: &Env, who: &Address) -> i128 {
    let key = DataKey::Debt(who.clone());
    let debt = env.storage().persistent().get(&key);

    if debt.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    debt.unwrap_or(0)
}

pub fn write_debt(env: &Env, who: &Address, debt: i128) {
    let key = DataKey::Debt(who.clone());

    env.storage().persistent().set(&key, &debt);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn write_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}

use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Behavior {
    /// Plain token, moves balances
    Honest,
    /// Every transfer traps
    Refuse,
    /// Every transfer calls back into the engine
    Reenter,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Engine,
    Behavior,
    Balance(Address),
}

pub fn write_engine(env: &Env, engine: &Address) {
    env.storage().instance().set(&DataKey::Engine, engine);
}

pub fn read_engine(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Engine).unwrap()
}

pub fn write_behavior(env: &Env, behavior: Behavior) {
    env.storage().instance().set(&DataKey::Behavior, &behavior);
}

pub fn read_behavior(env: &Env) -> Behavior {
    env.storage()
        .instance()
        .get(&DataKey::Behavior)
        .unwrap_or(Behavior::Honest)
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::Balance(id.clone()), &amount);
}

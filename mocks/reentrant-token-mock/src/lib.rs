#![deny(warnings)]
#![no_std]

use engine_interface::EngineClient;
use soroban_sdk::{contract, contractclient, contractimpl, Address, Env};
use storage::{read_balance, read_behavior, read_engine, write_balance, write_behavior, write_engine};

pub use storage::Behavior;

mod storage;

#[contractclient(name = "ReentrantTokenAdminClient")]
pub trait ReentrantTokenAdminTrait {
    fn initialize(env: Env, engine: Address, behavior: Behavior);

    fn set_behavior(env: Env, behavior: Behavior);

    fn mint(env: Env, to: Address, amount: i128);
}

/// Collateral token whose `transfer` can be switched to trap or to call back
/// into the engine in the middle of an engine operation.
#[contract]
pub struct ReentrantToken;

#[contractimpl]
impl ReentrantToken {
    pub fn decimals(_env: Env) -> u32 {
        7
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        match read_behavior(&env) {
            Behavior::Honest => {}
            Behavior::Refuse => panic!("reentrant-token: transfer refused"),
            Behavior::Reenter => {
                let engine = EngineClient::new(&env, &read_engine(&env));
                engine.deposit(&from, &env.current_contract_address(), &amount);
            }
        }

        let from_balance = read_balance(&env, &from);
        if from_balance < amount {
            panic!("reentrant-token: insufficient balance");
        }

        write_balance(&env, &from, from_balance - amount);
        write_balance(&env, &to, read_balance(&env, &to) + amount);
    }
}

#[contractimpl]
impl ReentrantTokenAdminTrait for ReentrantToken {
    fn initialize(env: Env, engine: Address, behavior: Behavior) {
        write_engine(&env, &engine);
        write_behavior(&env, behavior);
    }

    fn set_behavior(env: Env, behavior: Behavior) {
        write_behavior(&env, behavior);
    }

    fn mint(env: Env, to: Address, amount: i128) {
        write_balance(&env, &to, read_balance(&env, &to) + amount);
    }
}

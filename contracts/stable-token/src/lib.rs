#![deny(warnings)]
#![no_std]

use common::STABLE_DECIMALS;
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use stable_token_interface::StableTokenTrait;

use crate::balance::{
    add_total_supply, receive_balance, require_nonnegative_amount, require_positive_amount,
    spend_allowance, spend_balance,
};
use crate::storage::*;

mod balance;
mod event;
mod storage;

#[contract]
pub struct StableToken;

#[contractimpl]
impl StableTokenTrait for StableToken {
    /// Initializes the stable token contract.
    ///
    /// # Arguments
    ///
    /// - owner - The address allowed to issue and destroy tokens, normally the engine.
    /// - name - The name of the token.
    /// - symbol - The symbol of the token.
    ///
    /// # Panics
    ///
    /// Panics if the contract has already been initialized.
    /// Panics if name or symbol is empty
    ///
    fn initialize(e: Env, owner: Address, name: String, symbol: String) {
        if name.len() == 0 {
            panic!("stable-token: no name");
        }

        if symbol.len() == 0 {
            panic!("stable-token: no symbol");
        }

        if has_owner(&e) {
            panic!("stable-token: already initialized");
        }

        write_owner(&e, &owner);
        write_metadata(
            &e,
            TokenMetadata {
                decimal: STABLE_DECIMALS,
                name: name.clone(),
                symbol: symbol.clone(),
            },
        );

        event::initialized(&e, owner, STABLE_DECIMALS, name, symbol);
    }

    fn owner(e: Env) -> Address {
        read_owner(&e)
    }

    /// Returns the amount of tokens that the `spender` is allowed to withdraw from the `from` address.
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&e, from, spender).amount
    }

    /// Set the allowance by `amount` for `spender` to transfer/burn from `from`.
    ///
    /// # Panics
    ///
    /// Panics if the amount is negative.
    /// Panics if `expiration_ledger` is in the past while `amount` is positive.
    ///
    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        require_nonnegative_amount(amount);

        write_allowance(&e, from.clone(), spender.clone(), amount, expiration_ledger);
        event::approve(&e, from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, id)
    }

    /// Transfers `amount` of tokens from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if the caller (`from`) is not authorized.
    /// Panics if the amount is negative or exceeds the balance of `from`.
    ///
    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        require_nonnegative_amount(amount);

        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        event::transfer(&e, from, to, amount);
    }

    /// Transfers `amount` of tokens from `from` to `to` on behalf of `spender`.
    ///
    /// # Panics
    ///
    /// Panics if the spender is not authorized.
    /// Panics if the allowance or the balance of `from` is insufficient.
    ///
    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        require_nonnegative_amount(amount);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        event::transfer(&e, from, to, amount);
    }

    /// Destroys `amount` of tokens held by the owner itself.
    ///
    /// # Panics
    ///
    /// Panics if the caller is not the owner.
    /// Panics if `from` is not the owner.
    /// Panics if the amount is not positive or exceeds the owner balance.
    ///
    fn burn(e: Env, from: Address, amount: i128) {
        let owner = verify_caller_is_owner(&e);
        if from != owner {
            panic!("stable-token: only own balance can be burned");
        }

        require_positive_amount(amount);

        spend_balance(&e, from.clone(), amount);
        add_total_supply(&e, amount.checked_neg().expect("stable-token: no overflow"));
        event::burn(&e, from, amount);
    }

    /// Destroys `amount` of tokens held by `from` using the allowance granted to the owner.
    ///
    /// # Panics
    ///
    /// Panics if `spender` is not the owner or is not authorized.
    /// Panics if the allowance or the balance of `from` is insufficient.
    ///
    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        let owner = verify_caller_is_owner(&e);
        if spender != owner {
            panic!("stable-token: only owner can burn");
        }

        require_positive_amount(amount);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        add_total_supply(&e, amount.checked_neg().expect("stable-token: no overflow"));
        event::burn(&e, from, amount);
    }

    /// Issues `amount` of new tokens to `to`.
    ///
    /// # Panics
    ///
    /// Panics if the caller is not the owner.
    /// Panics if the amount is not positive.
    ///
    fn mint(e: Env, to: Address, amount: i128) {
        let owner = verify_caller_is_owner(&e);

        require_positive_amount(amount);

        receive_balance(&e, to.clone(), amount);
        add_total_supply(&e, amount);
        event::mint(&e, owner, to, amount);
    }

    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }

    fn total_supply(e: Env) -> i128 {
        read_total_supply(&e)
    }
}

fn verify_caller_is_owner(e: &Env) -> Address {
    let owner = read_owner(e);
    owner.require_auth();
    owner
}

use soroban_sdk::{contracttype, Address, Symbol};

/// Asset identifier inside a feed: a token contract or an off-chain ticker
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    Stellar(Address),
    Other(Symbol),
}

use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// Price scaled by the feed's `decimals`
    pub price: i128,
    /// Round timestamp, never checked by the engine
    pub timestamp: u64,
}

use soroban_sdk::contracttype;

/// Debt and undiscounted collateral value of an account, both in USD with 18 decimals
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountInformation {
    pub total_debt: i128,
    pub collateral_value: i128,
}

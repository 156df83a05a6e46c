use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Reentrancy = 2,

    InvalidAmount = 100,
    UnsupportedAsset = 101,
    InvalidConfiguration = 102,

    NoPriceForAsset = 200,

    TransferFailed = 300,
    MintFailed = 301,
    BurnFailed = 302,

    HealthFactorTooLow = 400,
    NotLiquidatable = 401,
    HealthFactorNotImproved = 402,
    InsufficientCollateral = 403,
    InsufficientDebt = 404,

    MathOverflowError = 500,
}

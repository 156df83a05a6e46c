use common::{mul_div_floor, pow10, to_precision, STABLE_DECIMALS};
use engine_interface::types::error::Error;
use engine_interface::types::price_feed_config::PriceFeedConfig;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{Address, Env, Map};

use crate::storage::read_price_feed;

/// Converts collateral amounts to USD values with `STABLE_DECIMALS` and back.
///
/// Feed configs are cached for the lifetime of the provider, prices are read
/// from the feed on every conversion.
pub struct PriceProvider<'a> {
    env: &'a Env,
    configs: Map<Address, PriceFeedConfig>,
}

impl<'a> PriceProvider<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self {
            env,
            configs: Map::new(env),
        }
    }

    /// `price * amount / 10^asset_decimals`, rounded down
    pub fn usd_value(&mut self, asset: &Address, amount: i128) -> Result<i128, Error> {
        let config = self.config(asset)?;
        let price = self.price(&config)?;
        let unit = pow10(config.asset_decimals).ok_or(Error::MathOverflowError)?;

        mul_div_floor(self.env, price, amount, unit).ok_or(Error::MathOverflowError)
    }

    /// `usd_amount * 10^asset_decimals / price`, rounded down
    pub fn token_amount_from_usd(
        &mut self,
        asset: &Address,
        usd_amount: i128,
    ) -> Result<i128, Error> {
        let config = self.config(asset)?;
        let price = self.price(&config)?;
        let unit = pow10(config.asset_decimals).ok_or(Error::MathOverflowError)?;

        mul_div_floor(self.env, usd_amount, unit, price).ok_or(Error::MathOverflowError)
    }

    fn config(&mut self, asset: &Address) -> Result<PriceFeedConfig, Error> {
        match self.configs.get(asset.clone()) {
            Some(config) => Ok(config),
            None => {
                let config = read_price_feed(self.env, asset).ok_or(Error::UnsupportedAsset)?;
                self.configs.set(asset.clone(), config.clone());

                Ok(config)
            }
        }
    }

    fn price(&self, config: &PriceFeedConfig) -> Result<i128, Error> {
        let client = PriceFeedClient::new(self.env, &config.feed);

        let price_data = client
            .lastprice(&config.feed_asset)
            .ok_or(Error::NoPriceForAsset)?;

        to_precision(price_data.price, client.decimals(), STABLE_DECIMALS)
            .ok_or(Error::MathOverflowError)
    }
}

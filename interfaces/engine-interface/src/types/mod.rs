pub mod account_information;
pub mod error;
pub mod price_feed_config;
pub mod price_feed_config_input;

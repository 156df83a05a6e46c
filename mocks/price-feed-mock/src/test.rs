#![cfg(test)]

use price_feed_interface::types::asset::Asset;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{symbol_short, vec, Address, Env};

use crate::{PriceFeedMock, PriceFeedMockClient};

#[test]
fn should_report_last_price() {
    let e = Env::default();
    let feed = PriceFeedMockClient::new(&e, &e.register_contract(None, PriceFeedMock));

    let asset = Asset::Stellar(Address::generate(&e));
    let ticker = Asset::Other(symbol_short!("XLM"));

    e.ledger().with_mut(|li| li.timestamp = 900);

    assert_eq!(feed.lastprice(&asset), None);
    assert_eq!(feed.decimals(), 8);
    assert_eq!(feed.base(), Asset::Other(symbol_short!("USD")));

    feed.set_price(&asset, &2_000_00000000);
    feed.set_price(&ticker, &12_000000);
    feed.set_price(&asset, &1_900_00000000);

    let price = feed.lastprice(&asset).unwrap();
    assert_eq!(price.price, 1_900_00000000);
    assert_eq!(price.timestamp, 900);
    assert_eq!(feed.lastprice(&ticker).unwrap().price, 12_000000);
    assert_eq!(feed.assets(), vec![&e, asset.clone(), ticker]);

    feed.remove_price(&asset);
    assert_eq!(feed.lastprice(&asset), None);
}

#[test]
fn should_change_decimals() {
    let e = Env::default();
    let feed = PriceFeedMockClient::new(&e, &e.register_contract(None, PriceFeedMock));

    feed.set_decimals(&14);

    assert_eq!(feed.decimals(), 14);
}

use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

pub(crate) fn initialized(e: &Env, stable_token: &Address, assets: &Vec<Address>) {
    let topics = (Symbol::new(e, "initialize"), stable_token.clone());
    e.events().publish(topics, assets.clone());
}

pub(crate) fn collateral_deposited(e: &Env, who: &Address, asset: &Address, amount: i128) {
    let topics = (symbol_short!("coll_dep"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn collateral_redeemed(
    e: &Env,
    from: &Address,
    to: &Address,
    asset: &Address,
    amount: i128,
) {
    let topics = (symbol_short!("coll_red"), from.clone(), to.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn mint(e: &Env, who: &Address, amount: i128) {
    let topics = (symbol_short!("mint"), who.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn burn(e: &Env, on_behalf_of: &Address, payer: &Address, amount: i128) {
    let topics = (symbol_short!("burn"), on_behalf_of.clone(), payer.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn liquidation(
    e: &Env,
    who: &Address,
    liquidator: &Address,
    asset: &Address,
    debt_to_cover: i128,
    seized: i128,
) {
    let topics = (Symbol::new(e, "liquidation"), who.clone(), liquidator.clone());
    e.events().publish(topics, (asset.clone(), debt_to_cover, seized));
}

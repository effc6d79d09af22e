use soroban_sdk::{token, Address, Env, Vec};

use crate::errors::AuctionHouseError;
use crate::external::{NonFungibleTokenClient, RoyaltiesRegistryClient};
use crate::types::{CollateralItem, Config, PaymentUnit, RoyaltyFee};

/// At most this many creator fees are recorded per item.
pub const MAX_FEES_PER_ITEM: u32 = 5;

/// Token contract settling a payment unit.
pub fn unit_token(config: &Config, unit: &PaymentUnit) -> Address {
    match unit {
        PaymentUnit::Native => config.native_token.clone(),
        PaymentUnit::Token(token) => token.clone(),
    }
}

// Transfer tokens from contract
pub fn transfer_from_contract(env: &Env, token: &Address, to: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, amount);
}

// Transfer tokens to contract
pub fn transfer_to_contract(env: &Env, token: &Address, from: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), amount);
}

/// Pulls an item into escrow and confirms the house now owns it.
pub fn take_custody(
    env: &Env,
    item: &CollateralItem,
    from: &Address,
) -> Result<(), AuctionHouseError> {
    let house = env.current_contract_address();
    let collection = NonFungibleTokenClient::new(env, &item.collection);
    collection.transfer(from, &house, &item.token_id);
    if collection.owner_of(&item.token_id) != house {
        return Err(AuctionHouseError::CustodyNotReceived);
    }
    Ok(())
}

pub fn release_custody(env: &Env, collection: &Address, token_id: u32, to: &Address) {
    NonFungibleTokenClient::new(env, collection).transfer(
        &env.current_contract_address(),
        to,
        &token_id,
    );
}

/// Creator fees for an item, capped at `MAX_FEES_PER_ITEM`. Without a
/// registry configured items carry no fees.
pub fn lookup_royalties(env: &Env, config: &Config, item: &CollateralItem) -> Vec<RoyaltyFee> {
    let mut fees = Vec::new(env);
    if let Some(registry) = &config.royalties_registry {
        let registered = RoyaltiesRegistryClient::new(env, registry)
            .get_royalties(&item.collection, &item.token_id);
        for fee in registered.iter().take(MAX_FEES_PER_ITEM as usize) {
            fees.push_back(fee);
        }
    }
    fees
}

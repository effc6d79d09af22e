use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::types::RoyaltyFee;

/// Non-fungible collection holding auction collateral.
#[allow(dead_code)]
#[contractclient(name = "NonFungibleTokenClient")]
pub trait NonFungibleToken {
    /// Moves `token_id` from `from` to `to`. `from` must authorize.
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);

    fn owner_of(env: Env, token_id: u32) -> Address;
}

/// Registry answering which creator fees apply to an item.
#[allow(dead_code)]
#[contractclient(name = "RoyaltiesRegistryClient")]
pub trait RoyaltiesRegistry {
    fn get_royalties(env: Env, collection: Address, token_id: u32) -> Vec<RoyaltyFee>;
}

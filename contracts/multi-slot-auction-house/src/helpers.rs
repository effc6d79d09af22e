use soroban_sdk::{Address, Env, Vec};

use crate::errors::AuctionHouseError;
use crate::types::{Auction, Config, DataKey, DepositedAsset, PaymentUnit, RankedBid, Slot};

pub fn get_config(env: &Env) -> Result<Config, AuctionHouseError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(AuctionHouseError::NotInitialized)
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn verify_dao(env: &Env) -> Result<Config, AuctionHouseError> {
    let config = get_config(env)?;
    config.dao.require_auth();
    Ok(config)
}

pub fn total_auctions(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TotalAuctions)
        .unwrap_or(0)
}

pub fn save_total_auctions(env: &Env, total: u32) {
    env.storage().instance().set(&DataKey::TotalAuctions, &total);
}

pub fn get_auction(env: &Env, auction_id: u32) -> Result<Auction, AuctionHouseError> {
    env.storage()
        .persistent()
        .get(&DataKey::Auction(auction_id))
        .ok_or(AuctionHouseError::AuctionNotFound)
}

pub fn save_auction(env: &Env, auction: &Auction) {
    env.storage()
        .persistent()
        .set(&DataKey::Auction(auction.id), auction);
}

pub fn check_slot_index(auction: &Auction, slot_index: u32) -> Result<(), AuctionHouseError> {
    if slot_index == 0 || slot_index > auction.number_of_slots {
        return Err(AuctionHouseError::InvalidSlotIndex);
    }
    Ok(())
}

pub fn get_slot(env: &Env, auction_id: u32, slot_index: u32) -> Slot {
    env.storage()
        .persistent()
        .get(&DataKey::Slot(auction_id, slot_index))
        .unwrap_or_else(Slot::empty)
}

pub fn save_slot(env: &Env, auction_id: u32, slot_index: u32, slot: &Slot) {
    env.storage()
        .persistent()
        .set(&DataKey::Slot(auction_id, slot_index), slot);
}

pub fn get_item(
    env: &Env,
    auction_id: u32,
    slot_index: u32,
    item_index: u32,
) -> Result<DepositedAsset, AuctionHouseError> {
    env.storage()
        .persistent()
        .get(&DataKey::DepositedItem(auction_id, slot_index, item_index))
        .ok_or(AuctionHouseError::ItemNotFound)
}

pub fn save_item(env: &Env, auction_id: u32, slot_index: u32, item_index: u32, item: &DepositedAsset) {
    env.storage()
        .persistent()
        .set(&DataKey::DepositedItem(auction_id, slot_index, item_index), item);
}

pub fn depositor_items(env: &Env, auction_id: u32, slot_index: u32, depositor: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::SlotDepositor(auction_id, slot_index, depositor.clone()))
        .unwrap_or(0)
}

pub fn save_depositor_items(
    env: &Env,
    auction_id: u32,
    slot_index: u32,
    depositor: &Address,
    count: u32,
) {
    env.storage().persistent().set(
        &DataKey::SlotDepositor(auction_id, slot_index, depositor.clone()),
        &count,
    );
}

pub fn bid_balance(env: &Env, auction_id: u32, bidder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::BidBalance(auction_id, bidder.clone()))
        .unwrap_or(0)
}

pub fn save_bid_balance(env: &Env, auction_id: u32, bidder: &Address, balance: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::BidBalance(auction_id, bidder.clone()), &balance);
}

pub fn ranked_bids(env: &Env, auction_id: u32) -> Vec<RankedBid> {
    env.storage()
        .persistent()
        .get(&DataKey::RankedBids(auction_id))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn save_ranked_bids(env: &Env, auction_id: u32, ledger: &Vec<RankedBid>) {
    env.storage()
        .persistent()
        .set(&DataKey::RankedBids(auction_id), ledger);
}

pub fn winning_slot(env: &Env, auction_id: u32, bidder: &Address) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::WinningSlot(auction_id, bidder.clone()))
}

pub fn save_winning_slot(env: &Env, auction_id: u32, bidder: &Address, slot_index: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::WinningSlot(auction_id, bidder.clone()), &slot_index);
}

pub fn auction_revenue(env: &Env, auction_id: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::AuctionRevenue(auction_id))
        .unwrap_or(0)
}

pub fn save_auction_revenue(env: &Env, auction_id: u32, revenue: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::AuctionRevenue(auction_id), &revenue);
}

pub fn royalties_reserve(env: &Env, unit: &PaymentUnit) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::RoyaltiesReserve(unit.clone()))
        .unwrap_or(0)
}

pub fn save_royalties_reserve(env: &Env, unit: &PaymentUnit, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::RoyaltiesReserve(unit.clone()), &amount);
}

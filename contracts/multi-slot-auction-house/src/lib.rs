#![no_std]

mod admin;
mod auction;
mod bid;
mod checks;
mod distribution;
mod escrow;
mod external;
mod guard;
mod helpers;
mod math;
mod settlement;

pub mod errors;
pub mod event;
pub mod types;
pub mod utils;

use admin::{AdminModule, AdminOperations};
use auction::AuctionModule;
use bid::BidModule;
use errors::AuctionHouseError;
use escrow::EscrowModule;
use settlement::SettlementModule;
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use types::{
    Auction, AuctionParams, BidChannel, CollateralItem, Config, DepositedAsset, PaymentUnit,
    RankedBid, Slot,
};

#[contract]
pub struct AuctionHouseContract;

#[contractimpl]
impl AuctionHouseContract {
    // -----------------------
    // ADMIN
    // -----------------------

    /// Initializes the house with its DAO, the native asset contract and limits
    ///
    /// # Arguments
    /// * `dao` - Administrator, also receives the royalty reserve
    /// * `native_token` - Asset contract settling native-unit auctions
    /// * `royalties_registry` - Optional registry consulted for per-item creator fees
    /// * `max_slots` - Upper bound on slots per auction
    /// * `nft_slot_limit` - Upper bound on items per slot
    /// * `royalty_fee_bps` - Cut of each winning bid kept for the DAO
    /// * `supported_bid_tokens` - Tokens auctions may be denominated in
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        dao: Address,
        native_token: Address,
        royalties_registry: Option<Address>,
        max_slots: u32,
        nft_slot_limit: u32,
        royalty_fee_bps: u32,
        supported_bid_tokens: Vec<Address>,
    ) -> Result<(), AuctionHouseError> {
        AdminModule::initialize(
            env,
            dao,
            native_token,
            royalties_registry,
            max_slots,
            nft_slot_limit,
            royalty_fee_bps,
            supported_bid_tokens,
        )
    }

    pub fn get_config(env: Env) -> Result<Config, AuctionHouseError> {
        AdminModule::get_config(env)
    }

    pub fn set_royalty_fee_bps(env: Env, royalty_fee_bps: u32) -> Result<(), AuctionHouseError> {
        AdminModule::set_royalty_fee_bps(env, royalty_fee_bps)
    }

    pub fn set_nft_slot_limit(env: Env, nft_slot_limit: u32) -> Result<(), AuctionHouseError> {
        AdminModule::set_nft_slot_limit(env, nft_slot_limit)
    }

    pub fn set_max_slots(env: Env, max_slots: u32) -> Result<(), AuctionHouseError> {
        AdminModule::set_max_slots(env, max_slots)
    }

    pub fn set_max_batch_size(env: Env, max_batch_size: u32) -> Result<(), AuctionHouseError> {
        AdminModule::set_max_batch_size(env, max_batch_size)
    }

    pub fn set_collection_whitelist(
        env: Env,
        collections: Vec<Address>,
    ) -> Result<(), AuctionHouseError> {
        AdminModule::set_collection_whitelist(env, collections)
    }

    pub fn set_supported_bid_tokens(
        env: Env,
        tokens: Vec<Address>,
    ) -> Result<(), AuctionHouseError> {
        AdminModule::set_supported_bid_tokens(env, tokens)
    }

    pub fn set_royalties_registry(
        env: Env,
        registry: Option<Address>,
    ) -> Result<(), AuctionHouseError> {
        AdminModule::set_royalties_registry(env, registry)
    }

    pub fn transfer_dao(env: Env, new_dao: Address) -> Result<(), AuctionHouseError> {
        AdminModule::transfer_dao(env, new_dao)
    }

    // -----------------------
    // AUCTION LIFECYCLE
    // -----------------------

    /// Creates an auction and returns its id
    pub fn create_auction(
        env: Env,
        owner: Address,
        params: AuctionParams,
    ) -> Result<u32, AuctionHouseError> {
        AuctionModule::create_auction(&env, owner, params)
    }

    pub fn cancel_auction(env: Env, owner: Address, auction_id: u32) -> Result<(), AuctionHouseError> {
        AuctionModule::cancel_auction(&env, owner, auction_id)
    }

    /// Assigns winners to slots after the end time
    ///
    /// # Arguments
    /// * `expected_winners` - Optional ranking, highest first, the call must agree with
    pub fn finalize_auction(
        env: Env,
        auction_id: u32,
        expected_winners: Option<Vec<Address>>,
    ) -> Result<u32, AuctionHouseError> {
        SettlementModule::finalize_auction(&env, auction_id, expected_winners)
    }

    // -----------------------
    // COLLATERAL
    // -----------------------

    pub fn deposit_collateral(
        env: Env,
        depositor: Address,
        auction_id: u32,
        slot_index: u32,
        items: Vec<CollateralItem>,
    ) -> Result<u32, AuctionHouseError> {
        guard::non_reentrant(&env, || {
            EscrowModule::deposit_collateral(&env, depositor, auction_id, slot_index, items)
        })
    }

    /// Returns `count` unsold items of a slot to their depositors
    pub fn withdraw_unclaimed_collateral(
        env: Env,
        caller: Address,
        auction_id: u32,
        slot_index: u32,
        count: u32,
    ) -> Result<u32, AuctionHouseError> {
        guard::non_reentrant(&env, || {
            EscrowModule::withdraw_unclaimed_collateral(&env, caller, auction_id, slot_index, count)
        })
    }

    pub fn claim_won_collateral(
        env: Env,
        winner: Address,
        auction_id: u32,
        slot_index: u32,
        count: u32,
    ) -> Result<u32, AuctionHouseError> {
        guard::non_reentrant(&env, || {
            EscrowModule::claim_won_collateral(&env, winner, auction_id, slot_index, count)
        })
    }

    // -----------------------
    // BIDDING
    // -----------------------

    /// Adds to the caller's balance in an auction denominated in the native asset
    pub fn bid_native(
        env: Env,
        bidder: Address,
        auction_id: u32,
        amount: i128,
    ) -> Result<i128, AuctionHouseError> {
        guard::non_reentrant(&env, || {
            BidModule::place_bid(&env, bidder, auction_id, amount, BidChannel::Native)
        })
    }

    pub fn bid_token(
        env: Env,
        bidder: Address,
        auction_id: u32,
        amount: i128,
    ) -> Result<i128, AuctionHouseError> {
        guard::non_reentrant(&env, || {
            BidModule::place_bid(&env, bidder, auction_id, amount, BidChannel::Token)
        })
    }

    pub fn withdraw_native_bid(
        env: Env,
        bidder: Address,
        auction_id: u32,
    ) -> Result<i128, AuctionHouseError> {
        guard::non_reentrant(&env, || {
            BidModule::withdraw_bid(&env, bidder, auction_id, BidChannel::Native)
        })
    }

    pub fn withdraw_token_bid(
        env: Env,
        bidder: Address,
        auction_id: u32,
    ) -> Result<i128, AuctionHouseError> {
        guard::non_reentrant(&env, || {
            BidModule::withdraw_bid(&env, bidder, auction_id, BidChannel::Token)
        })
    }

    // -----------------------
    // SETTLEMENT
    // -----------------------

    pub fn capture_slot_revenue(
        env: Env,
        auction_id: u32,
        slot_index: u32,
    ) -> Result<i128, AuctionHouseError> {
        SettlementModule::capture_slot_revenue(&env, auction_id, slot_index)
    }

    pub fn capture_slot_revenue_range(
        env: Env,
        auction_id: u32,
        from: u32,
        to: u32,
    ) -> Result<i128, AuctionHouseError> {
        SettlementModule::capture_slot_revenue_range(&env, auction_id, from, to)
    }

    pub fn distribute_auction_revenue(env: Env, auction_id: u32) -> Result<i128, AuctionHouseError> {
        guard::non_reentrant(&env, || {
            SettlementModule::distribute_auction_revenue(&env, auction_id)
        })
    }

    /// Sends the accumulated royalty reserve for `unit` to the DAO
    pub fn distribute_royalties(env: Env, unit: PaymentUnit) -> Result<i128, AuctionHouseError> {
        guard::non_reentrant(&env, || SettlementModule::distribute_royalties(&env, unit))
    }

    pub fn distribute_secondary_sale_fees(
        env: Env,
        auction_id: u32,
        slot_index: u32,
        item_index: u32,
    ) -> Result<i128, AuctionHouseError> {
        guard::non_reentrant(&env, || {
            SettlementModule::distribute_secondary_sale_fees(&env, auction_id, slot_index, item_index)
        })
    }

    // -----------------------
    // VIEWS
    // -----------------------

    pub fn get_auction(env: Env, auction_id: u32) -> Option<Auction> {
        AuctionModule::get_auction(&env, auction_id)
    }

    pub fn total_auctions(env: Env) -> u32 {
        AuctionModule::total_auctions(&env)
    }

    pub fn get_slot(env: Env, auction_id: u32, slot_index: u32) -> Result<Slot, AuctionHouseError> {
        AuctionModule::get_slot(&env, auction_id, slot_index)
    }

    pub fn get_slot_winner(
        env: Env,
        auction_id: u32,
        slot_index: u32,
    ) -> Result<Option<Address>, AuctionHouseError> {
        AuctionModule::get_slot_winner(&env, auction_id, slot_index)
    }

    pub fn get_deposited_items(
        env: Env,
        auction_id: u32,
        slot_index: u32,
    ) -> Result<Vec<DepositedAsset>, AuctionHouseError> {
        EscrowModule::get_deposited_items(&env, auction_id, slot_index)
    }

    pub fn get_minimum_reserve_for_slot(
        env: Env,
        auction_id: u32,
        slot_index: u32,
    ) -> Result<i128, AuctionHouseError> {
        AuctionModule::get_minimum_reserve_for_slot(&env, auction_id, slot_index)
    }

    pub fn get_bidder_balance(env: Env, auction_id: u32, bidder: Address) -> i128 {
        BidModule::get_bidder_balance(&env, auction_id, bidder)
    }

    pub fn get_ranked_bids(env: Env, auction_id: u32) -> Vec<RankedBid> {
        AuctionModule::get_ranked_bids(&env, auction_id)
    }

    pub fn get_lowest_eligible_bid(env: Env, auction_id: u32) -> Result<i128, AuctionHouseError> {
        AuctionModule::get_lowest_eligible_bid(&env, auction_id)
    }

    pub fn get_auction_revenue(env: Env, auction_id: u32) -> i128 {
        AuctionModule::get_auction_revenue(&env, auction_id)
    }

    pub fn get_royalties_reserve(env: Env, unit: PaymentUnit) -> i128 {
        SettlementModule::get_royalties_reserve(&env, unit)
    }
}

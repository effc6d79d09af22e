use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::AuctionHouseError;
use crate::event::{AuctionCanceled, AuctionCreated, AUCTION, CANCEL, CREATE};
use crate::helpers::{
    auction_revenue, check_slot_index, get_auction, get_config, get_slot, ranked_bids,
    save_auction, save_total_auctions, total_auctions,
};
use crate::types::{Auction, AuctionParams, RankedBid, Slot};

pub struct AuctionModule;

impl AuctionModule {
    /// Creates an auction and returns its id. Ids start at 1 and are never reused.
    pub fn create_auction(
        env: &Env,
        owner: Address,
        params: AuctionParams,
    ) -> Result<u32, AuctionHouseError> {
        owner.require_auth();

        let config = get_config(env)?;
        params.validate(env, &config)?;

        let auction_id = total_auctions(env)
            .checked_add(1)
            .ok_or(AuctionHouseError::ArithmeticOverflow)?;

        let auction = Auction {
            id: auction_id,
            owner: owner.clone(),
            start_time: params.start_time,
            end_time: params.end_time,
            reset_timer: params.reset_timer,
            number_of_slots: params.number_of_slots,
            bid_unit: params.bid_unit,
            minimum_reserve_values: params.minimum_reserve_values,
            payment_splits: params.payment_splits,
            total_bids: 0,
            total_deposited_items: 0,
            is_canceled: false,
            is_finalized: false,
        };

        save_auction(env, &auction);
        save_total_auctions(env, auction_id);

        env.events().publish(
            (AUCTION, CREATE, auction_id),
            AuctionCreated {
                auction_id,
                owner,
                start_time: auction.start_time,
                end_time: auction.end_time,
                number_of_slots: auction.number_of_slots,
            },
        );
        log!(env, "auction created", auction_id, auction.number_of_slots);

        Ok(auction_id)
    }

    /// Calls an auction off. Only possible for the owner and only until the
    /// first bid lands; deposited items can then be withdrawn right away.
    pub fn cancel_auction(
        env: &Env,
        owner: Address,
        auction_id: u32,
    ) -> Result<(), AuctionHouseError> {
        owner.require_auth();

        let mut auction = get_auction(env, auction_id)?;
        if auction.owner != owner {
            return Err(AuctionHouseError::NotAuctionOwner);
        }
        auction.check_can_cancel()?;

        auction.is_canceled = true;
        save_auction(env, &auction);

        env.events().publish(
            (AUCTION, CANCEL, auction_id),
            AuctionCanceled {
                auction_id,
                owner,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    pub fn get_auction(env: &Env, auction_id: u32) -> Option<Auction> {
        get_auction(env, auction_id).ok()
    }

    pub fn total_auctions(env: &Env) -> u32 {
        total_auctions(env)
    }

    pub fn get_slot(env: &Env, auction_id: u32, slot_index: u32) -> Result<Slot, AuctionHouseError> {
        let auction = get_auction(env, auction_id)?;
        check_slot_index(&auction, slot_index)?;
        Ok(get_slot(env, auction_id, slot_index))
    }

    pub fn get_slot_winner(
        env: &Env,
        auction_id: u32,
        slot_index: u32,
    ) -> Result<Option<Address>, AuctionHouseError> {
        Ok(Self::get_slot(env, auction_id, slot_index)?.winner)
    }

    pub fn get_minimum_reserve_for_slot(
        env: &Env,
        auction_id: u32,
        slot_index: u32,
    ) -> Result<i128, AuctionHouseError> {
        let auction = get_auction(env, auction_id)?;
        check_slot_index(&auction, slot_index)?;
        Ok(auction.minimum_reserve(slot_index))
    }

    /// Ranked bids, lowest first.
    pub fn get_ranked_bids(env: &Env, auction_id: u32) -> Vec<RankedBid> {
        ranked_bids(env, auction_id)
    }

    /// Balance a new bidder has to beat to enter the ranking. Zero while
    /// the ranking still has room.
    pub fn get_lowest_eligible_bid(env: &Env, auction_id: u32) -> Result<i128, AuctionHouseError> {
        let auction = get_auction(env, auction_id)?;
        let ledger = ranked_bids(env, auction_id);
        if ledger.len() < auction.number_of_slots {
            return Ok(0);
        }
        Ok(ledger.first().map(|lowest| lowest.amount).unwrap_or(0))
    }

    pub fn get_auction_revenue(env: &Env, auction_id: u32) -> i128 {
        auction_revenue(env, auction_id)
    }
}

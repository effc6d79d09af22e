use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::AuctionHouseError;
use crate::event::{
    AuctionFinalized, RevenuePaid, RoyaltiesDistributed, SecondarySaleFeePaid, SlotRevenueCaptured,
    AUCTION, CAPTURE, FINALIZE, REVENUE, ROYALTY, SALE_FEE,
};
use crate::helpers::{
    auction_revenue, bid_balance, check_slot_index, get_auction, get_config, get_item, get_slot,
    ranked_bids, royalties_reserve, save_auction, save_auction_revenue, save_bid_balance,
    save_item, save_royalties_reserve, save_slot, save_winning_slot,
};
use crate::types::{Auction, Config, PaymentUnit, Slot};
use crate::{distribution, math};

pub struct SettlementModule;

impl SettlementModule {
    /// Assigns slot k to the k-th highest ranked bidder, provided the slot
    /// holds items and the bidder's balance meets its reserve. Anyone may
    /// call this once the auction has ended. When `expected_winners` is
    /// given it has to match the ranking, highest first.
    pub fn finalize_auction(
        env: &Env,
        auction_id: u32,
        expected_winners: Option<Vec<Address>>,
    ) -> Result<u32, AuctionHouseError> {
        let mut auction = get_auction(env, auction_id)?;
        auction.check_can_finalize(env)?;

        let ledger = ranked_bids(env, auction_id);
        let ranked = ledger.len();

        if let Some(expected) = expected_winners {
            if expected.len() != ranked {
                return Err(AuctionHouseError::WinnerCountMismatch);
            }
            for (rank, bidder) in expected.iter().enumerate() {
                let entry = ledger
                    .get(ranked - 1 - rank as u32)
                    .ok_or(AuctionHouseError::WinnerCountMismatch)?;
                if entry.bidder != bidder {
                    return Err(AuctionHouseError::WinnerOrderMismatch);
                }
            }
        }

        let mut winning_slots = 0;
        for slot_index in 1..=ranked.min(auction.number_of_slots) {
            let Some(entry) = ledger.get(ranked - slot_index) else {
                break;
            };
            let mut slot = get_slot(env, auction_id, slot_index);
            if slot.total_deposited_items == 0
                || entry.amount < auction.minimum_reserve(slot_index)
            {
                continue;
            }

            slot.winner = Some(entry.bidder.clone());
            slot.winning_bid = entry.amount;
            save_slot(env, auction_id, slot_index, &slot);
            save_winning_slot(env, auction_id, &entry.bidder, slot_index);
            winning_slots += 1;
        }

        auction.is_finalized = true;
        save_auction(env, &auction);

        env.events().publish(
            (AUCTION, FINALIZE, auction_id),
            AuctionFinalized {
                auction_id,
                winning_slots,
                timestamp: env.ledger().timestamp(),
            },
        );
        log!(env, "auction finalized", auction_id, winning_slots);

        Ok(winning_slots)
    }

    /// Books the winning bid of one slot: secondary sale fees are set aside,
    /// the royalty cut goes to the reserve and the rest becomes auction revenue.
    pub fn capture_slot_revenue(
        env: &Env,
        auction_id: u32,
        slot_index: u32,
    ) -> Result<i128, AuctionHouseError> {
        let config = get_config(env)?;
        let auction = get_auction(env, auction_id)?;
        auction.ensure_finalized()?;
        check_slot_index(&auction, slot_index)?;

        capture(env, &config, &auction, slot_index)
    }

    /// Captures every slot in `from..=to`, bounded by the batch size.
    pub fn capture_slot_revenue_range(
        env: &Env,
        auction_id: u32,
        from: u32,
        to: u32,
    ) -> Result<i128, AuctionHouseError> {
        let config = get_config(env)?;
        let auction = get_auction(env, auction_id)?;
        auction.ensure_finalized()?;

        if from == 0 || from > to || to > auction.number_of_slots {
            return Err(AuctionHouseError::InvalidSlotRange);
        }
        if to - from + 1 > config.max_batch_size {
            return Err(AuctionHouseError::BatchSizeExceeded);
        }

        let mut total = 0;
        for slot_index in from..=to {
            total = math::checked_add(total, capture(env, &config, &auction, slot_index)?)?;
        }
        Ok(total)
    }

    /// Pays out everything captured so far: each split gets its share and
    /// the owner receives the remainder, rounding dust included.
    pub fn distribute_auction_revenue(
        env: &Env,
        auction_id: u32,
    ) -> Result<i128, AuctionHouseError> {
        let config = get_config(env)?;
        let auction = get_auction(env, auction_id)?;
        auction.ensure_not_canceled()?;
        if !auction.is_ended(env.ledger().timestamp()) {
            return Err(AuctionHouseError::AuctionNotEnded);
        }

        let revenue = auction_revenue(env, auction_id);
        if revenue == 0 {
            return Err(AuctionHouseError::NothingToDistribute);
        }
        let (shares, remainder) = math::split_revenue(env, revenue, &auction.payment_splits)?;
        save_auction_revenue(env, auction_id, 0);

        let token = distribution::unit_token(&config, &auction.bid_unit);
        for (split, share) in auction.payment_splits.iter().zip(shares.iter()) {
            pay_revenue(env, &token, auction_id, split.recipient, share);
        }
        pay_revenue(env, &token, auction_id, auction.owner, remainder);

        Ok(revenue)
    }

    /// Sends the royalty reserve of a payment unit to the DAO.
    pub fn distribute_royalties(env: &Env, unit: PaymentUnit) -> Result<i128, AuctionHouseError> {
        let config = get_config(env)?;

        let amount = royalties_reserve(env, &unit);
        if amount == 0 {
            return Err(AuctionHouseError::ZeroAmount);
        }
        save_royalties_reserve(env, &unit, 0);

        let token = distribution::unit_token(&config, &unit);
        distribution::transfer_from_contract(env, &token, &config.dao, &amount);

        env.events().publish(
            (AUCTION, ROYALTY),
            RoyaltiesDistributed {
                unit,
                recipient: config.dao,
                amount,
            },
        );
        Ok(amount)
    }

    /// Pays the creator fees recorded for one item of a captured slot.
    pub fn distribute_secondary_sale_fees(
        env: &Env,
        auction_id: u32,
        slot_index: u32,
        item_index: u32,
    ) -> Result<i128, AuctionHouseError> {
        let config = get_config(env)?;
        let auction = get_auction(env, auction_id)?;
        auction.ensure_finalized()?;
        check_slot_index(&auction, slot_index)?;

        let slot = get_slot(env, auction_id, slot_index);
        if !slot.revenue_captured {
            return Err(AuctionHouseError::SlotRevenueNotCaptured);
        }
        if item_index == 0 || item_index > slot.total_deposited_items {
            return Err(AuctionHouseError::ItemNotFound);
        }

        let mut item = get_item(env, auction_id, slot_index, item_index)?;
        if item.fees_paid {
            return Err(AuctionHouseError::SecondarySaleFeesAlreadyPaid);
        }
        if slot.winner.is_none() || item.fees.is_empty() {
            return Err(AuctionHouseError::NoSecondarySaleFees);
        }

        let amounts = math::item_fee_amounts(env, average_price(&slot), &item.fees)?;
        let total = math::sum(&amounts)?;
        if total == 0 {
            return Err(AuctionHouseError::NoSecondarySaleFees);
        }

        item.fees_paid = true;
        save_item(env, auction_id, slot_index, item_index, &item);

        let token = distribution::unit_token(&config, &auction.bid_unit);
        for (fee, amount) in item.fees.iter().zip(amounts.iter()) {
            if amount == 0 {
                continue;
            }
            distribution::transfer_from_contract(env, &token, &fee.recipient, &amount);
            env.events().publish(
                (AUCTION, SALE_FEE, auction_id),
                SecondarySaleFeePaid {
                    auction_id,
                    slot_index,
                    item_index,
                    recipient: fee.recipient,
                    amount,
                },
            );
        }

        Ok(total)
    }

    pub fn get_royalties_reserve(env: &Env, unit: PaymentUnit) -> i128 {
        royalties_reserve(env, &unit)
    }
}

fn average_price(slot: &Slot) -> i128 {
    if slot.total_deposited_items == 0 {
        return 0;
    }
    slot.winning_bid / slot.total_deposited_items as i128
}

fn capture(
    env: &Env,
    config: &Config,
    auction: &Auction,
    slot_index: u32,
) -> Result<i128, AuctionHouseError> {
    let auction_id = auction.id;
    let mut slot = get_slot(env, auction_id, slot_index);
    if slot.revenue_captured {
        return Err(AuctionHouseError::SlotRevenueAlreadyCaptured);
    }

    let Some(winner) = slot.winner.clone() else {
        slot.revenue_captured = true;
        save_slot(env, auction_id, slot_index, &slot);
        return Ok(0);
    };

    let average = average_price(&slot);
    let mut secondary_sale_fees = 0;
    for item_index in 1..=slot.total_deposited_items {
        let item = get_item(env, auction_id, slot_index, item_index)?;
        let amounts = math::item_fee_amounts(env, average, &item.fees)?;
        secondary_sale_fees = math::checked_add(secondary_sale_fees, math::sum(&amounts)?)?;
    }

    let net = math::checked_sub(slot.winning_bid, secondary_sale_fees)?;
    let royalty = math::bps_share(net, config.royalty_fee_bps)?;
    let revenue = math::checked_sub(net, royalty)?;

    let balance = math::checked_sub(bid_balance(env, auction_id, &winner), slot.winning_bid)?;
    save_bid_balance(env, auction_id, &winner, balance);

    let collected = math::checked_add(auction_revenue(env, auction_id), revenue)?;
    save_auction_revenue(env, auction_id, collected);

    let reserve = math::checked_add(royalties_reserve(env, &auction.bid_unit), royalty)?;
    save_royalties_reserve(env, &auction.bid_unit, reserve);

    slot.secondary_sale_fees = secondary_sale_fees;
    slot.revenue_captured = true;
    save_slot(env, auction_id, slot_index, &slot);

    env.events().publish(
        (AUCTION, CAPTURE, auction_id),
        SlotRevenueCaptured {
            auction_id,
            slot_index,
            winner: Some(winner),
            winning_bid: slot.winning_bid,
            secondary_sale_fees,
            royalty,
            revenue,
        },
    );

    Ok(revenue)
}

fn pay_revenue(env: &Env, token: &Address, auction_id: u32, recipient: Address, amount: i128) {
    if amount == 0 {
        return;
    }
    distribution::transfer_from_contract(env, token, &recipient, &amount);
    env.events().publish(
        (AUCTION, REVENUE, auction_id),
        RevenuePaid {
            auction_id,
            recipient,
            amount,
        },
    );
}

use soroban_sdk::{log, Address, Env, Vec};

use crate::distribution::{lookup_royalties, release_custody, take_custody};
use crate::errors::AuctionHouseError;
use crate::event::{CollateralDeposited, CollateralReleased, AUCTION, CLAIM, DEPOSIT, RELEASE};
use crate::helpers::{
    check_slot_index, depositor_items, get_auction, get_config, get_item, get_slot, save_auction,
    save_depositor_items, save_item, save_slot,
};
use crate::types::{CollateralItem, DepositedAsset, Slot};

pub struct EscrowModule;

impl EscrowModule {
    /// Takes custody of `items` for a slot. Slots fill in order: slot k only
    /// accepts items once slot k - 1 holds at least one.
    pub fn deposit_collateral(
        env: &Env,
        depositor: Address,
        auction_id: u32,
        slot_index: u32,
        items: Vec<CollateralItem>,
    ) -> Result<u32, AuctionHouseError> {
        depositor.require_auth();
        let config = get_config(env)?;

        let mut auction = get_auction(env, auction_id)?;
        auction.check_can_deposit(env)?;
        check_slot_index(&auction, slot_index)?;

        if slot_index > 1 && get_slot(env, auction_id, slot_index - 1).total_deposited_items == 0 {
            return Err(AuctionHouseError::PreviousSlotEmpty);
        }

        let count = items.len();
        if count == 0 {
            return Err(AuctionHouseError::EmptyDeposit);
        }
        if count > config.max_batch_size {
            return Err(AuctionHouseError::BatchSizeExceeded);
        }

        if !config.collection_whitelist.is_empty() {
            for item in items.iter() {
                if !config.collection_whitelist.contains(&item.collection) {
                    return Err(AuctionHouseError::CollectionNotWhitelisted);
                }
            }
        }

        let mut slot = get_slot(env, auction_id, slot_index);
        let new_total = slot
            .total_deposited_items
            .checked_add(count)
            .ok_or(AuctionHouseError::ArithmeticOverflow)?;
        if new_total > config.nft_slot_limit {
            return Err(AuctionHouseError::SlotLimitExceeded);
        }

        for item in items.iter() {
            take_custody(env, &item, &depositor)?;

            slot.total_deposited_items += 1;
            let item_index = slot.total_deposited_items;
            let asset = DepositedAsset {
                collection: item.collection.clone(),
                token_id: item.token_id,
                depositor: depositor.clone(),
                fees: lookup_royalties(env, &config, &item),
                fees_paid: false,
            };
            save_item(env, auction_id, slot_index, item_index, &asset);

            env.events().publish(
                (AUCTION, DEPOSIT, auction_id),
                CollateralDeposited {
                    auction_id,
                    slot_index,
                    item_index,
                    depositor: depositor.clone(),
                    collection: item.collection,
                    token_id: item.token_id,
                },
            );
        }

        save_slot(env, auction_id, slot_index, &slot);

        let deposited = depositor_items(env, auction_id, slot_index, &depositor);
        save_depositor_items(env, auction_id, slot_index, &depositor, deposited + count);

        auction.total_deposited_items += count;
        save_auction(env, &auction);

        log!(env, "collateral deposited", auction_id, slot_index, count);
        Ok(slot.total_deposited_items)
    }

    /// Returns up to `count` items of a slot that nobody won, oldest first,
    /// each to the address that deposited it.
    pub fn withdraw_unclaimed_collateral(
        env: &Env,
        caller: Address,
        auction_id: u32,
        slot_index: u32,
        count: u32,
    ) -> Result<u32, AuctionHouseError> {
        caller.require_auth();
        let config = get_config(env)?;

        let auction = get_auction(env, auction_id)?;
        check_slot_index(&auction, slot_index)?;

        let mut slot = get_slot(env, auction_id, slot_index);
        if !auction.is_canceled {
            if !auction.is_finalized {
                return Err(AuctionHouseError::AuctionNotFinalized);
            }
            if slot.winner.is_some() {
                return Err(AuctionHouseError::SlotHasWinner);
            }
        }

        if depositor_items(env, auction_id, slot_index, &caller) == 0 {
            return Err(AuctionHouseError::NotSlotDepositor);
        }

        slot.check_release(count, config.max_batch_size)?;
        let released = Self::release(env, auction_id, slot_index, &mut slot, count, None)?;

        log!(env, "unclaimed collateral withdrawn", auction_id, slot_index, released);
        Ok(slot.remaining_items())
    }

    /// Transfers up to `count` won items to the slot winner, oldest first.
    /// Revenue for the slot has to be captured beforehand.
    pub fn claim_won_collateral(
        env: &Env,
        winner: Address,
        auction_id: u32,
        slot_index: u32,
        count: u32,
    ) -> Result<u32, AuctionHouseError> {
        winner.require_auth();
        let config = get_config(env)?;

        let auction = get_auction(env, auction_id)?;
        auction.ensure_finalized()?;
        check_slot_index(&auction, slot_index)?;

        let mut slot = get_slot(env, auction_id, slot_index);
        if !slot.is_won_by(&winner) {
            return Err(AuctionHouseError::NotSlotWinner);
        }
        if !slot.revenue_captured {
            return Err(AuctionHouseError::SlotRevenueNotCaptured);
        }
        if count != 0 && slot.remaining_items() == 0 {
            return Err(AuctionHouseError::AlreadyFullyClaimed);
        }

        slot.check_release(count, config.max_batch_size)?;
        Self::release(env, auction_id, slot_index, &mut slot, count, Some(&winner))?;

        Ok(slot.remaining_items())
    }

    /// Advances the slot cursor by `count` and hands the items out. Without
    /// a recipient each item goes back to its own depositor.
    fn release(
        env: &Env,
        auction_id: u32,
        slot_index: u32,
        slot: &mut Slot,
        count: u32,
        recipient: Option<&Address>,
    ) -> Result<u32, AuctionHouseError> {
        let first = slot.total_withdrawn_items + 1;
        slot.total_withdrawn_items += count;
        save_slot(env, auction_id, slot_index, slot);

        let topic = if recipient.is_some() { CLAIM } else { RELEASE };
        for item_index in first..first + count {
            let item = get_item(env, auction_id, slot_index, item_index)?;
            let to = recipient.cloned().unwrap_or(item.depositor);
            release_custody(env, &item.collection, item.token_id, &to);

            env.events().publish(
                (AUCTION, topic.clone(), auction_id),
                CollateralReleased {
                    auction_id,
                    slot_index,
                    item_index,
                    recipient: to,
                    collection: item.collection,
                    token_id: item.token_id,
                },
            );
        }
        Ok(count)
    }

    pub fn get_deposited_items(
        env: &Env,
        auction_id: u32,
        slot_index: u32,
    ) -> Result<Vec<DepositedAsset>, AuctionHouseError> {
        let auction = get_auction(env, auction_id)?;
        check_slot_index(&auction, slot_index)?;

        let slot = get_slot(env, auction_id, slot_index);
        let mut items = Vec::new(env);
        for item_index in 1..=slot.total_deposited_items {
            items.push_back(get_item(env, auction_id, slot_index, item_index)?);
        }
        Ok(items)
    }
}

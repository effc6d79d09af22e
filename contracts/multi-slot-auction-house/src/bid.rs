use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::AuctionHouseError;
use crate::event::{AuctionExtended, BidSubmitted, BidWithdrawn, AUCTION, BID, EXTEND, WITHDRAW};
use crate::helpers::{
    bid_balance, get_auction, get_config, ranked_bids, save_auction, save_bid_balance,
    save_ranked_bids, winning_slot,
};
use crate::types::{BidChannel, RankedBid};
use crate::{distribution, math};

// The ranked ledger is kept sorted ascending by amount, lowest at index 0.
// Among equal amounts the bidder who reached it first sits higher.

pub fn position_of(ledger: &Vec<RankedBid>, bidder: &Address) -> Option<u32> {
    ledger.iter().position(|entry| &entry.bidder == bidder).map(|i| i as u32)
}

fn insert_sorted(ledger: &mut Vec<RankedBid>, entry: RankedBid) {
    let index = ledger
        .iter()
        .position(|existing| existing.amount >= entry.amount)
        .map(|i| i as u32)
        .unwrap_or(ledger.len());
    ledger.insert(index, entry);
}

/// Records `balance` as the new cumulative balance of `bidder`, keeping at
/// most `capacity` entries. Returns the bidder pushed out, if any.
pub fn apply_balance(
    ledger: &mut Vec<RankedBid>,
    capacity: u32,
    bidder: &Address,
    balance: i128,
) -> Result<Option<RankedBid>, AuctionHouseError> {
    let entry = RankedBid {
        bidder: bidder.clone(),
        amount: balance,
    };

    if let Some(index) = position_of(ledger, bidder) {
        ledger.remove(index);
        insert_sorted(ledger, entry);
        return Ok(None);
    }

    if ledger.len() < capacity {
        insert_sorted(ledger, entry);
        return Ok(None);
    }

    match ledger.first() {
        Some(lowest) if balance > lowest.amount => {
            ledger.pop_front();
            insert_sorted(ledger, entry);
            Ok(Some(lowest))
        }
        _ => Err(AuctionHouseError::BidTooLow),
    }
}

pub struct BidModule;

impl BidModule {
    /// Adds `amount` to the bidder's balance for the auction. Balances are
    /// cumulative, so repeat bids top up rather than replace.
    pub fn place_bid(
        env: &Env,
        bidder: Address,
        auction_id: u32,
        amount: i128,
        channel: BidChannel,
    ) -> Result<i128, AuctionHouseError> {
        bidder.require_auth();
        let config = get_config(env)?;

        if amount < 0 {
            return Err(AuctionHouseError::NegativeAmount);
        }
        if amount == 0 {
            return Err(AuctionHouseError::ZeroBidAmount);
        }

        let mut auction = get_auction(env, auction_id)?;
        auction.check_can_bid(env, channel)?;

        let balance = math::checked_add(bid_balance(env, auction_id, &bidder), amount)?;
        let mut ledger = ranked_bids(env, auction_id);
        let evicted = apply_balance(&mut ledger, auction.number_of_slots, &bidder, balance)?;

        let token = distribution::unit_token(&config, &auction.bid_unit);
        distribution::transfer_to_contract(env, &token, &bidder, &amount);

        save_bid_balance(env, auction_id, &bidder, balance);
        save_ranked_bids(env, auction_id, &ledger);
        auction.total_bids += 1;

        let now = env.ledger().timestamp();
        if auction.should_extend(now) {
            auction.end_time = now
                .checked_add(auction.reset_timer)
                .ok_or(AuctionHouseError::ArithmeticOverflow)?;
            env.events().publish(
                (AUCTION, EXTEND, auction_id),
                AuctionExtended {
                    auction_id,
                    end_time: auction.end_time,
                },
            );
        }
        save_auction(env, &auction);

        if let Some(outbid) = evicted {
            log!(env, "bidder dropped out of ranking", auction_id, outbid.bidder);
        }

        env.events().publish(
            (AUCTION, BID, auction_id),
            BidSubmitted {
                auction_id,
                bidder,
                amount,
                balance,
            },
        );

        Ok(balance)
    }

    /// Refunds the caller's whole balance once it can no longer win.
    pub fn withdraw_bid(
        env: &Env,
        bidder: Address,
        auction_id: u32,
        channel: BidChannel,
    ) -> Result<i128, AuctionHouseError> {
        bidder.require_auth();
        let config = get_config(env)?;

        let auction = get_auction(env, auction_id)?;
        auction.check_channel(channel)?;

        let balance = bid_balance(env, auction_id, &bidder);
        if balance == 0 {
            return Err(AuctionHouseError::NothingToWithdraw);
        }

        if !auction.is_canceled {
            let still_winning = if auction.is_finalized {
                winning_slot(env, auction_id, &bidder).is_some()
            } else {
                position_of(&ranked_bids(env, auction_id), &bidder).is_some()
            };
            if still_winning {
                return Err(AuctionHouseError::BidStillWinning);
            }
        }

        save_bid_balance(env, auction_id, &bidder, 0);

        let token = distribution::unit_token(&config, &auction.bid_unit);
        distribution::transfer_from_contract(env, &token, &bidder, &balance);

        env.events().publish(
            (AUCTION, WITHDRAW, auction_id),
            BidWithdrawn {
                auction_id,
                bidder,
                amount: balance,
            },
        );

        Ok(balance)
    }

    pub fn get_bidder_balance(env: &Env, auction_id: u32, bidder: Address) -> i128 {
        bid_balance(env, auction_id, &bidder)
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use super::*;
    use soroban_sdk::testutils::Address as _;

    fn amounts(ledger: &Vec<RankedBid>) -> std::vec::Vec<i128> {
        ledger.iter().map(|entry| entry.amount).collect()
    }

    #[test]
    fn test_ledger_stays_sorted_and_bounded() {
        let env = Env::default();
        let mut ledger = Vec::new(&env);
        let bidders: std::vec::Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();

        apply_balance(&mut ledger, 3, &bidders[0], 300).unwrap();
        apply_balance(&mut ledger, 3, &bidders[1], 100).unwrap();
        apply_balance(&mut ledger, 3, &bidders[2], 200).unwrap();
        assert_eq!(amounts(&ledger), [100, 200, 300]);

        let evicted = apply_balance(&mut ledger, 3, &bidders[3], 150).unwrap();
        assert_eq!(evicted.map(|e| e.bidder), Some(bidders[1].clone()));
        assert_eq!(amounts(&ledger), [150, 200, 300]);
        assert_eq!(position_of(&ledger, &bidders[1]), None);
    }

    #[test]
    fn test_equal_balance_does_not_evict() {
        let env = Env::default();
        let mut ledger = Vec::new(&env);
        let first = Address::generate(&env);
        let second = Address::generate(&env);

        apply_balance(&mut ledger, 1, &first, 100).unwrap();
        assert_eq!(
            apply_balance(&mut ledger, 1, &second, 100),
            Err(AuctionHouseError::BidTooLow)
        );
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_earlier_bidder_ranks_higher_on_ties() {
        let env = Env::default();
        let mut ledger = Vec::new(&env);
        let early = Address::generate(&env);
        let late = Address::generate(&env);

        apply_balance(&mut ledger, 2, &early, 200).unwrap();
        apply_balance(&mut ledger, 2, &late, 100).unwrap();
        // Topping up to an equal balance still ranks below the earlier bidder.
        apply_balance(&mut ledger, 2, &late, 200).unwrap();

        assert_eq!(ledger.get(1).unwrap().bidder, early);
        assert_eq!(ledger.get(0).unwrap().bidder, late);
    }

    #[test]
    fn test_top_up_moves_existing_entry() {
        let env = Env::default();
        let mut ledger = Vec::new(&env);
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        apply_balance(&mut ledger, 2, &a, 100).unwrap();
        apply_balance(&mut ledger, 2, &b, 200).unwrap();
        apply_balance(&mut ledger, 2, &a, 300).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(1).unwrap().bidder, a);
        assert_eq!(amounts(&ledger), [200, 300]);
    }
}

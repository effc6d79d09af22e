use soroban_sdk::{Address, Env};

use crate::{errors::AuctionHouseError, math, types::*};

impl AuctionParams {
    pub fn validate(&self, env: &Env, config: &Config) -> Result<(), AuctionHouseError> {
        let now = env.ledger().timestamp();

        if self.start_time < now
            || self.end_time <= self.start_time
            || self.reset_timer == 0
            || self.end_time.checked_add(self.reset_timer).is_none()
            || self.number_of_slots == 0
            || self.number_of_slots > config.max_slots
        {
            return Err(AuctionHouseError::InvalidAuctionParameters);
        }

        let reserves = self.minimum_reserve_values.len();
        if reserves != 0 && reserves != self.number_of_slots {
            return Err(AuctionHouseError::InvalidAuctionParameters);
        }
        if self.minimum_reserve_values.iter().any(|reserve| reserve < 0) {
            return Err(AuctionHouseError::InvalidAuctionParameters);
        }

        match math::total_split_bps(&self.payment_splits) {
            Some(total) if total <= math::BPS_DENOMINATOR => {}
            _ => return Err(AuctionHouseError::InvalidAuctionParameters),
        }

        if let PaymentUnit::Token(token) = &self.bid_unit {
            if !config.supported_bid_tokens.contains(token) {
                return Err(AuctionHouseError::BidTokenNotSupported);
            }
        }

        Ok(())
    }
}

impl Auction {
    pub fn is_started(&self, now: u64) -> bool {
        now >= self.start_time
    }

    pub fn is_ended(&self, now: u64) -> bool {
        now >= self.end_time
    }

    /// Reserve for a 1-based slot, zero when the auction has none.
    pub fn minimum_reserve(&self, slot_index: u32) -> i128 {
        slot_index
            .checked_sub(1)
            .and_then(|index| self.minimum_reserve_values.get(index))
            .unwrap_or(0)
    }

    pub fn ensure_not_canceled(&self) -> Result<(), AuctionHouseError> {
        if self.is_canceled {
            return Err(AuctionHouseError::AuctionCanceled);
        }
        Ok(())
    }

    pub fn check_can_cancel(&self) -> Result<(), AuctionHouseError> {
        if self.is_canceled {
            return Err(AuctionHouseError::AlreadyCanceled);
        }
        if self.is_finalized {
            return Err(AuctionHouseError::AuctionAlreadyFinalized);
        }
        // Once a bid exists the auction can no longer be called off.
        if self.total_bids > 0 {
            return Err(AuctionHouseError::AuctionHasBids);
        }
        Ok(())
    }

    pub fn check_channel(&self, channel: BidChannel) -> Result<(), AuctionHouseError> {
        if !channel.accepts(&self.bid_unit) {
            return Err(AuctionHouseError::WrongPaymentUnit);
        }
        Ok(())
    }

    pub fn check_can_bid(&self, env: &Env, channel: BidChannel) -> Result<(), AuctionHouseError> {
        self.ensure_not_canceled()?;

        let now = env.ledger().timestamp();
        if !self.is_started(now) || self.is_ended(now) {
            return Err(AuctionHouseError::AuctionNotActive);
        }
        self.check_channel(channel)
    }

    pub fn check_can_deposit(&self, env: &Env) -> Result<(), AuctionHouseError> {
        self.ensure_not_canceled()?;
        if self.is_ended(env.ledger().timestamp()) {
            return Err(AuctionHouseError::AuctionEnded);
        }
        Ok(())
    }

    pub fn check_can_finalize(&self, env: &Env) -> Result<(), AuctionHouseError> {
        self.ensure_not_canceled()?;
        if self.is_finalized {
            return Err(AuctionHouseError::AuctionAlreadyFinalized);
        }
        if !self.is_ended(env.ledger().timestamp()) {
            return Err(AuctionHouseError::AuctionNotEnded);
        }
        Ok(())
    }

    pub fn ensure_finalized(&self) -> Result<(), AuctionHouseError> {
        self.ensure_not_canceled()?;
        if !self.is_finalized {
            return Err(AuctionHouseError::AuctionNotFinalized);
        }
        Ok(())
    }

    /// Late bids push the end out to `now + reset_timer`.
    pub fn should_extend(&self, now: u64) -> bool {
        self.end_time.saturating_sub(now) < self.reset_timer
    }
}

impl BidChannel {
    pub fn accepts(self, unit: &PaymentUnit) -> bool {
        matches!(
            (self, unit),
            (BidChannel::Native, PaymentUnit::Native) | (BidChannel::Token, PaymentUnit::Token(_))
        )
    }
}

impl Slot {
    pub fn empty() -> Self {
        Slot {
            total_deposited_items: 0,
            total_withdrawn_items: 0,
            winner: None,
            winning_bid: 0,
            revenue_captured: false,
            secondary_sale_fees: 0,
        }
    }

    pub fn remaining_items(&self) -> u32 {
        self.total_deposited_items - self.total_withdrawn_items
    }

    pub fn is_won_by(&self, bidder: &Address) -> bool {
        self.winner.as_ref() == Some(bidder)
    }

    /// Validates a paginated release of `count` items out of this slot.
    pub fn check_release(&self, count: u32, max_batch_size: u32) -> Result<(), AuctionHouseError> {
        if count == 0 {
            return Err(AuctionHouseError::ZeroCount);
        }
        if count > max_batch_size {
            return Err(AuctionHouseError::BatchSizeExceeded);
        }
        if count > self.remaining_items() {
            return Err(AuctionHouseError::ExceedsAvailableItems);
        }
        Ok(())
    }
}

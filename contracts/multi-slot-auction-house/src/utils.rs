use soroban_sdk::{Address, Env, Vec};

use crate::types::*;

pub struct AuctionParamsBuilder {
    start_time: u64,
    end_time: u64,
    reset_timer: u64,
    number_of_slots: u32,
    bid_unit: PaymentUnit,
    minimum_reserve_values: Vec<i128>,
    payment_splits: Vec<PaymentSplit>,
}

impl AuctionParamsBuilder {
    /// Initialize the builder with required fields. Bids default to the
    /// native unit, with no reserves and no payment splits.
    pub fn new(env: &Env, start_time: u64, end_time: u64, number_of_slots: u32) -> Self {
        Self {
            start_time,
            end_time,
            reset_timer: 60,
            number_of_slots,
            bid_unit: PaymentUnit::Native,
            minimum_reserve_values: Vec::new(env),
            payment_splits: Vec::new(env),
        }
    }

    // Set optional fields

    pub fn reset_timer(mut self, seconds: u64) -> Self {
        self.reset_timer = seconds;
        self
    }

    pub fn bid_token(mut self, token: Address) -> Self {
        self.bid_unit = PaymentUnit::Token(token);
        self
    }

    pub fn minimum_reserves(mut self, reserves: Vec<i128>) -> Self {
        self.minimum_reserve_values = reserves;
        self
    }

    pub fn payment_split(mut self, recipient: Address, share_bps: u32) -> Self {
        self.payment_splits.push_back(PaymentSplit {
            recipient,
            share_bps,
        });
        self
    }

    pub fn build(self) -> AuctionParams {
        AuctionParams {
            start_time: self.start_time,
            end_time: self.end_time,
            reset_timer: self.reset_timer,
            number_of_slots: self.number_of_slots,
            bid_unit: self.bid_unit,
            minimum_reserve_values: self.minimum_reserve_values,
            payment_splits: self.payment_splits,
        }
    }
}

use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

use crate::types::PaymentUnit;

// Topic shared by every auction house event.
pub const AUCTION: Symbol = symbol_short!("AUCTION");

pub const CREATE: Symbol = symbol_short!("CREATE");
pub const CANCEL: Symbol = symbol_short!("CANCEL");
pub const BID: Symbol = symbol_short!("BID");
pub const EXTEND: Symbol = symbol_short!("EXTEND");
pub const WITHDRAW: Symbol = symbol_short!("WITHDRAW");
pub const DEPOSIT: Symbol = symbol_short!("DEPOSIT");
pub const RELEASE: Symbol = symbol_short!("RELEASE");
pub const CLAIM: Symbol = symbol_short!("CLAIM");
pub const FINALIZE: Symbol = symbol_short!("FINALIZE");
pub const CAPTURE: Symbol = symbol_short!("CAPTURE");
pub const REVENUE: Symbol = symbol_short!("REVENUE");
pub const ROYALTY: Symbol = symbol_short!("ROYALTY");
pub const SALE_FEE: Symbol = symbol_short!("SALE_FEE");
pub const CONFIG: Symbol = symbol_short!("CONFIG");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    pub auction_id: u32,
    pub owner: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub number_of_slots: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCanceled {
    pub auction_id: u32,
    pub owner: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidSubmitted {
    pub auction_id: u32,
    pub bidder: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionExtended {
    pub auction_id: u32,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidWithdrawn {
    pub auction_id: u32,
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralDeposited {
    pub auction_id: u32,
    pub slot_index: u32,
    pub item_index: u32,
    pub depositor: Address,
    pub collection: Address,
    pub token_id: u32,
}

/// Emitted both for unclaimed withdrawals and for won items being claimed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralReleased {
    pub auction_id: u32,
    pub slot_index: u32,
    pub item_index: u32,
    pub recipient: Address,
    pub collection: Address,
    pub token_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionFinalized {
    pub auction_id: u32,
    pub winning_slots: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlotRevenueCaptured {
    pub auction_id: u32,
    pub slot_index: u32,
    pub winner: Option<Address>,
    pub winning_bid: i128,
    pub secondary_sale_fees: i128,
    pub royalty: i128,
    pub revenue: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevenuePaid {
    pub auction_id: u32,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoyaltiesDistributed {
    pub unit: PaymentUnit,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecondarySaleFeePaid {
    pub auction_id: u32,
    pub slot_index: u32,
    pub item_index: u32,
    pub recipient: Address,
    pub amount: i128,
}

use soroban_sdk::{contracttype, Address, Vec};

/// Unit an auction is bid in. `Native` settles through the native asset's
/// Stellar Asset Contract configured at initialization.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum PaymentUnit {
    Native,
    Token(Address),
}

/// Entry point a bid or refund came through.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum BidChannel {
    Native,
    Token,
}

/// Fixed share of captured auction revenue owed to a third party.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PaymentSplit {
    pub recipient: Address,
    pub share_bps: u32,
}

/// Creator fee attached to a single collateral item by the royalties registry.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RoyaltyFee {
    pub recipient: Address,
    pub fee_bps: u32,
}

/// Caller supplied auction parameters.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AuctionParams {
    pub start_time: u64,
    pub end_time: u64,
    pub reset_timer: u64,
    pub number_of_slots: u32,
    pub bid_unit: PaymentUnit,
    pub minimum_reserve_values: Vec<i128>, // empty, or one value per slot
    pub payment_splits: Vec<PaymentSplit>,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Auction {
    pub id: u32,
    pub owner: Address,
    pub start_time: u64,
    pub end_time: u64, // moves forward on late bids
    pub reset_timer: u64,
    pub number_of_slots: u32,
    pub bid_unit: PaymentUnit,
    pub minimum_reserve_values: Vec<i128>,
    pub payment_splits: Vec<PaymentSplit>,
    pub total_bids: u32,
    pub total_deposited_items: u32, // across all slots, reported by get_auction
    pub is_canceled: bool,
    pub is_finalized: bool,
}

/// Per-slot custody and settlement bookkeeping.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Slot {
    pub total_deposited_items: u32,
    pub total_withdrawn_items: u32, // FIFO cursor shared by withdraw and claim
    pub winner: Option<Address>,
    pub winning_bid: i128,
    pub revenue_captured: bool,
    pub secondary_sale_fees: i128,
}

/// Item handed over by a depositor.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CollateralItem {
    pub collection: Address,
    pub token_id: u32,
}

/// Item held in escrow, with the creator fees snapshotted at deposit time.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DepositedAsset {
    pub collection: Address,
    pub token_id: u32,
    pub depositor: Address,
    pub fees: Vec<RoyaltyFee>,
    pub fees_paid: bool,
}

/// Entry of the ranked bid ledger.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RankedBid {
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Config {
    pub dao: Address,          // administrator and royalty recipient
    pub native_token: Address, // native asset contract
    pub royalties_registry: Option<Address>,
    pub max_slots: u32,
    pub nft_slot_limit: u32,
    pub max_batch_size: u32,
    pub royalty_fee_bps: u32,
    pub supported_bid_tokens: Vec<Address>,
    pub collection_whitelist: Vec<Address>, // empty = unrestricted
}

/// Storage keys.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,                            // Instance: house configuration
    Locked,                            // Instance: reentrancy lock
    TotalAuctions,                     // Instance: last assigned auction id
    Auction(u32),                      // Auction by id
    Slot(u32, u32),                    // (auction, slot)
    DepositedItem(u32, u32, u32),      // (auction, slot, 1-based item index)
    SlotDepositor(u32, u32, Address),  // items deposited by an address into a slot
    BidBalance(u32, Address),          // cumulative bidder balance per auction
    RankedBids(u32),                   // ascending ranked ledger per auction
    WinningSlot(u32, Address),         // slot won by a bidder once finalized
    AuctionRevenue(u32),               // captured, not yet distributed
    RoyaltiesReserve(PaymentUnit),     // royalty cuts per payment unit
}

use soroban_sdk::contracterror;

/// Error codes are grouped by class: 1xx validation, 2xx lifecycle state,
/// 3xx authorization, 4xx exhausted resources, 5xx arithmetic, 6xx setup.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionHouseError {
    InvalidAuctionParameters = 101,
    BidTokenNotSupported = 102,
    InvalidSlotIndex = 103,
    ZeroBidAmount = 104,
    NegativeAmount = 105,
    ZeroCount = 106,
    EmptyDeposit = 107,
    InvalidSlotRange = 108,
    InvalidFeeBps = 109,
    InvalidConfigValue = 110,
    WinnerCountMismatch = 111,
    WinnerOrderMismatch = 112,
    ItemNotFound = 113,

    AuctionNotFound = 201,
    AuctionCanceled = 202,
    AlreadyCanceled = 203,
    AuctionNotActive = 204,
    AuctionEnded = 205,
    AuctionNotEnded = 206,
    AuctionAlreadyFinalized = 207,
    AuctionNotFinalized = 208,
    AuctionHasBids = 209,
    WrongPaymentUnit = 210,
    BidTooLow = 211,
    BidStillWinning = 212,
    NothingToWithdraw = 213,
    PreviousSlotEmpty = 214,
    SlotHasWinner = 215,
    SlotRevenueAlreadyCaptured = 216,
    SlotRevenueNotCaptured = 217,
    AlreadyFullyClaimed = 218,
    NothingToDistribute = 219,
    ZeroAmount = 220,
    SecondarySaleFeesAlreadyPaid = 221,
    NoSecondarySaleFees = 222,
    ReentrantCall = 223,
    CustodyNotReceived = 224,

    NotAuctionOwner = 301,
    NotSlotWinner = 302,
    NotSlotDepositor = 303,
    CollectionNotWhitelisted = 304,

    BatchSizeExceeded = 401,
    ExceedsAvailableItems = 402,
    SlotLimitExceeded = 403,

    ArithmeticOverflow = 501,
    InsufficientBalance = 502,

    NotInitialized = 601,
    AlreadyInitialized = 602,
}

use soroban_sdk::{log, Address, Env, Symbol, Vec};

use crate::errors::AuctionHouseError;
use crate::event::{AUCTION, CONFIG};
use crate::helpers::{get_config, save_config, verify_dao};
use crate::math::BPS_DENOMINATOR;
use crate::types::{Config, DataKey};

/// Items a single paginated call may move, unless the DAO says otherwise.
pub const DEFAULT_MAX_BATCH_SIZE: u32 = 40;

pub struct AdminModule;

pub trait AdminOperations {
    /// Sets up the house. Can only run once.
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        dao: Address,
        native_token: Address,
        royalties_registry: Option<Address>,
        max_slots: u32,
        nft_slot_limit: u32,
        royalty_fee_bps: u32,
        supported_bid_tokens: Vec<Address>,
    ) -> Result<(), AuctionHouseError>;

    fn get_config(env: Env) -> Result<Config, AuctionHouseError>;

    /// Royalty cut taken from every captured slot
    fn set_royalty_fee_bps(env: Env, royalty_fee_bps: u32) -> Result<(), AuctionHouseError>;

    /// Maximum number of items one slot may hold
    fn set_nft_slot_limit(env: Env, nft_slot_limit: u32) -> Result<(), AuctionHouseError>;

    /// Maximum number of slots per auction
    fn set_max_slots(env: Env, max_slots: u32) -> Result<(), AuctionHouseError>;

    /// Maximum number of items or slots a paginated call may process
    fn set_max_batch_size(env: Env, max_batch_size: u32) -> Result<(), AuctionHouseError>;

    /// Restricts deposits to the given collections. An empty list lifts the restriction.
    fn set_collection_whitelist(
        env: Env,
        collections: Vec<Address>,
    ) -> Result<(), AuctionHouseError>;

    fn set_supported_bid_tokens(env: Env, tokens: Vec<Address>) -> Result<(), AuctionHouseError>;

    fn set_royalties_registry(
        env: Env,
        registry: Option<Address>,
    ) -> Result<(), AuctionHouseError>;

    /// Hands administration and the royalty reserve over to a new DAO address
    fn transfer_dao(env: Env, new_dao: Address) -> Result<(), AuctionHouseError>;
}

impl AdminOperations for AdminModule {
    fn initialize(
        env: Env,
        dao: Address,
        native_token: Address,
        royalties_registry: Option<Address>,
        max_slots: u32,
        nft_slot_limit: u32,
        royalty_fee_bps: u32,
        supported_bid_tokens: Vec<Address>,
    ) -> Result<(), AuctionHouseError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(AuctionHouseError::AlreadyInitialized);
        }
        dao.require_auth();

        if max_slots == 0 || nft_slot_limit == 0 {
            return Err(AuctionHouseError::InvalidConfigValue);
        }
        if royalty_fee_bps > BPS_DENOMINATOR {
            return Err(AuctionHouseError::InvalidFeeBps);
        }

        let config = Config {
            dao,
            native_token,
            royalties_registry,
            max_slots,
            nft_slot_limit,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            royalty_fee_bps,
            supported_bid_tokens,
            collection_whitelist: Vec::new(&env),
        };
        save_config(&env, &config);
        env.storage().instance().set(&DataKey::TotalAuctions, &0u32);

        log!(&env, "auction house initialized, dao {}", config.dao);
        Ok(())
    }

    fn get_config(env: Env) -> Result<Config, AuctionHouseError> {
        get_config(&env)
    }

    fn set_royalty_fee_bps(env: Env, royalty_fee_bps: u32) -> Result<(), AuctionHouseError> {
        let mut config = verify_dao(&env)?;
        if royalty_fee_bps > BPS_DENOMINATOR {
            return Err(AuctionHouseError::InvalidFeeBps);
        }
        config.royalty_fee_bps = royalty_fee_bps;
        update(&env, &config, "royalty_fee_bps");
        Ok(())
    }

    fn set_nft_slot_limit(env: Env, nft_slot_limit: u32) -> Result<(), AuctionHouseError> {
        let mut config = verify_dao(&env)?;
        if nft_slot_limit == 0 {
            return Err(AuctionHouseError::InvalidConfigValue);
        }
        config.nft_slot_limit = nft_slot_limit;
        update(&env, &config, "nft_slot_limit");
        Ok(())
    }

    fn set_max_slots(env: Env, max_slots: u32) -> Result<(), AuctionHouseError> {
        let mut config = verify_dao(&env)?;
        if max_slots == 0 {
            return Err(AuctionHouseError::InvalidConfigValue);
        }
        config.max_slots = max_slots;
        update(&env, &config, "max_slots");
        Ok(())
    }

    fn set_max_batch_size(env: Env, max_batch_size: u32) -> Result<(), AuctionHouseError> {
        let mut config = verify_dao(&env)?;
        if max_batch_size == 0 {
            return Err(AuctionHouseError::InvalidConfigValue);
        }
        config.max_batch_size = max_batch_size;
        update(&env, &config, "max_batch_size");
        Ok(())
    }

    fn set_collection_whitelist(
        env: Env,
        collections: Vec<Address>,
    ) -> Result<(), AuctionHouseError> {
        let mut config = verify_dao(&env)?;
        config.collection_whitelist = collections;
        update(&env, &config, "collection_whitelist");
        Ok(())
    }

    fn set_supported_bid_tokens(env: Env, tokens: Vec<Address>) -> Result<(), AuctionHouseError> {
        let mut config = verify_dao(&env)?;
        config.supported_bid_tokens = tokens;
        update(&env, &config, "supported_bid_tokens");
        Ok(())
    }

    fn set_royalties_registry(
        env: Env,
        registry: Option<Address>,
    ) -> Result<(), AuctionHouseError> {
        let mut config = verify_dao(&env)?;
        config.royalties_registry = registry;
        update(&env, &config, "royalties_registry");
        Ok(())
    }

    fn transfer_dao(env: Env, new_dao: Address) -> Result<(), AuctionHouseError> {
        let mut config = verify_dao(&env)?;
        new_dao.require_auth();
        config.dao = new_dao;
        update(&env, &config, "dao");
        Ok(())
    }
}

fn update(env: &Env, config: &Config, field: &str) {
    save_config(env, config);
    env.events()
        .publish((AUCTION, CONFIG), Symbol::new(env, field));
}

use soroban_sdk::Env;

use crate::errors::AuctionHouseError;
use crate::types::DataKey;

fn enter(env: &Env) -> Result<(), AuctionHouseError> {
    let storage = env.storage().instance();
    if storage.has(&DataKey::Locked) {
        return Err(AuctionHouseError::ReentrantCall);
    }
    storage.set(&DataKey::Locked, &true);
    Ok(())
}

fn exit(env: &Env) {
    env.storage().instance().remove(&DataKey::Locked);
}

/// Runs `f` while holding the house-wide lock. Any call that moves funds or
/// collateral goes through here, so a token contract calling back into the
/// house mid-transfer is rejected.
pub fn non_reentrant<T>(
    env: &Env,
    f: impl FnOnce() -> Result<T, AuctionHouseError>,
) -> Result<T, AuctionHouseError> {
    enter(env)?;
    let result = f();
    exit(env);
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::AuctionHouseContract;

    fn is_locked(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Locked)
    }

    #[test]
    fn test_nested_call_is_rejected() {
        let env = Env::default();
        let house = env.register(AuctionHouseContract, ());

        env.as_contract(&house, || {
            let nested = non_reentrant(&env, || {
                assert!(is_locked(&env));
                non_reentrant(&env, || Ok(()))
            });
            assert_eq!(nested, Err(AuctionHouseError::ReentrantCall));
            assert!(!is_locked(&env));
        });
    }

    #[test]
    fn test_lock_released_after_ok_and_err() {
        let env = Env::default();
        let house = env.register(AuctionHouseContract, ());

        env.as_contract(&house, || {
            assert_eq!(non_reentrant(&env, || Ok(7)), Ok(7));
            assert!(!is_locked(&env));

            let failed: Result<(), _> = non_reentrant(&env, || Err(AuctionHouseError::ZeroAmount));
            assert_eq!(failed, Err(AuctionHouseError::ZeroAmount));
            assert!(!is_locked(&env));

            // A fresh call after a failure still gets through.
            assert_eq!(non_reentrant(&env, || Ok(())), Ok(()));
        });
    }
}

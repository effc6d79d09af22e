use soroban_sdk::{Env, Vec};

use crate::errors::AuctionHouseError;
use crate::types::{PaymentSplit, RoyaltyFee};

pub const BPS_DENOMINATOR: u32 = 10_000;

pub fn checked_add(a: i128, b: i128) -> Result<i128, AuctionHouseError> {
    a.checked_add(b).ok_or(AuctionHouseError::ArithmeticOverflow)
}

/// Subtraction over non-negative balances. Going below zero means the
/// bookkeeping would pay out more than it holds.
pub fn checked_sub(a: i128, b: i128) -> Result<i128, AuctionHouseError> {
    if b > a {
        return Err(AuctionHouseError::InsufficientBalance);
    }
    Ok(a - b)
}

/// `amount * bps / 10_000`, rounded down.
pub fn bps_share(amount: i128, bps: u32) -> Result<i128, AuctionHouseError> {
    amount
        .checked_mul(bps as i128)
        .map(|scaled| scaled / BPS_DENOMINATOR as i128)
        .ok_or(AuctionHouseError::ArithmeticOverflow)
}

pub fn total_split_bps(splits: &Vec<PaymentSplit>) -> Option<u32> {
    splits
        .iter()
        .try_fold(0u32, |acc, split| acc.checked_add(split.share_bps))
}

/// Shares owed to each split recipient, in order, plus the remainder left
/// for the auction owner. Rounding dust always lands in the remainder.
pub fn split_revenue(
    env: &Env,
    revenue: i128,
    splits: &Vec<PaymentSplit>,
) -> Result<(Vec<i128>, i128), AuctionHouseError> {
    let mut shares = Vec::new(env);
    let mut remainder = revenue;
    for split in splits.iter() {
        let share = bps_share(revenue, split.share_bps)?;
        remainder = checked_sub(remainder, share)?;
        shares.push_back(share);
    }
    Ok((shares, remainder))
}

/// Fee amounts for one item, computed against the slot's average price per
/// item. A fee only applies while the item still has more value left than
/// the fee itself; otherwise it is skipped and reported as zero.
pub fn item_fee_amounts(
    env: &Env,
    average_price: i128,
    fees: &Vec<RoyaltyFee>,
) -> Result<Vec<i128>, AuctionHouseError> {
    let mut amounts = Vec::new(env);
    let mut value = average_price;
    for fee in fees.iter() {
        let amount = bps_share(average_price, fee.fee_bps)?;
        if value > amount {
            value -= amount;
            amounts.push_back(amount);
        } else {
            amounts.push_back(0);
        }
    }
    Ok(amounts)
}

pub fn sum(values: &Vec<i128>) -> Result<i128, AuctionHouseError> {
    values.iter().try_fold(0i128, checked_add)
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, vec, Address};

    #[test]
    fn test_bps_share_rounds_down() {
        assert_eq!(bps_share(200, 2_000), Ok(40));
        assert_eq!(bps_share(101, 3_333), Ok(33));
        assert_eq!(bps_share(9, 999), Ok(0));
        assert_eq!(
            bps_share(i128::MAX, 2),
            Err(AuctionHouseError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_checked_sub_never_goes_negative() {
        assert_eq!(checked_sub(10, 4), Ok(6));
        assert_eq!(checked_sub(4, 10), Err(AuctionHouseError::InsufficientBalance));
    }

    #[test]
    fn test_split_revenue_leaves_dust_to_owner() {
        let env = Env::default();
        let splits = vec![
            &env,
            PaymentSplit {
                recipient: Address::generate(&env),
                share_bps: 2_000,
            },
            PaymentSplit {
                recipient: Address::generate(&env),
                share_bps: 1_000,
            },
        ];
        let (shares, remainder) = split_revenue(&env, 200, &splits).unwrap();
        assert_eq!(shares, vec![&env, 40, 20]);
        assert_eq!(remainder, 140);

        let (shares, remainder) = split_revenue(&env, 7, &splits).unwrap();
        assert_eq!(shares, vec![&env, 1, 0]);
        assert_eq!(remainder, 6);
        assert_eq!(sum(&shares).unwrap() + remainder, 7);
    }

    #[test]
    fn test_total_split_bps() {
        let env = Env::default();
        let splits = vec![
            &env,
            PaymentSplit {
                recipient: Address::generate(&env),
                share_bps: u32::MAX,
            },
            PaymentSplit {
                recipient: Address::generate(&env),
                share_bps: 1,
            },
        ];
        assert_eq!(total_split_bps(&splits), None);
        assert_eq!(total_split_bps(&Vec::new(&env)), Some(0));
    }

    #[test]
    fn test_item_fees_skip_when_value_is_exhausted() {
        let env = Env::default();
        let fee = |bps| RoyaltyFee {
            recipient: Address::generate(&env),
            fee_bps: bps,
        };
        let fees = vec![&env, fee(1_000), fee(500)];
        let amounts = item_fee_amounts(&env, 2_000, &fees).unwrap();
        assert_eq!(amounts, vec![&env, 200, 100]);

        // A full-price fee consumes the item, the next one no longer applies.
        let fees = vec![&env, fee(6_000), fee(5_000)];
        let amounts = item_fee_amounts(&env, 100, &fees).unwrap();
        assert_eq!(amounts, vec![&env, 60, 0]);
    }
}

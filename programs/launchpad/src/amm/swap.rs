use anchor_lang::prelude::*;

use crate::amm::liquidity::Reserves;
use crate::bonding_curve::price::price_from_reserves;
use crate::constants::BPS_DENOMINATOR;
use crate::errors::LaunchpadError;
use crate::utils::math::{mul_div_ceil, mul_div_floor};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    SolToToken,
    TokenToSol,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapQuote {
    pub amount_in: u64,
    pub fee: u64,
    pub amount_out: u64,
    pub price_after: u128,
}

/// Constant-product swap. The fee is taken from the input (rounded up) and
/// stays in the pool, so the whole `amount_in` joins the input reserve.
pub fn calculate_swap(
    reserves: &Reserves,
    amount_in: u64,
    direction: SwapDirection,
    fee_bps: u16,
) -> Result<(Reserves, SwapQuote)> {
    require!(amount_in > 0, LaunchpadError::InvalidAmount);
    require!(
        reserves.sol > 0 && reserves.token > 0,
        LaunchpadError::InsufficientLiquidity
    );

    let (reserve_in, reserve_out) = match direction {
        SwapDirection::SolToToken => (reserves.sol, reserves.token),
        SwapDirection::TokenToSol => (reserves.token, reserves.sol),
    };

    let fee = mul_div_ceil(amount_in, fee_bps as u64, BPS_DENOMINATOR)?;
    let actual_amount_in = amount_in.checked_sub(fee).ok_or(LaunchpadError::Overflow)?;
    let denominator = reserve_in
        .checked_add(actual_amount_in)
        .ok_or(LaunchpadError::Overflow)?;
    let amount_out = mul_div_floor(actual_amount_in, reserve_out, denominator)?;

    require!(amount_out > 0, LaunchpadError::InvalidAmount);
    require!(
        amount_out < reserve_out,
        LaunchpadError::InsufficientLiquidity
    );

    let new_reserve_in = reserve_in
        .checked_add(amount_in)
        .ok_or(LaunchpadError::Overflow)?;
    let new_reserve_out = reserve_out - amount_out;

    let next = match direction {
        SwapDirection::SolToToken => Reserves {
            sol: new_reserve_in,
            token: new_reserve_out,
            lp_supply: reserves.lp_supply,
        },
        SwapDirection::TokenToSol => Reserves {
            sol: new_reserve_out,
            token: new_reserve_in,
            lp_supply: reserves.lp_supply,
        },
    };
    let quote = SwapQuote {
        amount_in,
        fee,
        amount_out,
        price_after: price_from_reserves(next.sol, next.token)?,
    };
    Ok((next, quote))
}

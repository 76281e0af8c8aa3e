use anchor_lang::prelude::*;

use crate::bonding_curve::constants::*;
use crate::errors::LaunchpadError;
use crate::utils::math::ceil_div;

/// Constant-product curve over virtual reserves used while a pool is seeding.
///
/// `real_sol_reserve` is the SOL the curve has actually collected and
/// `real_token_reserve` is the part of the curve allocation still unsold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BondingCurve {
    pub virtual_sol_reserve: u64,
    pub virtual_token_reserve: u64,
    pub real_sol_reserve: u64,
    pub real_token_reserve: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveTrade {
    /// Lamports paid by a buyer or received by a seller
    pub sol_amount: u64,
    /// Tokens minted to a buyer or burned from a seller
    pub token_amount: u64,
    pub price_before: u128,
    pub price_after: u128,
}

impl Default for BondingCurve {
    fn default() -> Self {
        Self {
            virtual_sol_reserve: INITIAL_VIRTUAL_SOL_RESERVE,
            virtual_token_reserve: INITIAL_VIRTUAL_TOKEN_RESERVE,
            real_sol_reserve: 0,
            real_token_reserve: CURVE_TOKEN_SUPPLY,
        }
    }
}

impl BondingCurve {
    pub fn spot_price(&self) -> Result<u128> {
        price_from_reserves(self.virtual_sol_reserve, self.virtual_token_reserve)
    }

    pub fn tokens_sold(&self) -> u64 {
        CURVE_TOKEN_SUPPLY.saturating_sub(self.real_token_reserve)
    }

    /// Quotes a buy of `sol_in` lamports and returns the curve after it.
    pub fn buy(&self, sol_in: u64) -> Result<(BondingCurve, CurveTrade)> {
        require!(sol_in > 0, LaunchpadError::InvalidAmount);

        let new_virtual_sol = self
            .virtual_sol_reserve
            .checked_add(sol_in)
            .ok_or(LaunchpadError::Overflow)?;
        let new_virtual_token = invariant_counterpart(new_virtual_sol)?;
        let tokens_out = self
            .virtual_token_reserve
            .checked_sub(new_virtual_token)
            .ok_or(LaunchpadError::Overflow)?;

        require!(tokens_out > 0, LaunchpadError::InvalidAmount);
        require!(
            tokens_out <= self.real_token_reserve,
            LaunchpadError::ReserveExhausted
        );

        let next = BondingCurve {
            virtual_sol_reserve: new_virtual_sol,
            virtual_token_reserve: new_virtual_token,
            real_sol_reserve: self
                .real_sol_reserve
                .checked_add(sol_in)
                .ok_or(LaunchpadError::Overflow)?,
            real_token_reserve: self.real_token_reserve - tokens_out,
        };
        let trade = CurveTrade {
            sol_amount: sol_in,
            token_amount: tokens_out,
            price_before: self.spot_price()?,
            price_after: next.spot_price()?,
        };
        Ok((next, trade))
    }

    /// Quotes a sell of `tokens_in` atomic units and returns the curve after it.
    pub fn sell(&self, tokens_in: u64) -> Result<(BondingCurve, CurveTrade)> {
        require!(tokens_in > 0, LaunchpadError::InvalidAmount);
        require!(
            tokens_in <= self.tokens_sold(),
            LaunchpadError::ReserveExhausted
        );

        let new_virtual_token = self
            .virtual_token_reserve
            .checked_add(tokens_in)
            .ok_or(LaunchpadError::Overflow)?;
        let new_virtual_sol = invariant_counterpart(new_virtual_token)?;
        let sol_out = self
            .virtual_sol_reserve
            .checked_sub(new_virtual_sol)
            .ok_or(LaunchpadError::ReserveExhausted)?;

        require!(sol_out > 0, LaunchpadError::InvalidAmount);
        require!(
            sol_out <= self.real_sol_reserve,
            LaunchpadError::ReserveExhausted
        );

        let next = BondingCurve {
            virtual_sol_reserve: new_virtual_sol,
            virtual_token_reserve: new_virtual_token,
            real_sol_reserve: self.real_sol_reserve - sol_out,
            real_token_reserve: self
                .real_token_reserve
                .checked_add(tokens_in)
                .ok_or(LaunchpadError::Overflow)?,
        };
        let trade = CurveTrade {
            sol_amount: sol_out,
            token_amount: tokens_in,
            price_before: self.spot_price()?,
            price_after: next.spot_price()?,
        };
        Ok((next, trade))
    }
}

/// ceil(k / reserve): rounding up keeps the virtual product at or above k,
/// so trade outputs always round in favour of the pool.
fn invariant_counterpart(reserve: u64) -> Result<u64> {
    let counterpart = ceil_div(CURVE_INVARIANT, reserve as u128)?;
    u64::try_from(counterpart).map_err(|_| error!(LaunchpadError::Overflow))
}

/// Lamports per atomic token unit, scaled by `PRICE_SCALE`.
pub fn price_from_reserves(sol_reserve: u64, token_reserve: u64) -> Result<u128> {
    require!(token_reserve > 0, LaunchpadError::DivideByZero);
    let scaled = (sol_reserve as u128)
        .checked_mul(PRICE_SCALE)
        .ok_or(LaunchpadError::Overflow)?;
    Ok(scaled / token_reserve as u128)
}

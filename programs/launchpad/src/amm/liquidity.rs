use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::LaunchpadError;
use crate::utils::math::{geometric_mean, mul_div_floor};

/// Real AMM reserves and the LP supply that claims them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reserves {
    pub sol: u64,
    pub token: u64,
    pub lp_supply: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deposit {
    pub sol_amount: u64,
    pub token_amount: u64,
    pub lp_minted: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Withdrawal {
    pub lp_burned: u64,
    pub sol_out: u64,
    pub token_out: u64,
}

impl Reserves {
    pub fn is_empty(&self) -> bool {
        self.lp_supply == 0
    }

    /// Quotes a deposit and returns the reserves after it. An empty pool is
    /// seeded at the geometric mean of the deposit; otherwise the deposit
    /// must track the reserve ratio within `tolerance_bps`.
    pub fn deposit(
        &self,
        sol_amount: u64,
        token_amount: u64,
        tolerance_bps: u16,
    ) -> Result<(Reserves, Deposit)> {
        require!(
            sol_amount > 0 && token_amount > 0,
            LaunchpadError::InvalidAmount
        );

        if self.is_empty() {
            let lp_minted = geometric_mean(sol_amount, token_amount);
            require!(lp_minted > 0, LaunchpadError::InvalidAmount);
            let next = Reserves {
                sol: sol_amount,
                token: token_amount,
                lp_supply: lp_minted,
            };
            return Ok((
                next,
                Deposit {
                    sol_amount,
                    token_amount,
                    lp_minted,
                },
            ));
        }

        require!(
            self.sol > 0 && self.token > 0,
            LaunchpadError::InsufficientLiquidity
        );

        let expected_token = mul_div_floor(sol_amount, self.token, self.sol)?;
        let deviation = expected_token.abs_diff(token_amount);
        let allowed = mul_div_floor(expected_token, tolerance_bps as u64, BPS_DENOMINATOR)?;
        require!(deviation <= allowed, LaunchpadError::RatioMismatch);

        let lp_minted = mul_div_floor(self.lp_supply, sol_amount, self.sol)?;
        require!(lp_minted > 0, LaunchpadError::InvalidAmount);

        let next = Reserves {
            sol: self
                .sol
                .checked_add(sol_amount)
                .ok_or(LaunchpadError::Overflow)?,
            token: self
                .token
                .checked_add(token_amount)
                .ok_or(LaunchpadError::Overflow)?,
            lp_supply: self
                .lp_supply
                .checked_add(lp_minted)
                .ok_or(LaunchpadError::Overflow)?,
        };
        Ok((
            next,
            Deposit {
                sol_amount,
                token_amount,
                lp_minted,
            },
        ))
    }

    /// Quotes burning `lp_amount` shares held by a provider with
    /// `holder_balance` shares, and returns the reserves after it.
    pub fn withdraw(&self, lp_amount: u64, holder_balance: u64) -> Result<(Reserves, Withdrawal)> {
        require!(lp_amount > 0, LaunchpadError::InvalidAmount);
        require!(
            lp_amount <= holder_balance && lp_amount <= self.lp_supply,
            LaunchpadError::InsufficientShares
        );

        let sol_out = mul_div_floor(self.sol, lp_amount, self.lp_supply)?;
        let token_out = mul_div_floor(self.token, lp_amount, self.lp_supply)?;
        require!(sol_out > 0 || token_out > 0, LaunchpadError::InvalidAmount);

        let next = Reserves {
            sol: self.sol - sol_out,
            token: self.token - token_out,
            lp_supply: self.lp_supply - lp_amount,
        };
        require!(
            next.lp_supply > 0 || (next.sol == 0 && next.token == 0),
            LaunchpadError::ZeroLiquidity
        );

        Ok((
            next,
            Withdrawal {
                lp_burned: lp_amount,
                sol_out,
                token_out,
            },
        ))
    }
}

use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

use crate::constants::DEFAULT_TOKEN_DECIMALS;

pub const SECONDS_IN_A_HOUR: i64 = 60 * 60;
pub const SECONDS_IN_A_DAY: i64 = SECONDS_IN_A_HOUR * 24;

pub const TOKEN_SCALE: u64 = 10u64.pow(DEFAULT_TOKEN_DECIMALS as u32);

// Virtual reserves the curve starts from; their product is the curve invariant.
pub const INITIAL_VIRTUAL_SOL_RESERVE: u64 = 30 * LAMPORTS_PER_SOL;
pub const INITIAL_VIRTUAL_TOKEN_RESERVE: u64 = 1_073_000_000 * TOKEN_SCALE;
pub const CURVE_INVARIANT: u128 =
    INITIAL_VIRTUAL_SOL_RESERVE as u128 * INITIAL_VIRTUAL_TOKEN_RESERVE as u128;

// Tokens the curve is allowed to sell before it is exhausted
pub const CURVE_TOKEN_SUPPLY: u64 = 793_100_000 * TOKEN_SCALE;

// Prices are lamports per atomic token unit, scaled by 1e18
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

pub const REQUIRED_ESCROW_AMOUNT: u64 = LAMPORTS_PER_SOL; // in lamports
pub const DAYS_TO_MATURITY: i64 = 2; // number of days before the creator may close the pool

#[cfg(not(feature = "devnet"))]
pub const DEFAULT_MATURITY_PERIOD: i64 = DAYS_TO_MATURITY * SECONDS_IN_A_DAY;
#[cfg(feature = "devnet")]
pub const DEFAULT_MATURITY_PERIOD: i64 = 3; // x seconds from creation

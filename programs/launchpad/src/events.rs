use anchor_lang::prelude::*;

use crate::amm::swap::SwapDirection;

#[event]
pub struct ConfigUpdated {
    pub authority: Pubkey,
    pub escrow_deposit: u64,
    pub maturity_period: i64,
    pub swap_fee_bps: u16,
    pub ratio_tolerance_bps: u16,
}

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub ticker: String,
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub index: u64,
    pub escrow_deposit: u64,
    pub maturity_time: i64,
    pub price: u128,
}

#[event]
pub struct TokensBought {
    pub pool: Pubkey,
    pub buyer: Pubkey,
    pub sol_in: u64,
    pub tokens_out: u64,
    pub price: u128,
}

#[event]
pub struct TokensSold {
    pub pool: Pubkey,
    pub seller: Pubkey,
    pub tokens_in: u64,
    pub sol_out: u64,
    pub price: u128,
}

#[event]
pub struct PoolGraduated {
    pub pool: Pubkey,
    pub curve_proceeds: u64,
    pub timestamp: i64,
}

#[event]
pub struct LiquidityAdded {
    pub pool: Pubkey,
    pub provider: Pubkey,
    pub sol_amount: u64,
    pub token_amount: u64,
    pub lp_minted: u64,
    pub lp_supply: u64,
}

#[event]
pub struct LiquidityRemoved {
    pub pool: Pubkey,
    pub provider: Pubkey,
    pub lp_burned: u64,
    pub sol_out: u64,
    pub token_out: u64,
    pub lp_supply: u64,
}

#[event]
pub struct SwapExecuted {
    pub pool: Pubkey,
    pub trader: Pubkey,
    pub direction: SwapDirection,
    pub amount_in: u64,
    pub fee: u64,
    pub amount_out: u64,
    pub price: u128,
}

#[event]
pub struct PoolClosed {
    pub pool: Pubkey,
    pub creator: Pubkey,
    pub escrow_released: u64,
    pub reserve_released: u64,
    pub timestamp: i64,
}

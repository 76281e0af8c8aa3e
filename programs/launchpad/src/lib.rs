use anchor_lang::prelude::*;

pub mod amm;
pub mod bonding_curve;
pub mod constants;
pub mod context;
pub mod errors;
pub mod events;
pub mod state;
pub mod utils;

use amm::swap::SwapDirection;
pub use context::*;
use state::{ConfigParams, Pool};

declare_id!("AQWyAazxs3Dz6vJVBAb5wKu4pN9scWqVansE7g2gyKGg");

#[program]
pub mod launchpad {
    use super::*;

    pub fn initialize_config(ctx: Context<InitializeConfig>, params: ConfigParams) -> Result<()> {
        context::initialize_config::initialize_config(ctx, params)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, params: ConfigParams) -> Result<()> {
        context::initialize_config::update_config(ctx, params)
    }

    pub fn initialize(
        ctx: Context<InitializePool>,
        symbol: String,
        name: String,
        uri: String,
    ) -> Result<Pool> {
        context::initialize_pool::initialize_pool(ctx, symbol, name, uri)
    }

    pub fn buy(ctx: Context<BuyTokens>, ticker: String, amount: u64) -> Result<Pool> {
        context::bonding_buy_tokens::buy_tokens(ctx, ticker, amount)
    }

    pub fn sell(ctx: Context<SellTokens>, ticker: String, amount: u64) -> Result<Pool> {
        context::bonding_sell_tokens::sell_tokens(ctx, ticker, amount)
    }

    pub fn add_liquidity(
        ctx: Context<AddLiquidity>,
        ticker: String,
        sol_amount: u64,
        token_amount: u64,
    ) -> Result<()> {
        context::amm_add_liquidity::add_liquidity(ctx, ticker, sol_amount, token_amount)
    }

    pub fn remove_liquidity(
        ctx: Context<RemoveLiquidity>,
        ticker: String,
        lp_amount: u64,
    ) -> Result<()> {
        context::amm_remove_liquidity::remove_liquidity(ctx, ticker, lp_amount)
    }

    pub fn swap(
        ctx: Context<Swap>,
        ticker: String,
        amount: u64,
        direction: SwapDirection,
    ) -> Result<()> {
        context::amm_swap_tokens::swap(ctx, ticker, amount, direction)
    }

    pub fn close(ctx: Context<Close>, ticker: String) -> Result<()> {
        context::close_pool::close_pool(ctx, ticker)
    }

    pub fn get_pool(ctx: Context<GetPool>, ticker: String) -> Result<Pool> {
        context::get_pool::get_pool(ctx, ticker)
    }
}

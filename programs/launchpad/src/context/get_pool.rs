use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::state::Pool;

#[derive(Accounts)]
#[instruction(ticker: String)]
pub struct GetPool<'info> {
    #[account(seeds = [POOL_SEED.as_bytes(), ticker.as_bytes()], bump = pool.bump)]
    pub pool: Account<'info, Pool>,
}

pub fn get_pool(ctx: Context<GetPool>, ticker: String) -> Result<Pool> {
    let pool = &ctx.accounts.pool;
    pool.ensure_ticker(&ticker)?;
    Ok(Pool::clone(pool))
}

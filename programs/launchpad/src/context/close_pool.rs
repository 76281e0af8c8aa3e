use anchor_lang::prelude::*;

use crate::constants::{POOL_ESCROW_SEED, POOL_SEED};
use crate::errors::LaunchpadError;
use crate::events::PoolClosed;
use crate::state::{Pool, PoolEscrow};
use crate::utils::lamports::transfer_lamports_from_pda;

#[derive(Accounts)]
#[instruction(ticker: String)]
pub struct Close<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), ticker.as_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [POOL_ESCROW_SEED.as_bytes(), ticker.as_bytes()],
        bump = escrow.bump,
        constraint = escrow.pool == pool.key() @ LaunchpadError::InvalidEscrowAccount,
    )]
    pub escrow: Account<'info, PoolEscrow>,

    pub system_program: Program<'info, System>,
}

/// Closes a matured pool, paying the escrow and any SOL reserve left on the
/// pool to its creator. The escrow record is kept with a zero balance.
pub fn close_pool(ctx: Context<Close>, ticker: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.creator.key();
    let pool = &mut ctx.accounts.pool;
    let escrow = &mut ctx.accounts.escrow;
    pool.ensure_ticker(&ticker)?;

    msg!("pool maturity time: {}", pool.maturity_time);
    msg!("current timestamp: {}", now);

    let settlement = pool.apply_close(escrow, &caller, now)?;

    let escrow_info = escrow.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(escrow_info.data_len());
    require!(
        escrow_info.lamports().saturating_sub(rent_floor) >= settlement.escrow_released,
        LaunchpadError::EscrowInsufficientFunds
    );

    let creator_info = ctx.accounts.creator.to_account_info();
    transfer_lamports_from_pda(&escrow_info, &creator_info, settlement.escrow_released)?;
    transfer_lamports_from_pda(
        &pool.to_account_info(),
        &creator_info,
        settlement.reserve_released,
    )?;
    msg!(
        "Released {} lamports of escrow and {} lamports of reserve to creator",
        settlement.escrow_released,
        settlement.reserve_released
    );

    emit!(PoolClosed {
        pool: pool.key(),
        creator: caller,
        escrow_released: settlement.escrow_released,
        reserve_released: settlement.reserve_released,
        timestamp: now,
    });

    Ok(())
}

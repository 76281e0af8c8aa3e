use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::constants::{POOL_MINT_SEED, POOL_SEED};
use crate::errors::LaunchpadError;
use crate::events::TokensSold;
use crate::state::Pool;
use crate::utils::lamports::transfer_lamports_from_pda;

#[derive(Accounts)]
#[instruction(ticker: String)]
pub struct SellTokens<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), ticker.as_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [POOL_MINT_SEED.as_bytes(), ticker.as_bytes()],
        bump,
        mint::authority = mint,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = seller,
    )]
    pub seller_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Sells `amount` atomic token units back to the bonding curve.
pub fn sell_tokens(ctx: Context<SellTokens>, ticker: String, amount: u64) -> Result<Pool> {
    require!(
        ctx.accounts.seller_token_account.amount >= amount,
        LaunchpadError::InsufficientTokenBalance
    );

    let pool = &mut ctx.accounts.pool;
    pool.ensure_ticker(&ticker)?;
    let trade = pool.apply_sell(amount)?;

    // check if pool has enough funds to buy token from seller
    let pool_info = pool.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(pool_info.data_len());
    require!(
        pool_info.lamports().saturating_sub(rent_floor) >= trade.sol_amount,
        LaunchpadError::InsufficientLiquidity
    );

    // Burn the tokens from the seller's token account
    let cpi_accounts = Burn {
        mint: ctx.accounts.mint.to_account_info(),
        from: ctx.accounts.seller_token_account.to_account_info(),
        authority: ctx.accounts.seller.to_account_info(),
    };
    let cpi_context = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::burn(cpi_context, trade.token_amount)?;
    msg!("Tokens burned successfully");

    // Transfer SOL from the pool to the seller
    transfer_lamports_from_pda(
        &pool_info,
        &ctx.accounts.seller.to_account_info(),
        trade.sol_amount,
    )?;
    msg!("SOL transferred to seller successfully.");

    emit!(TokensSold {
        pool: pool.key(),
        seller: ctx.accounts.seller.key(),
        tokens_in: trade.token_amount,
        sol_out: trade.sol_amount,
        price: trade.price_after,
    });

    Ok(Pool::clone(pool))
}

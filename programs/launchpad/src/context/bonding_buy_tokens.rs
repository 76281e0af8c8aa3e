use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{mint_to, Mint, MintTo, Token, TokenAccount},
};

use crate::constants::{POOL_MINT_SEED, POOL_SEED};
use crate::events::TokensBought;
use crate::state::Pool;
use crate::utils::lamports::transfer_lamports_from_signer;

#[derive(Accounts)]
#[instruction(ticker: String)]
pub struct BuyTokens<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

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
        init_if_needed,
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

/// Buys from the bonding curve. `amount` is the lamports spent.
pub fn buy_tokens(ctx: Context<BuyTokens>, ticker: String, amount: u64) -> Result<Pool> {
    let pool = &mut ctx.accounts.pool;
    pool.ensure_ticker(&ticker)?;
    let trade = pool.apply_buy(amount)?;

    // Transfer SOL to the pool
    transfer_lamports_from_signer(
        &ctx.accounts.buyer.to_account_info(),
        &pool.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        trade.sol_amount,
    )?;
    msg!("SOL sent to pool successfully");

    let mint_bump = [ctx.bumps.mint];
    let seeds: &[&[u8]] = &[POOL_MINT_SEED.as_bytes(), ticker.as_bytes(), &mint_bump];
    let signer = [seeds];

    // Mint the tokens to the buyer's account in atomic units
    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                authority: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.buyer_token_account.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
            },
            &signer,
        ),
        trade.token_amount,
    )?;
    msg!("Tokens minted to buyer successfully");

    emit!(TokensBought {
        pool: pool.key(),
        buyer: ctx.accounts.buyer.key(),
        sol_in: trade.sol_amount,
        tokens_out: trade.token_amount,
        price: trade.price_after,
    });

    Ok(Pool::clone(pool))
}

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, Transfer},
};

use crate::amm::swap::SwapDirection;
use crate::constants::{POOL_MINT_SEED, POOL_SEED};
use crate::errors::LaunchpadError;
use crate::events::SwapExecuted;
use crate::state::Pool;
use crate::utils::lamports::{transfer_lamports_from_pda, transfer_lamports_from_signer};

#[derive(Accounts)]
#[instruction(ticker: String)]
pub struct Swap<'info> {
    #[account(mut)]
    pub trader: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), ticker.as_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        seeds = [POOL_MINT_SEED.as_bytes(), ticker.as_bytes()],
        bump,
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = trader,
        associated_token::mint = mint,
        associated_token::authority = trader,
    )]
    pub trader_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = pool,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn swap(
    ctx: Context<Swap>,
    ticker: String,
    amount: u64,
    direction: SwapDirection,
) -> Result<()> {
    if direction == SwapDirection::TokenToSol {
        require!(
            ctx.accounts.trader_token_account.amount >= amount,
            LaunchpadError::InsufficientTokenBalance
        );
    }

    let pool = &mut ctx.accounts.pool;
    pool.ensure_ticker(&ticker)?;
    let quote = pool.apply_swap(amount, direction)?;
    let pool_info = pool.to_account_info();

    let pool_bump = [pool.bump];
    let seeds: &[&[u8]] = &[POOL_SEED.as_bytes(), ticker.as_bytes(), &pool_bump];
    let signer = [seeds];

    match direction {
        SwapDirection::SolToToken => {
            transfer_lamports_from_signer(
                &ctx.accounts.trader.to_account_info(),
                &pool_info,
                &ctx.accounts.system_program.to_account_info(),
                quote.amount_in,
            )?;
            token::transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.token_vault.to_account_info(),
                        to: ctx.accounts.trader_token_account.to_account_info(),
                        authority: pool_info.clone(),
                    },
                    &signer,
                ),
                quote.amount_out,
            )?;
        }
        SwapDirection::TokenToSol => {
            token::transfer(
                CpiContext::new(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.trader_token_account.to_account_info(),
                        to: ctx.accounts.token_vault.to_account_info(),
                        authority: ctx.accounts.trader.to_account_info(),
                    },
                ),
                quote.amount_in,
            )?;
            transfer_lamports_from_pda(
                &pool_info,
                &ctx.accounts.trader.to_account_info(),
                quote.amount_out,
            )?;
        }
    }
    msg!(
        "Swapped {} in for {} out (fee {})",
        quote.amount_in,
        quote.amount_out,
        quote.fee
    );

    emit!(SwapExecuted {
        pool: pool.key(),
        trader: ctx.accounts.trader.key(),
        direction,
        amount_in: quote.amount_in,
        fee: quote.fee,
        amount_out: quote.amount_out,
        price: quote.price_after,
    });

    Ok(())
}

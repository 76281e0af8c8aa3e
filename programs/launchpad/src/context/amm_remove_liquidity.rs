use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Burn, Mint, Token, TokenAccount, Transfer},
};

use crate::constants::{POOL_LP_MINT_SEED, POOL_MINT_SEED, POOL_SEED};
use crate::events::LiquidityRemoved;
use crate::state::Pool;
use crate::utils::lamports::transfer_lamports_from_pda;

#[derive(Accounts)]
#[instruction(ticker: String)]
pub struct RemoveLiquidity<'info> {
    #[account(mut)]
    pub provider: Signer<'info>,

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
        mut,
        seeds = [POOL_LP_MINT_SEED.as_bytes(), ticker.as_bytes()],
        bump,
        mint::authority = pool,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = lp_mint,
        associated_token::authority = provider,
    )]
    pub provider_lp_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = provider,
        associated_token::mint = mint,
        associated_token::authority = provider,
    )]
    pub provider_token_account: Box<Account<'info, TokenAccount>>,

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

/// Burns `lp_amount` LP shares and pays out the provider's pro-rata share of
/// both reserves.
pub fn remove_liquidity(ctx: Context<RemoveLiquidity>, ticker: String, lp_amount: u64) -> Result<()> {
    let holder_balance = ctx.accounts.provider_lp_account.amount;
    let pool = &mut ctx.accounts.pool;
    pool.ensure_ticker(&ticker)?;
    let withdrawal = pool.apply_remove_liquidity(lp_amount, holder_balance)?;
    let pool_info = pool.to_account_info();

    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.lp_mint.to_account_info(),
                from: ctx.accounts.provider_lp_account.to_account_info(),
                authority: ctx.accounts.provider.to_account_info(),
            },
        ),
        withdrawal.lp_burned,
    )?;
    msg!("LP tokens burned successfully");

    let pool_bump = [pool.bump];
    let seeds: &[&[u8]] = &[POOL_SEED.as_bytes(), ticker.as_bytes(), &pool_bump];
    let signer = [seeds];
    if withdrawal.token_out > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.token_vault.to_account_info(),
                    to: ctx.accounts.provider_token_account.to_account_info(),
                    authority: pool_info.clone(),
                },
                &signer,
            ),
            withdrawal.token_out,
        )?;
    }
    transfer_lamports_from_pda(
        &pool_info,
        &ctx.accounts.provider.to_account_info(),
        withdrawal.sol_out,
    )?;
    msg!(
        "Withdrew {} lamports and {} tokens",
        withdrawal.sol_out,
        withdrawal.token_out
    );

    emit!(LiquidityRemoved {
        pool: pool.key(),
        provider: ctx.accounts.provider.key(),
        lp_burned: withdrawal.lp_burned,
        sol_out: withdrawal.sol_out,
        token_out: withdrawal.token_out,
        lp_supply: pool.lp_supply,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, mint_to, Mint, MintTo, Token, TokenAccount, Transfer},
};

use crate::constants::{POOL_ESCROW_SEED, POOL_LP_MINT_SEED, POOL_MINT_SEED, POOL_SEED};
use crate::errors::LaunchpadError;
use crate::events::{LiquidityAdded, PoolGraduated};
use crate::state::{Pool, PoolEscrow};
use crate::utils::lamports::{transfer_lamports_from_pda, transfer_lamports_from_signer};

#[derive(Accounts)]
#[instruction(ticker: String)]
pub struct AddLiquidity<'info> {
    #[account(mut)]
    pub provider: Signer<'info>,

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
        associated_token::mint = mint,
        associated_token::authority = provider,
    )]
    pub provider_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = provider,
        associated_token::mint = mint,
        associated_token::authority = pool,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = provider,
        associated_token::mint = lp_mint,
        associated_token::authority = provider,
    )]
    pub provider_lp_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

/// Deposits SOL and tokens into the pool's AMM reserves. The first deposit
/// into a seeding pool graduates it.
pub fn add_liquidity(
    ctx: Context<AddLiquidity>,
    ticker: String,
    sol_amount: u64,
    token_amount: u64,
) -> Result<()> {
    require!(
        ctx.accounts.provider_token_account.amount >= token_amount,
        LaunchpadError::InsufficientTokenBalance
    );

    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;
    let escrow = &mut ctx.accounts.escrow;
    pool.ensure_ticker(&ticker)?;
    let change = pool.apply_add_liquidity(escrow, sol_amount, token_amount, now)?;
    let pool_info = pool.to_account_info();

    transfer_lamports_from_signer(
        &ctx.accounts.provider.to_account_info(),
        &pool_info,
        &ctx.accounts.system_program.to_account_info(),
        change.deposit.sol_amount,
    )?;
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.provider_token_account.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.provider.to_account_info(),
            },
        ),
        change.deposit.token_amount,
    )?;
    msg!("Liquidity deposited into pool vaults");

    let pool_bump = [pool.bump];
    let seeds: &[&[u8]] = &[POOL_SEED.as_bytes(), ticker.as_bytes(), &pool_bump];
    let signer = [seeds];
    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                authority: pool_info.clone(),
                to: ctx.accounts.provider_lp_account.to_account_info(),
                mint: ctx.accounts.lp_mint.to_account_info(),
            },
            &signer,
        ),
        change.deposit.lp_minted,
    )?;
    msg!("LP tokens minted to provider successfully");

    if change.graduated {
        // Curve proceeds move from the pool into the escrow
        transfer_lamports_from_pda(
            &pool_info,
            &escrow.to_account_info(),
            change.curve_proceeds,
        )?;
        let escrow_info = escrow.to_account_info();
        let rent_floor = Rent::get()?.minimum_balance(escrow_info.data_len());
        escrow.ensure_backed(escrow_info.lamports(), rent_floor)?;
        msg!(
            "Pool {} graduated, {} lamports of curve proceeds escrowed",
            ticker,
            change.curve_proceeds
        );
        emit!(PoolGraduated {
            pool: pool.key(),
            curve_proceeds: change.curve_proceeds,
            timestamp: now,
        });
    }

    emit!(LiquidityAdded {
        pool: pool.key(),
        provider: ctx.accounts.provider.key(),
        sol_amount: change.deposit.sol_amount,
        token_amount: change.deposit.token_amount,
        lp_minted: change.deposit.lp_minted,
        lp_supply: pool.lp_supply,
    });

    Ok(())
}

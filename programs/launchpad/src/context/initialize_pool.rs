use anchor_lang::prelude::*;
use anchor_spl::{
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
        Metadata as Metaplex,
    },
    token::{Mint, Token},
};

use crate::bonding_curve::utils::{validate_ticker, validate_token_info};
use crate::constants::*;
use crate::errors::LaunchpadError;
use crate::events::PoolInitialized;
use crate::state::{LaunchpadConfig, Pool, PoolEscrow, PoolKeys, PoolParams};
use crate::utils::lamports::transfer_lamports_from_signer;
use crate::utils::pda::{derive_metadata_pda, ticker_seed};

#[derive(Accounts)]
#[instruction(symbol: String)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, LaunchpadConfig>,

    // init_if_needed so a taken ticker surfaces as PoolAlreadyExists.
    // ticker_seed keeps an oversized ticker from panicking in the PDA search.
    #[account(
        init_if_needed,
        payer = signer,
        seeds = [POOL_SEED.as_bytes(), ticker_seed(&symbol)?],
        bump,
        space = 8 + Pool::INIT_SPACE,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init_if_needed,
        payer = signer,
        seeds = [POOL_ESCROW_SEED.as_bytes(), ticker_seed(&symbol)?],
        bump,
        space = 8 + PoolEscrow::INIT_SPACE,
    )]
    pub escrow: Box<Account<'info, PoolEscrow>>,

    /// CHECK: New Metaplex Account being created
    #[account(mut)]
    pub metadata: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        seeds = [POOL_MINT_SEED.as_bytes(), ticker_seed(&symbol)?],
        bump,
        payer = signer,
        mint::decimals = DEFAULT_TOKEN_DECIMALS,
        mint::authority = mint,
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        seeds = [POOL_LP_MINT_SEED.as_bytes(), ticker_seed(&symbol)?],
        bump,
        payer = signer,
        mint::decimals = LP_MINT_DECIMALS,
        mint::authority = pool,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub token_metadata_program: Program<'info, Metaplex>,
}

pub fn initialize_pool(
    ctx: Context<InitializePool>,
    symbol: String,
    name: String,
    uri: String,
) -> Result<Pool> {
    require!(
        !ctx.accounts.pool.is_initialized(),
        LaunchpadError::PoolAlreadyExists
    );
    validate_ticker(&symbol)?;
    validate_token_info(&name, &uri)?;
    require_keys_eq!(
        ctx.accounts.metadata.key(),
        derive_metadata_pda(&ctx.accounts.mint.key()).0,
        ErrorCode::ConstraintSeeds
    );

    let now = Clock::get()?.unix_timestamp;
    let index = ctx.accounts.config.next_pool_index()?;
    let params = PoolParams::from(&*ctx.accounts.config);
    let escrow_deposit = ctx.accounts.config.escrow_deposit;
    let creator = ctx.accounts.signer.key();
    let keys = PoolKeys {
        creator,
        mint: ctx.accounts.mint.key(),
        lp_mint: ctx.accounts.lp_mint.key(),
    };
    ctx.accounts
        .pool
        .initialize(&symbol, keys, &params, index, now, ctx.bumps.pool)?;

    /////////////////////////////////
    // Create the token metadata
    /////////////////////////////////
    let mint_bump = [ctx.bumps.mint];
    let seeds: &[&[u8]] = &[POOL_MINT_SEED.as_bytes(), symbol.as_bytes(), &mint_bump];
    let signer = [seeds];

    let token_data = DataV2 {
        name,
        symbol: symbol.clone(),
        uri,
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    };
    let metadata_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_metadata_program.to_account_info(),
        CreateMetadataAccountsV3 {
            payer: ctx.accounts.signer.to_account_info(),
            update_authority: ctx.accounts.mint.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            metadata: ctx.accounts.metadata.to_account_info(),
            mint_authority: ctx.accounts.mint.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            rent: ctx.accounts.rent.to_account_info(),
        },
        &signer,
    );
    let is_mutable = false;
    let update_authority_is_signer = true;
    create_metadata_accounts_v3(
        metadata_ctx,
        token_data,
        is_mutable,
        update_authority_is_signer,
        None,
    )?;
    msg!("Token mint created successfully.");

    /////////////////////////////////
    // Transfer SOL into pool escrow
    /////////////////////////////////
    transfer_lamports_from_signer(
        &ctx.accounts.signer.to_account_info(),
        &ctx.accounts.escrow.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        escrow_deposit,
    )?;
    let pool_key = ctx.accounts.pool.key();
    ctx.accounts
        .escrow
        .initialize(pool_key, creator, escrow_deposit, ctx.bumps.escrow);
    msg!("SOL transferred into escrow successfully");

    ctx.accounts.config.record_pool_created(index);

    let pool = &ctx.accounts.pool;
    msg!(
        "Pool {} #{} created, matures at {}",
        symbol,
        index,
        pool.maturity_time
    );
    emit!(PoolInitialized {
        pool: pool_key,
        ticker: symbol,
        creator,
        mint: pool.mint,
        index,
        escrow_deposit,
        maturity_time: pool.maturity_time,
        price: pool.last_price,
    });

    Ok(Pool::clone(pool))
}

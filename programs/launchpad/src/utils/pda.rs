//! Deterministic addresses for every record a pool owns.
//!
//! All derivations are pure and depend only on the program id and the ticker,
//! so clients compute exactly the addresses the program checks in its account
//! constraints.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::metadata::mpl_token_metadata;

use crate::bonding_curve::utils::validate_ticker;
use crate::constants::*;
use crate::errors::LaunchpadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Pool,
    Mint,
    Escrow,
    LpMint,
    Metadata,
}

impl RecordKind {
    /// Seed prefix for records owned by this program. Metadata lives under
    /// the Metaplex program and is keyed by mint instead.
    pub fn seed(&self) -> Option<&'static str> {
        match self {
            RecordKind::Pool => Some(POOL_SEED),
            RecordKind::Mint => Some(POOL_MINT_SEED),
            RecordKind::Escrow => Some(POOL_ESCROW_SEED),
            RecordKind::LpMint => Some(POOL_LP_MINT_SEED),
            RecordKind::Metadata => None,
        }
    }
}

/// Derives the address of `kind` for `ticker`. Rejects tickers the program
/// would reject at pool creation.
pub fn derive_address(program_id: &Pubkey, kind: RecordKind, ticker: &str) -> Result<(Pubkey, u8)> {
    validate_ticker(ticker)?;
    Ok(match kind.seed() {
        Some(seed) => {
            Pubkey::find_program_address(&[seed.as_bytes(), ticker.as_bytes()], program_id)
        }
        None => {
            let (mint, _) = derive_address(program_id, RecordKind::Mint, ticker)?;
            derive_metadata_pda(&mint)
        }
    })
}

/// Ticker bytes used as a PDA seed. Oversized tickers are rejected here
/// rather than tripping the seed length limit during address derivation.
pub fn ticker_seed(ticker: &str) -> Result<&[u8]> {
    require!(ticker.len() <= MAX_TICKER_LEN, LaunchpadError::TickerTooLong);
    Ok(ticker.as_bytes())
}

pub fn derive_pool_pda(program_id: &Pubkey, ticker: &str) -> Result<Pubkey> {
    Ok(derive_address(program_id, RecordKind::Pool, ticker)?.0)
}

pub fn derive_mint_pda(program_id: &Pubkey, ticker: &str) -> Result<Pubkey> {
    Ok(derive_address(program_id, RecordKind::Mint, ticker)?.0)
}

pub fn derive_escrow_pda(program_id: &Pubkey, ticker: &str) -> Result<Pubkey> {
    Ok(derive_address(program_id, RecordKind::Escrow, ticker)?.0)
}

pub fn derive_lp_mint_pda(program_id: &Pubkey, ticker: &str) -> Result<Pubkey> {
    Ok(derive_address(program_id, RecordKind::LpMint, ticker)?.0)
}

/// Metaplex metadata account of a mint.
pub fn derive_metadata_pda(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED.as_bytes(),
            mpl_token_metadata::ID.as_ref(),
            mint.as_ref(),
        ],
        &mpl_token_metadata::ID,
    )
}

/// Associated token account holding the pool's AMM token reserve.
pub fn derive_token_vault(program_id: &Pubkey, ticker: &str) -> Result<Pubkey> {
    let pool = derive_pool_pda(program_id, ticker)?;
    let mint = derive_mint_pda(program_id, ticker)?;
    Ok(get_associated_token_address(&pool, &mint))
}

pub fn derive_config_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED.as_bytes()], program_id)
}

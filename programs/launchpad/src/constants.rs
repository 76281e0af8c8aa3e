// PDA seeds
pub const CONFIG_SEED: &str = "config";
pub const POOL_SEED: &str = "pool";
pub const POOL_MINT_SEED: &str = "pool_mint";
pub const POOL_LP_MINT_SEED: &str = "pool_lp_mint";
pub const POOL_ESCROW_SEED: &str = "pool_escrow";
pub const METADATA_SEED: &str = "metadata";

pub const DEFAULT_TOKEN_DECIMALS: u8 = 9;
pub const LP_MINT_DECIMALS: u8 = 9;

// Metaplex metadata limits
pub const MAX_TICKER_LEN: usize = 10;
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_URI_LEN: usize = 200;

pub const BPS_DENOMINATOR: u64 = 10_000;

use anchor_lang::prelude::*;

// Variants are append-only: the code of each is 6000 + its position.
#[error_code]
pub enum LaunchpadError {
    #[msg("Invalid ticker")]
    InvalidTicker,
    #[msg("Ticker exceeds the maximum length")]
    TickerTooLong,
    #[msg("Token name exceeds the maximum length")]
    NameTooLong,
    #[msg("Token uri exceeds the maximum length")]
    UriTooLong,
    #[msg("A pool already exists for this ticker")]
    PoolAlreadyExists,
    #[msg("Invalid pool ticker")]
    InvalidPoolTicker,
    #[msg("Amount must be greater than zero and produce a non-zero result")]
    InvalidAmount,
    #[msg("Insufficient token balance")]
    InsufficientTokenBalance,
    #[msg("Invalid config")]
    InvalidConfig,
    #[msg("Not pool creator")]
    NotPoolCreator,
    #[msg("Not config authority")]
    NotConfigAuthority,
    #[msg("Invalid escrow account")]
    InvalidEscrowAccount,
    #[msg("Pool has not matured")]
    PoolNotMatured,
    #[msg("Pool cannot be closed")]
    PoolCannotBeClosed,
    #[msg("Pool is closed")]
    PoolClosed,
    #[msg("Pool is not in the seeding phase")]
    PoolNotSeeding,
    #[msg("Pool is not in the liquid phase")]
    PoolNotLiquid,
    #[msg("Insufficient funds in escrow")]
    EscrowInsufficientFunds,
    #[msg("Insufficient liquidity")]
    InsufficientLiquidity,
    #[msg("Deposit ratio does not match the pool reserves")]
    RatioMismatch,
    #[msg("Insufficient LP shares")]
    InsufficientShares,
    #[msg("Withdrawal would leave reserves without LP shares")]
    ZeroLiquidity,
    #[msg("Bonding curve reserve exhausted")]
    ReserveExhausted,
    #[msg("Overflow")]
    Overflow,
    #[msg("Division by zero")]
    DivideByZero,
}

/// Coarse grouping of [`LaunchpadError`] codes for callers that only care
/// about the class of failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Authorization,
    State,
    Liquidity,
    Arithmetic,
}

impl LaunchpadError {
    pub fn kind(&self) -> ErrorKind {
        use LaunchpadError::*;
        match self {
            InvalidTicker | TickerTooLong | NameTooLong | UriTooLong | PoolAlreadyExists
            | InvalidPoolTicker | InvalidAmount | InsufficientTokenBalance | InvalidConfig => {
                ErrorKind::Validation
            }
            NotPoolCreator | NotConfigAuthority | InvalidEscrowAccount => ErrorKind::Authorization,
            PoolNotMatured | PoolCannotBeClosed | PoolClosed | PoolNotSeeding | PoolNotLiquid
            | EscrowInsufficientFunds => ErrorKind::State,
            InsufficientLiquidity | RatioMismatch | InsufficientShares | ZeroLiquidity
            | ReserveExhausted => ErrorKind::Liquidity,
            Overflow | DivideByZero => ErrorKind::Arithmetic,
        }
    }

    /// Stable on-chain error code.
    pub fn code(self) -> u32 {
        u32::from(self)
    }
}

/// Extracts the numeric code from an anchor error, if it carries one.
pub fn error_code_of(err: &anchor_lang::error::Error) -> Option<u32> {
    match err {
        anchor_lang::error::Error::AnchorError(e) => Some(e.error_code_number),
        anchor_lang::error::Error::ProgramError(_) => None,
    }
}

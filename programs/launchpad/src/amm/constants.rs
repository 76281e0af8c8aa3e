pub const DEFAULT_SWAP_FEE_BPS: u16 = 30; // 0.3%
pub const MAX_SWAP_FEE_BPS: u16 = 1_000; // 10%

// How far a deposit may stray from the reserve ratio
pub const DEFAULT_RATIO_TOLERANCE_BPS: u16 = 100; // 1%

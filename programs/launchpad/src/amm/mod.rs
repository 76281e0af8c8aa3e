pub mod constants;
pub mod liquidity;
pub mod swap;

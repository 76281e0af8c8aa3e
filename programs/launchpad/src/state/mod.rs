pub mod config;
pub mod escrow;
pub mod pool;

pub use config::*;
pub use escrow::*;
pub use pool::*;

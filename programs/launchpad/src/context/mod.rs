pub mod amm_add_liquidity;
pub mod amm_remove_liquidity;
pub mod amm_swap_tokens;
pub mod bonding_buy_tokens;
pub mod bonding_sell_tokens;
pub mod close_pool;
pub mod get_pool;
pub mod initialize_config;
pub mod initialize_pool;

pub use amm_add_liquidity::*;
pub use amm_remove_liquidity::*;
pub use amm_swap_tokens::*;
pub use bonding_buy_tokens::*;
pub use bonding_sell_tokens::*;
pub use close_pool::*;
pub use get_pool::*;
pub use initialize_config::*;
pub use initialize_pool::*;

pub mod constants;
pub mod price;
pub mod utils;

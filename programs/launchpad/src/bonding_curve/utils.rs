use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_TICKER_LEN, MAX_URI_LEN};
use crate::errors::LaunchpadError;

/// Tickers are 1..=MAX_TICKER_LEN ASCII uppercase letters or digits. The same
/// check guards both address derivation and pool creation.
pub fn validate_ticker(ticker: &str) -> Result<()> {
    require!(!ticker.is_empty(), LaunchpadError::InvalidTicker);
    require!(ticker.len() <= MAX_TICKER_LEN, LaunchpadError::TickerTooLong);
    require!(
        ticker
            .bytes()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
        LaunchpadError::InvalidTicker
    );
    Ok(())
}

pub fn validate_token_info(name: &str, uri: &str) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, LaunchpadError::NameTooLong);
    require!(uri.len() <= MAX_URI_LEN, LaunchpadError::UriTooLong);
    Ok(())
}

pub fn calculate_maturity_time(now: i64, maturity_period: i64) -> Result<i64> {
    now.checked_add(maturity_period)
        .ok_or_else(|| error!(LaunchpadError::Overflow))
}

pub fn check_if_maturity_time_passed(maturity_time: i64, now: i64) -> bool {
    now >= maturity_time
}

use anchor_lang::prelude::*;

use crate::errors::LaunchpadError;

/// floor(a * b / c) computed in u128, failing if the result leaves u64.
pub fn mul_div_floor(a: u64, b: u64, c: u64) -> Result<u64> {
    require!(c != 0, LaunchpadError::DivideByZero);
    let product = (a as u128)
        .checked_mul(b as u128)
        .ok_or(LaunchpadError::Overflow)?;
    u64::try_from(product / c as u128).map_err(|_| error!(LaunchpadError::Overflow))
}

/// ceil(a * b / c) computed in u128, failing if the result leaves u64.
pub fn mul_div_ceil(a: u64, b: u64, c: u64) -> Result<u64> {
    require!(c != 0, LaunchpadError::DivideByZero);
    let product = (a as u128)
        .checked_mul(b as u128)
        .ok_or(LaunchpadError::Overflow)?;
    u64::try_from(ceil_div(product, c as u128)?).map_err(|_| error!(LaunchpadError::Overflow))
}

pub fn ceil_div(numerator: u128, denominator: u128) -> Result<u128> {
    require!(denominator != 0, LaunchpadError::DivideByZero);
    let quotient = numerator / denominator;
    if numerator % denominator == 0 {
        Ok(quotient)
    } else {
        quotient
            .checked_add(1)
            .ok_or_else(|| error!(LaunchpadError::Overflow))
    }
}

/// Integer geometric mean, rounded down.
pub fn geometric_mean(a: u64, b: u64) -> u64 {
    let product = a as u128 * b as u128;
    // sqrt of a product of two u64 values always fits in u64
    integer_sqrt::IntegerSquareRoot::integer_sqrt(&product) as u64
}

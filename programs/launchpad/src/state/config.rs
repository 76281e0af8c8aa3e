use anchor_lang::prelude::*;

use crate::amm::constants::{DEFAULT_RATIO_TOLERANCE_BPS, DEFAULT_SWAP_FEE_BPS, MAX_SWAP_FEE_BPS};
use crate::bonding_curve::constants::{DEFAULT_MATURITY_PERIOD, REQUIRED_ESCROW_AMOUNT};
use crate::constants::BPS_DENOMINATOR;
use crate::errors::LaunchpadError;

/// Launchpad-wide settings, stored once at the `config` PDA.
///
/// New pools snapshot the tunables at creation, so updates never change the
/// terms of an existing pool.
#[account]
#[derive(Debug, InitSpace)]
pub struct LaunchpadConfig {
    /// Signer allowed to update the tunables
    pub authority: Pubkey,
    /// Pools created so far; the latest pool's index
    pub pools_created: u64,
    /// Lamports the creator locks in the pool escrow at launch
    pub escrow_deposit: u64,
    /// Seconds after launch before the creator may close a pool
    pub maturity_period: i64,
    pub swap_fee_bps: u16,
    pub ratio_tolerance_bps: u16,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConfigParams {
    pub escrow_deposit: u64,
    pub maturity_period: i64,
    pub swap_fee_bps: u16,
    pub ratio_tolerance_bps: u16,
}

impl Default for ConfigParams {
    fn default() -> Self {
        Self {
            escrow_deposit: REQUIRED_ESCROW_AMOUNT,
            maturity_period: DEFAULT_MATURITY_PERIOD,
            swap_fee_bps: DEFAULT_SWAP_FEE_BPS,
            ratio_tolerance_bps: DEFAULT_RATIO_TOLERANCE_BPS,
        }
    }
}

impl ConfigParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.maturity_period >= 0, LaunchpadError::InvalidConfig);
        require!(
            self.swap_fee_bps <= MAX_SWAP_FEE_BPS,
            LaunchpadError::InvalidConfig
        );
        require!(
            self.ratio_tolerance_bps as u64 <= BPS_DENOMINATOR,
            LaunchpadError::InvalidConfig
        );
        Ok(())
    }
}

impl LaunchpadConfig {
    pub fn initialize(&mut self, authority: Pubkey, params: &ConfigParams, bump: u8) -> Result<()> {
        params.validate()?;
        self.authority = authority;
        self.pools_created = 0;
        self.bump = bump;
        self.apply(params);
        Ok(())
    }

    pub fn update(&mut self, signer: &Pubkey, params: &ConfigParams) -> Result<()> {
        require_keys_eq!(*signer, self.authority, LaunchpadError::NotConfigAuthority);
        params.validate()?;
        self.apply(params);
        Ok(())
    }

    /// Index the next pool will receive. Only committed by
    /// [`LaunchpadConfig::record_pool_created`] once the pool exists.
    pub fn next_pool_index(&self) -> Result<u64> {
        self.pools_created
            .checked_add(1)
            .ok_or_else(|| error!(LaunchpadError::Overflow))
    }

    pub fn record_pool_created(&mut self, index: u64) {
        self.pools_created = index;
    }

    pub fn params(&self) -> ConfigParams {
        ConfigParams {
            escrow_deposit: self.escrow_deposit,
            maturity_period: self.maturity_period,
            swap_fee_bps: self.swap_fee_bps,
            ratio_tolerance_bps: self.ratio_tolerance_bps,
        }
    }

    fn apply(&mut self, params: &ConfigParams) {
        self.escrow_deposit = params.escrow_deposit;
        self.maturity_period = params.maturity_period;
        self.swap_fee_bps = params.swap_fee_bps;
        self.ratio_tolerance_bps = params.ratio_tolerance_bps;
    }
}

use anchor_lang::prelude::*;

use crate::errors::LaunchpadError;

/// Custody record backing a pool while it seeds. Holds the creator's launch
/// deposit and, after graduation, the SOL the bonding curve collected.
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct PoolEscrow {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub balance: u64, // in atomic units (lamports)
    pub bump: u8,
}

impl PoolEscrow {
    pub fn initialize(&mut self, pool: Pubkey, depositor: Pubkey, deposit: u64, bump: u8) {
        self.pool = pool;
        self.depositor = depositor;
        self.balance = deposit;
        self.bump = bump;
    }

    /// The recorded balance must never exceed what the account actually holds
    /// above its rent floor.
    pub fn ensure_backed(&self, held_lamports: u64, rent_floor: u64) -> Result<()> {
        require!(
            held_lamports.saturating_sub(rent_floor) >= self.balance,
            LaunchpadError::EscrowInsufficientFunds
        );
        Ok(())
    }
}

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke, system_instruction};

use crate::errors::LaunchpadError;

/// Moves lamports out of a system-owned signer through the system program.
pub fn transfer_lamports_from_signer<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let transfer_instruction = system_instruction::transfer(from.key, to.key, amount);
    invoke(
        &transfer_instruction,
        &[from.clone(), to.clone(), system_program.clone()],
    )?;
    Ok(())
}

/// Moves lamports out of an account owned by this program by editing
/// balances directly.
pub fn transfer_lamports_from_pda<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let from_balance = from
        .lamports()
        .checked_sub(amount)
        .ok_or(LaunchpadError::InsufficientLiquidity)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(LaunchpadError::Overflow)?;
    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}

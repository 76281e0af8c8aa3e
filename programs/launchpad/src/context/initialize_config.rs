use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::events::ConfigUpdated;
use crate::state::config::{ConfigParams, LaunchpadConfig};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        seeds = [CONFIG_SEED.as_bytes()],
        bump,
        space = 8 + LaunchpadConfig::INIT_SPACE,
    )]
    pub config: Account<'info, LaunchpadConfig>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, LaunchpadConfig>,
}

pub fn initialize_config(ctx: Context<InitializeConfig>, params: ConfigParams) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;
    config.initialize(authority, &params, ctx.bumps.config)?;

    msg!("Launchpad config initialized, authority: {}", authority);
    emit_config(config);
    Ok(())
}

pub fn update_config(ctx: Context<UpdateConfig>, params: ConfigParams) -> Result<()> {
    let signer = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;
    config.update(&signer, &params)?;

    msg!(
        "Launchpad config updated: fee {} bps, tolerance {} bps, maturity {}s",
        config.swap_fee_bps,
        config.ratio_tolerance_bps,
        config.maturity_period
    );
    emit_config(config);
    Ok(())
}

fn emit_config(config: &LaunchpadConfig) {
    emit!(ConfigUpdated {
        authority: config.authority,
        escrow_deposit: config.escrow_deposit,
        maturity_period: config.maturity_period,
        swap_fee_bps: config.swap_fee_bps,
        ratio_tolerance_bps: config.ratio_tolerance_bps,
    });
}

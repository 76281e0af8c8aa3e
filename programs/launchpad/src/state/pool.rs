use anchor_lang::prelude::*;

use crate::amm::liquidity::{Deposit, Reserves, Withdrawal};
use crate::amm::swap::{calculate_swap, SwapDirection, SwapQuote};
use crate::bonding_curve::price::{price_from_reserves, BondingCurve, CurveTrade};
use crate::bonding_curve::utils::{
    calculate_maturity_time, check_if_maturity_time_passed, validate_ticker,
};
use crate::constants::MAX_TICKER_LEN;
use crate::errors::LaunchpadError;
use crate::state::config::LaunchpadConfig;
use crate::state::escrow::PoolEscrow;
use crate::utils::string_bytes::{fixed_bytes_to_string, string_to_fixed_bytes};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum PoolStatus {
    /// Priced by the bonding curve; Buy/Sell only
    #[default]
    Seeding,
    /// Priced by real reserves; AddLiquidity/RemoveLiquidity/Swap only
    Liquid,
    /// Terminal
    Closed,
}

#[account]
#[derive(Default, Debug, InitSpace)]
pub struct Pool {
    pub ticker: [u8; MAX_TICKER_LEN], // Fixed-size, zero padded
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub lp_mint: Pubkey,
    pub status: PoolStatus,
    pub index: u64,
    // bonding curve
    pub virtual_sol_reserve: u64,
    pub virtual_token_reserve: u64,
    // Seeding: SOL collected by the curve and its unsold token allocation.
    // Liquid: the AMM reserves.
    pub sol_reserve: u64,
    pub token_reserve: u64,
    pub lp_supply: u64,
    pub last_price: u128, // lamports per atomic unit, scaled by PRICE_SCALE
    pub swap_fee_bps: u16,
    pub ratio_tolerance_bps: u16,
    pub maturity_time: i64,
    pub created_at: i64,
    pub graduated_at: i64,
    pub closed_at: i64,
    pub bump: u8,
}

/// Accounts a new pool is bound to.
#[derive(Clone, Copy, Debug)]
pub struct PoolKeys {
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub lp_mint: Pubkey,
}

/// Terms a pool snapshots from the config at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolParams {
    pub maturity_period: i64,
    pub swap_fee_bps: u16,
    pub ratio_tolerance_bps: u16,
}

impl From<&LaunchpadConfig> for PoolParams {
    fn from(config: &LaunchpadConfig) -> Self {
        Self {
            maturity_period: config.maturity_period,
            swap_fee_bps: config.swap_fee_bps,
            ratio_tolerance_bps: config.ratio_tolerance_bps,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiquidityChange {
    pub deposit: Deposit,
    /// Set when this deposit moved the pool from Seeding to Liquid
    pub graduated: bool,
    /// Curve proceeds moved from the pool into the escrow on graduation
    pub curve_proceeds: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseSettlement {
    pub escrow_released: u64,
    pub reserve_released: u64,
}

impl Pool {
    pub fn initialize(
        &mut self,
        ticker: &str,
        keys: PoolKeys,
        params: &PoolParams,
        index: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        //////////////////////////////////////////////
        // The pool will intialize as a bonding pool
        //////////////////////////////////////////////
        require!(!self.is_initialized(), LaunchpadError::PoolAlreadyExists);
        validate_ticker(ticker)?;

        let curve = BondingCurve::default();
        let last_price = curve.spot_price()?;
        let maturity_time = calculate_maturity_time(now, params.maturity_period)?;

        self.ticker = string_to_fixed_bytes(ticker);
        self.creator = keys.creator;
        self.mint = keys.mint;
        self.lp_mint = keys.lp_mint;
        self.status = PoolStatus::Seeding;
        self.index = index;
        self.set_curve(&curve);
        self.lp_supply = 0;
        self.last_price = last_price;
        self.swap_fee_bps = params.swap_fee_bps;
        self.ratio_tolerance_bps = params.ratio_tolerance_bps;
        self.maturity_time = maturity_time;
        self.created_at = now;
        self.graduated_at = 0;
        self.closed_at = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.creator != Pubkey::default()
    }

    pub fn ticker(&self) -> String {
        fixed_bytes_to_string(&self.ticker)
    }

    pub fn ensure_ticker(&self, ticker: &str) -> Result<()> {
        require!(self.ticker() == ticker, LaunchpadError::InvalidPoolTicker);
        Ok(())
    }

    pub fn curve(&self) -> BondingCurve {
        BondingCurve {
            virtual_sol_reserve: self.virtual_sol_reserve,
            virtual_token_reserve: self.virtual_token_reserve,
            real_sol_reserve: self.sol_reserve,
            real_token_reserve: self.token_reserve,
        }
    }

    pub fn reserves(&self) -> Reserves {
        Reserves {
            sol: self.sol_reserve,
            token: self.token_reserve,
            lp_supply: self.lp_supply,
        }
    }

    fn set_curve(&mut self, curve: &BondingCurve) {
        self.virtual_sol_reserve = curve.virtual_sol_reserve;
        self.virtual_token_reserve = curve.virtual_token_reserve;
        self.sol_reserve = curve.real_sol_reserve;
        self.token_reserve = curve.real_token_reserve;
    }

    fn set_reserves(&mut self, reserves: &Reserves) {
        self.sol_reserve = reserves.sol;
        self.token_reserve = reserves.token;
        self.lp_supply = reserves.lp_supply;
    }

    fn ensure_seeding(&self) -> Result<()> {
        match self.status {
            PoolStatus::Seeding => Ok(()),
            PoolStatus::Liquid => err!(LaunchpadError::PoolNotSeeding),
            PoolStatus::Closed => err!(LaunchpadError::PoolClosed),
        }
    }

    fn ensure_liquid(&self) -> Result<()> {
        match self.status {
            PoolStatus::Liquid => Ok(()),
            PoolStatus::Seeding => err!(LaunchpadError::PoolNotLiquid),
            PoolStatus::Closed => err!(LaunchpadError::PoolClosed),
        }
    }

    /// Buys from the curve with `sol_in` lamports.
    pub fn apply_buy(&mut self, sol_in: u64) -> Result<CurveTrade> {
        self.ensure_seeding()?;
        let (curve, trade) = self.curve().buy(sol_in)?;
        self.set_curve(&curve);
        self.last_price = trade.price_after;
        Ok(trade)
    }

    /// Sells `tokens_in` atomic units back to the curve.
    pub fn apply_sell(&mut self, tokens_in: u64) -> Result<CurveTrade> {
        self.ensure_seeding()?;
        let (curve, trade) = self.curve().sell(tokens_in)?;
        self.set_curve(&curve);
        self.last_price = trade.price_after;
        Ok(trade)
    }

    /// Deposits liquidity. The first deposit into a seeding pool graduates it:
    /// the curve's collected SOL moves into the escrow, its unsold allocation
    /// is dropped, and the deposit becomes the AMM reserves.
    pub fn apply_add_liquidity(
        &mut self,
        escrow: &mut PoolEscrow,
        sol_amount: u64,
        token_amount: u64,
        now: i64,
    ) -> Result<LiquidityChange> {
        let (reserves, curve_proceeds, graduated) = match self.status {
            PoolStatus::Seeding => (Reserves::default(), self.sol_reserve, true),
            PoolStatus::Liquid => (self.reserves(), 0, false),
            PoolStatus::Closed => return err!(LaunchpadError::PoolClosed),
        };

        let (next, deposit) = reserves.deposit(sol_amount, token_amount, self.ratio_tolerance_bps)?;
        let last_price = price_from_reserves(next.sol, next.token)?;
        let escrow_balance = escrow
            .balance
            .checked_add(curve_proceeds)
            .ok_or(LaunchpadError::Overflow)?;

        if graduated {
            self.status = PoolStatus::Liquid;
            self.graduated_at = now;
        }
        escrow.balance = escrow_balance;
        self.set_reserves(&next);
        self.last_price = last_price;

        Ok(LiquidityChange {
            deposit,
            graduated,
            curve_proceeds,
        })
    }

    /// Burns `lp_amount` shares of a provider holding `holder_balance`.
    pub fn apply_remove_liquidity(&mut self, lp_amount: u64, holder_balance: u64) -> Result<Withdrawal> {
        self.ensure_liquid()?;
        let (next, withdrawal) = self.reserves().withdraw(lp_amount, holder_balance)?;
        // an emptied pool has no price
        let last_price = if next.token > 0 {
            price_from_reserves(next.sol, next.token)?
        } else {
            0
        };

        self.set_reserves(&next);
        self.last_price = last_price;
        Ok(withdrawal)
    }

    pub fn apply_swap(&mut self, amount_in: u64, direction: SwapDirection) -> Result<SwapQuote> {
        self.ensure_liquid()?;
        let (next, quote) = calculate_swap(&self.reserves(), amount_in, direction, self.swap_fee_bps)?;
        self.set_reserves(&next);
        self.last_price = quote.price_after;
        Ok(quote)
    }

    pub fn is_matured(&self, now: i64) -> bool {
        check_if_maturity_time_passed(self.maturity_time, now)
    }

    /// Closes the pool for its creator once matured. A liquid pool must also
    /// have no outstanding LP shares. Releases the escrow balance and any SOL
    /// reserve still held by the pool.
    pub fn apply_close(
        &mut self,
        escrow: &mut PoolEscrow,
        caller: &Pubkey,
        now: i64,
    ) -> Result<CloseSettlement> {
        require_keys_eq!(*caller, self.creator, LaunchpadError::NotPoolCreator);

        match self.status {
            PoolStatus::Closed => return err!(LaunchpadError::PoolClosed),
            PoolStatus::Seeding => {
                require!(self.is_matured(now), LaunchpadError::PoolNotMatured);
            }
            PoolStatus::Liquid => {
                require!(self.is_matured(now), LaunchpadError::PoolNotMatured);
                require!(self.lp_supply == 0, LaunchpadError::PoolCannotBeClosed);
            }
        }

        let settlement = CloseSettlement {
            escrow_released: escrow.balance,
            reserve_released: self.sol_reserve,
        };

        escrow.balance = 0;
        self.sol_reserve = 0;
        self.token_reserve = 0;
        self.status = PoolStatus::Closed;
        self.closed_at = now;
        Ok(settlement)
    }
}

#![allow(dead_code)]

use std::collections::HashSet;

use anchor_lang::solana_program::{
    account_info::AccountInfo, clock::Clock, entrypoint::ProgramResult, instruction::Instruction,
    pubkey::Pubkey, rent::Rent, system_instruction, system_program, sysvar,
};
use anchor_lang::{AccountDeserialize, AnchorDeserialize, InstructionData, ToAccountMetas};
use anchor_spl::associated_token::{
    self, get_associated_token_address,
    spl_associated_token_account::instruction::create_associated_token_account_idempotent,
};
use anchor_spl::metadata::mpl_token_metadata;
use anchor_spl::token::{self, TokenAccount};
use launchpad::amm::swap::SwapDirection;
use launchpad::constants::{POOL_ESCROW_SEED, POOL_LP_MINT_SEED, POOL_MINT_SEED, POOL_SEED};
use launchpad::errors::LaunchpadError;
use launchpad::state::{ConfigParams, LaunchpadConfig, Pool, PoolEscrow};
use launchpad::utils::pda::{
    derive_address, derive_config_pda, derive_escrow_pda, derive_lp_mint_pda, derive_metadata_pda,
    derive_mint_pda, derive_pool_pda, derive_token_vault, RecordKind,
};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::instruction::InstructionError;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::{Transaction, TransactionError};

pub const WALLET_FUNDING: u64 = 100 * LAMPORTS_PER_SOL;

pub type TxResult<T> = Result<T, BanksClientError>;

// Anchor's entry wants the account slice and its infos to share a lifetime.
fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    launchpad::entry(program_id, accounts, data)
}

// Stands in for the Metaplex program; metadata contents are not inspected here.
fn accept_metadata(_program_id: &Pubkey, _accounts: &[AccountInfo], _data: &[u8]) -> ProgramResult {
    Ok(())
}

/// Custom error code a failed transaction carries, if any.
pub fn code_of<T>(result: TxResult<T>) -> Option<u32> {
    match result.err()? {
        BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(code),
        ))
        | BanksClientError::SimulationError {
            err: TransactionError::InstructionError(_, InstructionError::Custom(code)),
            ..
        } => Some(code),
        _ => None,
    }
}

pub fn code(err: LaunchpadError) -> Option<u32> {
    Some(err.code())
}

/// Every address an instruction on `ticker` touches.
#[derive(Clone, Copy, Debug)]
pub struct PoolAddresses {
    pub pool: Pubkey,
    pub escrow: Pubkey,
    pub mint: Pubkey,
    pub lp_mint: Pubkey,
    pub metadata: Pubkey,
    pub token_vault: Pubkey,
}

impl PoolAddresses {
    pub fn of(ticker: &str) -> Self {
        Self::derive(ticker).unwrap_or_else(|_| Self::unchecked(ticker))
    }

    fn derive(ticker: &str) -> anchor_lang::Result<Self> {
        let program_id = launchpad::ID;
        Ok(Self {
            pool: derive_pool_pda(&program_id, ticker)?,
            escrow: derive_escrow_pda(&program_id, ticker)?,
            mint: derive_mint_pda(&program_id, ticker)?,
            lp_mint: derive_lp_mint_pda(&program_id, ticker)?,
            metadata: derive_address(&program_id, RecordKind::Metadata, ticker)?.0,
            token_vault: derive_token_vault(&program_id, ticker)?,
        })
    }

    /// Raw seed derivation for tickers the client helpers refuse, so the
    /// program itself gets to reject them. Underivable seeds get throwaway
    /// addresses.
    fn unchecked(ticker: &str) -> Self {
        let pda = |seed: &str| {
            Pubkey::try_find_program_address(&[seed.as_bytes(), ticker.as_bytes()], &launchpad::ID)
                .map(|(address, _)| address)
                .unwrap_or_else(Pubkey::new_unique)
        };
        let pool = pda(POOL_SEED);
        let mint = pda(POOL_MINT_SEED);
        Self {
            pool,
            escrow: pda(POOL_ESCROW_SEED),
            mint,
            lp_mint: pda(POOL_LP_MINT_SEED),
            metadata: derive_metadata_pda(&mint).0,
            token_vault: get_associated_token_address(&pool, &mint),
        }
    }
}

/// The launchpad program running in an in-process bank, driven through real
/// transactions. Wallets sign their own instructions. Fees and any token
/// account opened ahead of an instruction are paid by the bank's payer, so
/// wallet balances move only by what the program does.
pub struct LaunchpadTest {
    pub context: ProgramTestContext,
    pub authority: Keypair,
    pub config: Pubkey,
    pub rent: Rent,
    sent: HashSet<Signature>,
}

impl LaunchpadTest {
    pub async fn start() -> Self {
        Self::start_with(ConfigParams::default()).await
    }

    pub async fn start_with(params: ConfigParams) -> Self {
        let mut program_test =
            ProgramTest::new("launchpad", launchpad::ID, processor!(process_instruction));
        program_test.add_program(
            "mpl_token_metadata",
            mpl_token_metadata::ID,
            processor!(accept_metadata),
        );
        program_test.set_compute_max_units(1_400_000);

        let mut context = program_test.start_with_context().await;
        let rent = context.banks_client.get_rent().await.unwrap();
        let mut test = Self {
            context,
            authority: Keypair::new(),
            config: derive_config_pda(&launchpad::ID).0,
            rent,
            sent: HashSet::new(),
        };

        let authority = test.authority.insecure_clone();
        test.fund(&authority.pubkey()).await.unwrap();
        let ix = Instruction {
            program_id: launchpad::ID,
            accounts: launchpad::accounts::InitializeConfig {
                authority: authority.pubkey(),
                config: test.config,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: launchpad::instruction::InitializeConfig { params }.data(),
        };
        test.process(&[ix], &[&authority]).await.unwrap();
        test
    }

    pub async fn wallet(&mut self) -> Keypair {
        let wallet = Keypair::new();
        self.fund(&wallet.pubkey()).await.unwrap();
        wallet
    }

    async fn fund(&mut self, wallet: &Pubkey) -> TxResult<()> {
        let payer = self.context.payer.pubkey();
        let ix = system_instruction::transfer(&payer, wallet, WALLET_FUNDING);
        self.process(&[ix], &[]).await
    }

    /// Signs with the bank's payer plus `signers`. A transaction identical to
    /// one already sent waits for a fresh blockhash.
    pub async fn process(&mut self, instructions: &[Instruction], signers: &[&Keypair]) -> TxResult<()> {
        let tx = self.transaction(instructions, signers).await?;
        self.context.banks_client.process_transaction(tx).await
    }

    async fn transaction(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> TxResult<Transaction> {
        let payer = self.context.payer.insecure_clone();
        let mut all_signers = vec![&payer];
        all_signers.extend_from_slice(signers);
        loop {
            let tx = Transaction::new_signed_with_payer(
                instructions,
                Some(&payer.pubkey()),
                all_signers.as_slice(),
                self.context.last_blockhash,
            );
            if self.sent.insert(tx.signatures[0]) {
                return Ok(tx);
            }
            self.context.last_blockhash = self.context.get_new_latest_blockhash().await?;
        }
    }

    pub async fn now(&mut self) -> i64 {
        let clock: Clock = self.context.banks_client.get_sysvar().await.unwrap();
        clock.unix_timestamp
    }

    pub async fn advance(&mut self, seconds: i64) {
        let mut clock: Clock = self.context.banks_client.get_sysvar().await.unwrap();
        clock.unix_timestamp += seconds;
        self.context.set_sysvar(&clock);
    }

    pub async fn sol_balance(&mut self, address: &Pubkey) -> u64 {
        self.context.banks_client.get_balance(*address).await.unwrap()
    }

    /// Lamports an account holds above its rent floor; zero if it is missing.
    pub async fn lamports_above_rent(&mut self, address: &Pubkey) -> u64 {
        match self.context.banks_client.get_account(*address).await.unwrap() {
            Some(account) => account
                .lamports
                .saturating_sub(self.rent.minimum_balance(account.data.len())),
            None => 0,
        }
    }

    pub fn rent_for(&self, sizes: &[usize]) -> u64 {
        sizes.iter().map(|size| self.rent.minimum_balance(*size)).sum()
    }

    async fn token_amount(&mut self, address: &Pubkey) -> u64 {
        match self.context.banks_client.get_account(*address).await.unwrap() {
            Some(account) => TokenAccount::try_deserialize(&mut account.data.as_slice())
                .map(|token_account| token_account.amount)
                .unwrap_or(0),
            None => 0,
        }
    }

    pub async fn token_balance(&mut self, owner: &Pubkey, ticker: &str) -> u64 {
        let mint = PoolAddresses::of(ticker).mint;
        self.token_amount(&get_associated_token_address(owner, &mint)).await
    }

    pub async fn lp_balance(&mut self, owner: &Pubkey, ticker: &str) -> u64 {
        let lp_mint = PoolAddresses::of(ticker).lp_mint;
        self.token_amount(&get_associated_token_address(owner, &lp_mint)).await
    }

    pub async fn vault_balance(&mut self, ticker: &str) -> u64 {
        let vault = PoolAddresses::of(ticker).token_vault;
        self.token_amount(&vault).await
    }

    async fn read<T: AccountDeserialize>(&mut self, address: &Pubkey) -> Option<T> {
        let account = self.context.banks_client.get_account(*address).await.unwrap()?;
        T::try_deserialize(&mut account.data.as_slice()).ok()
    }

    pub async fn pool(&mut self, ticker: &str) -> Option<Pool> {
        self.read(&PoolAddresses::of(ticker).pool).await
    }

    pub async fn escrow(&mut self, ticker: &str) -> Option<PoolEscrow> {
        self.read(&PoolAddresses::of(ticker).escrow).await
    }

    pub async fn launchpad_config(&mut self) -> LaunchpadConfig {
        let config = self.config;
        self.read(&config).await.unwrap()
    }

    fn open_token_account(&self, owner: &Pubkey, mint: &Pubkey) -> Instruction {
        create_associated_token_account_idempotent(
            &self.context.payer.pubkey(),
            owner,
            mint,
            &token::ID,
        )
    }

    pub async fn update_config(&mut self, signer: &Keypair, params: ConfigParams) -> TxResult<()> {
        let ix = Instruction {
            program_id: launchpad::ID,
            accounts: launchpad::accounts::UpdateConfig {
                authority: signer.pubkey(),
                config: self.config,
            }
            .to_account_metas(None),
            data: launchpad::instruction::UpdateConfig { params }.data(),
        };
        self.process(&[ix], &[signer]).await
    }

    pub async fn initialize(
        &mut self,
        creator: &Keypair,
        ticker: &str,
        name: &str,
        uri: &str,
    ) -> TxResult<Pool> {
        let addresses = PoolAddresses::of(ticker);
        let ix = Instruction {
            program_id: launchpad::ID,
            accounts: launchpad::accounts::InitializePool {
                signer: creator.pubkey(),
                config: self.config,
                pool: addresses.pool,
                escrow: addresses.escrow,
                metadata: addresses.metadata,
                mint: addresses.mint,
                lp_mint: addresses.lp_mint,
                rent: sysvar::rent::ID,
                system_program: system_program::ID,
                token_program: token::ID,
                token_metadata_program: mpl_token_metadata::ID,
            }
            .to_account_metas(None),
            data: launchpad::instruction::Initialize {
                symbol: ticker.to_string(),
                name: name.to_string(),
                uri: uri.to_string(),
            }
            .data(),
        };
        self.process(&[ix], &[creator]).await?;
        Ok(self.pool(ticker).await.unwrap())
    }

    /// Spends `amount` lamports on the bonding curve.
    pub async fn buy(&mut self, buyer: &Keypair, ticker: &str, amount: u64) -> TxResult<Pool> {
        let addresses = PoolAddresses::of(ticker);
        let owner = buyer.pubkey();
        let ix = Instruction {
            program_id: launchpad::ID,
            accounts: launchpad::accounts::BuyTokens {
                buyer: owner,
                pool: addresses.pool,
                mint: addresses.mint,
                buyer_token_account: get_associated_token_address(&owner, &addresses.mint),
                token_program: token::ID,
                system_program: system_program::ID,
                associated_token_program: associated_token::ID,
            }
            .to_account_metas(None),
            data: launchpad::instruction::Buy {
                ticker: ticker.to_string(),
                amount,
            }
            .data(),
        };
        self.process(&[ix], &[buyer]).await?;
        Ok(self.pool(ticker).await.unwrap())
    }

    pub async fn sell(&mut self, seller: &Keypair, ticker: &str, amount: u64) -> TxResult<Pool> {
        let addresses = PoolAddresses::of(ticker);
        let owner = seller.pubkey();
        let open = self.open_token_account(&owner, &addresses.mint);
        let ix = Instruction {
            program_id: launchpad::ID,
            accounts: launchpad::accounts::SellTokens {
                seller: owner,
                pool: addresses.pool,
                mint: addresses.mint,
                seller_token_account: get_associated_token_address(&owner, &addresses.mint),
                token_program: token::ID,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: launchpad::instruction::Sell {
                ticker: ticker.to_string(),
                amount,
            }
            .data(),
        };
        self.process(&[open, ix], &[seller]).await?;
        Ok(self.pool(ticker).await.unwrap())
    }

    pub async fn add_liquidity(
        &mut self,
        provider: &Keypair,
        ticker: &str,
        sol_amount: u64,
        token_amount: u64,
    ) -> TxResult<Pool> {
        let addresses = PoolAddresses::of(ticker);
        let owner = provider.pubkey();
        let open = self.open_token_account(&owner, &addresses.mint);
        let ix = Instruction {
            program_id: launchpad::ID,
            accounts: launchpad::accounts::AddLiquidity {
                provider: owner,
                pool: addresses.pool,
                escrow: addresses.escrow,
                mint: addresses.mint,
                lp_mint: addresses.lp_mint,
                provider_token_account: get_associated_token_address(&owner, &addresses.mint),
                token_vault: addresses.token_vault,
                provider_lp_account: get_associated_token_address(&owner, &addresses.lp_mint),
                token_program: token::ID,
                system_program: system_program::ID,
                associated_token_program: associated_token::ID,
            }
            .to_account_metas(None),
            data: launchpad::instruction::AddLiquidity {
                ticker: ticker.to_string(),
                sol_amount,
                token_amount,
            }
            .data(),
        };
        self.process(&[open, ix], &[provider]).await?;
        Ok(self.pool(ticker).await.unwrap())
    }

    pub async fn remove_liquidity(
        &mut self,
        provider: &Keypair,
        ticker: &str,
        lp_amount: u64,
    ) -> TxResult<Pool> {
        let addresses = PoolAddresses::of(ticker);
        let owner = provider.pubkey();
        let open_lp = self.open_token_account(&owner, &addresses.lp_mint);
        let open_vault = self.open_token_account(&addresses.pool, &addresses.mint);
        let ix = Instruction {
            program_id: launchpad::ID,
            accounts: launchpad::accounts::RemoveLiquidity {
                provider: owner,
                pool: addresses.pool,
                mint: addresses.mint,
                lp_mint: addresses.lp_mint,
                provider_lp_account: get_associated_token_address(&owner, &addresses.lp_mint),
                provider_token_account: get_associated_token_address(&owner, &addresses.mint),
                token_vault: addresses.token_vault,
                token_program: token::ID,
                system_program: system_program::ID,
                associated_token_program: associated_token::ID,
            }
            .to_account_metas(None),
            data: launchpad::instruction::RemoveLiquidity {
                ticker: ticker.to_string(),
                lp_amount,
            }
            .data(),
        };
        self.process(&[open_lp, open_vault, ix], &[provider]).await?;
        Ok(self.pool(ticker).await.unwrap())
    }

    pub async fn swap(
        &mut self,
        trader: &Keypair,
        ticker: &str,
        amount: u64,
        direction: SwapDirection,
    ) -> TxResult<Pool> {
        let addresses = PoolAddresses::of(ticker);
        let owner = trader.pubkey();
        let open_vault = self.open_token_account(&addresses.pool, &addresses.mint);
        let ix = Instruction {
            program_id: launchpad::ID,
            accounts: launchpad::accounts::Swap {
                trader: owner,
                pool: addresses.pool,
                mint: addresses.mint,
                trader_token_account: get_associated_token_address(&owner, &addresses.mint),
                token_vault: addresses.token_vault,
                token_program: token::ID,
                system_program: system_program::ID,
                associated_token_program: associated_token::ID,
            }
            .to_account_metas(None),
            data: launchpad::instruction::Swap {
                ticker: ticker.to_string(),
                amount,
                direction,
            }
            .data(),
        };
        self.process(&[open_vault, ix], &[trader]).await?;
        Ok(self.pool(ticker).await.unwrap())
    }

    pub async fn close(&mut self, caller: &Keypair, ticker: &str) -> TxResult<Pool> {
        let addresses = PoolAddresses::of(ticker);
        let ix = Instruction {
            program_id: launchpad::ID,
            accounts: launchpad::accounts::Close {
                creator: caller.pubkey(),
                pool: addresses.pool,
                escrow: addresses.escrow,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: launchpad::instruction::Close {
                ticker: ticker.to_string(),
            }
            .data(),
        };
        self.process(&[ix], &[caller]).await?;
        Ok(self.pool(ticker).await.unwrap())
    }

    /// Runs the read-only GetPool instruction and decodes its return data.
    pub async fn get_pool(&mut self, ticker: &str) -> TxResult<Pool> {
        let ix = Instruction {
            program_id: launchpad::ID,
            accounts: launchpad::accounts::GetPool {
                pool: PoolAddresses::of(ticker).pool,
            }
            .to_account_metas(None),
            data: launchpad::instruction::GetPool {
                ticker: ticker.to_string(),
            }
            .data(),
        };
        let tx = self.transaction(&[ix], &[]).await?;
        let outcome = self
            .context
            .banks_client
            .process_transaction_with_metadata(tx)
            .await?;
        outcome.result?;
        let data = outcome
            .metadata
            .and_then(|metadata| metadata.return_data)
            .map(|return_data| return_data.data)
            .unwrap_or_default();
        Pool::deserialize(&mut data.as_slice())
            .map_err(|_| BanksClientError::ClientError("undecodable pool return data"))
    }
}

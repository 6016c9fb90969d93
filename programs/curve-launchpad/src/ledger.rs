//! Capability interfaces onto the host ledger's primitives.
//!
//! The engine never moves a balance itself; every transfer, mint, and
//! authority change goes through these traits. Implementations must be
//! atomic per call and fail closed on insufficient balance or wrong
//! authority. The host runtime serializes transitions that touch the
//! same accounts, so implementations need no internal locking.

use crate::address::Address;
use crate::error::LaunchpadResult;

/// Snapshot of a token mint as reported by the custody primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintInfo {
    pub supply: u64,
    pub decimals: u8,
    pub authority: Option<Address>,
}

/// Native-currency balances and transfers.
pub trait SolLedger {
    fn sol_balance(&self, owner: &Address) -> u64;

    fn transfer_sol(&mut self, from: &Address, to: &Address, amount: u64) -> LaunchpadResult<()>;
}

/// Token custody: balances, issuance, and mint-authority management.
pub trait TokenCustody {
    fn mint_info(&self, mint: &Address) -> LaunchpadResult<MintInfo>;

    fn token_balance(&self, mint: &Address, owner: &Address) -> u64;

    fn mint_to(
        &mut self,
        mint: &Address,
        to: &Address,
        amount: u64,
        authority: &Address,
    ) -> LaunchpadResult<()>;

    /// Move tokens between holders. `authority` is the holder consenting
    /// to the debit and must match `from`.
    fn transfer_tokens(
        &mut self,
        mint: &Address,
        from: &Address,
        to: &Address,
        amount: u64,
        authority: &Address,
    ) -> LaunchpadResult<()>;

    fn set_mint_authority(
        &mut self,
        mint: &Address,
        current_authority: &Address,
        new_authority: &Address,
    ) -> LaunchpadResult<()>;
}

/// Display-metadata registry. One registration per curve creation;
/// implementations are idempotent per mint.
pub trait MetadataRegistry {
    fn register(
        &mut self,
        mint: &Address,
        name: &str,
        symbol: &str,
        uri: &str,
    ) -> LaunchpadResult<()>;
}

/// External pool receiving migrated liquidity. Called exactly once per
/// curve, after the balances have been moved to the pool's account.
pub trait LiquidityPool {
    fn deposit(
        &mut self,
        pool_config: &Address,
        sol_amount: u64,
        token_amount: u64,
    ) -> LaunchpadResult<()>;
}

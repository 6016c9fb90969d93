use borsh::{BorshDeserialize, BorshSerialize};

use crate::address::Address;
use crate::error::LaunchpadResult;
use crate::math;
use crate::state::global_config::GlobalConfig;

/// Per-mint AMM state. Virtual reserves drive pricing only; real
/// reserves mirror what the curve's escrows actually hold.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct BondingCurve {
    pub mint: Address,
    pub creator: Address,

    pub virtual_token_reserves: u64,
    pub virtual_sol_reserves: u64,
    pub real_token_reserves: u64,
    pub real_sol_reserves: u64,

    pub token_total_supply: u64,
    pub complete: bool,
}

impl BondingCurve {
    pub fn new(mint: Address, creator: Address, global: &GlobalConfig) -> Self {
        Self {
            mint,
            creator,
            virtual_token_reserves: global.initial_virtual_token_reserves,
            virtual_sol_reserves: global.initial_virtual_sol_reserves,
            real_token_reserves: global.initial_real_token_reserves,
            real_sol_reserves: 0,
            token_total_supply: global.token_total_supply,
            complete: false,
        }
    }

    pub fn tokens_for_buy(&self, sol_in: u64) -> LaunchpadResult<u64> {
        math::tokens_for_buy(
            self.virtual_sol_reserves,
            self.virtual_token_reserves,
            sol_in,
        )
    }

    pub fn sol_for_sell(&self, tokens_in: u64) -> LaunchpadResult<u64> {
        math::sol_for_sell(
            self.virtual_sol_reserves,
            self.virtual_token_reserves,
            tokens_in,
        )
    }

    /// Move reserves for a settled buy. Callers operate on a scratch
    /// copy; a failed step must not reach the store.
    pub fn apply_buy(&mut self, sol_amount: u64, token_amount: u64) -> LaunchpadResult<()> {
        self.virtual_sol_reserves = math::safe_add(self.virtual_sol_reserves, sol_amount)?;
        self.virtual_token_reserves = math::safe_sub(self.virtual_token_reserves, token_amount)?;
        self.real_sol_reserves = math::safe_add(self.real_sol_reserves, sol_amount)?;
        self.real_token_reserves = math::safe_sub(self.real_token_reserves, token_amount)?;
        Ok(())
    }

    pub fn apply_sell(&mut self, token_amount: u64, sol_amount: u64) -> LaunchpadResult<()> {
        self.virtual_token_reserves = math::safe_add(self.virtual_token_reserves, token_amount)?;
        self.virtual_sol_reserves = math::safe_sub(self.virtual_sol_reserves, sol_amount)?;
        self.real_token_reserves = math::safe_add(self.real_token_reserves, token_amount)?;
        self.real_sol_reserves = math::safe_sub(self.real_sol_reserves, sol_amount)?;
        Ok(())
    }

    /// The constant-product surface. Non-decreasing across trades while
    /// the curve is active.
    pub fn invariant_product(&self) -> u128 {
        (self.virtual_sol_reserves as u128) * (self.virtual_token_reserves as u128)
    }
}

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::constants::{
    DEFAULT_MIGRATE_FEE_AMOUNT, DEFAULT_MIGRATION_TOKEN_ALLOCATION, DEFAULT_MINT_DECIMALS,
    DEFAULT_REAL_TOKEN_RESERVES, DEFAULT_TOKEN_TOTAL_SUPPLY, DEFAULT_TRADE_FEE_BPS,
    DEFAULT_VIRTUAL_SOL_RESERVES, DEFAULT_VIRTUAL_TOKEN_RESERVES, MAX_FEE_BPS,
};
use crate::error::{LaunchpadError, LaunchpadResult};

/// Protocol-wide configuration singleton. Written once at
/// initialization, read by every curve creation and every trade.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct GlobalConfig {
    pub initialized: bool,
    pub authority: Address,
    pub fee_receiver: Address,

    pub initial_virtual_token_reserves: u64,
    pub initial_virtual_sol_reserves: u64,
    pub initial_real_token_reserves: u64,
    pub token_total_supply: u64,
    pub mint_decimals: u8,
    pub trade_fee_bps: u64,

    pub migrate_fee_amount: u64,
    pub migration_token_allocation: u64,
    pub lp_config: Address,
}

impl GlobalConfig {
    pub fn new(authority: Address, params: GlobalSettingsInput) -> Self {
        Self {
            initialized: true,
            authority,
            fee_receiver: params.fee_receiver,
            initial_virtual_token_reserves: params.initial_virtual_token_reserves,
            initial_virtual_sol_reserves: params.initial_virtual_sol_reserves,
            initial_real_token_reserves: params.initial_real_token_reserves,
            token_total_supply: params.token_total_supply,
            mint_decimals: params.mint_decimals,
            trade_fee_bps: params.trade_fee_bps,
            migrate_fee_amount: params.migrate_fee_amount,
            migration_token_allocation: params.migration_token_allocation,
            lp_config: params.lp_config,
        }
    }
}

/// Parameter block for the initialize transition. Deserializable from
/// deployment config files.
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, PartialEq, Eq,
)]
pub struct GlobalSettingsInput {
    pub initial_virtual_token_reserves: u64,
    pub initial_virtual_sol_reserves: u64,
    pub initial_real_token_reserves: u64,
    pub token_total_supply: u64,
    pub mint_decimals: u8,
    pub trade_fee_bps: u64,
    pub migrate_fee_amount: u64,
    pub migration_token_allocation: u64,
    pub fee_receiver: Address,
    pub lp_config: Address,
}

impl GlobalSettingsInput {
    pub fn validate(&self) -> LaunchpadResult<()> {
        if self.trade_fee_bps > MAX_FEE_BPS {
            return Err(LaunchpadError::InvalidSettings);
        }
        // pricing denominators must start positive
        if self.initial_virtual_token_reserves == 0 || self.initial_virtual_sol_reserves == 0 {
            return Err(LaunchpadError::InvalidSettings);
        }
        if self.initial_real_token_reserves > self.token_total_supply {
            return Err(LaunchpadError::InvalidSettings);
        }
        // a curve seeded at or below the migration threshold would
        // migrate before its first trade
        if self.migration_token_allocation >= self.initial_real_token_reserves {
            return Err(LaunchpadError::InvalidSettings);
        }
        Ok(())
    }
}

impl Default for GlobalSettingsInput {
    fn default() -> Self {
        Self {
            initial_virtual_token_reserves: DEFAULT_VIRTUAL_TOKEN_RESERVES,
            initial_virtual_sol_reserves: DEFAULT_VIRTUAL_SOL_RESERVES,
            initial_real_token_reserves: DEFAULT_REAL_TOKEN_RESERVES,
            token_total_supply: DEFAULT_TOKEN_TOTAL_SUPPLY,
            mint_decimals: DEFAULT_MINT_DECIMALS,
            trade_fee_bps: DEFAULT_TRADE_FEE_BPS,
            migrate_fee_amount: DEFAULT_MIGRATE_FEE_AMOUNT,
            migration_token_allocation: DEFAULT_MIGRATION_TOKEN_ALLOCATION,
            fee_receiver: Address::default(),
            lp_config: Address::default(),
        }
    }
}

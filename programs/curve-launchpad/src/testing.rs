//! In-memory collaborators backing the test suites. One mutable borrow
//! per transition models the serialization the host runtime provides.

use std::collections::HashMap;

use crate::address::Address;
use crate::error::{LaunchpadError, LaunchpadResult};
use crate::ledger::{LiquidityPool, MetadataRegistry, MintInfo, SolLedger, TokenCustody};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolDeposit {
    pub pool_config: Address,
    pub sol_amount: u64,
    pub token_amount: u64,
}

#[derive(Debug, Default)]
pub struct MemoryLedger {
    lamports: HashMap<Address, u64>,
    mints: HashMap<Address, MintInfo>,
    token_balances: HashMap<(Address, Address), u64>,
    metadata: HashMap<Address, TokenMetadata>,
    deposits: Vec<PoolDeposit>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fund(&mut self, owner: Address, lamports: u64) {
        *self.lamports.entry(owner).or_insert(0) += lamports;
    }

    pub fn create_mint(&mut self, decimals: u8, authority: Address) -> Address {
        let mint = Address::new_unique();
        self.mints.insert(
            mint,
            MintInfo {
                supply: 0,
                decimals,
                authority: Some(authority),
            },
        );
        mint
    }

    pub fn metadata(&self, mint: &Address) -> Option<&TokenMetadata> {
        self.metadata.get(mint)
    }

    pub fn deposits(&self) -> &[PoolDeposit] {
        &self.deposits
    }
}

impl SolLedger for MemoryLedger {
    fn sol_balance(&self, owner: &Address) -> u64 {
        self.lamports.get(owner).copied().unwrap_or(0)
    }

    fn transfer_sol(&mut self, from: &Address, to: &Address, amount: u64) -> LaunchpadResult<()> {
        let from_balance = self.sol_balance(from);
        if from_balance < amount {
            return Err(LaunchpadError::InsufficientFunds);
        }
        let to_balance = self
            .sol_balance(to)
            .checked_add(amount)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        self.lamports.insert(*from, from_balance - amount);
        self.lamports.insert(*to, to_balance);
        Ok(())
    }
}

impl TokenCustody for MemoryLedger {
    fn mint_info(&self, mint: &Address) -> LaunchpadResult<MintInfo> {
        self.mints
            .get(mint)
            .copied()
            .ok_or(LaunchpadError::InvalidMint)
    }

    fn token_balance(&self, mint: &Address, owner: &Address) -> u64 {
        self.token_balances
            .get(&(*mint, *owner))
            .copied()
            .unwrap_or(0)
    }

    fn mint_to(
        &mut self,
        mint: &Address,
        to: &Address,
        amount: u64,
        authority: &Address,
    ) -> LaunchpadResult<()> {
        let info = self
            .mints
            .get_mut(mint)
            .ok_or(LaunchpadError::InvalidMint)?;
        if info.authority != Some(*authority) {
            return Err(LaunchpadError::Unauthorized);
        }
        info.supply = info
            .supply
            .checked_add(amount)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;

        let balance = self.token_balances.entry((*mint, *to)).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        Ok(())
    }

    fn transfer_tokens(
        &mut self,
        mint: &Address,
        from: &Address,
        to: &Address,
        amount: u64,
        authority: &Address,
    ) -> LaunchpadResult<()> {
        if authority != from {
            return Err(LaunchpadError::Unauthorized);
        }
        let from_balance = self.token_balance(mint, from);
        if from_balance < amount {
            return Err(LaunchpadError::InsufficientFunds);
        }
        let to_balance = self
            .token_balance(mint, to)
            .checked_add(amount)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        self.token_balances
            .insert((*mint, *from), from_balance - amount);
        self.token_balances.insert((*mint, *to), to_balance);
        Ok(())
    }

    fn set_mint_authority(
        &mut self,
        mint: &Address,
        current_authority: &Address,
        new_authority: &Address,
    ) -> LaunchpadResult<()> {
        let info = self
            .mints
            .get_mut(mint)
            .ok_or(LaunchpadError::InvalidMint)?;
        if info.authority != Some(*current_authority) {
            return Err(LaunchpadError::Unauthorized);
        }
        info.authority = Some(*new_authority);
        Ok(())
    }
}

impl MetadataRegistry for MemoryLedger {
    fn register(
        &mut self,
        mint: &Address,
        name: &str,
        symbol: &str,
        uri: &str,
    ) -> LaunchpadResult<()> {
        self.metadata.entry(*mint).or_insert_with(|| TokenMetadata {
            name: name.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
        });
        Ok(())
    }
}

impl LiquidityPool for MemoryLedger {
    fn deposit(
        &mut self,
        pool_config: &Address,
        sol_amount: u64,
        token_amount: u64,
    ) -> LaunchpadResult<()> {
        self.deposits.push(PoolDeposit {
            pool_config: *pool_config,
            sol_amount,
            token_amount,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sol_transfer_fails_closed() {
        let mut ledger = MemoryLedger::new();
        let a = Address::new_unique();
        let b = Address::new_unique();
        ledger.fund(a, 100);

        assert_eq!(
            ledger.transfer_sol(&a, &b, 101),
            Err(LaunchpadError::InsufficientFunds)
        );
        ledger.transfer_sol(&a, &b, 60).unwrap();
        assert_eq!(ledger.sol_balance(&a), 40);
        assert_eq!(ledger.sol_balance(&b), 60);
    }

    #[test]
    fn test_mint_requires_authority() {
        let mut ledger = MemoryLedger::new();
        let authority = Address::new_unique();
        let outsider = Address::new_unique();
        let holder = Address::new_unique();
        let mint = ledger.create_mint(6, authority);

        assert_eq!(
            ledger.mint_to(&mint, &holder, 10, &outsider),
            Err(LaunchpadError::Unauthorized)
        );
        ledger.mint_to(&mint, &holder, 10, &authority).unwrap();
        assert_eq!(ledger.token_balance(&mint, &holder), 10);
        assert_eq!(ledger.mint_info(&mint).unwrap().supply, 10);
    }

    #[test]
    fn test_token_transfer_requires_holder_consent() {
        let mut ledger = MemoryLedger::new();
        let authority = Address::new_unique();
        let holder = Address::new_unique();
        let thief = Address::new_unique();
        let mint = ledger.create_mint(6, authority);
        ledger.mint_to(&mint, &holder, 10, &authority).unwrap();

        assert_eq!(
            ledger.transfer_tokens(&mint, &holder, &thief, 10, &thief),
            Err(LaunchpadError::Unauthorized)
        );
    }

    #[test]
    fn test_metadata_registration_is_idempotent() {
        let mut ledger = MemoryLedger::new();
        let mint = Address::new_unique();
        ledger.register(&mint, "Token", "TOK", "ipfs://meta").unwrap();
        ledger.register(&mint, "Other", "OTH", "ipfs://other").unwrap();
        assert_eq!(ledger.metadata(&mint).unwrap().name, "Token");
    }
}

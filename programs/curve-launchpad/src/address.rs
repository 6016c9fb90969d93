use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::constants::{
    BONDING_CURVE_SEED, GLOBAL_SEED, PROGRAM_NAMESPACE, SOL_ESCROW_SEED, TOKEN_ESCROW_SEED,
};

/// 32-byte account identity on the host ledger.
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
pub struct Address(pub [u8; 32]);

impl Address {
    pub const LEN: usize = 32;

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Fresh process-unique address for tests and fixtures.
    pub fn new_unique() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        derive_address(&[b"unique-address", &n.to_le_bytes()])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

/// Derive a deterministic address from a seed tuple using Keccak256.
///
/// Seeds are length-prefixed before hashing so distinct tuples cannot
/// collide on concatenation.
pub fn derive_address(seeds: &[&[u8]]) -> Address {
    let mut hasher = Keccak256::new();
    hasher.update(PROGRAM_NAMESPACE);
    for seed in seeds {
        hasher.update((seed.len() as u64).to_le_bytes());
        hasher.update(seed);
    }
    let digest = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest);
    Address(bytes)
}

pub fn global_config_address() -> Address {
    derive_address(&[GLOBAL_SEED])
}

pub fn bonding_curve_address(mint: &Address) -> Address {
    derive_address(&[BONDING_CURVE_SEED, mint.as_bytes()])
}

pub fn sol_escrow_address(mint: &Address) -> Address {
    derive_address(&[SOL_ESCROW_SEED, mint.as_bytes()])
}

pub fn token_escrow_address(mint: &Address) -> Address {
    derive_address(&[TOKEN_ESCROW_SEED, mint.as_bytes()])
}

// Seeds
pub const PROGRAM_NAMESPACE: &[u8] = b"curve_launchpad";
pub const GLOBAL_SEED: &[u8] = b"global";
pub const BONDING_CURVE_SEED: &[u8] = b"bonding-curve";
pub const SOL_ESCROW_SEED: &[u8] = b"sol-escrow";
pub const TOKEN_ESCROW_SEED: &[u8] = b"token-escrow";

// Fee constants
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_FEE_BPS: u64 = 3_000; // 30%
pub const DEFAULT_TRADE_FEE_BPS: u64 = 50; // 0.5%

// Default launch parameters (6-decimal token, 1B total supply)
pub const DEFAULT_VIRTUAL_TOKEN_RESERVES: u64 = 1_073_000_000_000_000;
pub const DEFAULT_VIRTUAL_SOL_RESERVES: u64 = 30_000_000_000;
pub const DEFAULT_REAL_TOKEN_RESERVES: u64 = 793_100_000_000_000;
pub const DEFAULT_TOKEN_TOTAL_SUPPLY: u64 = 1_000_000_000_000_000;
pub const DEFAULT_MINT_DECIMALS: u8 = 6;

// Migration constants
pub const DEFAULT_MIGRATE_FEE_AMOUNT: u64 = 500_000_000; // 0.5 SOL
pub const DEFAULT_MIGRATION_TOKEN_ALLOCATION: u64 = 206_900_000_000_000;

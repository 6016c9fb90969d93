use borsh::{BorshDeserialize, BorshSerialize};

use crate::address::Address;
use crate::state::GlobalSettingsInput;

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateBondingCurveParams {
    pub mint: Address,
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

/// The state transitions exposed by the program.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum LaunchpadInstruction {
    /// Create the GlobalConfig singleton. The signer becomes the
    /// protocol authority. Fails once a config exists.
    Initialize(GlobalSettingsInput),

    /// Create the bonding curve for a fresh mint. The signer must hold
    /// the mint authority; the transition captures it for the curve,
    /// mints the curve's sellable reserves into escrow, and registers
    /// display metadata.
    CreateBondingCurve(CreateBondingCurveParams),

    /// Swap `sol_amount` lamports for tokens on the mint's curve. The
    /// protocol fee is charged on top of `sol_amount`.
    Buy { mint: Address, sol_amount: u64 },

    /// Swap `token_amount` tokens back into lamports. The protocol fee
    /// is deducted from the payout.
    Sell { mint: Address, token_amount: u64 },
}

use tracing::info;

use crate::address::{sol_escrow_address, token_escrow_address};
use crate::error::LaunchpadResult;
use crate::ledger::{LiquidityPool, SolLedger, TokenCustody};
use crate::math;
use crate::state::{BondingCurve, GlobalConfig};

/// A curve is due once trading has drained its sellable reserves down
/// to the allocation held back for the pool.
pub fn migration_due(curve: &BondingCurve, global: &GlobalConfig) -> bool {
    !curve.complete && curve.real_token_reserves <= global.migration_token_allocation
}

/// Evaluate the trigger after a settled trade and migrate if due.
/// Returns whether the curve migrated in this transition.
pub fn settle_trade<L>(
    curve: &mut BondingCurve,
    global: &GlobalConfig,
    ledger: &mut L,
) -> LaunchpadResult<bool>
where
    L: SolLedger + TokenCustody + LiquidityPool,
{
    if !migration_due(curve, global) {
        return Ok(false);
    }
    execute_migration(curve, global, ledger)?;
    Ok(true)
}

/// One-way hand-off of the curve's remaining liquidity to the external
/// pool. Marks the curve complete, pays the migration fee, moves the
/// escrow balances to the pool account, and records the deposit.
pub fn execute_migration<L>(
    curve: &mut BondingCurve,
    global: &GlobalConfig,
    ledger: &mut L,
) -> LaunchpadResult<()>
where
    L: SolLedger + TokenCustody + LiquidityPool,
{
    let sol_escrow = sol_escrow_address(&curve.mint);
    let token_escrow = token_escrow_address(&curve.mint);

    curve.complete = true;

    // the fee is capped by what the escrow actually holds
    let fee = global.migrate_fee_amount.min(curve.real_sol_reserves);
    let pool_sol = math::safe_sub(curve.real_sol_reserves, fee)?;
    let pool_tokens = curve.real_token_reserves;

    if fee > 0 {
        ledger.transfer_sol(&sol_escrow, &global.fee_receiver, fee)?;
    }
    if pool_sol > 0 {
        ledger.transfer_sol(&sol_escrow, &global.lp_config, pool_sol)?;
    }
    if pool_tokens > 0 {
        ledger.transfer_tokens(
            &curve.mint,
            &token_escrow,
            &global.lp_config,
            pool_tokens,
            &token_escrow,
        )?;
    }
    ledger.deposit(&global.lp_config, pool_sol, pool_tokens)?;

    curve.real_sol_reserves = 0;
    curve.real_token_reserves = 0;

    info!(
        mint = %curve.mint,
        pool_sol,
        pool_tokens,
        migrate_fee = fee,
        "bonding curve migrated"
    );
    Ok(())
}

use tracing::{debug, info};

use crate::address::{
    bonding_curve_address, sol_escrow_address, token_escrow_address, Address,
};
use crate::error::{LaunchpadError, LaunchpadResult};
use crate::instruction::{CreateBondingCurveParams, LaunchpadInstruction};
use crate::ledger::{LiquidityPool, MetadataRegistry, SolLedger, TokenCustody};
use crate::math;
use crate::migration;
use crate::state::{AccountStore, BondingCurve, GlobalConfig, GlobalSettingsInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

/// Settled-trade receipt: the gross reserve deltas, the protocol fee
/// taken, and the post-trade curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeReceipt {
    pub side: TradeSide,
    pub mint: Address,
    pub trader: Address,
    pub sol_amount: u64,
    pub token_amount: u64,
    pub fee: u64,
    pub migrated: bool,
    pub curve: BondingCurve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutput {
    Global(GlobalConfig),
    Curve(BondingCurve),
    Trade(TradeReceipt),
}

pub struct Processor;

impl Processor {
    /// Dispatch one submitted transition. Either commits fully or
    /// returns the error with the store untouched.
    pub fn process<L>(
        store: &mut AccountStore,
        ledger: &mut L,
        signer: &Address,
        instruction: LaunchpadInstruction,
    ) -> LaunchpadResult<TransitionOutput>
    where
        L: SolLedger + TokenCustody + MetadataRegistry + LiquidityPool,
    {
        match instruction {
            LaunchpadInstruction::Initialize(params) => {
                debug!("instruction: Initialize");
                Self::process_initialize(store, signer, params).map(TransitionOutput::Global)
            }
            LaunchpadInstruction::CreateBondingCurve(params) => {
                debug!("instruction: CreateBondingCurve");
                Self::process_create_bonding_curve(store, ledger, signer, params)
                    .map(TransitionOutput::Curve)
            }
            LaunchpadInstruction::Buy { mint, sol_amount } => {
                debug!("instruction: Buy");
                Self::process_buy(store, ledger, signer, &mint, sol_amount)
                    .map(TransitionOutput::Trade)
            }
            LaunchpadInstruction::Sell { mint, token_amount } => {
                debug!("instruction: Sell");
                Self::process_sell(store, ledger, signer, &mint, token_amount)
                    .map(TransitionOutput::Trade)
            }
        }
    }

    pub fn process_initialize(
        store: &mut AccountStore,
        signer: &Address,
        params: GlobalSettingsInput,
    ) -> LaunchpadResult<GlobalConfig> {
        if store.global().is_some() {
            return Err(LaunchpadError::AlreadyInitialized);
        }
        params.validate()?;

        // first deployment: the initializing signer becomes the authority
        let config = GlobalConfig::new(*signer, params);
        info!(authority = %config.authority, "global config initialized");
        store.set_global(config.clone());
        Ok(config)
    }

    pub fn process_create_bonding_curve<L>(
        store: &mut AccountStore,
        ledger: &mut L,
        creator: &Address,
        params: CreateBondingCurveParams,
    ) -> LaunchpadResult<BondingCurve>
    where
        L: TokenCustody + MetadataRegistry,
    {
        let global = store
            .global()
            .ok_or(LaunchpadError::NotInitialized)?
            .clone();
        if store.curve(&params.mint).is_some() {
            return Err(LaunchpadError::CurveExists);
        }

        let mint_info = ledger.mint_info(&params.mint)?;
        if mint_info.supply != 0 || mint_info.decimals != global.mint_decimals {
            return Err(LaunchpadError::InvalidMint);
        }
        if mint_info.authority != Some(*creator) {
            return Err(LaunchpadError::Unauthorized);
        }

        let curve_address = bonding_curve_address(&params.mint);
        let token_escrow = token_escrow_address(&params.mint);

        // authority hand-off first: from here on only the curve can issue
        ledger.set_mint_authority(&params.mint, creator, &curve_address)?;
        ledger.mint_to(
            &params.mint,
            &token_escrow,
            global.initial_real_token_reserves,
            &curve_address,
        )?;
        ledger.register(&params.mint, &params.name, &params.symbol, &params.uri)?;

        let curve = BondingCurve::new(params.mint, *creator, &global);
        info!(mint = %params.mint, creator = %creator, "bonding curve created");
        store.insert_curve(curve.clone());
        Ok(curve)
    }

    pub fn process_buy<L>(
        store: &mut AccountStore,
        ledger: &mut L,
        user: &Address,
        mint: &Address,
        sol_amount: u64,
    ) -> LaunchpadResult<TradeReceipt>
    where
        L: SolLedger + TokenCustody + LiquidityPool,
    {
        let global = store
            .global()
            .ok_or(LaunchpadError::NotInitialized)?
            .clone();
        let mut curve = store
            .curve(mint)
            .ok_or(LaunchpadError::InvalidMint)?
            .clone();

        if curve.complete {
            return Err(LaunchpadError::CurveComplete);
        }
        if sol_amount == 0 {
            return Err(LaunchpadError::ZeroAmount);
        }

        let token_amount = curve.tokens_for_buy(sol_amount)?;
        if token_amount > curve.real_token_reserves {
            return Err(LaunchpadError::InsufficientLiquidity);
        }

        let fee = math::calculate_fee(sol_amount, global.trade_fee_bps)?;
        let total_cost = math::safe_add(sol_amount, fee)?;
        if ledger.sol_balance(user) < total_cost {
            return Err(LaunchpadError::InsufficientFunds);
        }

        curve.apply_buy(sol_amount, token_amount)?;

        let sol_escrow = sol_escrow_address(mint);
        let token_escrow = token_escrow_address(mint);

        if fee > 0 {
            ledger.transfer_sol(user, &global.fee_receiver, fee)?;
        }
        ledger.transfer_sol(user, &sol_escrow, sol_amount)?;
        ledger.transfer_tokens(mint, &token_escrow, user, token_amount, &token_escrow)?;

        debug!(
            virtual_sol_reserves = curve.virtual_sol_reserves,
            virtual_token_reserves = curve.virtual_token_reserves,
            real_sol_reserves = curve.real_sol_reserves,
            real_token_reserves = curve.real_token_reserves,
            "buy applied"
        );

        let migrated = migration::settle_trade(&mut curve, &global, ledger)?;
        store.insert_curve(curve.clone());

        Ok(TradeReceipt {
            side: TradeSide::Buy,
            mint: *mint,
            trader: *user,
            sol_amount,
            token_amount,
            fee,
            migrated,
            curve,
        })
    }

    pub fn process_sell<L>(
        store: &mut AccountStore,
        ledger: &mut L,
        user: &Address,
        mint: &Address,
        token_amount: u64,
    ) -> LaunchpadResult<TradeReceipt>
    where
        L: SolLedger + TokenCustody + LiquidityPool,
    {
        let global = store
            .global()
            .ok_or(LaunchpadError::NotInitialized)?
            .clone();
        let mut curve = store
            .curve(mint)
            .ok_or(LaunchpadError::InvalidMint)?
            .clone();

        if curve.complete {
            return Err(LaunchpadError::CurveComplete);
        }
        if token_amount == 0 {
            return Err(LaunchpadError::ZeroAmount);
        }

        let sol_amount = curve.sol_for_sell(token_amount)?;
        if sol_amount > curve.real_sol_reserves {
            return Err(LaunchpadError::InsufficientLiquidity);
        }
        if ledger.token_balance(mint, user) < token_amount {
            return Err(LaunchpadError::InsufficientFunds);
        }

        let fee = math::calculate_fee(sol_amount, global.trade_fee_bps)?;
        let payout = math::safe_sub(sol_amount, fee)?;

        curve.apply_sell(token_amount, sol_amount)?;

        let sol_escrow = sol_escrow_address(mint);
        let token_escrow = token_escrow_address(mint);

        ledger.transfer_tokens(mint, user, &token_escrow, token_amount, user)?;
        ledger.transfer_sol(&sol_escrow, user, payout)?;
        if fee > 0 {
            ledger.transfer_sol(&sol_escrow, &global.fee_receiver, fee)?;
        }

        debug!(
            virtual_sol_reserves = curve.virtual_sol_reserves,
            virtual_token_reserves = curve.virtual_token_reserves,
            real_sol_reserves = curve.real_sol_reserves,
            real_token_reserves = curve.real_token_reserves,
            "sell applied"
        );

        let migrated = migration::settle_trade(&mut curve, &global, ledger)?;
        store.insert_curve(curve.clone());

        Ok(TradeReceipt {
            side: TradeSide::Sell,
            mint: *mint,
            trader: *user,
            sol_amount,
            token_amount,
            fee,
            migrated,
            curve,
        })
    }
}

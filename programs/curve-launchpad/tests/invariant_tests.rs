use proptest::prelude::*;

use curve_launchpad::address::Address;
use curve_launchpad::error::LaunchpadError;
use curve_launchpad::instruction::CreateBondingCurveParams;
use curve_launchpad::ledger::{SolLedger, TokenCustody};
use curve_launchpad::processor::Processor;
use curve_launchpad::state::{AccountStore, GlobalSettingsInput};
use curve_launchpad::testing::MemoryLedger;

struct Harness {
    store: AccountStore,
    ledger: MemoryLedger,
    user: Address,
    mint: Address,
}

fn setup(user_lamports: u64) -> Harness {
    let mut store = AccountStore::new();
    let mut ledger = MemoryLedger::new();
    let authority = Address::new_unique();
    let creator = Address::new_unique();
    let user = Address::new_unique();

    let params = GlobalSettingsInput {
        fee_receiver: Address::new_unique(),
        lp_config: Address::new_unique(),
        ..GlobalSettingsInput::default()
    };
    Processor::process_initialize(&mut store, &authority, params).unwrap();

    let mint = ledger.create_mint(6, creator);
    Processor::process_create_bonding_curve(
        &mut store,
        &mut ledger,
        &creator,
        CreateBondingCurveParams {
            mint,
            name: "Prop Token".to_string(),
            symbol: "PROP".to_string(),
            uri: "ipfs://prop-token".to_string(),
        },
    )
    .unwrap();

    ledger.fund(user, user_lamports);

    Harness {
        store,
        ledger,
        user,
        mint,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Reserves never go negative, sellable tokens never exceed the
    /// supply, and the virtual product never shrinks while the curve
    /// is active, whatever order trades arrive in.
    #[test]
    fn prop_reserve_invariants_hold(
        ops in proptest::collection::vec((any::<bool>(), 1u64..=2_000_000_000), 1..40)
    ) {
        let mut harness = setup(1u64 << 62);
        let mut k_prev = harness
            .store
            .curve(&harness.mint)
            .unwrap()
            .invariant_product();

        for (is_buy, amount) in ops {
            let result = if is_buy {
                Processor::process_buy(
                    &mut harness.store,
                    &mut harness.ledger,
                    &harness.user,
                    &harness.mint,
                    amount,
                )
            } else {
                let balance = harness.ledger.token_balance(&harness.mint, &harness.user);
                let sell_amount = amount % (balance + 1);
                if sell_amount == 0 {
                    continue;
                }
                Processor::process_sell(
                    &mut harness.store,
                    &mut harness.ledger,
                    &harness.user,
                    &harness.mint,
                    sell_amount,
                )
            };

            let curve = harness.store.curve(&harness.mint).unwrap();
            prop_assert!(curve.real_token_reserves <= curve.token_total_supply);

            match result {
                Ok(receipt) => {
                    if receipt.migrated {
                        prop_assert!(curve.complete);
                        break;
                    }
                    let k = curve.invariant_product();
                    prop_assert!(k >= k_prev);
                    k_prev = k;

                    // escrow always mirrors the redeemable reserves
                    let escrow = curve_launchpad::address::sol_escrow_address(&harness.mint);
                    prop_assert_eq!(
                        harness.ledger.sol_balance(&escrow),
                        curve.real_sol_reserves
                    );
                }
                // a rejected trade must leave the product untouched
                Err(_) => prop_assert_eq!(curve.invariant_product(), k_prev),
            }
        }
    }

    /// Buying and immediately selling the proceeds always loses money:
    /// price impact plus fees.
    #[test]
    fn prop_round_trip_never_profits(sol_in in 200u64..=10_000_000_000u64) {
        let mut harness = setup(1u64 << 40);
        let start = harness.ledger.sol_balance(&harness.user);

        let receipt = Processor::process_buy(
            &mut harness.store,
            &mut harness.ledger,
            &harness.user,
            &harness.mint,
            sol_in,
        )
        .unwrap();
        prop_assert!(receipt.token_amount > 0);

        Processor::process_sell(
            &mut harness.store,
            &mut harness.ledger,
            &harness.user,
            &harness.mint,
            receipt.token_amount,
        )
        .unwrap();

        let end = harness.ledger.sol_balance(&harness.user);
        prop_assert!(end < start);
    }

    /// A buy can never extract more tokens than the curve's redeemable
    /// reserves; oversized requests fail cleanly instead of clamping.
    #[test]
    fn prop_buy_bounded_by_real_reserves(sol_in in 1u64..=200_000_000_000u64) {
        let mut harness = setup(u64::MAX / 2);
        let before = harness.store.curve(&harness.mint).unwrap().clone();

        match Processor::process_buy(
            &mut harness.store,
            &mut harness.ledger,
            &harness.user,
            &harness.mint,
            sol_in,
        ) {
            Ok(receipt) => {
                prop_assert!(receipt.token_amount <= before.real_token_reserves);
            }
            Err(err) => {
                prop_assert_eq!(err, LaunchpadError::InsufficientLiquidity);
                prop_assert_eq!(harness.store.curve(&harness.mint).unwrap(), &before);
            }
        }
    }

    /// Once a curve completes, every further trade is rejected and the
    /// stored state stays frozen.
    #[test]
    fn prop_terminal_lock(amount in 1u64..=1_000_000_000u64, is_buy in any::<bool>()) {
        let mut store = AccountStore::new();
        let mut ledger = MemoryLedger::new();
        let authority = Address::new_unique();
        let creator = Address::new_unique();
        let user = Address::new_unique();

        let params = GlobalSettingsInput {
            initial_virtual_token_reserves: 2_000,
            initial_virtual_sol_reserves: 1_000,
            initial_real_token_reserves: 1_500,
            token_total_supply: 2_000,
            mint_decimals: 6,
            trade_fee_bps: 50,
            migrate_fee_amount: 100,
            migration_token_allocation: 500,
            fee_receiver: Address::new_unique(),
            lp_config: Address::new_unique(),
        };
        Processor::process_initialize(&mut store, &authority, params).unwrap();
        let mint = ledger.create_mint(6, creator);
        Processor::process_create_bonding_curve(
            &mut store,
            &mut ledger,
            &creator,
            CreateBondingCurveParams {
                mint,
                name: "Lock".to_string(),
                symbol: "LOCK".to_string(),
                uri: "ipfs://lock".to_string(),
            },
        )
        .unwrap();
        ledger.fund(user, 1u64 << 40);

        let receipt =
            Processor::process_buy(&mut store, &mut ledger, &user, &mint, 2_000).unwrap();
        prop_assert!(receipt.migrated);
        let frozen = store.curve(&mint).unwrap().clone();

        let result = if is_buy {
            Processor::process_buy(&mut store, &mut ledger, &user, &mint, amount)
        } else {
            Processor::process_sell(&mut store, &mut ledger, &user, &mint, amount)
        };
        prop_assert_eq!(result, Err(LaunchpadError::CurveComplete));
        prop_assert_eq!(store.curve(&mint).unwrap(), &frozen);
    }
}

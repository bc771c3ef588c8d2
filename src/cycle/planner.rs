//! Pure per-cycle action selection.

use crate::config::{
    GAS_RESERVE_LAMPORTS, MIN_GAS_LAMPORTS, MIN_TRADEABLE_LAMPORTS, STABLE_DUST_FLOOR,
    SWAP_PERCENT,
};
use crate::cycle::types::CycleAction;
use crate::models::BalanceSnapshot;

/// Lamports the forward leg swaps out of an available balance.
pub fn forward_swap_amount(available: u64) -> u64 {
    (available as u128 * SWAP_PERCENT as u128 / 100) as u64
}

/// Decide the cycle's action from a fresh snapshot.
///
/// Pure function of the two balances so the state selection is directly
/// testable. The recovery unwrap is not a state here; the controller always
/// runs it before taking the snapshot.
pub fn plan_cycle(snapshot: &BalanceSnapshot) -> CycleAction {
    let available = snapshot.native.saturating_sub(GAS_RESERVE_LAMPORTS);

    if snapshot.stable >= STABLE_DUST_FLOOR && snapshot.native > MIN_GAS_LAMPORTS {
        CycleAction::ReverseRecovery {
            stable_amount: snapshot.stable,
        }
    } else if snapshot.stable > 0 && snapshot.stable < STABLE_DUST_FLOOR {
        CycleAction::SkipDust {
            stable_amount: snapshot.stable,
        }
    } else if available >= MIN_TRADEABLE_LAMPORTS {
        CycleAction::ForwardCycle {
            native_amount: forward_swap_amount(available),
        }
    } else {
        CycleAction::Wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(native: u64, stable: u64) -> BalanceSnapshot {
        BalanceSnapshot { native, stable }
    }

    #[test]
    fn stable_dust_is_skipped() {
        assert_eq!(
            plan_cycle(&snapshot(1_000_000_000, 5_000)),
            CycleAction::SkipDust {
                stable_amount: 5_000
            }
        );
    }

    #[test]
    fn stray_stable_triggers_reverse_recovery() {
        assert_eq!(
            plan_cycle(&snapshot(1_000_000_000, 50_000)),
            CycleAction::ReverseRecovery {
                stable_amount: 50_000
            }
        );
    }

    #[test]
    fn reverse_recovery_needs_native_for_fees() {
        // Same stray stable, but the wallet cannot pay for the transaction.
        assert_eq!(plan_cycle(&snapshot(40_000_000, 50_000)), CycleAction::Wait);
    }

    #[test]
    fn below_tradeable_floor_waits() {
        assert_eq!(plan_cycle(&snapshot(50_000_000, 0)), CycleAction::Wait);
        assert_eq!(plan_cycle(&snapshot(0, 0)), CycleAction::Wait);
        // Exactly the reserve leaves nothing available.
        assert_eq!(plan_cycle(&snapshot(100_000_000, 0)), CycleAction::Wait);
    }

    #[test]
    fn normal_cycle_swaps_eighty_percent_of_available() {
        assert_eq!(
            plan_cycle(&snapshot(1_000_000_000, 0)),
            CycleAction::ForwardCycle {
                native_amount: 720_000_000
            }
        );
    }

    #[test]
    fn forward_amount_is_floored_and_below_available() {
        for native in [200_000_000u64, 333_333_333, 1_000_000_001, 987_654_321_987] {
            let available = native - GAS_RESERVE_LAMPORTS;
            let amount = forward_swap_amount(available);
            assert_eq!(amount as u128, available as u128 * 80 / 100);
            assert!(amount < available);
        }
    }
}

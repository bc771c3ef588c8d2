//! Shared data structures used throughout the application.

/// Decimal exponent of the native asset, display formatting only.
pub const NATIVE_DECIMALS: u8 = 9;
/// Decimal exponent of the stable asset, display formatting only.
pub const STABLE_DECIMALS: u8 = 6;

/// Wallet balances in integer base units, read fresh each cycle.
///
/// Never cached across cycles; every decision works from a snapshot taken
/// immediately before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSnapshot {
    /// Native balance in lamport-equivalents (10^-9 units).
    pub native: u64,
    /// Stable-token balance in base units (10^-6 units).
    pub stable: u64,
}

impl BalanceSnapshot {
    /// Native balance in whole-asset units, for status lines.
    pub fn native_display(&self) -> f64 {
        crate::utils::to_display(self.native, NATIVE_DECIMALS)
    }

    /// Stable balance in whole-asset units, for status lines.
    pub fn stable_display(&self) -> f64 {
        crate::utils::to_display(self.stable, STABLE_DECIMALS)
    }
}

/// Which side of the pool is being sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    NativeToStable,
    StableToNative,
}

impl SwapDirection {
    /// The pool program's direction flag: token A (wrapped native) in,
    /// token B (stable) out.
    pub fn a_to_b(&self) -> bool {
        matches!(self, SwapDirection::NativeToStable)
    }
}

/// One fully-specified swap, constructed per cycle and consumed immediately
/// by the transaction builder.
///
/// `threshold` is a minimum-out floor when `amount_is_input` (exact-in) and a
/// maximum-in ceiling otherwise (exact-out).
#[derive(Debug, Clone, Copy)]
pub struct SwapIntent {
    pub direction: SwapDirection,
    pub amount: u64,
    pub threshold: u64,
    pub amount_is_input: bool,
}

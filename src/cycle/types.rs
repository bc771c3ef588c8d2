//! Cycle-level decision types.

/// What a cycle does, decided once per cycle from a fresh balance snapshot.
/// The variants are mutually exclusive and evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleAction {
    /// A prior cycle left stable behind; finish its reverse leg before
    /// wrapping any more native.
    ReverseRecovery { stable_amount: u64 },
    /// Stable balance exists but is below the dust floor; not worth a swap.
    SkipDust { stable_amount: u64 },
    /// The usual round trip: forward swap, settle, reverse swap.
    ForwardCycle { native_amount: u64 },
    /// Not enough native to trade; sit this cycle out.
    Wait,
}

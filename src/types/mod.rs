mod scalar_types;
mod vector_types;

pub use scalar_types::*;
pub use vector_types::*;

/// Strategy used to find the nearest tick of a pulse train for every event.
/// All kernels return bit-identical sums, they only differ in cost.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    /// Computes the nearest tick index directly: O(1) per event.
    #[default]
    Analytic,
    /// Merges the sorted events with the sorted ticks: O(events + ticks).
    Sweep,
    /// Compares every event with every tick: O(events * ticks).
    /// Only useful as a reference.
    BruteForce,
}

/// Whether the offset sweep includes `offset = period`. Because the pulse
/// train is periodic this duplicates `offset = 0`, but it is evaluated by
/// default to reproduce the established results exactly.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetBound {
    #[default]
    Inclusive,
    Exclusive,
}

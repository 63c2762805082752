//! Growth policy for [`List`](crate::List) backing storage.

use crate::error::ConfigError;

/// Controls how a list sizes its backing store.
///
/// When an append finds the store full, the new capacity is
/// `capacity + capacity / divisor + increment`. The proportional term
/// keeps appends amortized O(1); the constant term dominates while the
/// list is small. Freshly constructed lists reserve `initial_headroom`
/// slots on top of the caller's size hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Divisor of the proportional growth term. Default: 4 (≈1.25x).
    ///
    /// Must be at least 1.
    pub divisor: usize,

    /// Constant number of slots added on every growth. Default: 4.
    ///
    /// Must be at least 1.
    pub increment: usize,

    /// Extra slots reserved at construction beyond the size hint. Default: 4.
    pub initial_headroom: usize,
}

impl GrowthPolicy {
    /// Default proportional divisor.
    pub const DEFAULT_DIVISOR: usize = 4;

    /// Default constant increment.
    pub const DEFAULT_INCREMENT: usize = 4;

    /// Default headroom reserved at construction.
    pub const DEFAULT_INITIAL_HEADROOM: usize = 4;

    /// Check the policy's structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.divisor == 0 {
            return Err(ConfigError::ZeroDivisor);
        }
        if self.increment == 0 {
            return Err(ConfigError::ZeroIncrement);
        }
        Ok(())
    }

    /// Capacity of a fresh list built from `size_hint`.
    pub fn initial_capacity(&self, size_hint: usize) -> usize {
        size_hint.saturating_add(self.initial_headroom)
    }

    /// Capacity after one growth step from `current`.
    ///
    /// Saturates at `usize::MAX`; the allocation itself fails long
    /// before that.
    pub fn next_capacity(&self, current: usize) -> usize {
        current
            .saturating_add(current / self.divisor)
            .saturating_add(self.increment)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            divisor: Self::DEFAULT_DIVISOR,
            increment: Self::DEFAULT_INCREMENT,
            initial_headroom: Self::DEFAULT_INITIAL_HEADROOM,
        }
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters of engine events, kept on the system and incremented as the
//! completion engine and the tree walker run. The algorithm never consults
//! them; they exist for tests and callers that want visibility into how
//! much filtering the child checks did.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// Completion passes started (including restarts after seed changes).
    CompletionPasses,
    /// Seed changes that restarted a completion pass.
    SeedChanges,
    /// Roots emitted by `get_root`.
    RootsEmitted,
    /// Child attempts, one per (candidate, solution, seed) triple.
    ChildAttempts,
    /// Attempts dropped because the truncated core had the wrong minimum.
    WrongSeedSkips,
    /// Attempts dropped by the forward completion (seed change or an
    /// insertion below the discovery bound).
    ForwardCompletionSkips,
    /// Attempts dropped because the completed child did not start with the
    /// core prefix.
    CorePrefixSkips,
    /// Attempts dropped by the parent check.
    ParentCheckSkips,
    /// Attempts dropped by the restricted-uniqueness check.
    RestrictedCheckSkips,
    /// Children emitted to the callback.
    ChildrenEmitted,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

//! # Application State
//!
//! Core state for the tree. This module contains domain data only -
//! nothing in here knows about terminals or key codes.
//!
//! ```text
//! Tree
//! ├── size: u16                // growth level, MIN_SIZE..=MAX_SIZE
//! └── pending: Option<Action>  // last meaningful input, held across ticks
//! ```
//!
//! State changes only happen through `handle_input(tree, polled)` in
//! action.rs, once per tick. The struct is owned by the loop driver and
//! never shared; no surprise mutations.

use crate::core::action::Action;

/// Smallest tree the reducer will shrink to.
pub const MIN_SIZE: u16 = 1;
/// Tallest tree the reducer will grow to.
pub const MAX_SIZE: u16 = 50;

pub struct Tree {
    /// Current growth level. Invariant: `MIN_SIZE <= size <= MAX_SIZE`.
    pub size: u16,
    /// Input latch. Grow/shrink/resize consume it; quit stays latched so
    /// it is re-seen every tick until teardown.
    pub pending: Option<Action>,
}

impl Tree {
    pub fn new(initial_size: u16) -> Self {
        Self {
            size: initial_size.clamp(MIN_SIZE, MAX_SIZE),
            pending: None,
        }
    }
}

//! # Actions
//!
//! Everything that can happen to the tree becomes an `Action`.
//! User presses the up arrow? That's `Action::Grow`.
//! Terminal got resized? That's `Action::Resize`.
//!
//! `handle_input()` takes the current state and the key polled this tick
//! (if any), mutates the state, and returns an `Effect` for the loop
//! driver to execute. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! Tree + polled Action  →  handle_input()  →  Effect
//! ```
//!
//! This makes the whole input state machine testable without a terminal.
//!
//! ## Latch semantics
//!
//! The tree keeps the last meaningful key in `pending` across ticks. Two
//! distinct policies apply on dispatch, and the asymmetry is deliberate:
//!
//! - **Edge-triggered** (`Grow`, `Shrink`, `Resize`): act once, then clear
//!   the latch. Holding the arrow key still repeats, because the terminal
//!   delivers a fresh key event on each tick while the key is down.
//! - **Level-triggered** (`Quit`): the latch is retained, so the effect is
//!   re-signaled every tick until the loop driver tears down.

use crate::core::state::{MAX_SIZE, MIN_SIZE, Tree};

/// A meaningful input, as translated by the TUI adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Grow,
    Shrink,
    Quit,
    Resize,
}

/// What the loop driver must do after a tick's input has been absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing special; clear, render, flush as usual.
    Continue,
    /// Terminal geometry is stale. Tear the surface down, re-acquire it,
    /// and force a full redraw before the next frame.
    Reinitialize,
    /// Graceful teardown, then exit with success.
    Quit,
}

/// Absorb at most one polled input and step the state machine.
///
/// A freshly polled action overwrites the latch; no poll leaves the latch
/// untouched, which is what carries a held quit key across ticks.
pub fn handle_input(tree: &mut Tree, polled: Option<Action>) -> Effect {
    if let Some(action) = polled {
        tree.pending = Some(action);
    }

    match tree.pending {
        Some(Action::Quit) => Effect::Quit,
        Some(Action::Grow) => {
            if tree.size < MAX_SIZE {
                tree.size += 1;
            }
            tree.pending = None;
            Effect::Continue
        }
        Some(Action::Shrink) => {
            if tree.size > MIN_SIZE {
                tree.size -= 1;
            }
            tree.pending = None;
            Effect::Continue
        }
        Some(Action::Resize) => {
            tree.pending = None;
            Effect::Reinitialize
        }
        None => Effect::Continue,
    }
}

//! # Core Application Logic
//!
//! Everything the tree *is*, with no knowledge of any UI technology.
//! The ratatui/crossterm layer lives in the `tui` module and only ever
//! talks to this one through the seams below:
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • state  (Tree)        │
//!                    │  • action (reducer)     │
//!                    │  • render (pure cells)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: the `Tree` struct — growth level plus the input latch
//! - [`action`]: the `Action` enum and the `handle_input` reducer
//! - [`render`]: the pure figure renderer — (width, height, size) → cells
//! - [`config`]: settings loaded from `~/.sapling/config.toml`

pub mod action;
pub mod config;
pub mod render;
pub mod state;

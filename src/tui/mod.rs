//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, translates keyboard and
//! resize events into core::Action values, and drives the tick loop.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Tick discipline
//!
//! Each tick polls at most one input without blocking, steps the state
//! machine, draws the figure, and then sleeps a fixed interval to bound
//! the frame rate and CPU usage. Grow/shrink repeat while held because
//! the terminal keeps delivering key events, rate-limited to one step per
//! tick by the single-poll rule.
//!
//! ## Resize
//!
//! A resize is treated as a full surface re-acquisition: restore, re-init
//! and clear, rather than patching cached geometry in place. The next
//! frame then renders against freshly queried dimensions.

mod event;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Effect, handle_input};
use crate::core::config::ResolvedConfig;
use crate::core::state::Tree;

struct CursorGuard;

impl CursorGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        // Restore cursor visibility on every exit path.
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tree = Tree::new(config.initial_size);

    let mut terminal = ratatui::init();
    let _cursor_guard = CursorGuard::new()?;
    info!(
        "Terminal acquired (initial size {}, tick {:?})",
        tree.size, config.tick
    );

    loop {
        let polled = event::poll_action_immediate();
        match handle_input(&mut tree, polled) {
            Effect::Quit => break,
            Effect::Reinitialize => {
                // Cached geometry is stale after a resize; re-acquire the
                // surface from scratch and force a full redraw.
                info!("Resize: reinitializing terminal surface");
                ratatui::restore();
                terminal = ratatui::init();
                execute!(stdout(), Hide)?;
                terminal.clear()?;
            }
            Effect::Continue => {}
        }

        terminal.draw(|f| ui::draw(f, &tree))?;
        std::thread::sleep(config.tick);
    }

    info!("Quit requested, tearing down");
    ratatui::restore();
    Ok(())
}

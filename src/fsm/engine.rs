//! Stack-based traversal engine.
//!
//! The engine pushes exactly one frame per opened element, matched or not,
//! so the stack depth always mirrors document nesting. A close event pops
//! one frame and fires its exit callback.
//!
//! # Resolution order
//!
//! For every non-`Back` symbol:
//! 1. the exact entry for the symbol in the current state,
//! 2. the state's `Any` entry,
//! 3. a synthetic transition into `Skip` with no callbacks.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::symbol::{State, Symbol};
use super::table::{ExitFn, TransitionTable};
use crate::{Error, Result};

/// A pushed frame: the state entered and the exit callback to fire on pop.
struct Frame<'t, S, C> {
    state: State<S>,
    on_exit: Option<&'t ExitFn<C>>,
}

/// Finite-state machine whose states form a runtime stack.
///
/// Borrows its table immutably for the duration of one traversal. The
/// consumer's accumulator is passed into every [`transition`] call rather
/// than captured, so callbacks can mutate it without shared ownership.
///
/// [`transition`]: TraversalEngine::transition
pub struct TraversalEngine<'t, S, C> {
    table: &'t TransitionTable<S, C>,
    root: State<S>,
    frames: Vec<Frame<'t, S, C>>,
}

impl<'t, S, C> TraversalEngine<'t, S, C>
where
    S: Copy + Eq + Hash + Debug,
{
    /// New engine positioned at `start`, with only the root frame on the stack.
    #[must_use]
    pub fn new(start: State<S>, table: &'t TransitionTable<S, C>) -> Self {
        Self {
            table,
            root: start,
            frames: Vec::new(),
        }
    }

    /// State on top of the stack.
    #[must_use]
    pub fn current_state(&self) -> State<S> {
        self.frames.last().map_or(self.root, |frame| frame.state)
    }

    /// Stack length, root frame included. Always at least 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len() + 1
    }

    /// Whether only the root frame remains.
    #[must_use]
    pub fn is_at_root(&self) -> bool {
        self.frames.is_empty()
    }

    /// States from root to top.
    #[must_use]
    pub fn states(&self) -> Vec<State<S>> {
        std::iter::once(self.root)
            .chain(self.frames.iter().map(|frame| frame.state))
            .collect()
    }

    /// Consume one symbol.
    ///
    /// `Back` pops a frame and fires its exit callback; anything else is
    /// resolved against the table, fires the target's enter callback and
    /// pushes a frame. Callback errors are returned as-is; a failed enter
    /// callback leaves the stack untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnbalancedClose`] when `Back` arrives with only the
    /// root frame left. The event stream is broken at that point and the
    /// traversal should be abandoned.
    pub fn transition(&mut self, ctx: &mut C, symbol: Symbol<'_>) -> Result<()> {
        if matches!(symbol, Symbol::Back) {
            return self.pop(ctx);
        }

        let table = self.table;
        let from = self.current_state();
        let frame = match table.resolve(&from, &symbol) {
            Some(target) => {
                if let Some(on_enter) = target.enter_handler() {
                    on_enter(ctx, symbol.payload())?;
                }
                Frame {
                    state: *target.state(),
                    on_exit: target.exit_handler(),
                }
            }
            None => Frame {
                state: State::Skip,
                on_exit: None,
            },
        };

        trace!(?from, to = ?frame.state, %symbol, depth = self.depth() + 1, "transition");
        self.frames.push(frame);
        Ok(())
    }

    fn pop(&mut self, ctx: &mut C) -> Result<()> {
        let Some(frame) = self.frames.pop() else {
            return Err(Error::UnbalancedClose);
        };

        trace!(from = ?frame.state, to = ?self.current_state(), depth = self.depth(), "back");

        if let Some(on_exit) = frame.on_exit {
            on_exit(ctx)?;
        }
        Ok(())
    }
}

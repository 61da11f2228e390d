//! Table-driven page extraction.
//!
//! An [`Extractor`] supplies a transition table, a start state and a
//! qualifier function; [`Extractor::extract`] wires them to the tokenizer
//! and returns the accumulated record.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::adapter::TagStreamAdapter;
use crate::fsm::{State, TransitionTable};
use crate::tokenizer;
use crate::Result;

/// A consumer of the traversal engine: a table plus the record it fills.
pub trait Extractor {
    /// Consumer-defined traversal states.
    type State: Copy + Eq + Hash + Debug;

    /// Accumulator mutated by the table's callbacks.
    type Record: Default;

    /// Transition table used for every document.
    fn transitions(&self) -> &TransitionTable<Self::State, Self::Record>;

    /// State of the root frame.
    fn start_state(&self) -> State<Self::State>;

    /// Derive a qualifier from an element's attributes. Must be pure.
    fn qualifier(attrs: &[(String, String)]) -> Option<String>;

    /// Run one traversal over `html`.
    fn extract(&self, html: &str) -> Result<Self::Record> {
        let mut adapter = TagStreamAdapter::new(
            self.start_state(),
            self.transitions(),
            Self::Record::default(),
            Self::qualifier,
        );
        tokenizer::tokenize(html, &mut adapter)?;

        debug!(depth = adapter.depth(), "Traversal finished");
        Ok(adapter.into_context())
    }
}

//! Tag-stream adapter.
//!
//! Binds a [`TraversalEngine`] to a tokenizer's open/text/close callbacks
//! and translates each one into the engine's symbol vocabulary.

use std::fmt::Debug;
use std::hash::Hash;

use crate::fsm::{State, Symbol, TransitionTable, TraversalEngine};
use crate::Result;

/// Receiver of tokenizer events, in document order.
///
/// Implementors may rely on opens and closes being balanced and properly
/// nested. Returning an error aborts the tokenizer.
pub trait TagSink {
    /// An element was opened, with its attributes in source order.
    fn element_open(&mut self, name: &str, attrs: &[(String, String)]) -> Result<()>;

    /// Text content inside the current element.
    fn text(&mut self, data: &str) -> Result<()>;

    /// The most recently opened element was closed.
    fn element_close(&mut self, name: &str) -> Result<()>;
}

/// Drives a traversal engine from tokenizer events.
///
/// `Q` derives a tag's qualifier from its attributes and must be pure.
pub struct TagStreamAdapter<'t, S, C, Q> {
    engine: TraversalEngine<'t, S, C>,
    ctx: C,
    qualifier: Q,
}

impl<'t, S, C, Q> TagStreamAdapter<'t, S, C, Q>
where
    S: Copy + Eq + Hash + Debug,
    Q: Fn(&[(String, String)]) -> Option<String>,
{
    /// Adapter starting in `start`, accumulating into `ctx`.
    #[must_use]
    pub fn new(start: State<S>, table: &'t TransitionTable<S, C>, ctx: C, qualifier: Q) -> Self {
        Self {
            engine: TraversalEngine::new(start, table),
            ctx,
            qualifier,
        }
    }

    /// Current engine depth, root frame included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.engine.depth()
    }

    /// Current engine state.
    #[must_use]
    pub fn current_state(&self) -> State<S> {
        self.engine.current_state()
    }

    /// Accumulator built so far.
    #[must_use]
    pub const fn context(&self) -> &C {
        &self.ctx
    }

    /// Finish the traversal and hand back the accumulator.
    #[must_use]
    pub fn into_context(self) -> C {
        self.ctx
    }
}

impl<S, C, Q> TagSink for TagStreamAdapter<'_, S, C, Q>
where
    S: Copy + Eq + Hash + Debug,
    Q: Fn(&[(String, String)]) -> Option<String>,
{
    fn element_open(&mut self, name: &str, attrs: &[(String, String)]) -> Result<()> {
        let qualifier = (self.qualifier)(attrs);
        self.engine.transition(
            &mut self.ctx,
            Symbol::Tag {
                name,
                qualifier: qualifier.as_deref(),
            },
        )
    }

    fn text(&mut self, data: &str) -> Result<()> {
        self.engine.transition(&mut self.ctx, Symbol::Data(data))?;
        self.engine.transition(&mut self.ctx, Symbol::Back)
    }

    fn element_close(&mut self, _name: &str) -> Result<()> {
        self.engine.transition(&mut self.ctx, Symbol::Back)
    }
}

/// Qualifier function that ignores attributes.
#[must_use]
pub fn no_qualifier(_attrs: &[(String, String)]) -> Option<String> {
    None
}

/// Value of the first attribute named `name`.
#[must_use]
pub fn attribute<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

//! Transition table: states mapped to symbol-keyed targets.
//!
//! The table is plain data built once before traversal. Callbacks are boxed
//! closures stored on each [`Target`]; they receive the consumer's
//! accumulator by `&mut`, so nothing in the table holds mutable state.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::symbol::{State, Symbol, SymbolKey};
use crate::Result;

/// Callback fired when a transition is taken. Receives the `Data` payload,
/// or `None` for element-open transitions.
pub type EnterFn<C> = Box<dyn Fn(&mut C, Option<&str>) -> Result<()>>;

/// Callback fired when the frame pushed by a transition is popped.
pub type ExitFn<C> = Box<dyn Fn(&mut C) -> Result<()>>;

/// Where a transition leads, plus its optional callbacks.
pub struct Target<S, C> {
    state: State<S>,
    on_enter: Option<EnterFn<C>>,
    on_exit: Option<ExitFn<C>>,
}

impl<S, C> Target<S, C> {
    /// Transition into a consumer-defined state with no callbacks.
    #[must_use]
    pub fn new(state: S) -> Self {
        Self::to(State::Named(state))
    }

    /// Explicit transition into the skip state.
    #[must_use]
    pub fn skip() -> Self {
        Self::to(State::Skip)
    }

    fn to(state: State<S>) -> Self {
        Self {
            state,
            on_enter: None,
            on_exit: None,
        }
    }

    /// Attach a callback fired when this transition is taken.
    #[must_use]
    pub fn on_enter<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut C, Option<&str>) -> Result<()> + 'static,
    {
        self.on_enter = Some(Box::new(f));
        self
    }

    /// Attach a callback fired once, when the resulting frame is popped.
    #[must_use]
    pub fn on_exit<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut C) -> Result<()> + 'static,
    {
        self.on_exit = Some(Box::new(f));
        self
    }

    /// State entered by this transition.
    #[must_use]
    pub const fn state(&self) -> &State<S> {
        &self.state
    }

    pub(crate) fn enter_handler(&self) -> Option<&EnterFn<C>> {
        self.on_enter.as_ref()
    }

    pub(crate) fn exit_handler(&self) -> Option<&ExitFn<C>> {
        self.on_exit.as_ref()
    }
}

impl<S: fmt::Debug, C> fmt::Debug for Target<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("state", &self.state)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}

/// Outgoing transitions of a single state.
///
/// Entries are kept in insertion order and scanned linearly; tables are
/// small and this avoids allocating an owned key per event.
pub struct Transitions<S, C> {
    entries: Vec<(SymbolKey, Target<S, C>)>,
}

impl<S, C> Transitions<S, C> {
    /// Empty transition set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add (or replace) the entry for `key`.
    #[must_use]
    pub fn on(mut self, key: SymbolKey, target: Target<S, C>) -> Self {
        self.insert(key, target);
        self
    }

    /// Element-open entry for `name`, optionally requiring a qualifier.
    #[must_use]
    pub fn tag(self, name: &str, qualifier: Option<&str>, target: Target<S, C>) -> Self {
        self.on(SymbolKey::tag(name, qualifier), target)
    }

    /// Entry for text content.
    #[must_use]
    pub fn data(self, target: Target<S, C>) -> Self {
        self.on(SymbolKey::Data, target)
    }

    /// Wildcard entry, used when nothing else matches.
    #[must_use]
    pub fn any(self, target: Target<S, C>) -> Self {
        self.on(SymbolKey::Any, target)
    }

    /// Add (or replace) the entry for `key` in place.
    pub fn insert(&mut self, key: SymbolKey, target: Target<S, C>) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = target;
        } else {
            self.entries.push((key, target));
        }
    }

    /// Entry stored under exactly `key`.
    #[must_use]
    pub fn get(&self, key: &SymbolKey) -> Option<&Target<S, C>> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, t)| t)
    }

    /// Resolve a symbol: exact entry first, then the wildcard.
    #[must_use]
    pub fn resolve(&self, symbol: &Symbol<'_>) -> Option<&Target<S, C>> {
        if matches!(symbol, Symbol::Back) {
            return None;
        }

        self.entries
            .iter()
            .find(|(k, _)| k.matches(symbol))
            .or_else(|| self.entries.iter().find(|(k, _)| *k == SymbolKey::Any))
            .map(|(_, t)| t)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the state has no outgoing entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, C> Default for Transitions<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mapping from state to its outgoing transitions.
pub struct TransitionTable<S, C> {
    states: HashMap<State<S>, Transitions<S, C>>,
}

impl<S: Eq + Hash, C> TransitionTable<S, C> {
    /// Empty table. Every symbol resolves to `Skip`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Set the transitions of `state`, replacing any previous set.
    #[must_use]
    pub fn with(mut self, state: State<S>, transitions: Transitions<S, C>) -> Self {
        self.states.insert(state, transitions);
        self
    }

    /// Transitions declared for `state`, if any.
    #[must_use]
    pub fn get(&self, state: &State<S>) -> Option<&Transitions<S, C>> {
        self.states.get(state)
    }

    /// Resolve `symbol` in `state`. `None` means "fall back to `Skip`".
    #[must_use]
    pub fn resolve(&self, state: &State<S>, symbol: &Symbol<'_>) -> Option<&Target<S, C>> {
        self.states.get(state).and_then(|t| t.resolve(symbol))
    }

    /// Number of states with declared transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no state has any entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash, C> Default for TransitionTable<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

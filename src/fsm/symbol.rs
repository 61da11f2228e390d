//! States, emitted symbols and table keys.
//!
//! Emitted symbols borrow from the tokenizer's buffers (`Symbol<'a>`), while
//! table keys own their strings (`SymbolKey`) so a table can outlive any
//! single document.

use std::fmt;

/// A traversal state.
///
/// Consumers define their own state type `S`; `Skip` is reserved and means
/// "inside structure with no recognized role". The table may still declare
/// transitions out of `Skip`, which is how recognition resumes inside
/// unrecognized wrapper elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State<S> {
    /// Inside unrecognized structure.
    Skip,
    /// A consumer-defined state.
    Named(S),
}

impl<S> State<S> {
    /// Whether this is the reserved skip state.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }
}

/// An event consumed by one engine transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol<'a> {
    /// An element was opened.
    Tag {
        /// Tag name as reported by the tokenizer.
        name: &'a str,
        /// Consumer-derived discriminator, e.g. an `id` attribute value.
        qualifier: Option<&'a str>,
    },
    /// Text content. Always a leaf: followed by `Back`.
    Data(&'a str),
    /// An element (or a text leaf) was closed.
    Back,
}

impl<'a> Symbol<'a> {
    /// Unqualified element-open symbol.
    #[must_use]
    pub const fn tag(name: &'a str) -> Self {
        Self::Tag {
            name,
            qualifier: None,
        }
    }

    /// Element-open symbol carrying a qualifier.
    #[must_use]
    pub const fn qualified(name: &'a str, qualifier: &'a str) -> Self {
        Self::Tag {
            name,
            qualifier: Some(qualifier),
        }
    }

    /// Payload handed to `on_enter`: the text for `Data`, nothing otherwise.
    #[must_use]
    pub const fn payload(&self) -> Option<&'a str> {
        match self {
            Self::Data(text) => Some(*text),
            Self::Tag { .. } | Self::Back => None,
        }
    }
}

impl fmt::Display for Symbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag {
                name,
                qualifier: Some(q),
            } => write!(f, "<{name}#{q}>"),
            Self::Tag {
                name,
                qualifier: None,
            } => write!(f, "<{name}>"),
            Self::Data(text) => write!(f, "data({} bytes)", text.len()),
            Self::Back => f.write_str("back"),
        }
    }
}

/// Key of a transition table entry.
///
/// `Any` only ever appears here; it is never emitted as an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymbolKey {
    /// Matches an element-open symbol with exactly this name and qualifier.
    Tag {
        /// Tag name.
        name: String,
        /// Required qualifier, `None` matches only unqualified opens.
        qualifier: Option<String>,
    },
    /// Matches any `Data` symbol.
    Data,
    /// Wildcard, consulted when no exact entry matches.
    Any,
}

impl SymbolKey {
    /// Key for an element-open with the given name and qualifier.
    #[must_use]
    pub fn tag(name: &str, qualifier: Option<&str>) -> Self {
        Self::Tag {
            name: name.to_string(),
            qualifier: qualifier.map(str::to_string),
        }
    }

    /// Exact match against an emitted symbol. `Any` never matches exactly.
    #[must_use]
    pub fn matches(&self, symbol: &Symbol<'_>) -> bool {
        match (self, symbol) {
            (
                Self::Tag { name, qualifier },
                Symbol::Tag {
                    name: sym_name,
                    qualifier: sym_qualifier,
                },
            ) => name == sym_name && qualifier.as_deref() == *sym_qualifier,
            (Self::Data, Symbol::Data(_)) => true,
            _ => false,
        }
    }
}

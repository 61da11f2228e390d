//! Generic stack-based finite-state machine for tag-stream traversal.
//!
//! # Module Structure
//!
//! - `symbol`: states, emitted symbols and table keys
//! - `table`: transition targets and the immutable transition table
//! - `engine`: the traversal engine and its stack discipline
//!
//! # Usage
//!
//! ```rust
//! use rs_eclair::fsm::{State, Symbol, Target, TransitionTable, Transitions, TraversalEngine};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Heading { Title, Text }
//!
//! let table: TransitionTable<Heading, String> = TransitionTable::new()
//!     .with(State::Skip, Transitions::new().tag("h1", None, Target::new(Heading::Title)))
//!     .with(
//!         State::Named(Heading::Title),
//!         Transitions::new().data(Target::new(Heading::Text).on_enter(|out: &mut String, data| {
//!             out.push_str(data.unwrap_or_default());
//!             Ok(())
//!         })),
//!     );
//!
//! let mut title = String::new();
//! let mut engine = TraversalEngine::new(State::Skip, &table);
//! engine.transition(&mut title, Symbol::tag("section"))?;
//! engine.transition(&mut title, Symbol::tag("h1"))?;
//! engine.transition(&mut title, Symbol::Data("Hello"))?;
//! engine.transition(&mut title, Symbol::Back)?;
//! assert_eq!(title, "Hello");
//! assert_eq!(engine.depth(), 3);
//! # Ok::<(), rs_eclair::Error>(())
//! ```

pub mod engine;
pub mod symbol;
pub mod table;

pub use engine::TraversalEngine;
pub use symbol::{State, Symbol, SymbolKey};
pub use table::{EnterFn, ExitFn, Target, TransitionTable, Transitions};

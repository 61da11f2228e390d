//! # rs-eclair
//!
//! Extracts structured fields from HTML by driving a stack-based finite
//! state machine over a stream of tag events.
//!
//! The engine in [`fsm`] is generic: a consumer declares a transition table
//! keyed by state and symbol, attaches enter/exit callbacks that write into
//! its own record, and the engine takes care of nesting. [`problem`] is the
//! bundled consumer, which pulls the prefix, title and statement out of
//! Project Euler problem pages.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_eclair::extract_problem;
//!
//! let html = r#"<html><body>
//! <h2>Multiples of 3 or 5</h2>
//! <div id="problem_info"><h3>Problem 1</h3></div>
//! <div class="problem_content" role="problem"><p>Find the sum.</p></div>
//! </body></html>"#;
//!
//! let problem = extract_problem(html)?;
//! assert_eq!(problem.prefix, "Problem 1");
//! assert_eq!(problem.title, "Multiples of 3 or 5");
//! assert_eq!(problem.statement.trim(), "Find the sum.");
//! # Ok::<(), rs_eclair::Error>(())
//! ```
//!
//! ## Resolution chain
//!
//! For each element-open or text event the engine looks for an exact entry
//! in the current state, then the state's `Any` wildcard, and otherwise
//! enters `Skip`. Because `Skip` can carry its own transitions, recognition
//! resumes inside wrapper elements the table knows nothing about.

mod error;
mod options;

/// Generic stack-based traversal engine.
pub mod fsm;

/// Tokenizer event sink and engine adapter.
pub mod adapter;

/// HTML to tag-event tokenizer.
pub mod tokenizer;

/// Extractor trait tying a table to the tokenizer.
pub mod extract;

/// Project Euler problem record and transition table.
pub mod problem;

/// Response body charset detection and decoding.
pub mod encoding;

/// HTTP retrieval of problem pages.
pub mod fetch;

/// Text and JSON rendering.
pub mod render;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::Extractor;
pub use fetch::ProblemClient;
pub use options::FetchOptions;
pub use problem::{Problem, ProblemPageParser};
pub use render::{render, OutputFormat};

/// Extracts a problem from an HTML page.
///
/// Fields the page does not provide are left empty.
pub fn extract_problem(html: &str) -> Result<Problem> {
    ProblemPageParser::new().parse(html)
}

/// Extracts a problem from raw page bytes, detecting the charset from
/// `<meta>` declarations.
///
/// # Example
///
/// ```rust
/// use rs_eclair::extract_problem_bytes;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><h2>Caf\xE9</h2>";
/// let problem = extract_problem_bytes(html)?;
/// assert_eq!(problem.title, "Café");
/// # Ok::<(), rs_eclair::Error>(())
/// ```
pub fn extract_problem_bytes(html: &[u8]) -> Result<Problem> {
    extract_problem(&encoding::decode_body(html, None))
}

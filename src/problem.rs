//! Project Euler problem page extraction.
//!
//! The page layout this table targets:
//!
//! ```html
//! <h2>Multiples of 3 or 5</h2>
//! <div id="problem_info"><h3>Problem 1</h3> ...</div>
//! <div class="problem_content" role="problem">
//!   <p>If we list all the natural numbers below <var>10</var> ...</p>
//!   <p>Find the sum of all the multiples of 3 or 5 below 1000.</p>
//! </div>
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::adapter::attribute;
use crate::extract::Extractor;
use crate::fsm::{State, Target, TransitionTable, Transitions};
use crate::Result;

/// Title, prefix and statement of a problem.
///
/// Fields that the page did not provide are left empty; see
/// [`Problem::missing_fields`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Identifying prefix, e.g. `Problem 1`.
    pub prefix: String,

    /// Problem title.
    pub title: String,

    /// Statement body, one line per paragraph.
    pub statement: String,
}

impl Problem {
    /// Names of the fields that are still empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("prefix", &self.prefix),
            ("title", &self.title),
            ("statement", &self.statement),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}\n\n{}",
            self.prefix,
            self.title,
            self.statement.trim_matches('\n')
        )
    }
}

/// Traversal states of the problem page table.
///
/// Parsing starts in [`State::Skip`]; every container is recognized from
/// there, at any depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemState {
    /// Inside the `<h2>` title element.
    Title,
    /// Title text.
    TitleData,
    /// Inside `div#problem_info`.
    PrefixContainer,
    /// Inside the `<h3>` holding the prefix.
    Prefix,
    /// Prefix text.
    PrefixData,
    /// Inside the statement `div` (`role="problem"`).
    StatementContainer,
    /// Inside a statement paragraph.
    Statement,
    /// Inline markup inside a statement paragraph.
    StatementMarkup,
    /// Statement text.
    StatementData,
}

fn set_title(problem: &mut Problem, data: Option<&str>) -> Result<()> {
    if let Some(text) = data.filter(|t| !t.trim().is_empty()) {
        problem.title = text.to_string();
    }
    Ok(())
}

fn set_prefix(problem: &mut Problem, data: Option<&str>) -> Result<()> {
    if let Some(text) = data.filter(|t| !t.trim().is_empty()) {
        problem.prefix = text.to_string();
    }
    Ok(())
}

fn extend_statement(problem: &mut Problem, data: Option<&str>) -> Result<()> {
    problem.statement.push_str(data.unwrap_or_default());
    Ok(())
}

fn end_paragraph(problem: &mut Problem) -> Result<()> {
    problem.statement.push('\n');
    Ok(())
}

fn statement_text() -> Target<ProblemState, Problem> {
    Target::new(ProblemState::StatementData).on_enter(extend_statement)
}

/// Build the problem page transition table.
#[must_use]
pub fn build_transitions() -> TransitionTable<ProblemState, Problem> {
    use ProblemState::{
        Prefix, PrefixContainer, PrefixData, Statement, StatementContainer, StatementMarkup,
        Title, TitleData,
    };

    TransitionTable::new()
        .with(
            State::Skip,
            Transitions::new()
                .tag("h2", None, Target::new(Title))
                .tag("div", Some("problem_info"), Target::new(PrefixContainer))
                .tag("div", Some("problem"), Target::new(StatementContainer)),
        )
        .with(
            State::Named(Title),
            Transitions::new().data(Target::new(TitleData).on_enter(set_title)),
        )
        .with(
            State::Named(PrefixContainer),
            Transitions::new().tag("h3", None, Target::new(Prefix)),
        )
        .with(
            State::Named(Prefix),
            Transitions::new().data(Target::new(PrefixData).on_enter(set_prefix)),
        )
        .with(
            State::Named(StatementContainer),
            Transitions::new()
                .tag("p", None, Target::new(Statement).on_exit(end_paragraph))
                .data(statement_text()),
        )
        .with(
            State::Named(Statement),
            Transitions::new()
                .data(statement_text())
                .any(Target::new(StatementMarkup)),
        )
        .with(
            State::Named(StatementMarkup),
            Transitions::new().data(statement_text()),
        )
}

/// Qualifier for problem pages: the `id` attribute, falling back to `role`.
#[must_use]
pub fn extract_qualifier(attrs: &[(String, String)]) -> Option<String> {
    attribute(attrs, "id")
        .or_else(|| attribute(attrs, "role"))
        .map(str::to_string)
}

/// Extracts a [`Problem`] from a problem page.
///
/// The transition table is built once and reused for every page.
pub struct ProblemPageParser {
    table: TransitionTable<ProblemState, Problem>,
}

impl ProblemPageParser {
    /// Create a parser with a freshly built table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: build_transitions(),
        }
    }

    /// Extract the problem from `html`.
    pub fn parse(&self, html: &str) -> Result<Problem> {
        self.extract(html)
    }
}

impl Default for ProblemPageParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for ProblemPageParser {
    type State = ProblemState;
    type Record = Problem;

    fn transitions(&self) -> &TransitionTable<ProblemState, Problem> {
        &self.table
    }

    fn start_state(&self) -> State<ProblemState> {
        State::Skip
    }

    fn qualifier(attrs: &[(String, String)]) -> Option<String> {
        extract_qualifier(attrs)
    }
}

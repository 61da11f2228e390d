//! Rendering of extracted problems.

use std::fmt;
use std::str::FromStr;

use crate::problem::Problem;
use crate::{Error, Result};

/// Output format, selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `prefix: title`, a blank line, then the statement.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

impl OutputFormat {
    /// Names accepted by [`FromStr`].
    pub const NAMES: &'static [&'static str] = &["text", "json"];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `problem` in the given format.
pub fn render(problem: &Problem, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(problem.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(problem)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Problem {
        Problem {
            prefix: "Problem 1".to_string(),
            title: "Multiples of 3 or 5".to_string(),
            statement: "Find the sum of all the multiples of 3 or 5 below 1000.\n".to_string(),
        }
    }

    #[test]
    fn test_parse_format_names() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(Error::UnknownFormat(name)) if name == "yaml"
        ));
    }

    #[test]
    fn test_names_round_trip() {
        for name in OutputFormat::NAMES {
            let format: OutputFormat = name.parse().unwrap();
            assert_eq!(format.name(), *name);
        }
    }

    #[test]
    fn test_render_text() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Problem 1: Multiples of 3 or 5\n\nFind the sum of all the multiples of 3 or 5 below 1000."
        );
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["prefix"], "Problem 1");
        assert_eq!(value["title"], "Multiples of 3 or 5");
    }
}

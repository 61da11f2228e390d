//! Configuration for problem retrieval.
//!
//! `FetchOptions` controls where problem pages are fetched from and how the
//! HTTP client behaves. All fields have serde defaults, so a partial JSON
//! document is a valid configuration.

use serde::{Deserialize, Serialize};

/// Configuration options for [`ProblemClient`](crate::fetch::ProblemClient).
///
/// # Example
///
/// ```rust
/// use rs_eclair::FetchOptions;
///
/// let options = FetchOptions {
///     timeout: 5,
///     ..FetchOptions::default()
/// };
/// assert_eq!(options.base_url, "https://projecteuler.net");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOptions {
    /// Site root; the problem query is appended as a path segment.
    ///
    /// Default: `https://projecteuler.net`
    #[serde(default = "FetchOptions::default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    ///
    /// Default: `10`
    #[serde(default = "FetchOptions::default_timeout")]
    pub timeout: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "FetchOptions::default_user_agent")]
    pub user_agent: String,

    /// Highest problem number picked by the random command.
    ///
    /// Default: `757`
    #[serde(default = "FetchOptions::default_max_problem")]
    pub max_problem: u32,
}

impl FetchOptions {
    fn default_base_url() -> String {
        "https://projecteuler.net".to_string()
    }

    const fn default_timeout() -> u64 {
        10
    }

    fn default_user_agent() -> String {
        format!("eclair/{}", env!("CARGO_PKG_VERSION"))
    }

    const fn default_max_problem() -> u32 {
        757
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
            max_problem: Self::default_max_problem(),
        }
    }
}

//! Problem page retrieval.
//!
//! Fetches a problem page by number, decodes the body and runs it through
//! [`ProblemPageParser`]. No retries: a failed request or non-success
//! status is returned to the caller.

use std::time::Duration;

use rand::Rng;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::encoding::decode_body;
use crate::options::FetchOptions;
use crate::problem::{Problem, ProblemPageParser};
use crate::{Error, Result};

/// HTTP client for problem pages.
pub struct ProblemClient {
    client: Client,
    options: FetchOptions,
}

impl ProblemClient {
    /// Build a client from `options`.
    pub fn new(options: FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout))
            .user_agent(options.user_agent.as_str())
            .build()?;

        Ok(Self { client, options })
    }

    /// Options this client was built with.
    #[must_use]
    pub const fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// URL of problem `number`, e.g. `https://projecteuler.net/problem=1`.
    pub fn problem_url(&self, number: u32) -> Result<Url> {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("problem", &number.to_string())
            .finish();
        let base = self.options.base_url.trim_end_matches('/');

        Ok(Url::parse(&format!("{base}/{query}"))?)
    }

    /// Uniformly random problem number in `1..=max_problem`.
    #[must_use]
    pub fn random_number(&self) -> u32 {
        rand::thread_rng().gen_range(1..=self.options.max_problem.max(1))
    }

    /// Fetch problem `number` and return the decoded page.
    pub async fn fetch_page(&self, number: u32) -> Result<String> {
        let url = self.problem_url(number)?;
        debug!("Executing query to {url}");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        debug!("Got {status} response");

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        Ok(decode_body(&body, content_type.as_deref()))
    }

    /// Fetch and extract problem `number`.
    pub async fn get_problem(&self, number: u32) -> Result<Problem> {
        let html = self.fetch_page(number).await?;
        ProblemPageParser::new().parse(&html)
    }
}

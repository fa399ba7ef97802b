//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured timeout
//! - Rotating the User-Agent on every attempt
//! - Classifying each attempt's outcome
//! - The bounded, fixed-delay retry loop

use crate::config::FetcherConfig;
use crate::crawler::identity::{IdentityProvider, RandomUserAgents};
use crate::crawler::retry::{attempts_for, RetryPolicy, Sleeper, TokioSleeper};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Outcome of a single request attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// HTTP 200; carries the page body
    Success(String),

    /// HTTP 403: worth retrying with another identity
    Blocked(StatusCode),

    /// Any other status, including other 2xx codes: terminal for this URL
    Failed(StatusCode),

    /// Connection error, timeout, or unreadable body
    Transport(String),
}

/// Result of a fetch across all attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Retrieved the page body
    Success {
        body: String,
        attempts: u32,
    },

    /// Server answered with a non-retryable status
    Failed {
        status_code: u16,
        attempts: u32,
    },

    /// Every attempt was blocked or hit a transport error
    Exhausted {
        attempts: u32,
    },
}

impl FetchResult {
    /// Number of requests that were issued
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Success { attempts, .. }
            | Self::Failed { attempts, .. }
            | Self::Exhausted { attempts } => *attempts,
        }
    }

    /// The page body, if the fetch succeeded
    pub fn into_body(self) -> Option<String> {
        match self {
            Self::Success { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Retrieves page bodies for the crawl engine
///
/// `None` means "no content to expand"; the reason has already been logged.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Option<String>;
}

/// Builds an HTTP client with the configured request timeout
///
/// The User-Agent is not set here; it is chosen per attempt.
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetcher backed by `reqwest`
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | HTTP 200 | Return body |
/// | HTTP 403 | Retry with a new identity |
/// | Timeout / connection error | Retry |
/// | Any other status | Give up immediately |
///
/// At most `max_retries + 1` attempts are made, with the policy's fixed delay
/// between consecutive attempts.
#[derive(Debug)]
pub struct HttpFetcher<I = RandomUserAgents, S = TokioSleeper> {
    client: Client,
    identities: I,
    sleeper: S,
    policy: RetryPolicy,
}

impl HttpFetcher<RandomUserAgents, TokioSleeper> {
    /// Builds the production fetcher: random identities and real delays
    pub fn from_config(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            build_http_client(config)?,
            RandomUserAgents::from_config(config),
            TokioSleeper,
            RetryPolicy::from_config(config),
        ))
    }
}

impl<I: IdentityProvider, S: Sleeper> HttpFetcher<I, S> {
    pub fn new(client: Client, identities: I, sleeper: S, policy: RetryPolicy) -> Self {
        Self {
            client,
            identities,
            sleeper,
            policy,
        }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Fetches a URL using the configured retry count
    pub async fn fetch_page(&self, url: &Url) -> FetchResult {
        self.fetch_with_retries(url, self.policy.max_retries).await
    }

    /// Fetches a URL, making at most `max_retries + 1` attempts
    pub async fn fetch_with_retries(&self, url: &Url, max_retries: u32) -> FetchResult {
        let total_attempts = attempts_for(max_retries);

        for attempt in 1..=total_attempts {
            let identity = self.identities.next_identity();
            tracing::info!(
                "Attempt {}: Fetching {} with User-Agent: {}",
                attempt,
                url,
                identity
            );

            match self.attempt(url, &identity).await {
                AttemptOutcome::Success(body) => {
                    tracing::info!("Success: Retrieved {}", url);
                    return FetchResult::Success {
                        body,
                        attempts: attempt,
                    };
                }
                AttemptOutcome::Blocked(status) => {
                    tracing::warn!(
                        "Forbidden: {} returned {}, trying again with a different User-Agent",
                        url,
                        status
                    );
                }
                AttemptOutcome::Failed(status) => {
                    tracing::warn!("Failed: {} returned {}", url, status);
                    return FetchResult::Failed {
                        status_code: status.as_u16(),
                        attempts: attempt,
                    };
                }
                AttemptOutcome::Transport(error) => {
                    tracing::warn!("Error fetching {}: {}", url, error);
                }
            }

            if attempt < total_attempts {
                self.sleeper.sleep(self.policy.delay).await;
            }
        }

        tracing::warn!(
            "Failed to retrieve {} after {} attempts",
            url,
            total_attempts
        );
        FetchResult::Exhausted {
            attempts: total_attempts,
        }
    }

    /// Issues one GET request and classifies the response
    pub async fn attempt(&self, url: &Url, identity: &str) -> AttemptOutcome {
        let response = match self
            .client
            .get(url.clone())
            .header(USER_AGENT, identity)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return AttemptOutcome::Transport(describe_transport_error(&e)),
        };

        let status = response.status();
        if status == StatusCode::OK {
            match response.text().await {
                Ok(body) => AttemptOutcome::Success(body),
                Err(e) => AttemptOutcome::Transport(format!("failed to read body: {}", e)),
            }
        } else if status == StatusCode::FORBIDDEN {
            AttemptOutcome::Blocked(status)
        } else {
            AttemptOutcome::Failed(status)
        }
    }
}

#[async_trait]
impl<I: IdentityProvider, S: Sleeper> PageFetcher for HttpFetcher<I, S> {
    async fn fetch(&self, url: &Url) -> Option<String> {
        self.fetch_page(url).await.into_body()
    }
}

fn describe_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    }
}

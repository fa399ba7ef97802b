//! Client identity (User-Agent) selection
//!
//! The fetcher asks for a fresh identity on every attempt so that a server
//! blocking one browser string may accept the next.

use crate::config::FetcherConfig;
use rand::seq::SliceRandom;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Supplies the User-Agent for the next request attempt
pub trait IdentityProvider: Send + Sync {
    fn next_identity(&self) -> String;
}

/// Picks a User-Agent uniformly at random from a fixed pool
#[derive(Debug, Clone)]
pub struct RandomUserAgents {
    pool: Vec<String>,
}

impl RandomUserAgents {
    pub fn new(pool: Vec<String>) -> Self {
        Self { pool }
    }

    pub fn from_config(config: &FetcherConfig) -> Self {
        Self::new(config.user_agents.clone())
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }
}

impl IdentityProvider for RandomUserAgents {
    fn next_identity(&self) -> String {
        self.pool
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}

/// Hands out identities from a fixed list in order, wrapping around
///
/// Deterministic counterpart of [`RandomUserAgents`].
#[derive(Debug)]
pub struct RotatingIdentities {
    identities: Vec<String>,
    next: AtomicUsize,
}

impl RotatingIdentities {
    pub fn new<I, S>(identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identities: identities.into_iter().map(Into::into).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

impl IdentityProvider for RotatingIdentities {
    fn next_identity(&self) -> String {
        if self.identities.is_empty() {
            return String::new();
        }
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.identities.len();
        self.identities[index].clone()
    }
}

//! Client for the public random-joke API.
//!
//! Exposes [`JokeApi`], a thin [`reqwest`] wrapper, behind the
//! [`JokeSource`] trait so callers can swap in a fixed source.

pub mod api;

use async_trait::async_trait;

pub use api::{Joke, JokeApi, JokeApiError};

/// Endpoint used when none is configured.
pub const DEFAULT_JOKE_URL: &str = "https://official-joke-api.appspot.com/random_joke";

/// Anything that can produce one joke line per call.
#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Fetch a fresh joke formatted as `"{setup} - {punchline}"`.
    async fn random_joke(&self) -> Result<String, JokeApiError>;
}

#[async_trait]
impl JokeSource for JokeApi {
    async fn random_joke(&self) -> Result<String, JokeApiError> {
        Ok(self.fetch().await?.line())
    }
}

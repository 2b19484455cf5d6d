//! REST client for the random-joke endpoint.

use serde::Deserialize;

/// HTTP client for a single joke endpoint.
#[derive(Debug, Clone)]
pub struct JokeApi {
    client: reqwest::Client,
    url: String,
}

/// Body returned by the joke endpoint. Fields other than `setup` and
/// `punchline` (`id`, `type`) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    /// The single-line form exposed by the API: `"{setup} - {punchline}"`.
    pub fn line(&self) -> String {
        format!("{} - {}", self.setup, self.punchline)
    }
}

/// Errors from the joke REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum JokeApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Joke API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl JokeApi {
    /// Create a client for the endpoint at `url`.
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch one random joke with a `GET` to the configured URL.
    pub async fn fetch(&self) -> Result<Joke, JokeApiError> {
        let response = self.client.get(&self.url).send().await?;
        let joke = Self::parse_response::<Joke>(response).await?;
        tracing::trace!(setup = %joke.setup, "Fetched joke");
        Ok(joke)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or an
    /// [`JokeApiError::ApiError`] with the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, JokeApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(JokeApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, JokeApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

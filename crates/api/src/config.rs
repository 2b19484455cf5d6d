use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;

/// Configuration problems detected at startup. Any of these aborts the
/// process before it serves a request.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the MongoDB connection string has a default suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// MongoDB connection string (required).
    pub mongo_url: String,
    /// Database holding the `vehicles` and `parts` collections.
    pub mongo_db: String,
    /// Joke enrichment settings.
    pub jokes: JokeConfig,
}

/// How vehicles are enriched with jokes.
#[derive(Debug, Clone)]
pub struct JokeConfig {
    /// Endpoint returning `{ "setup", "punchline" }`.
    pub url: String,
    /// Upper bound on a single joke request.
    pub timeout: Duration,
    /// Maximum joke requests in flight for one resolver call.
    pub concurrency: usize,
    /// When set (the default), a failed or timed-out joke fails the whole
    /// request. When cleared, `joke` is left null and a warning is logged.
    pub strict: bool,
}

impl Default for JokeConfig {
    fn default() -> Self {
        Self {
            url: garage_jokes::DEFAULT_JOKE_URL.to_string(),
            timeout: Duration::from_millis(5000),
            concurrency: 8,
            strict: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                             |
    /// |------------------------|-----------------------------------------------------|
    /// | `MONGO_URL`            | required                                            |
    /// | `MONGO_DB`             | `classic_cars`                                      |
    /// | `HOST`                 | `0.0.0.0`                                           |
    /// | `PORT`                 | `4000`                                              |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                             |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                                |
    /// | `JOKE_API_URL`         | `https://official-joke-api.appspot.com/random_joke` |
    /// | `JOKE_TIMEOUT_MS`      | `5000`                                              |
    /// | `JOKE_CONCURRENCY`     | `8`                                                 |
    /// | `JOKE_STRICT`          | `true`                                              |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_url = lookup("MONGO_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("MONGO_URL"))?;

        let mongo_db = lookup("MONGO_DB")
            .filter(|db| !db.trim().is_empty())
            .unwrap_or_else(|| garage_db::DEFAULT_DATABASE.to_string());

        let host = parse_or(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_or(&lookup, "PORT", 4000u16)?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                let invalid = || ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    value: origin.to_string(),
                };
                // Credentials are allowed, so origins must be listed explicitly.
                if origin == "*" {
                    return Err(invalid());
                }
                origin.parse::<HeaderValue>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;

        let defaults = JokeConfig::default();
        let url = lookup("JOKE_API_URL").unwrap_or(defaults.url);
        let timeout_ms = parse_or(&lookup, "JOKE_TIMEOUT_MS", 5000u64)?;
        let concurrency = parse_or(&lookup, "JOKE_CONCURRENCY", defaults.concurrency)?;
        if concurrency == 0 {
            return Err(ConfigError::Invalid {
                key: "JOKE_CONCURRENCY",
                value: "0".to_string(),
            });
        }
        let strict = parse_or(&lookup, "JOKE_STRICT", defaults.strict)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            mongo_url,
            mongo_db,
            jokes: JokeConfig {
                url,
                timeout: Duration::from_millis(timeout_ms),
                concurrency,
                strict,
            },
        })
    }
}

/// Parse `key` if present, otherwise fall back to `default`.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value: raw,
        }),
        None => Ok(default),
    }
}

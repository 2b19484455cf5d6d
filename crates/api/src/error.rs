use std::time::Duration;

use async_graphql::ErrorExtensions;
use garage_core::error::CoreError;
use garage_jokes::JokeApiError;

/// Application-level error type for resolvers.
///
/// Wraps [`CoreError`] for domain errors and adds the upstream failures.
/// Converts into an `async_graphql::Error` carrying an `extensions.code`, so
/// every failure reaches the caller through the standard GraphQL `errors`
/// array.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `garage_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A document-store error from the MongoDB driver.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The joke endpoint failed.
    #[error("Joke service error: {0}")]
    Joke(#[from] JokeApiError),

    /// The joke endpoint did not answer in time.
    #[error("Joke service timed out after {0:?}")]
    JokeTimeout(Duration),
}

/// Convenience type alias for fallible resolver helpers.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify into an error code and a client-facing message.
    ///
    /// Upstream failures are logged here and reported with a sanitized
    /// message; their details never reach the caller.
    fn classify(&self) -> (&'static str, String) {
        match self {
            AppError::Core(CoreError::InvalidId(raw)) => {
                ("INVALID_ID", format!("Invalid id: {raw}"))
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }
            AppError::Joke(err) => {
                tracing::error!(error = %err, "Joke service error");
                internal()
            }
            AppError::JokeTimeout(after) => {
                tracing::error!(?after, "Joke service timed out");
                internal()
            }
        }
    }
}

fn internal() -> (&'static str, String) {
    ("INTERNAL_ERROR", "An internal error occurred".to_string())
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let (code, message) = self.classify();
        async_graphql::Error::new(message).extend_with(|_, e| e.set("code", code))
    }
}

/// Map any error convertible into [`AppError`] onto a GraphQL error.
///
/// `async_graphql::Error` has a blanket `From<impl Display>`, so plain `?`
/// would leak raw driver messages; resolvers go through this instead.
pub trait GraphQLResultExt<T> {
    fn map_gql_err(self) -> async_graphql::Result<T>;
}

impl<T, E> GraphQLResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn map_gql_err(self) -> async_graphql::Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            err.extend()
        })
    }
}

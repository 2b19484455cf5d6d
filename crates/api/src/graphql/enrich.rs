//! Per-vehicle enrichment: parts lookup and joke fetching.
//!
//! List resolvers fan out one enrichment per vehicle. The fan-out runs as
//! an ordered stream with at most [`JokeEnricher::concurrency`] items in
//! flight, and each joke call is bounded by a timeout. The resolver returns
//! only once every vehicle is enriched.

use std::sync::Arc;
use std::time::Duration;

use futures::{stream, StreamExt, TryStreamExt};
use garage_core::types::DbId;
use garage_db::models::vehicle::Vehicle as VehicleDocument;
use garage_db::DataContext;
use garage_jokes::JokeSource;

use crate::config::JokeConfig;
use crate::error::{AppError, AppResult};
use crate::graphql::types::{Part, Vehicle};

/// Fetches jokes under a timeout, a concurrency limit, and a failure policy.
#[derive(Clone)]
pub struct JokeEnricher {
    source: Arc<dyn JokeSource>,
    timeout: Duration,
    concurrency: usize,
    strict: bool,
}

impl JokeEnricher {
    pub fn new(source: Arc<dyn JokeSource>, config: &JokeConfig) -> Self {
        Self {
            source,
            timeout: config.timeout,
            concurrency: config.concurrency.max(1),
            strict: config.strict,
        }
    }

    /// Maximum enrichments in flight for one resolver call.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Fetch one joke.
    ///
    /// A failed or timed-out call yields `None` and a warning, unless the
    /// enricher is strict, in which case the error is returned.
    pub async fn joke(&self) -> AppResult<Option<String>> {
        let err = match tokio::time::timeout(self.timeout, self.source.random_joke()).await {
            Ok(Ok(line)) => return Ok(Some(line)),
            Ok(Err(err)) => AppError::from(err),
            Err(_) => AppError::JokeTimeout(self.timeout),
        };

        if self.strict {
            return Err(err);
        }
        tracing::warn!(error = %err, "Joke unavailable, leaving it empty");
        Ok(None)
    }
}

/// Load the parts referencing `vehicle_id`, shaped for the API.
pub async fn parts_of(data: &DataContext, vehicle_id: DbId) -> AppResult<Vec<Part>> {
    let parts = data.parts.list_by_vehicle(vehicle_id).await?;
    Ok(parts.into_iter().map(Part::from).collect())
}

/// Attach parts and a joke to one vehicle. Both lookups run concurrently.
pub async fn with_parts_and_joke(
    data: &DataContext,
    jokes: &JokeEnricher,
    document: VehicleDocument,
) -> AppResult<Vehicle> {
    let (parts, joke) = tokio::try_join!(parts_of(data, document.id), jokes.joke())?;
    Ok(Vehicle::from_document(document, parts, joke))
}

/// Attach parts and a joke to every vehicle, preserving order.
pub async fn all_with_parts_and_jokes(
    data: &DataContext,
    jokes: &JokeEnricher,
    documents: Vec<VehicleDocument>,
) -> AppResult<Vec<Vehicle>> {
    stream::iter(documents)
        .map(|document| with_parts_and_joke(data, jokes, document))
        .buffered(jokes.concurrency())
        .try_collect()
        .await
}

/// Attach a joke, but no parts, to every vehicle, preserving order.
pub async fn all_with_jokes(
    jokes: &JokeEnricher,
    documents: Vec<VehicleDocument>,
) -> AppResult<Vec<Vehicle>> {
    stream::iter(documents)
        .map(|document| async move {
            let joke = jokes.joke().await?;
            Ok::<_, AppError>(Vehicle::from_document(document, Vec::new(), joke))
        })
        .buffered(jokes.concurrency())
        .try_collect()
        .await
}

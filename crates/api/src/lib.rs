//! Classic-cars GraphQL API server library.
//!
//! Exposes the core building blocks (config, state, error handling, schema,
//! routes) so integration tests and the binary entrypoint can both access
//! them.

pub mod config;
pub mod error;
pub mod graphql;
pub mod router;
pub mod routes;
pub mod state;

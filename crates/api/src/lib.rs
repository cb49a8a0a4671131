//! Murasaki site API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! locale detection) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod locale;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;

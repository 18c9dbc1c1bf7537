//! pinmap API server library.
//!
//! Exposes the building blocks (config, state, error handling, DTOs,
//! routes, router) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;

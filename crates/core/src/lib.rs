//! Shared domain types and pure logic for the pinmap platform.
//!
//! Everything here is I/O-free: wire-shaped models, the domain error
//! taxonomy, geo/content validation, the tag-filter projection, and the
//! hard-coded map settings defaults. Both the API server and the client
//! state crate build on these.

pub mod content;
pub mod error;
pub mod filter;
pub mod geo;
pub mod model;
pub mod settings;
pub mod types;

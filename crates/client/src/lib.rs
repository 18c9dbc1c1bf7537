//! Client state layer for the pinmap API.
//!
//! Holds an in-memory mirror of each remote collection (pins, tags,
//! boundary, settings) with per-collection loading and error flags,
//! exposes load and mutation operations that synchronize the mirror with
//! the server, derived projections for rendering, and optional JSON
//! snapshot persistence so a restart starts from the last known state.
//!
//! Every remote-call wrapper converts failures into a display string on
//! the affected collection and never propagates them; there is no retry
//! or backoff.

pub mod api;
pub mod collection;
pub mod error;
pub mod persist;
pub mod store;

pub use api::{ApiClient, PinDraft, PinUpdate, TagDraft};
pub use collection::Collection;
pub use error::ClientError;
pub use persist::SnapshotStore;
pub use store::Store;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Statements are fixed and
//! parameterized; no transactions span multiple statements.

pub mod boundary_repo;
pub mod pin_repo;
pub mod settings_repo;
pub mod tag_repo;

pub use boundary_repo::BoundaryRepo;
pub use pin_repo::PinRepo;
pub use settings_repo::SettingsRepo;
pub use tag_repo::TagRepo;

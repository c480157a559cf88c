//! Concrete repository implementations.
//!
//! - [`PgLinkRepository`] / [`PgClickRepository`] - PostgreSQL via sqlx
//! - [`MemoryLinkRepository`] / [`MemoryClickRepository`] - in-memory, used by
//!   handler-level tests

pub mod memory;
pub mod pg_click_repository;
pub mod pg_link_repository;

pub use memory::{MemoryClickRepository, MemoryLinkRepository};
pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;

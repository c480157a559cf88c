//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; concrete implementations live
//! in [`crate::infrastructure::persistence`]. Mock implementations are
//! auto-generated via `mockall` for unit testing the services.
//!
//! - [`LinkRepository`] - insert-if-absent and point lookup for short links
//! - [`ClickRepository`] - append-only click log with count/recent reads

pub mod click_repository;
pub mod link_repository;

pub use click_repository::ClickRepository;
pub use link_repository::{InsertOutcome, LinkRepository};

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;

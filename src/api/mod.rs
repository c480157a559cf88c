//! API layer: HTTP handlers, DTOs, extractors, and middleware.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;

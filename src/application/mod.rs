//! Application layer containing business logic services.

pub mod services;

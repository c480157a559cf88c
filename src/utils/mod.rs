//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Short code generation policy and custom code validation
//! - [`url_validator`] - Target URL validation
//! - [`request_host`] - Host and client IP extraction from HTTP headers

pub mod code_generator;
pub mod request_host;
pub mod url_validator;

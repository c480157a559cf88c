//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`ShortLink`] - A shortened URL mapping with an optional validity window
//! - [`ClickEvent`] - One immutable record of a redirect resolution
//!
//! Creation inputs follow the "New Type" pattern ([`NewShortLink`],
//! [`NewClickEvent`]); [`ClickContext`] carries the request-side metadata
//! before it is stamped into an event.

pub mod click;
pub mod link;

pub use click::{ClickContext, ClickEvent, NewClickEvent};
pub use link::{NewShortLink, ShortLink};

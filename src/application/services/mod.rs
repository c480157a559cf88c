//! Application services orchestrating the domain logic.
//!
//! - [`LinkService`] - shortcode allocation (validation, generation, retry)
//! - [`RedirectService`] - resolution, expiry enforcement, click recording
//! - [`StatsService`] - click count and recent-event aggregation

pub mod link_service;
pub mod redirect_service;
pub mod stats_service;

pub use link_service::LinkService;
pub use redirect_service::{ClickFailurePolicy, RedirectService};
pub use stats_service::{LinkStats, StatsService, RECENT_EVENTS_LIMIT};

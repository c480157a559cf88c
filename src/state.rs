use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService, StatsService};

/// Shared application state injected into all handlers.
///
/// Services carry their repository handles internally, so the state is just
/// cheaply cloneable `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        redirect_service: Arc<RedirectService>,
        stats_service: Arc<StatsService>,
    ) -> Self {
        Self {
            link_service,
            redirect_service,
            stats_service,
        }
    }
}

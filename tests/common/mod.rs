#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use chrono::{DateTime, Duration, Utc};
use shorturls::api::handlers::{
    health_handler, redirect_handler, shorten_handler, stats_handler,
};
use shorturls::application::services::{
    ClickFailurePolicy, LinkService, RedirectService, StatsService,
};
use shorturls::domain::entities::{NewClickEvent, ShortLink};
use shorturls::domain::repositories::ClickRepository;
use shorturls::infrastructure::persistence::{MemoryClickRepository, MemoryLinkRepository};
use shorturls::state::AppState;

/// Handler-test fixture: app state wired to in-memory repositories, with the
/// repositories exposed for direct seeding and inspection.
pub struct TestContext {
    pub state: AppState,
    pub links: Arc<MemoryLinkRepository>,
    pub clicks: Arc<MemoryClickRepository>,
}

pub fn create_test_context() -> TestContext {
    create_test_context_with_policy(ClickFailurePolicy::Propagate)
}

pub fn create_test_context_with_policy(policy: ClickFailurePolicy) -> TestContext {
    let links = Arc::new(MemoryLinkRepository::new());
    let clicks = Arc::new(MemoryClickRepository::new());

    let link_repo: Arc<dyn shorturls::domain::repositories::LinkRepository> = links.clone();
    let click_repo: Arc<dyn shorturls::domain::repositories::ClickRepository> = clicks.clone();

    let state = AppState::new(
        Arc::new(LinkService::new(link_repo.clone())),
        Arc::new(RedirectService::new(
            link_repo.clone(),
            click_repo.clone(),
            policy,
        )),
        Arc::new(StatsService::new(link_repo, click_repo)),
    );

    TestContext {
        state,
        links,
        clicks,
    }
}

/// Full application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{code}/stats", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Seeds a link row directly, bypassing allocation.
pub fn seed_link(
    ctx: &TestContext,
    code: &str,
    url: &str,
    expires_at: Option<DateTime<Utc>>,
) {
    ctx.links.seed(ShortLink {
        code: code.to_string(),
        original_url: url.to_string(),
        created_at: Utc::now() - Duration::minutes(10),
        expires_at,
        is_custom: false,
    });
}

/// Appends `n` click events for `code` with strictly increasing timestamps.
pub async fn seed_clicks(ctx: &TestContext, code: &str, n: usize) {
    let base = Utc::now() - Duration::minutes(n as i64);

    for i in 0..n {
        ctx.clicks
            .append(NewClickEvent {
                code: code.to_string(),
                clicked_at: base + Duration::minutes(i as i64),
                referer: Some(format!("https://ref.example/{i}")),
                user_agent: None,
                ip: None,
                country_hint: None,
            })
            .await
            .unwrap();
    }
}

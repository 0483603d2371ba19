//! Shared application state injected into all handlers.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{LinkService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::infrastructure::cache::CacheService;

/// State shared by every request handler.
///
/// Cloned per request; all members are reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
    pub cache: Arc<dyn CacheService>,
    /// Producer side of the click worker queue.
    pub click_sender: mpsc::Sender<ClickEvent>,
}

impl AppState {
    /// Wires services on top of the given repositories.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        stats_repository: Arc<dyn StatsRepository>,
        cache: Arc<dyn CacheService>,
        click_sender: mpsc::Sender<ClickEvent>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone(), base_url)),
            stats_service: Arc::new(StatsService::new(link_repository, stats_repository)),
            cache,
            click_sender,
        }
    }
}

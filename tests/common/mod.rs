#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::{get, post};
use chrono::Utc;
use rustify::api::handlers::{health_handler, resolve_handler, shorten_handler, stats_handler};
use rustify::client::{QrImage, ResultView};
use rustify::domain::click_event::ClickEvent;
use rustify::domain::entities::{ClickBatch, Link, NewClickBatch, NewLink};
use rustify::domain::repositories::{LinkRepository, StatsRepository};
use rustify::error::AppError;
use rustify::infrastructure::cache::{CacheError, CacheResult, CacheService, NullCache};
use rustify::state::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

pub const BASE_URL: &str = "http://s.test";

/// Link storage backed by a `HashMap`.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<HashMap<String, Link>>,
    down: AtomicBool,
}

impl InMemoryLinkRepository {
    pub fn insert(&self, alias: &str, url: &str) {
        self.links.lock().unwrap().insert(
            alias.to_string(),
            Link::new(alias.to_string(), url.to_string(), Utc::now()),
        );
    }

    pub fn get(&self, alias: &str) -> Option<Link> {
        self.links.lock().unwrap().get(alias).cloned()
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    /// Makes every call fail like an unreachable database.
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(AppError::internal("database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<Option<Link>, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();
        if links.contains_key(&new_link.alias) {
            return Ok(None);
        }

        let link = Link::new(new_link.alias.clone(), new_link.url, Utc::now());
        links.insert(new_link.alias, link.clone());
        Ok(Some(link))
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<Link>, AppError> {
        self.check()?;
        Ok(self.get(alias))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

/// Click storage keeping every batch in memory.
#[derive(Default)]
pub struct InMemoryStatsRepository {
    batches: Mutex<Vec<ClickBatch>>,
}

impl InMemoryStatsRepository {
    pub fn batches(&self) -> Vec<ClickBatch> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsRepository for InMemoryStatsRepository {
    async fn record_clicks(&self, batch: NewClickBatch) -> Result<ClickBatch, AppError> {
        let batch = ClickBatch {
            alias: batch.alias,
            ts: Utc::now(),
            n: batch.n,
        };
        self.batches.lock().unwrap().push(batch.clone());
        Ok(batch)
    }

    async fn total_clicks(&self, alias: &str) -> Result<i64, AppError> {
        Ok(self
            .batches
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.alias == alias)
            .map(|b| b.n)
            .sum())
    }
}

/// Cache backed by a `HashMap`, for asserting cache reads and writes.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn get(&self, alias: &str) -> Option<String> {
        self.entries.lock().unwrap().get(alias).cloned()
    }

    pub fn put(&self, alias: &str, url: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(alias.to_string(), url.to_string());
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_target(&self, alias: &str) -> CacheResult<Option<String>> {
        Ok(self.get(alias))
    }

    async fn set_target(&self, alias: &str, url: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        self.put(alias, url);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Cache whose backend is always down. Counts the writes attempted on it.
#[derive(Default)]
pub struct FailingCache {
    writes: Mutex<usize>,
}

impl FailingCache {
    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl CacheService for FailingCache {
    async fn get_target(&self, alias: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Operation(format!("GET {alias}: connection refused")))
    }

    async fn set_target(&self, alias: &str, _url: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        *self.writes.lock().unwrap() += 1;
        Err(CacheError::Operation(format!("SET {alias}: connection refused")))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub struct TestApp {
    pub state: AppState,
    pub click_rx: mpsc::Receiver<ClickEvent>,
    pub links: Arc<InMemoryLinkRepository>,
    pub stats: Arc<InMemoryStatsRepository>,
}

pub fn create_test_state() -> TestApp {
    create_test_state_with(Arc::new(NullCache::new()), 100, BASE_URL)
}

pub fn create_test_state_with(
    cache: Arc<dyn CacheService>,
    queue_capacity: usize,
    base_url: &str,
) -> TestApp {
    let (tx, rx) = mpsc::channel(queue_capacity);
    let links = Arc::new(InMemoryLinkRepository::default());
    let stats = Arc::new(InMemoryStatsRepository::default());

    let state = AppState::new(links.clone(), stats.clone(), cache, tx, base_url);

    TestApp {
        state,
        click_rx: rx,
        links,
        stats,
    }
}

/// API routes without middleware.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{alias}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{alias}", get(resolve_handler))
        .with_state(state)
}

/// Everything the submission controller wrote to a view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    HideResult,
    HideStats,
    Link(String),
    Qr(Vec<u8>),
    ShowResult,
    Stats(String),
    Alert(String),
}

#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn links(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Link(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn shows_stats(&self) -> bool {
        self.events()
            .iter()
            .any(|e| matches!(e, ViewEvent::Stats(_)))
    }
}

impl ResultView for RecordingView {
    fn hide_result(&self) {
        self.record(ViewEvent::HideResult);
    }

    fn hide_stats(&self) {
        self.record(ViewEvent::HideStats);
    }

    fn show_link(&self, short_url: &str) {
        self.record(ViewEvent::Link(short_url.to_string()));
    }

    fn show_qr(&self, image: &QrImage) {
        self.record(ViewEvent::Qr(image.bytes.clone()));
    }

    fn show_result(&self) {
        self.record(ViewEvent::ShowResult);
    }

    fn show_stats(&self, pretty_json: &str) {
        self.record(ViewEvent::Stats(pretty_json.to_string()));
    }

    fn alert(&self, message: &str) {
        self.record(ViewEvent::Alert(message.to_string()));
    }
}

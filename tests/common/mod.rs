#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use link_shortener::domain::entities::{Link, NewLink};
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use link_shortener::routes::router;
use link_shortener::state::AppState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory `LinkRepository` for HTTP tests that do not need PostgreSQL.
///
/// Links are kept in insertion order; all mutations happen under one lock so
/// click increments behave like the database's single-statement update.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    fail_clicks: AtomicBool,
    fail_all: AtomicBool,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `record_click` return a storage error.
    pub fn fail_clicks(&self) {
        self.fail_clicks.store(true, Ordering::SeqCst);
    }

    /// Makes every operation return a storage error.
    pub fn fail_all(&self) {
        self.fail_all.store(true, Ordering::SeqCst);
    }

    pub fn insert(&self, code: &str, url: &str) {
        self.links.lock().unwrap().push(Link::new(
            code.to_string(),
            url.to_string(),
            0,
            None,
            Utc::now(),
        ));
    }

    pub fn get(&self, code: &str) -> Option<Link> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned()
    }

    pub fn links_len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(AppError::internal("simulated storage failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();
        if links.iter().any(|l| l.code == new_link.code) {
            return Err(AppError::conflict("Code exists"));
        }
        let link = Link::new(new_link.code, new_link.url, 0, None, Utc::now());
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.check()?;
        Ok(self.get(code))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        self.check()?;
        let links = self.links.lock().unwrap();
        Ok(links.iter().rev().cloned().collect())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| l.code != code);
        Ok(links.len() < before)
    }

    async fn record_click(&self, code: &str) -> Result<bool, AppError> {
        self.check()?;
        if self.fail_clicks.load(Ordering::SeqCst) {
            return Err(AppError::internal("simulated click failure"));
        }
        let mut links = self.links.lock().unwrap();
        match links.iter_mut().find(|l| l.code == code) {
            Some(link) => {
                link.clicks += 1;
                link.last_clicked = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn totals(&self) -> Result<(i64, i64), AppError> {
        self.check()?;
        let links = self.links.lock().unwrap();
        Ok((links.len() as i64, links.iter().map(|l| l.clicks).sum()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::from_repository(repo.clone());
    (state, repo)
}

pub fn make_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, repo)
}

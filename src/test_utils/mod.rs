//! Test utilities: in-memory store implementations and an app-state builder
//! for exercising routes without a live Supabase project.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{InsertStatus, WaitlistStore, WaitlistUseCases},
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::config::AppConfig,
};

/// In-memory implementation of `WaitlistStore` mirroring the table's unique
/// constraint on the email column.
#[derive(Default)]
pub struct InMemoryWaitlistStore {
    emails: Mutex<BTreeSet<String>>,
    insert_attempts: AtomicUsize,
}

impl InMemoryWaitlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored emails, in sorted order (for test assertions).
    pub fn emails(&self) -> Vec<String> {
        self.emails.lock().unwrap().iter().cloned().collect()
    }

    /// How many insert attempts reached the store.
    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistStore for InMemoryWaitlistStore {
    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<InsertStatus> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        let mut emails = self.emails.lock().unwrap();
        if emails.insert(entry.email.clone()) {
            Ok(InsertStatus::Created)
        } else {
            Ok(InsertStatus::DuplicateEmail)
        }
    }
}

/// Store whose every insert fails with the given message, for exercising the
/// datastore-error path.
pub struct FailingWaitlistStore {
    message: String,
}

impl FailingWaitlistStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl WaitlistStore for FailingWaitlistStore {
    async fn insert(&self, _entry: &WaitlistEntry) -> AppResult<InsertStatus> {
        Err(AppError::Supabase(self.message.clone()))
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: "http://localhost:3000".parse().unwrap(),
        supabase_url: None,
        supabase_service_role_key: None,
        waitlist_table: "pre_signups".to_string(),
    }
}

/// App state wired to the given store.
pub fn test_app_state(store: Arc<dyn WaitlistStore>) -> AppState {
    AppState {
        config: Arc::new(test_config()),
        waitlist_use_cases: Arc::new(WaitlistUseCases::new(Some(store))),
    }
}

/// App state for the missing-configuration scenario.
pub fn test_app_state_without_store() -> AppState {
    AppState {
        config: Arc::new(test_config()),
        waitlist_use_cases: Arc::new(WaitlistUseCases::new(None)),
    }
}

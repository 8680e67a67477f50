use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_valid_email, normalize_email},
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// Result of one insert attempt against the waitlist table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertStatus {
    Created,
    /// The table's unique constraint rejected the row; the email is
    /// already stored.
    DuplicateEmail,
}

#[async_trait]
pub trait WaitlistStore: Send + Sync {
    /// Attempts exactly one row insert. Must report a uniqueness-constraint
    /// violation as `DuplicateEmail` rather than an error so the caller can
    /// reclassify it.
    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<InsertStatus>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    Joined,
    AlreadyJoined,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    /// `None` when the Supabase credentials are absent from the environment.
    /// Kept optional so the service still boots and answers every signup
    /// with the operator-actionable configuration error.
    store: Option<Arc<dyn WaitlistStore>>,
}

impl WaitlistUseCases {
    pub fn new(store: Option<Arc<dyn WaitlistStore>>) -> Self {
        Self { store }
    }

    /// Normalizes and validates the submitted email, then attempts the
    /// single insert. A duplicate-key conflict is a success outcome by
    /// design: signing up twice is not an error the user can act on.
    #[instrument(skip(self))]
    pub async fn join(&self, raw_email: &str) -> AppResult<SignupOutcome> {
        let email = normalize_email(raw_email);
        if !is_valid_email(&email) {
            return Err(AppError::InvalidEmail);
        }

        let store = self.store.as_ref().ok_or(AppError::MissingConfig)?;

        match store.insert(&WaitlistEntry::new(email)).await? {
            InsertStatus::Created => Ok(SignupOutcome::Joined),
            InsertStatus::DuplicateEmail => Ok(SignupOutcome::AlreadyJoined),
        }
    }
}

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{InsertStatus, WaitlistStore},
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::http_client::build_client,
};

/// Postgres error code for a uniqueness-constraint violation, as surfaced
/// in the PostgREST error body.
const UNIQUE_VIOLATION: &str = "23505";

/// Waitlist store backed by Supabase's REST (PostgREST) interface.
pub struct SupabaseWaitlistStore {
    client: Client,
    insert_url: String,
    service_role_key: SecretString,
}

impl SupabaseWaitlistStore {
    pub fn new(supabase_url: &Url, service_role_key: SecretString, table: &str) -> Self {
        let base = supabase_url.as_str().trim_end_matches('/');
        Self {
            client: build_client(),
            insert_url: format!("{base}/rest/v1/{table}"),
            service_role_key,
        }
    }
}

// Error shape PostgREST returns on a failed insert. Fields beyond these two
// (details, hint) are ignored.
#[derive(Deserialize, Default)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
}

#[async_trait]
impl WaitlistStore for SupabaseWaitlistStore {
    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<InsertStatus> {
        let response = self
            .client
            .post(&self.insert_url)
            .header("apikey", self.service_role_key.expose_secret())
            .bearer_auth(self.service_role_key.expose_secret())
            .header("Prefer", "return=minimal")
            // PostgREST takes the rows as an array, like the JS client's
            // `insert([{ email }])`.
            .json(&[entry])
            .send()
            .await
            .map_err(|e| AppError::Supabase(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(InsertStatus::Created);
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Supabase(e.to_string()))?;
        let err: PostgrestError = serde_json::from_str(&body).unwrap_or_default();

        if err.code.as_deref() == Some(UNIQUE_VIOLATION) {
            return Ok(InsertStatus::DuplicateEmail);
        }

        Err(AppError::Supabase(
            err.message.unwrap_or_else(|| format!("HTTP {status}")),
        ))
    }
}

use std::env;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Project base URL, e.g. "https://xyzcompany.supabase.co". Optional so
    /// a deployment missing it still boots and reports the configuration
    /// error on each signup instead of crash-looping.
    pub supabase_url: Option<Url>,
    /// Service role key. Privileged; never logged.
    pub supabase_service_role_key: Option<SecretString>,
    pub waitlist_table: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());

        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let supabase_url: Option<Url> = env::var("SUPABASE_URL")
            .ok()
            .map(|s| s.parse().expect("SUPABASE_URL must be a valid URL"));
        let supabase_service_role_key: Option<SecretString> = env::var("SUPABASE_SERVICE_ROLE_KEY")
            .ok()
            .map(|s| SecretString::new(s.into()));

        let waitlist_table: String = get_env_default("WAITLIST_TABLE", "pre_signups".to_string());

        Self {
            bind_addr,
            cors_origin,
            supabase_url,
            supabase_service_role_key,
            waitlist_table,
        }
    }
}

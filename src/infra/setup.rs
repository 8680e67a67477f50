use crate::{
    adapters::{http::app_state::AppState, supabase::SupabaseWaitlistStore},
    application::use_cases::waitlist::{WaitlistStore, WaitlistUseCases},
    infra::config::AppConfig,
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state() -> AppState {
    let config = AppConfig::from_env();

    // The store only exists when both Supabase credentials are present;
    // otherwise every signup answers with the configuration error.
    let store: Option<Arc<dyn WaitlistStore>> = match (
        config.supabase_url.as_ref(),
        config.supabase_service_role_key.clone(),
    ) {
        (Some(url), Some(key)) => Some(Arc::new(SupabaseWaitlistStore::new(
            url,
            key,
            &config.waitlist_table,
        ))),
        _ => {
            tracing::warn!("Supabase credentials missing; signups will fail until configured");
            None
        }
    };

    let waitlist_use_cases = WaitlistUseCases::new(store);

    AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tripfind_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}

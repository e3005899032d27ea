use std::sync::Arc;

use cs_courses::config::AppConfig;
use cs_courses::services::{AdminGate, DownloadGate, IdentityProvider};

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gate: AdminGate,
    pub downloads: Arc<DownloadGate>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(config: AppConfig, provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            gate: AdminGate::from_config(provider, &config),
            config: Arc::new(config),
            downloads: Arc::new(DownloadGate::new()),
            rate_limiter: Arc::new(RateLimiter::new()),
        }
    }
}

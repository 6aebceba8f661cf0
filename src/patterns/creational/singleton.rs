//! One process-wide configuration, created on first access.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: String,
    pub debug: bool,
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            app_name: "classics".to_string(),
            debug: false,
            max_connections: 100,
        }
    }
}

static INSTANCE: OnceLock<Mutex<AppConfig>> = OnceLock::new();

/// The shared configuration. Every call returns the same instance.
pub fn instance() -> &'static Mutex<AppConfig> {
    INSTANCE.get_or_init(|| Mutex::new(AppConfig::default()))
}

/// Locks the shared configuration, recovering it if a previous holder panicked.
pub fn config() -> MutexGuard<'static, AppConfig> {
    instance().lock().unwrap_or_else(PoisonError::into_inner)
}

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to in-memory defaults when `init_config()` was never called,
/// so library users that construct their own collaborators are not forced
/// through the global.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .map(|cfg| cfg.load_full())
        .unwrap_or_else(|| Arc::new(StaticConfig::default()))
}

/// Initialize the global configuration
///
/// Loads configuration from `path` (or "quicktab.toml" in the current
/// directory). If the file doesn't exist, uses in-memory defaults.
/// Subsequent calls keep the first loaded configuration.
///
/// # Examples
/// ```no_run
/// use quicktab::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(path)))
        .load_full()
}

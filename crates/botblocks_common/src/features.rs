//! Feature flag handling for the botblocks plugins.
//!
//! Plugins are enabled in two layers:
//!
//! 1. Compile-time cargo features (`calendly`), which gate the per-plugin
//!    helper functions below.
//! 2. Runtime configuration: a `use_*` flag plus the presence of the
//!    plugin's configuration section.
//!
//! A plugin only runs when both layers agree, so a deployment can compile a
//! plugin in and still turn it off per environment.

use botblocks_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `use_feature` - The configuration flag that enables the feature
/// * `feature_config` - The configuration section for the feature
///
/// # Returns
///
/// `true` if the feature is enabled, `false` otherwise
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the Calendly plugin is enabled at runtime.
///
/// # Arguments
///
/// * `config` - The application configuration
///
/// # Returns
///
/// `true` if the Calendly plugin is enabled, `false` otherwise
#[cfg(feature = "calendly")]
pub fn is_calendly_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_calendly, config.calendly.as_ref())
}

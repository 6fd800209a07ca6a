use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - api.base_url is not empty
/// - api.timeout_secs, search.workers and search.max_pages are not zero
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.api.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "api.base_url cannot be empty".to_string(),
        ));
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "api.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.search.workers == 0 {
        return Err(ConfigError::ValidationError(
            "search.workers cannot be 0".to_string(),
        ));
    }

    if config.search.max_pages == 0 {
        return Err(ConfigError::ValidationError(
            "search.max_pages cannot be 0".to_string(),
        ));
    }

    Ok(())
}

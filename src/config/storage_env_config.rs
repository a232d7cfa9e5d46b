//! Local storage configuration parsing from environment variables.

use std::env;

/// Storage environment configuration
#[derive(Debug, Clone)]
pub struct StorageEnvConfig {
    /// Override for the state directory. Defaults to `~/.dinnerwheel` when
    /// unset.
    pub dir_override: Option<String>,
    /// Whether menu edits and spin results are written back automatically.
    pub autosave: bool,
}

impl StorageEnvConfig {
    pub fn from_env() -> Self {
        Self {
            dir_override: env::var("STORAGE_DIR").ok().filter(|s| !s.is_empty()),
            autosave: env::var("STORAGE_AUTOSAVE")
                .unwrap_or_else(|_| "true".to_string())
                .parse::<bool>()
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageEnvConfig::from_env();
        assert!(config.autosave);
    }
}

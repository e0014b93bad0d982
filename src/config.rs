//! Router configuration.
//!
//! Loaded from a TOML file with environment variable overrides, e.g.
//!
//! ```toml
//! enabled = true
//! suppressed_categories = ["STORAGE"]
//! ```

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::PaywallError;
use crate::upgrade::UpgradeCategory;

/// Controls which classified failures actually reach the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouterConfig {
    /// Whether upgrade prompts are shown at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Categories that are classified but never dispatched
    #[serde(default)]
    pub suppressed_categories: Vec<UpgradeCategory>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            suppressed_categories: Vec::new(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

impl RouterConfig {
    /// Configuration with prompts switched off, as on self-hosted deployments.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Adds a category to the suppression list.
    pub fn suppress(mut self, category: UpgradeCategory) -> Self {
        if !self.suppressed_categories.contains(&category) {
            self.suppressed_categories.push(category);
        }
        self
    }

    /// Returns true if prompts of `category` may be dispatched.
    pub fn allows(&self, category: UpgradeCategory) -> bool {
        self.enabled && !self.suppressed_categories.contains(&category)
    }

    /// Load router configuration from a file path.
    ///
    /// # Environment Variable Overrides
    ///
    /// Values can be overridden with `PAYWALL__<KEY>`, for example
    /// `PAYWALL__ENABLED=false` or
    /// `PAYWALL__SUPPRESSED_CATEGORIES=TOKEN,TRAFFIC`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, its path is not valid
    /// UTF-8, or the merged configuration cannot be deserialized.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use paywall_router::config::RouterConfig;
    ///
    /// let config = RouterConfig::load("paywall-router.toml")?;
    /// # Ok::<(), paywall_router::error::PaywallError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PaywallError> {
        let path = path.as_ref();

        let path_str = path
            .to_str()
            .ok_or_else(|| PaywallError::InvalidPath(format!("{:?}", path)))?;

        if !path.exists() {
            return Err(PaywallError::ConfigNotFound(path_str.to_string()));
        }

        let config = Config::builder()
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix("PAYWALL")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("suppressed_categories")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_allows_everything() {
        let config = RouterConfig::default();
        assert!(config.enabled);
        assert!(config.allows(UpgradeCategory::Token));
        assert!(config.allows(UpgradeCategory::Traffic));
        assert!(config.allows(UpgradeCategory::Storage));
    }

    #[test]
    fn test_disabled_allows_nothing() {
        let config = RouterConfig::disabled();
        assert!(!config.allows(UpgradeCategory::Token));
        assert!(!config.allows(UpgradeCategory::Storage));
    }

    #[test]
    fn test_suppress() {
        let config = RouterConfig::default()
            .suppress(UpgradeCategory::Storage)
            .suppress(UpgradeCategory::Storage);

        assert_eq!(config.suppressed_categories, vec![UpgradeCategory::Storage]);
        assert!(!config.allows(UpgradeCategory::Storage));
        assert!(config.allows(UpgradeCategory::Traffic));
    }

    #[test]
    fn test_deserialize_toml() {
        let config: RouterConfig = toml::from_str(
            r#"
            enabled = true
            suppressed_categories = ["TRAFFIC", "TOKEN"]
            "#,
        )
        .unwrap();

        assert!(config.enabled);
        assert!(!config.allows(UpgradeCategory::Traffic));
        assert!(!config.allows(UpgradeCategory::Token));
        assert!(config.allows(UpgradeCategory::Storage));
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let config: RouterConfig = toml::from_str("").unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_deserialize_rejects_unknown_category() {
        let result = toml::from_str::<RouterConfig>(r#"suppressed_categories = ["BANDWIDTH"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_file_not_found() {
        let result = RouterConfig::load("nonexistent/path/paywall-router.toml");
        assert!(matches!(result, Err(PaywallError::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "enabled = false").unwrap();
        writeln!(file, r#"suppressed_categories = ["STORAGE"]"#).unwrap();

        let config = RouterConfig::load(file.path()).unwrap();

        assert!(!config.enabled);
        assert_eq!(config.suppressed_categories, vec![UpgradeCategory::Storage]);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "enabled = \"sometimes\"").unwrap();

        let result = RouterConfig::load(file.path());
        assert!(matches!(result, Err(PaywallError::Config(_))));
    }
}

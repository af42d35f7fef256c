//! Site configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("Failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("Invalid site config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Site configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Brand name shown in the navigation, titles and footer.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Workload name used in logs.
    #[serde(default = "default_workload")]
    pub workload: String,

    /// Persistent storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Static asset settings.
    #[serde(default)]
    pub assets: AssetConfig,

    /// Testimonial carousel settings.
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_brand() -> String {
    "DSIGNER'S".to_string()
}

fn default_workload() -> String {
    "storefront".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            workload: default_workload(),
            storage: StorageConfig::default(),
            assets: AssetConfig::default(),
            carousel: CarouselConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.wishlist_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "storage.wishlist_key",
                reason: "must not be empty".to_string(),
            });
        }
        if self.carousel.interval_ms < MIN_CAROUSEL_INTERVAL_MS {
            return Err(ConfigError::Invalid {
                field: "carousel.interval_ms",
                reason: format!("must be at least {}ms", MIN_CAROUSEL_INTERVAL_MS),
            });
        }
        Ok(())
    }
}

/// Shortest carousel interval that still leaves room for a slide transition.
pub const MIN_CAROUSEL_INTERVAL_MS: u64 = 1000;

/// Persistent storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key-value store label ("default" opens the default store).
    #[serde(default = "default_store")]
    pub store: String,

    /// Key holding the serialized wishlist.
    #[serde(default = "default_wishlist_key")]
    pub wishlist_key: String,
}

fn default_store() -> String {
    "default".to_string()
}

fn default_wishlist_key() -> String {
    "wishlist".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store: default_store(),
            wishlist_key: default_wishlist_key(),
        }
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Image substituted when a product image fails to load.
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,
}

fn default_fallback_image() -> String {
    "/watch-hero-black.png".to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            fallback_image: default_fallback_image(),
        }
    }
}

/// Carousel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Auto-advance interval in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    5000
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format: json or human.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.storage.wishlist_key, "wishlist");
        assert_eq!(config.carousel.interval_ms, 5000);
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_toml_str(
            r#"
brand = "Test Brand"

[storage]
wishlist_key = "liked"

[logging]
format = "human"
"#,
        )
        .unwrap();

        assert_eq!(config.brand, "Test Brand");
        assert_eq!(config.storage.wishlist_key, "liked");
        assert_eq!(config.storage.store, "default");
        assert_eq!(config.logging.format, "human");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_error() {
        let err = SiteConfig::from_toml_str("brand = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_empty_wishlist_key() {
        let err = SiteConfig::from_toml_str("[storage]\nwishlist_key = \" \"").unwrap_err();
        assert!(err.to_string().contains("storage.wishlist_key"));
    }

    #[test]
    fn test_rejects_short_interval() {
        let err = SiteConfig::from_toml_str("[carousel]\ninterval_ms = 10").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "carousel.interval_ms", .. }));
    }
}

//! Embedded site configuration.

use dsigner_core::{ConfigError, SiteConfig};

const SITE_TOML: &str = include_str!("../site.toml");

/// Load the embedded configuration.
///
/// A broken document yields the defaults and the error, for the caller to log.
pub(crate) fn load_config() -> (SiteConfig, Option<ConfigError>) {
    parse_config(SITE_TOML)
}

fn parse_config(raw: &str) -> (SiteConfig, Option<ConfigError>) {
    match SiteConfig::from_toml_str(raw) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let (config, error) = load_config();
        assert!(error.is_none());
        assert_eq!(config.workload, "storefront");
        assert_eq!(config.storage.wishlist_key, "wishlist");
    }

    #[test]
    fn test_broken_config_falls_back() {
        let (config, error) = parse_config("[carousel]\ninterval_ms = \"fast\"");
        assert!(matches!(error, Some(ConfigError::Parse(_))));
        assert_eq!(config, SiteConfig::default());
    }
}

//! Configuration resolution: TOML file plus command-line overrides

use crate::error::CliError;
use anyhow::Result;
use reflow_core::ReflowConfig;
use std::path::Path;

/// Settings given on the command line that take precedence over the file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Replaces the configured page-marker words when non-empty
    pub page_words: Vec<String>,
    /// Rule-4 uppercase ratio
    pub uppercase_threshold: Option<f64>,
    /// Turn hyphen repair off
    pub no_dehyphenate: bool,
    /// Turn uppercase-run stripping off
    pub no_strip_uppercase: bool,
}

impl ConfigOverrides {
    /// Apply onto a loaded configuration
    pub fn apply(&self, config: &mut ReflowConfig) {
        if !self.page_words.is_empty() {
            config.classifier.page_marker_words = self.page_words.clone();
        }
        if let Some(threshold) = self.uppercase_threshold {
            config.classifier.uppercase_threshold = threshold;
        }
        if self.no_dehyphenate {
            config.dehyphenation.enabled = false;
        }
        if self.no_strip_uppercase {
            config.stripper.enabled = false;
        }
    }
}

/// Load the configuration file (or defaults), apply overrides and validate
pub fn resolve_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<ReflowConfig> {
    let mut config = match path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            ReflowConfig::from_file(path).map_err(CliError::from)?
        }
        None => ReflowConfig::default(),
    };

    overrides.apply(&mut config);
    config.validate().map_err(CliError::from)?;

    log::debug!("Effective configuration: {config:?}");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, ReflowConfig::default());
    }

    #[test]
    fn test_overrides_applied_over_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reflow.toml");
        fs::write(
            &path,
            "[classifier]\npage_marker_words = [\"Page\"]\nuppercase_threshold = 0.9\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            page_words: vec!["Folio".into()],
            uppercase_threshold: None,
            no_dehyphenate: true,
            no_strip_uppercase: false,
        };
        let config = resolve_config(Some(&path), &overrides).unwrap();

        assert_eq!(config.classifier.page_marker_words, vec!["Folio"]);
        assert_eq!(config.classifier.uppercase_threshold, 0.9);
        assert!(!config.dehyphenation.enabled);
        assert!(config.stripper.enabled);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let overrides = ConfigOverrides {
            uppercase_threshold: Some(1.5),
            ..Default::default()
        };
        let err = resolve_config(None, &overrides).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = resolve_config(Some(Path::new("/nonexistent/reflow.toml")), &Default::default())
            .unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}

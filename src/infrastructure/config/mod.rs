use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::analysis_config::AnalysisConfig;
use crate::domain::error::{AppError, Result};

/// Environment variables with this prefix override file and default values
pub const ENV_PREFIX: &str = "FILE_INSIGHT_";

/// Layers defaults, an optional TOML file and the environment
#[derive(Debug, Default)]
pub struct ConfigService {
    config_path: Option<PathBuf>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only an explicitly named file is read; there is no implicit config file
    pub fn with_file(path: impl AsRef<Path>) -> Self {
        Self {
            config_path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AnalysisConfig::default()));
        if let Some(path) = &self.config_path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load(&self) -> Result<AnalysisConfig> {
        if let Some(path) = &self.config_path {
            if !path.is_file() {
                return Err(AppError::ConfigError(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }

        let config: AnalysisConfig = self
            .figment()
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config.validate().map_err(AppError::ConfigError)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = ConfigService::new().load().unwrap();
            assert_eq!(config, AnalysisConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "insight.toml",
                r#"
                top_words_limit = 5
                preview_rows = 8
                export_file_name = "filtered.xlsx"
                "#,
            )?;
            jail.set_env("FILE_INSIGHT_PREVIEW_ROWS", "3");

            let config = ConfigService::with_file("insight.toml").load().unwrap();
            assert_eq!(config.top_words_limit, 5);
            assert_eq!(config.preview_rows, 3);
            assert_eq!(config.export_file_name, "filtered.xlsx");
            assert_eq!(config.export_sheet_name, "Sheet1");
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_and_invalid_values() {
        Jail::expect_with(|jail| {
            let missing = ConfigService::with_file("nope.toml").load();
            assert!(matches!(missing, Err(AppError::ConfigError(_))));

            jail.set_env("FILE_INSIGHT_TOP_WORDS_LIMIT", "0");
            let invalid = ConfigService::new().load();
            assert!(matches!(invalid, Err(AppError::ConfigError(_))));
            Ok(())
        });
    }
}

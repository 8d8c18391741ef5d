use serde::{Deserialize, Serialize};
use spec_example_engine::SpecExampleOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid spec_example markers in {config_path}: {reason}")]
    InvalidMarkers {
        config_path: PathBuf,
        reason: String,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Markdown file or directory browsed when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus_path: Option<PathBuf>,
    #[serde(default)]
    pub spec_example: SpecExampleOptions,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if let Err(reason) = Self::validate_markers(&config.spec_example) {
            return Err(ConfigError::InvalidMarkers {
                config_path: config_path.to_path_buf(),
                reason,
            });
        }

        // Expand shell variables and tilde in the loaded corpus path
        config.corpus_path = config
            .corpus_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/spec-example");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Markers the parser cannot work with.
    ///
    /// An empty options keyword is allowed and turns the options clause off.
    fn validate_markers(options: &SpecExampleOptions) -> Result<(), String> {
        let required = [
            ("example_break", &options.example_break),
            ("type_break", &options.type_break),
            ("example_keyword", &options.example_keyword),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(format!("{name} must not be empty"));
        }
        if options.type_break == options.example_break {
            return Err("type_break must differ from example_break".to_string());
        }
        Ok(())
    }
}

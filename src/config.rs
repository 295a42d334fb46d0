use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct Config {
    path: Option<String>,
    /// Reset to the front face whenever navigation changes the card.
    #[serde(default = "default_flip_on_navigate")]
    pub flip_on_navigate: bool,
    /// Selection policy tuning.
    #[serde(default)]
    pub selection: SelectionConfig,
}

#[derive(Debug, Deserialize)]
pub struct SelectionConfig {
    /// Weight multiplier for cards that have never been shown.
    #[serde(default = "default_unseen_bias")]
    pub unseen_bias: f64,
    /// How many recently shown cards the policy avoids repeating.
    #[serde(default = "default_avoid_recent")]
    pub avoid_recent: usize,
    /// Fixed seed for reproducible sessions. Random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_flip_on_navigate() -> bool {
    true
}

fn default_unseen_bias() -> f64 {
    2.0
}

fn default_avoid_recent() -> usize {
    3
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            unseen_bias: default_unseen_bias(),
            avoid_recent: default_avoid_recent(),
            seed: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            flip_on_navigate: default_flip_on_navigate(),
            selection: SelectionConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the specified path, the default config dir
    /// (~/.config/riffle/) or a local .riffle.toml.
    pub fn load(path: &Option<String>) -> Self {
        let config_path = if let Some(p) = path {
            PathBuf::from(p)
        } else {
            Self::default_config_dir()
        };
        Self::load_from_path(&config_path)
    }

    fn load_from_path(config_path: &PathBuf) -> Self {
        if config_path.exists() {
            match std::fs::read_to_string(config_path) {
                Ok(content) => match toml::from_str::<Config>(&content) {
                    Ok(mut config) => {
                        config.path = config_path.to_str().map(|s| s.to_string());
                        config
                    }
                    Err(e) => {
                        warn!("Ignoring malformed config {}: {}", config_path.display(), e);
                        Self::default()
                    }
                },
                Err(_) => Self::default(),
            }
        } else {
            Self::default()
        }
    }

    /// Get the path of the configuration file if it was loaded from a file.
    pub fn get_path(&self) -> Option<&String> {
        self.path.as_ref()
    }

    fn default_config_dir() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("riffle").join("config.toml");
            if config_path.exists() {
                return config_path;
            }
        }
        // Fallback to local .riffle.toml (might not exist)
        PathBuf::from(".riffle.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
            flip_on_navigate = false

            [selection]
            unseen_bias = 4.0
            avoid_recent = 5
            seed = 99
            "#,
        )
        .unwrap();
        assert!(!config.flip_on_navigate);
        assert_eq!(config.selection.unseen_bias, 4.0);
        assert_eq!(config.selection.avoid_recent, 5);
        assert_eq!(config.selection.seed, Some(99));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.flip_on_navigate);
        assert_eq!(config.selection.unseen_bias, 2.0);
        assert_eq!(config.selection.avoid_recent, 3);
        assert_eq!(config.selection.seed, None);
    }

    #[test]
    fn test_partial_selection_section() {
        let config: Config = toml::from_str("[selection]\nseed = 7\n").unwrap();
        assert_eq!(config.selection.seed, Some(7));
        assert_eq!(config.selection.unseen_bias, 2.0);
    }
}

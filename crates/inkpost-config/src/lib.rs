//! Configuration management for inkpost.
//!
//! Configuration comes from an `inkpost.toml` file discovered in the working
//! directory or any parent, or — matching the original deployment style —
//! directly from environment variables when no file exists.
//!
//! ## Environment Variable Expansion
//!
//! String values in the TOML file support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Secrets are expected to arrive this way (`api_key = "${GEMINI_API_KEY}"`)
//! so the config file itself can be committed.
//!
//! ## Validation
//!
//! [`Config::validate`] runs once at load time and reports **all** missing
//! required fields in a single [`ConfigError::MissingFields`] value, so a
//! misconfigured deployment surfaces every problem in one run.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use expand::expand_env;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "inkpost.toml";

/// Environment variable names used by [`Config::from_env`].
const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
const ENV_CLIENT_ID: &str = "BLOGGER_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "BLOGGER_CLIENT_SECRET";
const ENV_REFRESH_TOKEN: &str = "BLOGGER_REFRESH_TOKEN";
const ENV_BLOG_ID: &str = "BLOG_ID";

/// Default rotation of post labels.
const DEFAULT_LABELS: [&str; 6] = [
    "Beginner Guide",
    "Crypto Investment",
    "News and Updates",
    "Tools & Tutorials",
    "Crypto Airdrops",
    "Blockchain Technology",
];

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Content generation API configuration.
    pub gemini: GeminiConfig,
    /// Blogger API configuration.
    pub blogger: BloggerConfig,
    /// Post content configuration.
    pub content: ContentConfig,
    /// Local file locations.
    pub paths: PathsConfig,

    /// Path to the config file (set after loading from a file).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Content generation API configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeminiConfig {
    /// API key for the generative-text service.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.5-flash".to_owned(),
        }
    }
}

/// Blogger API configuration (OAuth2 refresh-token flow).
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BloggerConfig {
    /// OAuth2 client ID.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// OAuth2 refresh token.
    pub refresh_token: String,
    /// Target blog ID from the Blogger dashboard.
    pub blog_id: String,
}

/// Post content configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Blog display name, used in the generation prompt.
    pub blog_name: String,
    /// Public blog URL, used in the generation prompt.
    pub blog_url: String,
    /// Label rotation; a post for day `n` gets `labels[n % labels.len()]`.
    pub labels: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            blog_name: "Crypto Basic Guide".to_owned(),
            blog_url: "cryptobasicguide.blogspot.com".to_owned(),
            labels: DEFAULT_LABELS.iter().map(|&label| label.to_owned()).collect(),
        }
    }
}

/// Local file locations.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Topic schedule file.
    pub topics_file: PathBuf,
    /// Day-counter status file.
    pub status_file: PathBuf,
    /// Directory of pre-compressed featured images.
    pub images_dir: PathBuf,
    /// Public base URL under which images in `images_dir` are reachable.
    /// When unset, posts are published without a featured image.
    pub image_base_url: Option<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            topics_file: PathBuf::from("topics.txt"),
            status_file: PathBuf::from("status.json"),
            images_dir: PathBuf::from("images"),
            image_base_url: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// One or more required fields are missing or empty.
    #[error("missing required configuration: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. `gemini.api_key`).
        field: String,
        /// Error message (e.g. "${`GEMINI_API_KEY`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `inkpost.toml` in the current directory and parents, falling back
    /// to plain environment variables when no file is found.
    ///
    /// The returned configuration has been validated: all required fields
    /// are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, parsing
    /// fails, or validation finds missing fields.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::from_env()
        };

        config.validate()?;
        Ok(config)
    }

    /// Build configuration purely from environment variables, the way the
    /// original cron deployment supplied it. Unset variables become empty
    /// strings and are caught by [`validate`](Self::validate).
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            gemini: GeminiConfig {
                api_key: var(ENV_GEMINI_API_KEY),
                ..GeminiConfig::default()
            },
            blogger: BloggerConfig {
                client_id: var(ENV_CLIENT_ID),
                client_secret: var(ENV_CLIENT_SECRET),
                refresh_token: var(ENV_REFRESH_TOKEN),
                blog_id: var(ENV_BLOG_ID),
            },
            ..Self::default()
        }
    }

    /// Validate that every required field is present and non-empty.
    ///
    /// All problems are collected and reported together.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFields`] naming every missing field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        let mut require = |value: &str, field: &str| {
            if value.is_empty() {
                missing.push(field.to_owned());
            }
        };

        require(&self.gemini.api_key, "gemini.api_key");
        require(&self.blogger.client_id, "blogger.client_id");
        require(&self.blogger.client_secret, "blogger.client_secret");
        require(&self.blogger.refresh_token, "blogger.refresh_token");
        require(&self.blogger.blog_id, "blogger.blog_id");

        if self.content.labels.is_empty() {
            missing.push("content.labels".to_owned());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingFields(missing))
        }
    }

    /// Search for the config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand `${VAR}` references in fields that may carry secrets.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.gemini.api_key = expand_env(&self.gemini.api_key, "gemini.api_key")?;
        self.blogger.client_id = expand_env(&self.blogger.client_id, "blogger.client_id")?;
        self.blogger.client_secret =
            expand_env(&self.blogger.client_secret, "blogger.client_secret")?;
        self.blogger.refresh_token =
            expand_env(&self.blogger.refresh_token, "blogger.refresh_token")?;
        self.blogger.blog_id = expand_env(&self.blogger.blog_id, "blogger.blog_id")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const COMPLETE: &str = r#"
[gemini]
api_key = "key"

[blogger]
client_id = "id"
client_secret = "secret"
refresh_token = "token"
blog_id = "12345"
"#;

    #[test]
    fn test_load_complete_config() {
        let file = write_config(COMPLETE);
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.gemini.api_key, "key");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.blogger.blog_id, "12345");
        assert_eq!(config.content.labels.len(), 6);
        assert_eq!(config.paths.topics_file, PathBuf::from("topics.txt"));
    }

    #[test]
    fn test_missing_file_error() {
        let err = Config::load(Some(Path::new("/nonexistent/inkpost.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_validation_collects_all_missing_fields() {
        let file = write_config("[gemini]\napi_key = \"key\"\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        let ConfigError::MissingFields(missing) = err else {
            panic!("expected MissingFields, got {err}");
        };
        assert_eq!(
            missing,
            vec![
                "blogger.client_id",
                "blogger.client_secret",
                "blogger.refresh_token",
                "blogger.blog_id",
            ]
        );
    }

    #[test]
    fn test_validation_error_lists_fields_in_message() {
        let err = ConfigError::MissingFields(vec![
            "gemini.api_key".to_owned(),
            "blogger.blog_id".to_owned(),
        ]);
        let message = err.to_string();
        assert!(message.contains("gemini.api_key"));
        assert!(message.contains("blogger.blog_id"));
    }

    #[test]
    fn test_env_expansion_in_secret_fields() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("INKPOST_TEST_KEY", "expanded-key");
        }
        let file = write_config(
            "[gemini]\napi_key = \"${INKPOST_TEST_KEY}\"\n\n[blogger]\nclient_id = \"id\"\nclient_secret = \"secret\"\nrefresh_token = \"token\"\nblog_id = \"1\"\n",
        );
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.gemini.api_key, "expanded-key");
        unsafe {
            std::env::remove_var("INKPOST_TEST_KEY");
        }
    }

    #[test]
    fn test_env_expansion_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("INKPOST_UNSET_VAR");
        }
        let file = write_config("[gemini]\napi_key = \"${INKPOST_UNSET_VAR}\"\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("gemini.api_key"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_config("[gemini]\napi_key = \"k\"\ntypo_field = true\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_custom_labels_override_default() {
        let file = write_config(
            "[gemini]\napi_key = \"k\"\n\n[blogger]\nclient_id = \"i\"\nclient_secret = \"s\"\nrefresh_token = \"t\"\nblog_id = \"1\"\n\n[content]\nlabels = [\"Only One\"]\n",
        );
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.content.labels, vec!["Only One"]);
    }
}

use crate::adapters::resend::DEFAULT_BASE_URL;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    #[serde(default)]
    pub server: ServerSection,
    pub email: Option<EmailSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub name: String,
    pub profile_path: String,
    pub public_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSection {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub from: String,
    pub to: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default)]
    pub format: LogFormat,
}

fn env_var_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex"))
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            SiteError::TomlParseError { message, .. } => SiteError::TomlParseError {
                source_name: path.as_ref().display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::TomlParseError {
            source_name: "site config".to_string(),
            message: e.to_string(),
        })
    }

    /// Replace `${VAR}` with the environment value; unset variables stay as-is.
    fn substitute_env_vars(content: &str) -> String {
        env_var_regex()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    /// The API key, unless it is missing, blank, or an unresolved `${VAR}`.
    pub fn email_api_key(&self) -> Option<&str> {
        self.email
            .as_ref()
            .and_then(|e| e.api_key.as_deref())
            .map(str::trim)
            .filter(|k| !k.is_empty() && !env_var_regex().is_match(k))
    }

    pub fn email_base_url(&self) -> &str {
        self.email
            .as_ref()
            .and_then(|e| e.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn email_timeout(&self) -> Duration {
        let secs = self
            .email
            .as_ref()
            .and_then(|e| e.timeout_seconds)
            .unwrap_or(10);
        Duration::from_secs(secs)
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.as_ref().map(|l| l.format).unwrap_or_default()
    }

    /// Resolve a configured path against the directory holding the config file.
    pub fn resolve_path(&self, base_dir: &Path, configured: &str) -> std::path::PathBuf {
        let path = Path::new(configured);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("site.name", &self.site.name)?;
        validation::validate_path("site.profile_path", &self.site.profile_path)?;
        validation::validate_path("site.public_dir", &self.site.public_dir)?;

        if self.server.listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(SiteError::InvalidConfigValueError {
                field: "server.listen".to_string(),
                value: self.server.listen.clone(),
                reason: "Expected host:port".to_string(),
            });
        }

        if let Some(email) = &self.email {
            validation::validate_url("email.base_url", self.email_base_url())?;
            validation::validate_non_empty_string("email.from", &email.from)?;
            validation::validate_email("email.to", &email.to)?;
            if let Some(timeout) = email.timeout_seconds {
                validation::validate_range("email.timeout_seconds", timeout, 1, 120)?;
            }
        }

        Ok(())
    }
}

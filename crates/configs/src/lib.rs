use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identifiers for the external authentication provider project.
///
/// Fields left blank in `config.toml` are filled from the corresponding
/// `AUTH_*` environment variables during normalization.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AuthProviderConfig {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    #[serde(default)]
    pub storage_bucket: String,
    #[serde(default)]
    pub sender_id: String,
    #[serde(default)]
    pub app_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_log_format() -> String {
    "compact".to_string()
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` if present (falling back to an env-only config),
    /// then normalize and validate. Single entry point for binaries.
    pub fn load_and_validate() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            AppConfig::default()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.logging.normalize()?;
        self.auth.normalize_from_env();
        self.auth.validate()?;
        Ok(())
    }
}

impl LoggingConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.format.trim().is_empty() {
            self.format = default_log_format();
        }
        match self.format.as_str() {
            "compact" | "json" => Ok(()),
            other => Err(anyhow!("logging.format must be \"compact\" or \"json\", got {other:?}")),
        }
    }
}

impl AuthProviderConfig {
    /// Fill blank fields from the process environment.
    pub fn normalize_from_env(&mut self) {
        self.normalize_with(|name| std::env::var(name).ok());
    }

    /// Fill blank fields through an injected lookup (testable variant).
    pub fn normalize_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&str, &mut String); 6] = [
            ("AUTH_PROJECT_ID", &mut self.project_id),
            ("AUTH_API_KEY", &mut self.api_key),
            ("AUTH_DOMAIN", &mut self.auth_domain),
            ("AUTH_STORAGE_BUCKET", &mut self.storage_bucket),
            ("AUTH_SENDER_ID", &mut self.sender_id),
            ("AUTH_APP_ID", &mut self.app_id),
        ];
        for (name, field) in fields {
            if field.trim().is_empty() {
                if let Some(value) = lookup(name) {
                    *field = value;
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.project_id.trim().is_empty() {
            return Err(anyhow!("auth.project_id is empty; set it in config.toml or AUTH_PROJECT_ID"));
        }
        if self.api_key.trim().is_empty() {
            return Err(anyhow!("auth.api_key is empty; set it in config.toml or AUTH_API_KEY"));
        }
        Ok(())
    }
}

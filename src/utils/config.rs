use std::env;
use std::path::PathBuf;

pub const DEFAULT_AUDIT_LOG_PATH: &str = "order_log.txt";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_STORE_NAME: &str = "Jane's Online Store";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub audit_log_path: PathBuf,
    pub log_level: String,
    pub store_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audit_log_path: PathBuf::from(DEFAULT_AUDIT_LOG_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            store_name: DEFAULT_STORE_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; missing keys fall back to the
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let config = Config {
            audit_log_path: lookup("AUDIT_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.audit_log_path),
            log_level: lookup("LOG_LEVEL")
                .map(|level| level.to_lowercase())
                .unwrap_or(defaults.log_level),
            store_name: lookup("STORE_NAME").unwrap_or(defaults.store_name),
        };

        config.validate()?;
        Ok(config)
    }

    /// Command-line values win over the environment.
    pub fn with_overrides(mut self, audit_log: Option<PathBuf>, store_name: Option<String>) -> anyhow::Result<Self> {
        if let Some(path) = audit_log {
            self.audit_log_path = path;
        }
        if let Some(name) = store_name {
            self.store_name = name;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.audit_log_path.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("AUDIT_LOG_PATH must not be empty"));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(anyhow::anyhow!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if self.store_name.trim().is_empty() {
            return Err(anyhow::anyhow!("STORE_NAME must not be empty"));
        }

        Ok(())
    }
}

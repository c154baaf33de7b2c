use serde::{Deserialize, Serialize};

/// Placeholder written over the push private key in every exposed config copy.
pub const REDACTED: &str = "--not exposed--";

/// Serialize is required: a redacted copy of the running config is embedded
/// in every status snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub push: PushConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Shared secret for the status endpoint. Empty means unset; without it
    /// requests are rejected unless debug is on.
    #[serde(default)]
    pub secret: String,
    /// Development bypass: allows unauthenticated status reads when no secret
    /// is configured.
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Directory holding the wallet databases; measured by the status probes.
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    #[serde(default)]
    pub vapid_public: String,
    #[serde(default)]
    pub vapid_private: String,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Copy with the push private key replaced by a fixed placeholder.
    /// Every externally visible config goes through this.
    pub fn redacted(&self) -> AppConfig {
        let mut copy = self.clone();
        copy.push.vapid_private = REDACTED.into();
        copy
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.database.path.is_empty(),
            "database.path must be non-empty"
        );
        Ok(())
    }
}

//! Configuration types for modelstore

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Storage service location
    pub storage: StorageConfig,
    /// HTTP transport configuration
    pub http: HttpConfig,
    /// Credentials sent with credentialed requests
    pub credentials: CredentialsConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> crate::ModelStoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Storage service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root URL the `modelstorage/` path is resolved against
    pub root: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: "http://localhost:8080/".to_string(),
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds, body included (0 disables it)
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds (0 disables it)
    pub connect_timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 0,
            connect_timeout_secs: 30,
            user_agent: format!("modelstore/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Credentials attached to requests that ask for them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Bearer token for the Authorization header
    pub token: Option<String>,
    /// Raw Cookie header value
    pub cookie: Option<String>,
}

impl CredentialsConfig {
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.cookie.is_none()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_client_config() {
        let config = ClientConfig::default();
        assert_eq!(config.storage.root, "http://localhost:8080/");
        assert!(config.credentials.is_empty());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_default_http_config_does_not_cap_uploads() {
        let http = HttpConfig::default();
        assert_eq!(http.timeout_secs, 0);
        assert_eq!(http.connect_timeout_secs, 30);
    }

    #[test]
    fn test_client_config_parse() {
        let toml_str = r#"
[storage]
root = "https://models.example.com/api/"

[credentials]
token = "secret"
"#;
        let config: ClientConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.root, "https://models.example.com/api/");
        assert_eq!(config.credentials.token.as_deref(), Some("secret"));
        assert!(config.credentials.cookie.is_none());
        // Missing sections fall back to defaults
        assert_eq!(config.http.timeout_secs, 0);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\ntimeout_secs = 5\nconnect_timeout_secs = 2\n\n[logging]\nlevel = \"debug\"").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.connect_timeout_secs, 2);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\ntimeout_secs = \"soon\"").unwrap();

        let err = ClientConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, crate::ModelStoreError::Config(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, crate::ModelStoreError::Io(_)));
    }
}

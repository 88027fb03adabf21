use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Environment variable naming a config file to load when no path is given
pub const CONFIG_ENV: &str = "A3S_POLICY_SCAN_CONFIG";

/// User-configurable settings for the scan server and CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Host address for the HTTP server (default: 127.0.0.1)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for the HTTP server (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted request body in bytes (default: 1 MiB)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Document splitting
    #[serde(default)]
    pub chunk: ChunkConfig,
}

/// Size bounds for document sections, in estimated tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkConfig {
    #[serde(default = "default_min_tokens")]
    pub min_tokens: usize,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

fn default_min_tokens() -> usize {
    1500
}

fn default_max_tokens() -> usize {
    2000
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            min_tokens: default_min_tokens(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            chunk: ChunkConfig::default(),
        }
    }
}

impl ScanConfig {
    /// Load configuration.
    ///
    /// Uses `path` if given, else the file named by [`CONFIG_ENV`], else
    /// defaults. A named file that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var_os(CONFIG_ENV).map(PathBuf::from),
        };

        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScanError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: ScanConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.max_body_bytes == 0 {
            return Err(ScanError::Config(
                "max_body_bytes must be greater than zero".to_string(),
            ));
        }
        if self.chunk.min_tokens == 0 {
            return Err(ScanError::Config(
                "chunk.min_tokens must be greater than zero".to_string(),
            ));
        }
        if self.chunk.min_tokens > self.chunk.max_tokens {
            return Err(ScanError::Config(format!(
                "chunk.min_tokens ({}) exceeds chunk.max_tokens ({})",
                self.chunk.min_tokens, self.chunk.max_tokens
            )));
        }
        Ok(())
    }

    /// Returns the server bind address string (e.g., "127.0.0.1:8000").
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert_eq!(config.chunk.min_tokens, 1500);
        assert_eq!(config.chunk.max_tokens, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_address() {
        let config = ScanConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml_str = r#"
            host = "0.0.0.0"
            port = 9090

            [chunk]
            max_tokens = 4000
        "#;
        let config: ScanConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert_eq!(config.chunk.min_tokens, 1500);
        assert_eq!(config.chunk.max_tokens, 4000);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.toml");
        std::fs::write(&path, "port = 7000\nmax_body_bytes = 2048\n").unwrap();

        let config = ScanConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.port, 7000);
        assert_eq!(config.max_body_bytes, 2048);
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScanConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(matches!(err, ScanError::Config(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();
        let err = ScanConfig::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ScanError::TomlDe(_)));
    }

    #[test]
    fn test_validate_chunk_bounds() {
        let mut config = ScanConfig::default();
        config.chunk.min_tokens = 3000;
        assert!(matches!(config.validate(), Err(ScanError::Config(_))));

        config.chunk.min_tokens = 0;
        assert!(matches!(config.validate(), Err(ScanError::Config(_))));
    }
}

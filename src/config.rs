use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::content::SupabaseConfig;

/// Service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schema_version: u32,
    /// Address the HTTP server binds to
    pub bind_addr: String,
    pub supabase_url: Option<String>,
    pub supabase_service_role_key: Option<String>,
    /// Timeout for each content store or history request
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: 1,
            bind_addr: "0.0.0.0:8787".to_string(),
            supabase_url: None,
            supabase_service_role_key: None,
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Get the default config directory
    pub fn default_config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".emotion-service"))
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.json"))
    }

    /// Load config from file, or defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {:?}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file {:?}", path))
        } else {
            debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any variable source. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("SUPABASE_URL") {
            self.supabase_url = Some(url);
        }
        if let Some(key) = get("SUPABASE_SERVICE_ROLE_KEY") {
            self.supabase_service_role_key = Some(key);
        }
        if let Some(addr) = get("EMOTION_SERVICE_BIND") {
            self.bind_addr = addr;
        }
        if let Some(secs) = get("EMOTION_SERVICE_TIMEOUT_SECS") {
            self.request_timeout_secs = secs
                .trim()
                .parse()
                .with_context(|| format!("Invalid EMOTION_SERVICE_TIMEOUT_SECS: {}", secs))?;
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Supabase connection settings, if both URL and key are configured
    pub fn supabase(&self) -> Option<SupabaseConfig> {
        match (&self.supabase_url, &self.supabase_service_role_key) {
            (Some(url), Some(key)) => Some(SupabaseConfig {
                url: url.clone(),
                service_key: key.clone(),
                timeout: self.request_timeout(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.bind_addr, "0.0.0.0:8787");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.supabase().is_none());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            bind_addr: "127.0.0.1:9000".to_string(),
            supabase_url: Some("https://abc.supabase.co".to_string()),
            ..Config::default()
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"request_timeout_secs": 3}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.bind_addr, "0.0.0.0:8787");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_overrides() {
        let env = vars(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "secret"),
            ("EMOTION_SERVICE_BIND", "127.0.0.1:3000"),
            ("EMOTION_SERVICE_TIMEOUT_SECS", "4"),
        ]);
        let mut config = Config::default();
        config.apply_overrides(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        let supabase = config.supabase().unwrap();
        assert_eq!(supabase.url, "https://abc.supabase.co");
        assert_eq!(supabase.service_key, "secret");
        assert_eq!(supabase.timeout, Duration::from_secs(4));
    }

    #[test]
    fn test_empty_override_ignored() {
        let env = vars(&[("EMOTION_SERVICE_BIND", "  ")]);
        let mut config = Config::default();
        config.apply_overrides(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8787");
    }

    #[test]
    fn test_invalid_timeout_override() {
        let env = vars(&[("EMOTION_SERVICE_TIMEOUT_SECS", "soon")]);
        let mut config = Config::default();
        assert!(config.apply_overrides(|k| env.get(k).cloned()).is_err());
    }

    #[test]
    fn test_supabase_needs_both_values() {
        let config = Config {
            supabase_url: Some("https://abc.supabase.co".to_string()),
            ..Config::default()
        };
        assert!(config.supabase().is_none());
    }
}

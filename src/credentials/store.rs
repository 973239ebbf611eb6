//! Credentials file I/O

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::credentials as credentials_config;
use crate::error::HawkError;

use super::models::Credentials;

/// Handles reading and writing the credentials file
#[derive(Debug, Clone)]
pub struct CredentialStore {
    config_path: PathBuf,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore {
    /// Create a new store using the default path (~/.config/hawkop/config.json)
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a store with a custom path (--config, HAWKOP_CONFIG, tests)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Store for an optional explicit path, falling back to the default
    pub fn from_override(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::with_path(p.to_path_buf()),
            None => Self::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(credentials_config::DIR_NAME)
            .join(credentials_config::FILE_NAME)
    }

    /// Load credentials from disk.
    /// Returns Default if file doesn't exist, errors on corrupt JSON.
    pub fn load(&self) -> Result<Credentials, HawkError> {
        if !self.config_path.exists() {
            debug!(
                "No config file at {}, starting empty",
                self.config_path.display()
            );
            return Ok(Credentials::default());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            HawkError::Config(format!(
                "Failed to read config file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            HawkError::Config(format!(
                "Failed to parse config file {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }

    /// Save credentials to disk.
    /// Uses atomic write (tmp file + rename) and creates parent dir if needed.
    pub fn save(&self, credentials: &Credentials) -> Result<(), HawkError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                HawkError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(credentials)
            .map_err(|e| HawkError::Config(format!("Failed to serialize config: {}", e)))?;

        let tmp_path = self.config_path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(|e| {
            HawkError::Config(format!(
                "Failed to write temp config file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        // Owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                HawkError::Config(format!("Failed to set permissions on config file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.config_path).map_err(|e| {
            HawkError::Config(format!(
                "Failed to rename temp config file to {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        debug!("Saved config to {}", self.config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::models::Token;
    use chrono::Duration;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> CredentialStore {
        CredentialStore::with_path(dir.path().join("config.json"))
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let creds = test_store(&dir).load().unwrap();
        assert!(!creds.has_api_key());
        assert!(creds.org_id().is_none());
        assert!(creds.token().is_none());
    }

    #[test]
    fn test_load_corrupt_json_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not valid json!!!").unwrap();
        let result = CredentialStore::with_path(path).load();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config file"));
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("hawkop").join("config.json");
        let store = CredentialStore::with_path(path.clone());
        store.save(&Credentials::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let mut creds = Credentials::with_api_key("my-key");
        creds.set_org_id(Some("org-123".to_string()));
        creds.set_token(Token::expiring_in("jwt", Duration::minutes(30)));
        store.save(&creds).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, creds);
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.save(&Credentials::with_api_key("k")).unwrap();
        assert!(!dir.path().join("config.json.tmp").exists());
    }

    #[test]
    fn test_save_fails_when_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();
        let store = CredentialStore::with_path(blocker.join("config.json"));
        let result = store.save(&Credentials::default());
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.save(&Credentials::with_api_key("secret")).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_default_config_path() {
        let path = CredentialStore::default_config_path();
        assert!(path.ends_with("hawkop/config.json"));
    }

    #[test]
    fn test_from_override() {
        let explicit = PathBuf::from("/tmp/custom.json");
        let store = CredentialStore::from_override(Some(&explicit));
        assert_eq!(store.path(), explicit.as_path());
    }
}

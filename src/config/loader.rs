//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .coverwise.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use coverwise::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Fixtures from: {}", config.fixtures_dir);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        // Read file atomically - no TOCTOU race window
        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Return default config if file doesn't exist
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .coverwise.toml");
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).context("Failed to parse .coverwise.toml")?;

        // Validate rate bands
        if let Some(ref rates) = config.rates {
            rates.validate().context("Invalid rate configuration")?;
        }

        Ok(config)
    }

    /// Save config to .coverwise.toml in the given directory
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<()> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<()> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .context("Failed to write .coverwise.toml")?;

        Ok(())
    }

    /// Check if config file exists in project
    pub fn exists(project_root: &Path) -> bool {
        project_root.join(CONFIG_FILE_NAME).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::RateSettings;
    use std::io;
    use std::path::Path;

    // Mock FileSystem for testing
    struct MockFileSystem {
        file_content: Option<String>,
        should_fail_read: bool,
        should_fail_write: bool,
        written_content: std::sync::Arc<std::sync::Mutex<Option<String>>>,
    }

    impl MockFileSystem {
        fn new() -> Self {
            Self {
                file_content: None,
                should_fail_read: false,
                should_fail_write: false,
                written_content: std::sync::Arc::new(std::sync::Mutex::new(None)),
            }
        }

        fn with_content(content: &str) -> Self {
            Self {
                file_content: Some(content.to_string()),
                ..Self::new()
            }
        }

        fn with_read_error() -> Self {
            Self {
                should_fail_read: true,
                ..Self::new()
            }
        }

        fn with_write_error() -> Self {
            Self {
                should_fail_write: true,
                ..Self::new()
            }
        }

        fn get_written_content(&self) -> Option<String> {
            self.written_content.lock().unwrap().clone()
        }
    }

    impl FileSystem for MockFileSystem {
        fn read_to_string(&self, _path: &Path) -> io::Result<String> {
            if self.should_fail_read {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            self.file_content
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
        }

        fn write(&self, _path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
            if self.should_fail_write {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            let contents_str = String::from_utf8_lossy(contents.as_ref()).to_string();
            *self.written_content.lock().unwrap() = Some(contents_str);
            Ok(())
        }

        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_loader_loads_from_valid_toml() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);

        let toml_content = r#"
fixtures-dir = "data"
simulate-latency = true

[rates]
two-policy-rate = 0.07
"#;
        std::fs::write(&config_path, toml_content).unwrap();

        let result = ConfigLoader::load(temp.path());
        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.fixtures_dir, "data");
        assert!(config.simulate_latency);
        assert_eq!(config.rates.unwrap().two_policy_rate, Some(0.07));
    }

    #[test]
    fn test_loader_with_missing_file_uses_defaults() {
        let fs = MockFileSystem::new();
        let result = ConfigLoader::load_with_fs(Path::new("/test"), &fs);

        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.fixtures_dir, ConfigFile::default().fixtures_dir);
    }

    #[test]
    fn test_loader_with_invalid_toml_returns_error() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);

        let invalid_toml = "invalid { toml syntax";
        std::fs::write(&config_path, invalid_toml).unwrap();

        let result = ConfigLoader::load(temp.path());
        assert!(result.is_err(), "Expected error for invalid TOML");
    }

    #[test]
    fn test_loader_rejects_out_of_band_rate() {
        let toml_content = r#"
[rates]
two-policy-rate = 0.5
"#;
        let fs = MockFileSystem::with_content(toml_content);
        let result = ConfigLoader::load_with_fs(Path::new("/test"), &fs);

        assert!(result.is_err());
        let err_msg = format!("{:#}", result.unwrap_err());
        assert!(err_msg.contains("Invalid rate configuration"));
    }

    #[test]
    fn test_loader_with_permission_error_returns_error() {
        let fs = MockFileSystem::with_read_error();
        let result = ConfigLoader::load_with_fs(Path::new("/test"), &fs);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read") || err_msg.contains("permission"));
    }

    #[test]
    fn test_save_writes_valid_toml() {
        let config = ConfigFile {
            fixtures_dir: "data".to_string(),
            simulate_latency: true,
            rates: Some(RateSettings {
                two_policy_rate: Some(0.06),
            }),
        };

        let fs = MockFileSystem::new();
        let result = ConfigLoader::save_with_fs(&config, Path::new("/test"), &fs);

        assert!(result.is_ok());
        let written = fs.get_written_content();
        assert!(written.is_some());

        let content = written.unwrap();
        assert!(content.contains("data"));
        assert!(content.contains("two-policy-rate"));
    }

    #[test]
    fn test_save_with_write_error_returns_error() {
        let config = ConfigFile::default();
        let fs = MockFileSystem::with_write_error();
        let result = ConfigLoader::save_with_fs(&config, Path::new("/test"), &fs);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to write"));
    }

    #[test]
    fn test_save_round_trips_all_fields() {
        let temp = tempfile::tempdir().unwrap();

        let config = ConfigFile {
            fixtures_dir: "portfolio".to_string(),
            simulate_latency: true,
            rates: Some(RateSettings {
                two_policy_rate: Some(0.055),
            }),
        };

        ConfigLoader::save(&config, temp.path()).unwrap();
        let loaded = ConfigLoader::load(temp.path()).unwrap();

        assert_eq!(loaded.fixtures_dir, config.fixtures_dir);
        assert_eq!(loaded.simulate_latency, config.simulate_latency);
        assert_eq!(
            loaded.rates.unwrap().two_policy_rate,
            config.rates.unwrap().two_policy_rate
        );
    }

    #[test]
    fn test_exists_returns_false_for_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        assert!(!ConfigLoader::exists(temp.path()));
    }

    #[test]
    fn test_exists_returns_true_when_file_present() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "simulate-latency = false").unwrap();

        assert!(ConfigLoader::exists(temp.path()));
    }

    #[test]
    fn test_loader_handles_empty_file() {
        let fs = MockFileSystem::with_content("");
        let result = ConfigLoader::load_with_fs(Path::new("/test"), &fs);

        // Empty file should parse to default config
        assert!(result.is_ok());
        assert_eq!(result.unwrap().fixtures_dir, "fixtures");
    }

    #[test]
    fn test_loader_handles_partial_config() {
        let toml_content = r#"fixtures-dir = "data""#;
        let fs = MockFileSystem::with_content(toml_content);
        let result = ConfigLoader::load_with_fs(Path::new("/test"), &fs);

        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.fixtures_dir, "data");
        assert!(config.rates.is_none());
    }
}

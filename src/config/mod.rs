//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the language, theme, table and image locations and log level.

mod error;

pub use error::ConfigError;

use crate::content::Locale;
use crate::error::AppError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/etl-docs-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub locale: Locale,
    pub theme_name: String,
    pub tables_dir: PathBuf,
    pub images_dir: PathBuf,
    pub log_level: LevelFilter,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_tables_dir")]
    pub tables_dir: PathBuf,
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_tables_dir() -> PathBuf {
    PathBuf::from("tables")
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            locale: Locale::default(),
            theme_name: default_theme_name(),
            tables_dir: default_tables_dir(),
            images_dir: default_images_dir(),
            log_level: LevelFilter::Info,
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file leaves the defaults in place; the
    /// file is only written on save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.log_level =
                LevelFilter::from_str(&data.log_level).map_err(|_| ConfigError::InvalidValue {
                    field: "log_level",
                    value: data.log_level.clone(),
                })?;
            self.locale = data.locale;
            self.theme_name = data.theme_name;
            self.tables_dir = data.tables_dir;
            self.images_dir = data.images_dir;
        }
        self.file_path = Some(file_path);

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            locale: self.locale,
            theme_name: self.theme_name.clone(),
            tables_dir: self.tables_dir.clone(),
            images_dir: self.images_dir.clone(),
            log_level: self.log_level.to_string().to_lowercase(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the configuration as it is stored on disk, without any
    /// overrides applied since loading.
    ///
    pub fn reload(&self) -> Result<Config, AppError> {
        let dir = self
            .file_path
            .as_deref()
            .and_then(Path::parent)
            .ok_or(ConfigError::FilePathNotSet)?;
        let mut stored = Config::new();
        stored.load(Some(&dir.to_string_lossy()))?;
        Ok(stored)
    }

    /// Return the path of the configuration file once loaded.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_str(dir: &TempDir) -> &str {
        dir.path().to_str().unwrap()
    }

    #[test]
    fn load_without_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.load(Some(dir_str(&dir))).unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.tables_dir, PathBuf::from("tables"));
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.file_path(), Some(dir.path().join(FILE_NAME).as_path()));
    }

    #[test]
    fn load_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested/config");
        let mut config = Config::new();
        config.load(nested.to_str()).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn load_reads_partial_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "locale: pt\ntables_dir: /srv/tables\nlog_level: debug\n",
        )
        .unwrap();
        let mut config = Config::new();
        config.load(Some(dir_str(&dir))).unwrap();
        assert_eq!(config.locale, Locale::Pt);
        assert_eq!(config.tables_dir, PathBuf::from("/srv/tables"));
        assert_eq!(config.images_dir, PathBuf::from("images"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.theme_name, "tokyo-night");
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.load(Some(dir_str(&dir))).unwrap();
        config.locale = Locale::Pt;
        config.theme_name = "dracula".to_string();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(Some(dir_str(&dir))).unwrap();
        assert_eq!(reloaded.locale, Locale::Pt);
        assert_eq!(reloaded.theme_name, "dracula");
        assert_eq!(reloaded.log_level, LevelFilter::Info);
    }

    #[test]
    fn reload_ignores_overrides() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.load(Some(dir_str(&dir))).unwrap();
        config.tables_dir = PathBuf::from("/tmp/override");
        let stored = config.reload().unwrap();
        assert_eq!(stored.tables_dir, PathBuf::from("tables"));
        assert_eq!(stored.file_path(), config.file_path());
    }

    #[test]
    fn save_without_load_fails() {
        let err = Config::new().save().unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::FilePathNotSet)));
    }

    #[test]
    fn invalid_yaml_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FILE_NAME), "locale: [unterminated\n").unwrap();
        let err = Config::new().load(Some(dir_str(&dir))).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn unknown_locale_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FILE_NAME), "locale: fr\n").unwrap();
        let err = Config::new().load(Some(dir_str(&dir))).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn invalid_log_level_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FILE_NAME), "log_level: loud\n").unwrap();
        let err = Config::new().load(Some(dir_str(&dir))).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::InvalidValue { field: "log_level", .. })
        ));
    }
}

//! Errors raised while reading or writing `config.yml`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` was called before `load` resolved a location
    #[error("No config.yml location resolved yet")]
    FilePathNotSet,

    /// No home directory to place the default config directory under
    #[error("Cannot resolve the home directory for ~/.config/etl-docs-tui")]
    HomeDirectoryNotFound,

    /// The config file exists but could not be read
    #[error("Cannot read {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Writing the config file failed
    #[error("Cannot write {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config directory could not be created
    #[error("Cannot create config directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings could not be encoded as YAML
    #[error("Cannot encode settings as YAML: {0}")]
    SerializationFailed(String),

    /// The config file is not valid YAML for `Config`
    #[error("config.yml is not valid: {0}")]
    DeserializationFailed(String),

    /// A field parsed as YAML but holds a value outside its domain
    #[error("Unsupported {field} '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_setting() {
        let error = ConfigError::InvalidValue {
            field: "log_level",
            value: "loud".to_string(),
        };
        assert_eq!(error.to_string(), "Unsupported log_level 'loud'");
        assert!(ConfigError::HomeDirectoryNotFound
            .to_string()
            .contains("home directory"));
        assert!(ConfigError::DeserializationFailed("bad indent".to_string())
            .to_string()
            .ends_with("bad indent"));
    }

    #[test]
    fn io_failures_name_the_path() {
        let error = ConfigError::CreateDirectoryFailed {
            path: PathBuf::from("/ro/etl-docs-tui"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        let message = error.to_string();
        assert!(message.contains("/ro/etl-docs-tui"));
        assert!(message.contains("read-only"));
    }

    #[test]
    fn every_variant_renders_a_message() {
        let io = || std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let path = PathBuf::from("config.yml");
        let errors = vec![
            ConfigError::FilePathNotSet,
            ConfigError::HomeDirectoryNotFound,
            ConfigError::LoadFailed {
                path: path.clone(),
                message: "denied".to_string(),
            },
            ConfigError::SaveFailed {
                path: path.clone(),
                source: io(),
            },
            ConfigError::CreateDirectoryFailed { path, source: io() },
            ConfigError::SerializationFailed("tag".to_string()),
            ConfigError::DeserializationFailed("indent".to_string()),
            ConfigError::InvalidValue {
                field: "locale",
                value: "fr".to_string(),
            },
        ];
        for error in errors {
            assert!(!error.to_string().is_empty(), "{:?}", error);
        }
    }
}

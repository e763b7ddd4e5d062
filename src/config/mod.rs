mod types;

pub use types::{Config, PaginationConfig, ServerConfig};

use crate::error::{GraphqlResourceError, Result};
use std::fs;

/// Load configuration from a TOML file
pub fn load_config(path: &str) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| {
        GraphqlResourceError::Config(format!("Failed to read config file '{}': {}", path, e))
    })?;

    let config: Config = toml::from_str(&contents)?;

    config
        .pagination
        .validate()
        .map_err(GraphqlResourceError::Config)?;

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    config
        .pagination
        .validate()
        .map_err(GraphqlResourceError::Config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string).map_err(|e| {
        GraphqlResourceError::Config(format!("Failed to write config file '{}': {}", path, e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
[server]
port = 8080
bind = "127.0.0.1"

[pagination]
default_limit = 20
max_limit = 200
"#;
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.pagination.default_limit, 20);
        assert_eq!(config.pagination.max_limit, 200);
    }

    #[test]
    fn test_load_config_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[server]\nport = 5000\n").unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.pagination, PaginationConfig::default());
    }

    #[test]
    fn test_load_invalid_pagination() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
[pagination]
default_limit = 500
max_limit = 100
"#;
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap());
        assert!(matches!(config, Err(GraphqlResourceError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let config = load_config("/nonexistent/graphql-resource.toml");
        assert!(config.is_err());
    }

    #[test]
    fn test_save_and_load_config() {
        let config = Config {
            server: ServerConfig {
                port: 4001,
                bind: "0.0.0.0".to_string(),
            },
            pagination: PaginationConfig {
                default_limit: 25,
                max_limit: 250,
            },
        };

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        save_config(&config, path).unwrap();
        let loaded_config = load_config(path).unwrap();

        assert_eq!(loaded_config.server.port, 4001);
        assert_eq!(loaded_config.pagination, config.pagination);
    }
}

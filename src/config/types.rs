use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind the server to
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
        }
    }
}

fn default_port() -> u16 {
    4000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

/// Page size settings applied to every generated list field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Limit used when the request does not pass one
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Upper bound for requested limits; larger values are clamped
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> usize {
    100
}

fn default_max_limit() -> usize {
    1000
}

impl PaginationConfig {
    /// Validate pagination settings
    pub fn validate(&self) -> Result<(), String> {
        if self.max_limit == 0 {
            return Err("Pagination max_limit must be greater than zero".to_string());
        }

        if self.default_limit == 0 {
            return Err("Pagination default_limit must be greater than zero".to_string());
        }

        if self.default_limit > self.max_limit {
            return Err(format!(
                "Pagination default_limit ({}) must not exceed max_limit ({})",
                self.default_limit, self.max_limit
            ));
        }

        Ok(())
    }
}

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        api_base_url: get_env_or_default("API_BASE_URL", DEFAULT_API_BASE_URL),
        log_level: get_env_or_default("LOG_LEVEL", "info"),
    }
});

pub struct Config {
    pub api_base_url: String,
    pub log_level: String,
}

impl Config {
    /// Parsed `LOG_LEVEL`, falling back to INFO on anything tracing doesn't recognise.
    pub fn max_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level_parses_known_levels() {
        let config = Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: "debug".to_string(),
        };
        assert_eq!(config.max_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_max_level_falls_back_to_info() {
        let config = Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: "loud".to_string(),
        };
        assert_eq!(config.max_level(), tracing::Level::INFO);
    }
}

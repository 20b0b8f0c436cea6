use curator_model::ContentRatingLimits;
use serde::Deserialize;

/// Typed service configuration, layered from `curator.toml` (path
/// overridable via `CURATOR_CONFIG`) and `CURATOR__`-prefixed
/// environment variables (e.g. `CURATOR__TMDB__API_KEY`).
#[derive(Debug, Clone, Deserialize)]
pub struct CuratorConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub tmdb: TmdbConfig,
    /// Admin default limits; seed the limits store at startup.
    #[serde(default)]
    pub ratings: ContentRatingLimits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbConfig {
    pub api_key: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5055
}

impl CuratorConfig {
    /// Load configuration from file + environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var("CURATOR_CONFIG")
            .unwrap_or_else(|_| "curator.toml".to_string());

        config::Config::builder()
            .add_source(config::File::with_name(&path).required(false))
            .add_source(
                config::Environment::with_prefix("CURATOR").separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let config: CuratorConfig = config::Config::builder()
            .set_override("tmdb.api_key", "test-key")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5055);
        assert!(!config.ratings.is_active());
    }

    #[test]
    fn ratings_section_deserializes() {
        let config: CuratorConfig = config::Config::builder()
            .set_override("tmdb.api_key", "test-key")
            .unwrap()
            .set_override("ratings.max_movie_rating", "PG-13")
            .unwrap()
            .set_override("ratings.block_adult", true)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.ratings.max_movie_rating.as_deref(), Some("PG-13"));
        assert!(config.ratings.block_adult);
        assert!(!config.ratings.block_unrated);
    }
}

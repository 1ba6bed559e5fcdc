use serde::Deserialize;

use crate::secrets::SecretChain;

/// Application configuration loaded once at startup and immutable thereafter
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key. Absence is not fatal here; the discover call will fail
    /// with the upstream's own 401.
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// OpenAI API key. Absence surfaces as a configuration error the moment
    /// a recommendation is composed.
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// OpenAI API base URL
    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_openai_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables, then resolve the two
    /// credentials through the secret chain (secrets file before environment).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let mut config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        let secrets = SecretChain::from_environment();
        config.tmdb_api_key = secrets.resolve("TMDB_API_KEY").or(config.tmdb_api_key);
        config.openai_api_key = secrets.resolve("OPENAI_API_KEY").or(config.openai_api_key);

        Ok(config)
    }
}

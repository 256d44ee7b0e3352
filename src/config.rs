// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{RelayError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub client: ClientConfig,
}

/// Fixed upstream endpoints and the request identity the upstream expects.
/// These mirror what the service's own web frontend sends; they are
/// transport configuration, not business logic.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Search initialization endpoint (phase 1, issues the session id).
    pub init_url: String,
    /// Streaming search endpoint (phase 2, server-sent event stream).
    pub stream_url: String,
    pub referer: String,
    pub user_agent: String,
    /// Anonymous local-user marker sent with the streaming call.
    pub local_user_id: String,
    /// Upstream model selector.
    pub model: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    pub connect_timeout_secs: u64,
    /// Applies to the initialization call only. The streaming call carries
    /// no overall timeout: the read loop runs until the upstream closes
    /// the stream.
    pub init_timeout_secs: u64,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("GLOBE_RELAY")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            upstream: UpstreamConfig {
                init_url: "https://explorer.globe.engineer/search/__data.json".to_string(),
                stream_url: "https://explorer-search.fly.dev/submitSearch".to_string(),
                referer: "https://explorer.globe.engineer/".to_string(),
                user_agent: "Mozilla/5.0 (Linux; Android 10; Pixel 5) AppleWebKit/537.36 \
                             (KHTML, like Gecko) Chrome/130.0.0.0 Mobile Safari/537.36"
                    .to_string(),
                local_user_id: "user_1731353625970_vp09l32rl".to_string(),
                model: "default".to_string(),
            },
            client: ClientConfig {
                connect_timeout_secs: 10,
                init_timeout_secs: 30,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.upstream.init_url)?;
        Validator::validate_url(&self.upstream.stream_url)?;
        Validator::validate_url(&self.upstream.referer)?;

        if self.upstream.model.trim().is_empty() {
            return Err(RelayError::Config("model must not be empty".to_string()));
        }

        if self.client.connect_timeout_secs == 0 {
            return Err(RelayError::Config(
                "connect_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.client.init_timeout_secs == 0 {
            return Err(RelayError::Config(
                "init_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

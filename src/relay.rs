// file: src/relay.rs
// description: two-phase search orchestration facade
// reference: session bootstrap followed by the streaming query, strictly sequential

use crate::config::Config;
use crate::error::{RelayError, Result};
use crate::models::{ResultDocument, SearchSession};
use crate::upstream::{SessionInitiator, StreamingQueryRunner};
use crate::utils::{OperationTimer, Validator};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// The inbound surface of the relay: one operation, `search`.
///
/// Holds no per-query state; every call owns its client id, session and
/// accumulator, so independent queries can run concurrently on the same
/// `SearchRelay`.
pub struct SearchRelay {
    initiator: SessionInitiator,
    runner: StreamingQueryRunner,
}

impl SearchRelay {
    pub fn new(config: Config) -> Result<Self> {
        // Shared client for both phases. Connect timeout only: the
        // streaming read loop must be allowed to run until the upstream
        // closes the stream.
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.client.connect_timeout_secs))
            .build()
            .map_err(|e| RelayError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            initiator: SessionInitiator::new(
                client.clone(),
                config.upstream.clone(),
                &config.client,
            ),
            runner: StreamingQueryRunner::new(client, config.upstream),
        })
    }

    /// Relay one query: initialize a session, then stream and decode the
    /// result. A phase-1 failure short-circuits; the streaming call is
    /// never attempted without a session id.
    pub async fn search(&self, query: &str) -> Result<ResultDocument> {
        Validator::validate_query(query)?;

        let timer = OperationTimer::new("search");
        let client_id = Uuid::new_v4().to_string();
        debug!("Generated client id {}", client_id);

        let session_id = self.initiator.initiate(query, &client_id).await?;
        let session = SearchSession::new(client_id, session_id);

        let document = self.runner.run(query, &session.session_id).await?;

        info!(
            "Search complete: {} summary chars, {} details",
            document.summary.len(),
            document.details.len()
        );
        timer.finish();

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_query_rejected_before_any_call() {
        let relay = SearchRelay::new(Config::default_config()).unwrap();
        let result = relay.search("   ").await;
        assert!(matches!(result, Err(RelayError::Validation(_))));
    }

    #[test]
    fn test_relay_builds_from_default_config() {
        assert!(SearchRelay::new(Config::default_config()).is_ok());
    }
}

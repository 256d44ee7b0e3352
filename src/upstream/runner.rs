// file: src/upstream/runner.rs
// description: phase-2 streaming search call and the forward decode pass
// reference: GET streaming endpoint with queryData params, text/event-stream body

use crate::config::UpstreamConfig;
use crate::error::{RelayError, Result};
use crate::models::{QueryContext, ResultDocument};
use crate::stream::{EventFrameDecoder, ResultAccumulator};
use futures::StreamExt;
use reqwest::Client;
use reqwest::header;
use tracing::debug;

/// Issues the streaming search request and folds the server-sent event
/// stream into a `ResultDocument` in a single forward pass.
pub struct StreamingQueryRunner {
    client: Client,
    upstream: UpstreamConfig,
}

impl StreamingQueryRunner {
    pub fn new(client: Client, upstream: UpstreamConfig) -> Self {
        Self { client, upstream }
    }

    /// Run the streaming query for an established session.
    ///
    /// Individual undecodable events are skipped and recorded; only a
    /// failure to open or read the stream itself is fatal. The response
    /// stream is dropped on every exit path, releasing the connection.
    pub async fn run(&self, query: &str, session_id: &str) -> Result<ResultDocument> {
        let url = &self.upstream.stream_url;
        let query_data = QueryContext::initial(query, session_id).to_singleton_param()?;

        debug!("Submitting streaming search to {}", url);

        let response = self
            .client
            .get(url)
            .query(&[
                ("queryData", query_data.as_str()),
                ("userid_auth", "undefined"),
                ("userid_local", self.upstream.local_user_id.as_str()),
                ("model", self.upstream.model.as_str()),
                ("search_id", session_id),
            ])
            .header(header::USER_AGENT, &self.upstream.user_agent)
            .header(header::REFERER, &self.upstream.referer)
            .header(header::ACCEPT, "text/event-stream")
            .send()
            .await
            .map_err(|e| RelayError::request(url, None, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RelayError::request(url, Some(status.as_u16()), body));
        }

        let mut byte_stream = response.bytes_stream();
        let mut decoder = EventFrameDecoder::new();
        let mut accumulator = ResultAccumulator::new();
        let mut chunk_count = 0usize;

        while let Some(chunk) = byte_stream.next().await {
            let chunk = chunk
                .map_err(|e| RelayError::request(url, None, format!("stream read failed: {}", e)))?;
            chunk_count += 1;
            for line in decoder.feed(&chunk) {
                accumulator.absorb_line(&line);
            }
        }

        if let Some(tail) = decoder.finish() {
            accumulator.absorb_line(&tail);
        }

        debug!(
            "Stream complete: {} chunks, {} events skipped",
            chunk_count,
            accumulator.warnings().len()
        );

        Ok(accumulator.finish())
    }
}

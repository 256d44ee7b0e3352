// file: src/upstream/initiator.rs
// description: phase-1 search initialization call that obtains the session id
// reference: GET init endpoint with qd/sid params, session id at nodes[1].data[2]

use crate::config::{ClientConfig, UpstreamConfig};
use crate::error::{RelayError, Result};
use crate::models::QueryContext;
use reqwest::Client;
use reqwest::header;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

// Browser client-hint fingerprint matching the declared user agent. The
// upstream rejects requests without a plausible browser profile.
const SEC_CH_UA: &str = r#""Chromium";v="130", "Google Chrome";v="130", "Not?A_Brand";v="99""#;
const SEC_CH_UA_MOBILE: &str = "?1";
const SEC_CH_UA_PLATFORM: &str = r#""Android""#;

/// Performs the single initialization request that turns a fresh query and
/// a client-generated id into a server-issued session id.
pub struct SessionInitiator {
    client: Client,
    upstream: UpstreamConfig,
    timeout: Duration,
}

impl SessionInitiator {
    pub fn new(client: Client, upstream: UpstreamConfig, client_config: &ClientConfig) -> Self {
        Self {
            client,
            upstream,
            timeout: Duration::from_secs(client_config.init_timeout_secs),
        }
    }

    /// Issue the initialization call and extract the session id.
    ///
    /// Non-2xx and connect failures surface as `UpstreamRequest`; a
    /// response body that lacks the expected nested structure surfaces as
    /// `UpstreamProtocol`.
    pub async fn initiate(&self, query: &str, client_id: &str) -> Result<String> {
        let url = &self.upstream.init_url;
        let qd = QueryContext::initial(query, client_id).to_singleton_param()?;

        debug!("Requesting search session from {}", url);

        let response = self
            .client
            .get(url)
            .query(&[
                ("qd", qd.as_str()),
                ("sid", client_id),
                ("x-sveltekit-invalidated", "01"),
            ])
            .header(header::USER_AGENT, &self.upstream.user_agent)
            .header(header::REFERER, &self.upstream.referer)
            .header(header::ACCEPT, "*/*")
            .header("sec-ch-ua", SEC_CH_UA)
            .header("sec-ch-ua-mobile", SEC_CH_UA_MOBILE)
            .header("sec-ch-ua-platform", SEC_CH_UA_PLATFORM)
            .timeout(self.timeout)
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

        let body: Value = response.json().await.map_err(|e| {
            RelayError::protocol(format!("initialization response is not JSON: {}", e))
        })?;

        let session_id = extract_session_id(&body)?;
        debug!("Obtained session id {}", session_id);
        Ok(session_id)
    }
}

/// Extract the session id from its fixed structural location,
/// `nodes[1].data[2]`. Every step is optional-chained so structural drift
/// produces a descriptive protocol error instead of a panic.
pub(crate) fn extract_session_id(body: &Value) -> Result<String> {
    body.get("nodes")
        .and_then(|nodes| nodes.get(1))
        .and_then(|node| node.get("data"))
        .and_then(|data| data.get(2))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            RelayError::protocol(
                "initialization response missing session id at nodes[1].data[2]".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_extract_session_id_happy_path() {
        let body = json!({
            "nodes": [
                {"type": "root"},
                {"data": ["x", 7, "sid-42"]}
            ]
        });
        assert_eq!(extract_session_id(&body).unwrap(), "sid-42");
    }

    #[test]
    fn test_extract_session_id_missing_nodes() {
        let body = json!({"status": "ok"});
        assert!(matches!(
            extract_session_id(&body),
            Err(RelayError::UpstreamProtocol(_))
        ));
    }

    #[test]
    fn test_extract_session_id_short_nodes_array() {
        let body = json!({"nodes": [{"data": ["only one node"]}]});
        assert!(matches!(
            extract_session_id(&body),
            Err(RelayError::UpstreamProtocol(_))
        ));
    }

    #[test]
    fn test_extract_session_id_short_data_array() {
        let body = json!({"nodes": [null, {"data": ["a", "b"]}]});
        assert!(matches!(
            extract_session_id(&body),
            Err(RelayError::UpstreamProtocol(_))
        ));
    }

    #[test]
    fn test_extract_session_id_non_string_leaf() {
        let body = json!({"nodes": [null, {"data": ["a", "b", 123]}]});
        assert!(matches!(
            extract_session_id(&body),
            Err(RelayError::UpstreamProtocol(_))
        ));
    }
}

// file: src/stream/events.rs
// description: typed stream events and per-line parsing
// reference: event types emitted by the upstream streaming search endpoint

use serde::Deserialize;

/// Framing marker: each event occupies one line with this prefix. Lines
/// without it (blank keep-alives, framing noise) are not events.
pub const DATA_PREFIX: &str = "data: ";

/// One decoded stream event. The upstream may emit event types this client
/// has never seen; those land in `Other` and are ignored by the fold.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StreamEvent {
    #[serde(rename = "top_answer_chunk")]
    TopAnswerChunk { data: String },

    #[serde(rename = "line")]
    Line { data: LinePayload },

    #[serde(rename = "image")]
    Image { data: ImagePayload },

    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePayload {
    /// Only leaf nodes of the upstream result tree are final findings;
    /// intermediate nodes are discarded.
    #[serde(default)]
    pub is_leaf: bool,
    pub line: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImagePayload {
    #[serde(default)]
    pub images: Vec<ImageEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image_search_query: Option<String>,
}

/// Non-fatal record of a stream line that could not be decoded. Skipped
/// events are logged and counted, never allowed to abort the query.
#[derive(Debug, Clone)]
pub struct EventDecodeWarning {
    pub excerpt: String,
    pub reason: String,
}

/// Parse one framed line. Returns `None` for non-event lines, otherwise
/// the parse attempt for the JSON payload after the marker.
pub fn parse_data_line(line: &str) -> Option<Result<StreamEvent, serde_json::Error>> {
    let payload = line.strip_prefix(DATA_PREFIX)?;
    Some(serde_json::from_str(payload))
}

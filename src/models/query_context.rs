// file: src/models/query_context.rs
// description: upstream query-context record serialized into qd/queryData params
// reference: wire shape expected by the Globe Explorer search endpoints

use crate::error::Result;
use serde::Serialize;

/// One entry of the query-context array both upstream endpoints expect.
///
/// The initialization endpoint reads it from the `qd` parameter, the
/// streaming endpoint from `queryData`. Field order matters only for
/// byte-level diffing against the frontend's own requests; serde keeps
/// declaration order, which matches.
#[derive(Debug, Clone, Serialize)]
pub struct QueryContext {
    pub searchbox_query: String,
    pub search_id: String,
    pub index: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub clicked_category: Option<String>,
    pub staged_image: Option<String>,
    pub location: Option<String>,
}

impl QueryContext {
    /// Context for a fresh query: index 0, no prior clicks, images or
    /// location. `search_id` is the client-generated id for phase 1 and
    /// the server-issued session id for phase 2.
    pub fn initial(query: &str, search_id: &str) -> Self {
        Self {
            searchbox_query: query.to_string(),
            search_id: search_id.to_string(),
            index: 0,
            kind: "initial_searchbox".to_string(),
            clicked_category: None,
            staged_image: None,
            location: None,
        }
    }

    /// Serialize as the singleton JSON array the upstream expects.
    pub fn to_singleton_param(&self) -> Result<String> {
        Ok(serde_json::to_string(std::slice::from_ref(self))?)
    }
}

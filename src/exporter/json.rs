// file: src/exporter/json.rs
// description: json export of relayed search results

use crate::error::Result;
use crate::models::ResultDocument;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

/// Envelope written to disk: the query, when it ran, and what came back.
#[derive(Debug, Serialize)]
pub struct ExportedSearch {
    pub query: String,
    pub exported_at: String,
    #[serde(flatten)]
    pub document: ResultDocument,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Write one search result, returning the path of the file created.
    pub fn export(&self, query: &str, document: &ResultDocument, pretty: bool) -> Result<PathBuf> {
        let exported = ExportedSearch {
            query: query.to_string(),
            exported_at: Utc::now().to_rfc3339(),
            document: document.clone(),
        };

        let file_name = format!(
            "search_{}_{}.json",
            Utc::now().format("%Y%m%d%H%M%S"),
            slugify(query)
        );
        let path = self.output_dir.join(file_name);

        let payload = if pretty {
            serde_json::to_string_pretty(&exported)?
        } else {
            serde_json::to_string(&exported)?
        };
        fs::write(&path, payload)?;

        info!("Exported search result to {}", path.display());
        Ok(path)
    }
}

fn slugify(query: &str) -> String {
    let slug: String = query
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    slug.chars().take(40).collect()
}

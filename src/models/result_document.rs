// file: src/models/result_document.rs
// description: structured search result returned to the caller
// reference: outbound shape consumed by the presentation layer

use serde::{Deserialize, Serialize};

/// Final output of one relayed query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDocument {
    /// Ordered summary fragments joined with single spaces and trimmed.
    pub summary: String,
    /// Detail items in stream arrival order.
    pub details: Vec<DetailItem>,
}

impl ResultDocument {
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.details.is_empty()
    }
}

/// One detail finding: either a leaf text line or a labeled image gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailItem {
    Line {
        text: String,
    },
    ImageGroup {
        subject: String,
        images: Vec<ImageRef>,
    },
}

/// Subject label used when the upstream image payload carries no query
/// label of its own.
pub const UNLABELED_SUBJECT: &str = "Not Found";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub image_url: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialized_shape() {
        let document = ResultDocument {
            summary: "Paris is the capital.".to_string(),
            details: vec![
                DetailItem::Line {
                    text: "Fact A".to_string(),
                },
                DetailItem::ImageGroup {
                    subject: "Eiffel Tower".to_string(),
                    images: vec![ImageRef {
                        image_url: "u1".to_string(),
                        link: "l1".to_string(),
                    }],
                },
            ],
        };

        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["summary"], "Paris is the capital.");
        assert_eq!(json["details"][0]["text"], "Fact A");
        assert_eq!(json["details"][1]["subject"], "Eiffel Tower");
        assert_eq!(json["details"][1]["images"][0]["imageUrl"], "u1");
        assert_eq!(json["details"][1]["images"][0]["link"], "l1");
    }

    #[test]
    fn test_untagged_roundtrip_keeps_variants() {
        let original = ResultDocument {
            summary: String::new(),
            details: vec![
                DetailItem::ImageGroup {
                    subject: UNLABELED_SUBJECT.to_string(),
                    images: vec![],
                },
                DetailItem::Line {
                    text: "line".to_string(),
                },
            ],
        };

        let json = serde_json::to_string(&original).unwrap();
        let restored: ResultDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_is_empty() {
        let empty = ResultDocument {
            summary: String::new(),
            details: vec![],
        };
        assert!(empty.is_empty());

        let with_summary = ResultDocument {
            summary: "something".to_string(),
            details: vec![],
        };
        assert!(!with_summary.is_empty());
    }
}

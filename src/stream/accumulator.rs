// file: src/stream/accumulator.rs
// description: folds decoded stream events into the final result document

use crate::models::result_document::UNLABELED_SUBJECT;
use crate::models::{DetailItem, ImageRef, ResultDocument};
use crate::stream::events::{EventDecodeWarning, StreamEvent, parse_data_line};
use crate::utils::Validator;
use tracing::{debug, warn};

/// Per-query accumulator for the streaming phase. Each query owns its own
/// instance; nothing is shared between concurrent queries.
#[derive(Debug, Default)]
pub struct ResultAccumulator {
    summary_fragments: Vec<String>,
    details: Vec<DetailItem>,
    warnings: Vec<EventDecodeWarning>,
}

impl ResultAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb one complete line from the stream. Non-event lines are
    /// ignored; undecodable events are recorded as warnings and skipped so
    /// previously accumulated results survive.
    pub fn absorb_line(&mut self, line: &str) {
        match parse_data_line(line) {
            None => {}
            Some(Ok(event)) => self.absorb_event(event),
            Some(Err(err)) => self.record_warning(line, err.to_string()),
        }
    }

    fn absorb_event(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::TopAnswerChunk { data } => {
                self.summary_fragments.push(data);
            }
            StreamEvent::Line { data } => {
                if data.is_leaf {
                    self.details.push(DetailItem::Line { text: data.line });
                } else {
                    debug!("Discarding non-leaf line event");
                }
            }
            StreamEvent::Image { data } => {
                let subject = data
                    .images
                    .first()
                    .and_then(|entry| entry.image_search_query.clone())
                    .unwrap_or_else(|| UNLABELED_SUBJECT.to_string());

                let images = data
                    .images
                    .into_iter()
                    .map(|entry| ImageRef {
                        image_url: entry.image_url,
                        link: entry.link,
                    })
                    .collect();

                self.details.push(DetailItem::ImageGroup { subject, images });
            }
            StreamEvent::Other => {
                debug!("Ignoring unrecognized event type");
            }
        }
    }

    fn record_warning(&mut self, line: &str, reason: String) {
        let excerpt = Validator::truncate_text(line, 120);
        warn!("Skipping undecodable stream event ({}): {}", reason, excerpt);
        self.warnings.push(EventDecodeWarning { excerpt, reason });
    }

    pub fn warnings(&self) -> &[EventDecodeWarning] {
        &self.warnings
    }

    /// Join summary fragments with single spaces, trim, and hand the
    /// document to the caller. Details keep arrival order.
    pub fn finish(self) -> ResultDocument {
        ResultDocument {
            summary: self.summary_fragments.join(" ").trim().to_string(),
            details: self.details,
        }
    }
}

// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod relay;
pub mod stream;
pub mod upstream;
pub mod utils;

pub use config::{ClientConfig, Config, UpstreamConfig};
pub use error::{RelayError, Result};
pub use exporter::{ExportedSearch, JsonExporter};
pub use models::{DetailItem, ImageRef, QueryContext, ResultDocument, SearchSession};
pub use relay::SearchRelay;
pub use stream::{EventDecodeWarning, EventFrameDecoder, ResultAccumulator, StreamEvent};
pub use upstream::{SessionInitiator, StreamingQueryRunner};
pub use utils::{OperationTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _decoder = EventFrameDecoder::new();
    }
}

// file: src/stream/mod.rs
// description: module declarations for event-stream decoding

pub mod accumulator;
pub mod events;
pub mod framing;

pub use accumulator::ResultAccumulator;
pub use events::{EventDecodeWarning, StreamEvent, parse_data_line};
pub use framing::EventFrameDecoder;

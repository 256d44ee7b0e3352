// file: src/upstream/mod.rs
// description: module declarations for the upstream HTTP adapters

pub mod initiator;
pub mod runner;

pub use initiator::SessionInitiator;
pub use runner::StreamingQueryRunner;

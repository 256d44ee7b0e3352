// file: src/exporter/mod.rs
// description: module declarations for result export

pub mod json;

pub use json::{ExportedSearch, JsonExporter};

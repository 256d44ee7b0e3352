// file: src/models/mod.rs
// description: module declarations for serde data models

pub mod query_context;
pub mod result_document;
pub mod session;

pub use query_context::QueryContext;
pub use result_document::{DetailItem, ImageRef, ResultDocument};
pub use session::SearchSession;

// file: src/utils/mod.rs
// description: module declarations for shared utilities

pub mod logging;
pub mod telemetry;
pub mod validation;

pub use telemetry::OperationTimer;
pub use validation::Validator;

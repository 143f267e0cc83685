use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A chain element at `index` cannot be invoked as a reducer.
    #[error("chain_reducers only accepts reducer functions as arguments (element {index})")]
    Configuration { index: usize },
    #[error("Expected an associative record, got {0}")]
    NotARecord(Value),
}

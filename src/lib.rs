pub mod constants;
pub mod runtime;
pub mod types;

//! Utility functions and helpers

pub mod cmd;
pub mod term;

pub use cmd::log_cmd;

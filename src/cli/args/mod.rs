//! Shared CLI argument types

mod cleanup;
mod common;
mod global;

pub use cleanup::CleanupArgs;
pub use common::OutputFormat;
pub use global::GlobalOptions;

//! Display models for CLI output

pub mod display;

pub use display::{OrgDisplay, OutcomeDisplay};

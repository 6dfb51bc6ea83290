//! Atlassian admin API data models

pub mod org;
pub mod user;

pub use org::Organization;
pub use user::{DisableRequest, User};

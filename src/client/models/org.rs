//! Organisation models

use serde::{Deserialize, Serialize};

/// Organisation resource as returned by `GET admin/v1/orgs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Organisation ID
    pub id: String,

    /// Resource type (always "orgs")
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Organisation attributes
    pub attributes: OrgAttributes,
}

/// Organisation attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgAttributes {
    /// Organisation display name
    pub name: String,
}

impl Organization {
    /// Organisation display name
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    /// Case-insensitive comparison against a configured organisation name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.attributes.name.to_lowercase() == name.to_lowercase()
    }
}

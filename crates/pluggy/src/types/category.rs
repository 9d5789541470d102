//! Transaction category types.

use serde::{Deserialize, Serialize};

/// Category from the Pluggy transaction taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Primary identifier of the category.
    pub id: String,
    /// Category description.
    pub description: String,
    /// Identifier of the parent category, absent on top-level categories.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Description of the parent category.
    #[serde(default)]
    pub parent_description: Option<String>,
}

use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryType};

/// A labeled grouping for questions, seeded with the database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: CategoryType,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Accepted fields for creating or updating a category. Anything else a
/// client submits is dropped during deserialization.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CategoryParams {
    pub name: Option<String>,
    pub slug: Option<String>,
}

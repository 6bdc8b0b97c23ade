use super::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub slug: Option<String>,
    pub category_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl Post {
    pub fn as_json(&self) -> PostJson {
        PostJson {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

/// Public JSON shape of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostJson {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostWithCategory {
    #[serde(flatten)]
    pub post: Post,
    pub category: Option<Category>,
}

/// Accepted fields for creating or updating a post. `category_id` is not
/// among them; see `services::posts::set_post_category`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PostParams {
    pub name: Option<String>,
    pub content: Option<String>,
    pub slug: Option<String>,
}

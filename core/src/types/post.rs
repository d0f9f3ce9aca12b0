use serde::{Deserialize, Serialize};

use super::slug::Slug;

/// Rendered HTML fragment as WordPress returns it (`{ "rendered": ... }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    pub rendered: String,
}

/// Blog post from `wp/v2/posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub slug: Slug,
    pub date: String,
    pub title: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub content: Rendered,
}

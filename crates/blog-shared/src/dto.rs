//! Data Transfer Objects - request types for the API.
//!
//! Every field is optional at this layer; presence checks happen in the
//! domain validation so that all violations come back in one aggregated
//! error instead of a deserializer failure per field.

use serde::{Deserialize, Serialize};

use blog_core::domain::{PostDraft, PostPatch};

/// A field the client may supply either as a single tag or as a sequence
/// of tags. Normalized to a sequence here, before any downstream logic
/// sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
    pub category: Option<OneOrMany>,
    pub favorite: Option<bool>,
    pub tags: Option<OneOrMany>,
    pub excerpt: Option<String>,
    pub date: Option<String>,
}

impl CreatePostRequest {
    pub fn into_draft(self) -> PostDraft {
        PostDraft {
            title: self.title,
            author: self.author,
            body: self.body,
            category: self.category.map(Vec::from).unwrap_or_default(),
            favorite: self.favorite,
            tags: self.tags.map(Vec::from),
            excerpt: self.excerpt,
            date: self.date,
        }
    }
}

/// Request to update a post. Absent fields stay untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
    pub category: Option<OneOrMany>,
    pub favorite: Option<bool>,
    pub tags: Option<OneOrMany>,
    pub excerpt: Option<String>,
    pub date: Option<String>,
}

impl UpdatePostRequest {
    pub fn into_patch(self) -> PostPatch {
        PostPatch {
            title: self.title,
            author: self.author,
            body: self.body,
            category: self.category.map(Vec::from),
            favorite: self.favorite,
            tags: self.tags.map(Vec::from),
            excerpt: self.excerpt,
            date: self.date,
        }
    }
}

/// Query string of the list endpoint. Raw strings on purpose: absent or
/// non-numeric values default instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    /// True when the client asked for the paginated variant at all.
    pub fn wants_pagination(&self) -> bool {
        self.page.is_some() || self.limit.is_some()
    }
}

/// Query string of the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

/// Reference to a stored binary asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub reference: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_category_is_coerced_to_a_sequence() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title": "My First Post", "category": "life"}"#).unwrap();
        let draft = req.into_draft();
        assert_eq!(draft.category, vec!["life".to_owned()]);
    }

    #[test]
    fn array_category_passes_through() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"category": ["life", "tech"]}"#).unwrap();
        let draft = req.into_draft();
        assert_eq!(draft.category, vec!["life".to_owned(), "tech".to_owned()]);
    }

    #[test]
    fn empty_body_deserializes_with_all_fields_absent() {
        let req: UpdatePostRequest = serde_json::from_str("{}").unwrap();
        assert!(req.into_patch().is_empty());
    }
}

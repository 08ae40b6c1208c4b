use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

use super::validation;

/// Post entity - one blog article.
///
/// `id`, `created_at` and `updated_at` are server-managed; clients never
/// write them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub body: String,
    pub category: Vec<String>,
    pub favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client input for creating a post, before validation.
///
/// Required fields are optional here so that "field is missing" aggregates
/// with the other violations instead of failing at deserialization.
/// `category` and `tags` are already normalized to sequences at the DTO
/// boundary; `date` stays a raw string so an unparseable value aggregates
/// with the other field errors too.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
    pub category: Vec<String>,
    pub favorite: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub excerpt: Option<String>,
    pub date: Option<String>,
}

impl PostDraft {
    /// Validate the draft and build a `Post` with server-assigned fields.
    ///
    /// Either every constraint holds and a complete post comes back, or the
    /// aggregated `ValidationError` lists all offending fields.
    pub fn into_post(self) -> Result<Post, ValidationError> {
        let mut errors = Vec::new();

        match &self.title {
            Some(title) => validation::check_title(&mut errors, title),
            None => errors.push("title: is required".to_owned()),
        }
        match &self.author {
            Some(author) => validation::check_author(&mut errors, author),
            None => errors.push("author: is required".to_owned()),
        }
        match &self.body {
            Some(body) => validation::check_body(&mut errors, body),
            None => errors.push("body: is required".to_owned()),
        }
        validation::check_category(&mut errors, &self.category);
        if let Some(excerpt) = &self.excerpt {
            validation::check_excerpt(&mut errors, excerpt);
        }
        if let Some(date) = &self.date {
            validation::check_date(&mut errors, date);
        }

        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }

        let now = Utc::now();
        let date = self
            .date
            .as_deref()
            .and_then(super::parse_date)
            .unwrap_or(now);

        Ok(Post {
            id: Uuid::new_v4(),
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            category: self.category,
            favorite: self.favorite.unwrap_or(false),
            tags: self.tags,
            excerpt: self.excerpt,
            date,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update of the mutable post fields.
///
/// `None` means "leave the field as is". `id` and `created_at` are not
/// representable here and therefore immutable.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
    pub category: Option<Vec<String>>,
    pub favorite: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub excerpt: Option<String>,
    pub date: Option<String>,
}

impl PostPatch {
    /// Check every supplied field against the schema constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if let Some(title) = &self.title {
            validation::check_title(&mut errors, title);
        }
        if let Some(author) = &self.author {
            validation::check_author(&mut errors, author);
        }
        if let Some(body) = &self.body {
            validation::check_body(&mut errors, body);
        }
        if let Some(category) = &self.category {
            validation::check_category(&mut errors, category);
        }
        if let Some(excerpt) = &self.excerpt {
            validation::check_excerpt(&mut errors, excerpt);
        }
        if let Some(date) = &self.date {
            validation::check_date(&mut errors, date);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }

    /// Apply the supplied fields to an existing post and refresh
    /// `updated_at`. Call `validate` first; an unparseable date is left
    /// unapplied here rather than panicking.
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(author) = &self.author {
            post.author = author.clone();
        }
        if let Some(body) = &self.body {
            post.body = body.clone();
        }
        if let Some(category) = &self.category {
            post.category = category.clone();
        }
        if let Some(favorite) = self.favorite {
            post.favorite = favorite;
        }
        if let Some(tags) = &self.tags {
            post.tags = Some(tags.clone());
        }
        if let Some(excerpt) = &self.excerpt {
            post.excerpt = Some(excerpt.clone());
        }
        if let Some(date) = self.date.as_deref().and_then(super::parse_date) {
            post.date = date;
        }
        post.updated_at = Utc::now();
    }

    /// True when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.body.is_none()
            && self.category.is_none()
            && self.favorite.is_none()
            && self.tags.is_none()
            && self.excerpt.is_none()
            && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> PostDraft {
        PostDraft {
            title: Some("hello world".to_owned()),
            author: Some("A".to_owned()),
            body: Some(String::new()),
            category: vec!["tech".to_owned()],
            ..Default::default()
        }
    }

    #[test]
    fn draft_with_defaults_builds_a_post() {
        let post = valid_draft().into_post().unwrap();
        assert!(!post.favorite);
        assert_eq!(post.category, vec!["tech".to_owned()]);
        assert_eq!(post.created_at, post.updated_at);
        // date defaults to creation time when omitted
        assert_eq!(post.date, post.created_at);
    }

    #[test]
    fn short_title_is_rejected() {
        let mut draft = valid_draft();
        draft.title = Some("hi".to_owned());
        let err = draft.into_post().unwrap_err();
        assert!(err.errors[0].starts_with("title:"));
    }

    #[test]
    fn all_violations_are_aggregated() {
        let draft = PostDraft {
            title: Some("hi".to_owned()),
            author: Some("  ".to_owned()),
            body: Some("x".repeat(5001)),
            category: Vec::new(),
            date: Some("not-a-date".to_owned()),
            ..Default::default()
        };
        let err = draft.into_post().unwrap_err();
        assert_eq!(err.errors.len(), 4);
    }

    #[test]
    fn missing_required_fields_are_reported_together() {
        let err = PostDraft::default().into_post().unwrap_err();
        assert_eq!(err.errors.len(), 4);
        assert!(err.errors.contains(&"title: is required".to_owned()));
        assert!(err.errors.contains(&"author: is required".to_owned()));
        assert!(err.errors.contains(&"body: is required".to_owned()));
    }

    #[test]
    fn bare_date_is_accepted() {
        let mut draft = valid_draft();
        draft.date = Some("2024-01-01".to_owned());
        let post = draft.into_post().unwrap();
        assert_eq!(post.date.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn patch_applies_only_supplied_fields() {
        let mut post = valid_draft().into_post().unwrap();
        let before = post.clone();
        let patch = PostPatch {
            title: Some("a new title".to_owned()),
            favorite: Some(true),
            ..Default::default()
        };
        patch.validate().unwrap();
        patch.apply_to(&mut post);

        assert_eq!(post.title, "a new title");
        assert!(post.favorite);
        assert_eq!(post.author, before.author);
        assert_eq!(post.id, before.id);
        assert_eq!(post.created_at, before.created_at);
        assert!(post.updated_at >= before.updated_at);
    }

    #[test]
    fn patch_with_bad_date_is_rejected() {
        let patch = PostPatch {
            date: Some("yesterday".to_owned()),
            ..Default::default()
        };
        let err = patch.validate().unwrap_err();
        assert_eq!(err.errors, vec!["date: must be a valid date".to_owned()]);
    }
}

//! The uniform response envelope every endpoint answers with.

use serde::{Deserialize, Serialize};

use blog_core::ports::PageMeta;

/// `{success, message, data?, pagination?}` - the shape of every API
/// response, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            pagination: None,
        }
    }

    pub fn paginated(message: impl Into<String>, data: T, pagination: PageMeta) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            pagination: Some(pagination),
        }
    }
}

impl Envelope<()> {
    /// A success envelope that carries no data, e.g. after a delete.
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            pagination: None,
        }
    }

    /// A failure envelope. The message is always coarse and stable;
    /// diagnostic detail belongs in the server log, not here.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            pagination: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_not_serialized() {
        let body = serde_json::to_value(Envelope::fail("Error fetching posts.")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "message": "Error fetching posts."})
        );
    }

    #[test]
    fn pagination_round_trips_in_camel_case() {
        let meta = PageMeta {
            total: 21,
            page: 2,
            limit: 10,
            total_pages: 3,
        };
        let body = serde_json::to_value(Envelope::paginated("ok", vec![1, 2, 3], meta)).unwrap();
        assert_eq!(body["pagination"]["totalPages"], 3);
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
    }
}

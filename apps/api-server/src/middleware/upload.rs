//! Upload validation - MIME and size checks before the blob store.

use actix_web::{HttpRequest, http::header};

use super::error::AppError;

/// Validate an uploaded buffer.
///
/// Only `image/*` content is accepted, and the buffer must stay within
/// the configured byte limit. Returns the content type for the blob
/// store on success.
pub fn validate_image(
    req: &HttpRequest,
    body: &[u8],
    max_bytes: usize,
) -> Result<String, AppError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if !content_type.starts_with("image/") {
        return Err(AppError::UnsupportedMedia(
            "Only image files are allowed.".to_owned(),
        ));
    }

    if body.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(
            "Uploaded file exceeds the size limit.".to_owned(),
        ));
    }

    Ok(content_type.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn accepts_small_image() {
        let req = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "image/png"))
            .to_http_request();
        let content_type = validate_image(&req, &[0u8; 128], 6144).unwrap();
        assert_eq!(content_type, "image/png");
    }

    #[test]
    fn rejects_non_image_content() {
        let req = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "application/pdf"))
            .to_http_request();
        let err = validate_image(&req, &[0u8; 128], 6144).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMedia(_)));
    }

    #[test]
    fn rejects_missing_content_type() {
        let req = TestRequest::default().to_http_request();
        let err = validate_image(&req, &[0u8; 128], 6144).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMedia(_)));
    }

    #[test]
    fn rejects_oversized_body() {
        let req = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "image/jpeg"))
            .to_http_request();
        let err = validate_image(&req, &[0u8; 7000], 6144).unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
    }
}

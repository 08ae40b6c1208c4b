//! Post handlers - one handler per logical operation.
//!
//! Every handler translates repository outcomes into the uniform envelope
//! and the fixed status-code policy: 201 on create, 200 on success
//! (including an empty list), 404 for unresolved ids / no recent posts /
//! no search matches, 400 for malformed input, 500 for storage failures.

use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use blog_core::ports::{DEFAULT_RECENT_LIMIT, PageRequest};
use blog_shared::Envelope;
use blog_shared::dto::{
    CreatePostRequest, ListQuery, SearchQuery, UpdatePostRequest, UploadResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::upload;
use crate::state::AppState;

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid post id format.".to_owned()))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = body.into_inner().into_draft().into_post()?;

    let created = state
        .posts
        .create(post)
        .await
        .map_err(|e| AppError::storage(e, "Error creating post."))?;

    Ok(HttpResponse::Created().json(Envelope::ok(
        "Successfully created a new post.",
        created,
    )))
}

/// GET /api/posts - all posts, or one page when ?page or ?limit is given.
pub async fn get_posts(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    if query.wants_pagination() {
        let req = PageRequest::from_raw(query.page.as_deref(), query.limit.as_deref());
        let (posts, meta) = state
            .posts
            .find_page(req)
            .await
            .map_err(|e| AppError::storage(e, "Error fetching posts."))?;
        return Ok(HttpResponse::Ok().json(Envelope::paginated(
            "Successfully fetched posts.",
            posts,
            meta,
        )));
    }

    let posts = state
        .posts
        .find_all()
        .await
        .map_err(|e| AppError::storage(e, "Error fetching posts."))?;

    // An empty list is a successful outcome.
    Ok(HttpResponse::Ok().json(Envelope::ok("Successfully fetched all posts.", posts)))
}

/// GET /api/posts/{id}
pub async fn get_post_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await
        .map_err(|e| AppError::storage(e, "Error fetching post."))?
        .ok_or_else(|| AppError::NotFound("No post with that ID was found.".to_owned()))?;

    Ok(HttpResponse::Ok().json(Envelope::ok("Successfully fetched post.", post)))
}

/// PATCH /api/posts/{id}
pub async fn update_post_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let patch = body.into_inner().into_patch();
    patch.validate()?;

    let updated = state
        .posts
        .update(id, patch)
        .await
        .map_err(|e| AppError::storage(e, "Error updating post."))?
        .ok_or_else(|| AppError::NotFound("No post with that ID was found.".to_owned()))?;

    Ok(HttpResponse::Ok().json(Envelope::ok("Successfully updated post.", updated)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let deleted = state
        .posts
        .delete(id)
        .await
        .map_err(|e| AppError::storage(e, "Error deleting post."))?;

    if !deleted {
        return Err(AppError::NotFound(
            "No post with that ID was found.".to_owned(),
        ));
    }

    Ok(HttpResponse::Ok().json(Envelope::ok_empty("Post deleted successfully.")))
}

/// GET /api/posts/count
pub async fn count_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let count = state
        .posts
        .count()
        .await
        .map_err(|e| AppError::storage(e, "Error fetching post count."))?;

    Ok(HttpResponse::Ok().json(Envelope::ok("Post count", count)))
}

/// GET /api/posts/recent - the 5 most recent posts.
pub async fn recent_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .find_recent(DEFAULT_RECENT_LIMIT)
        .await
        .map_err(|e| AppError::storage(e, "Error fetching recent posts."))?;

    if posts.is_empty() {
        return Err(AppError::NotFound("No recent posts found.".to_owned()));
    }

    Ok(HttpResponse::Ok().json(Envelope::ok("Successfully fetched recent posts.", posts)))
}

/// GET /api/posts/search?query=
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    // The query is checked before any storage access.
    let Some(query) = query.into_inner().query.filter(|q| !q.is_empty()) else {
        return Err(AppError::BadRequest(
            "Query parameter is required for searching posts.".to_owned(),
        ));
    };

    let posts = state
        .posts
        .search(&query)
        .await
        .map_err(|e| AppError::storage(e, "Error searching posts."))?;

    if posts.is_empty() {
        return Err(AppError::NotFound(
            "No posts found matching your search query.".to_owned(),
        ));
    }

    Ok(HttpResponse::Ok().json(Envelope::ok("search results", posts)))
}

/// POST /api/posts/upload - authenticated image upload.
pub async fn upload_image(
    state: web::Data<AppState>,
    identity: Identity,
    req: HttpRequest,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let content_type = upload::validate_image(&req, &body, state.max_upload_bytes)?;

    tracing::debug!(user = %identity.subject, %content_type, bytes = body.len(), "Uploading image");

    let reference = state
        .blobs
        .put(&content_type, body.to_vec())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error uploading image");
            AppError::Internal("Error uploading image.".to_owned())
        })?;

    Ok(HttpResponse::Created().json(Envelope::ok(
        "Successfully uploaded image.",
        UploadResponse { reference },
    )))
}

//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
///
/// Literal sub-paths (`/count`, `/recent`, `/search`, `/upload`) are
/// registered before the `{id}` pattern so they are never misread as
/// identifiers.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("/count", web::get().to(posts::count_posts))
                    .route("/recent", web::get().to(posts::recent_posts))
                    .route("/search", web::get().to(posts::search_posts))
                    .route("/upload", web::post().to(posts::upload_image))
                    .route("/{id}", web::get().to(posts::get_post_by_id))
                    .route("", web::post().to(posts::create_post))
                    .route("", web::get().to(posts::get_posts))
                    .route("/{id}", web::patch().to(posts::update_post_by_id))
                    .route("/{id}", web::delete().to(posts::delete_post_by_id)),
            ),
    );
}

//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    cfg.app_data(json_config)
        .app_data(query_config)
        .route("/", web::get().to(health::index))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/v1/posts")
                        .route("", web::get().to(posts::list_posts))
                        .route("", web::post().to(posts::create_post))
                        .route("/{id}", web::get().to(posts::get_post))
                        .route("/{id}", web::patch().to(posts::update_post))
                        .route("/{id}", web::delete().to(posts::delete_post)),
                ),
        );
}

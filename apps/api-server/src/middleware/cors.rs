//! CORS middleware.

use actix_cors::Cors;
use actix_web::http::{Method, Uri, header};

/// Build the CORS layer.
///
/// With no configured origins every origin is allowed.
pub fn cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::permissive();
    }

    allowed_origins
        .iter()
        .filter(|origin| {
            let valid = origin.parse::<Uri>().is_ok();
            if !valid {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
            }
            valid
        })
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    use super::*;
    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn test_any_origin_allowed_by_default() {
        let app = test::init_service(
            App::new()
                .wrap(cors(&[]))
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/posts")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_configured_origin_is_echoed() {
        let origins = vec!["https://blog.example.com".to_string()];
        let app = test::init_service(
            App::new()
                .wrap(cors(&origins))
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/posts")
            .insert_header((header::ORIGIN, "https://blog.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://blog.example.com"
        );
    }
}

//! [`ImageSource`] over HTTP.

use trapcam_app::ports::ImageSource;
use trapcam_domain::error::TrapcamError;
use trapcam_domain::gallery::ImageListing;

use crate::client::HttpBackend;

impl ImageSource for HttpBackend {
    async fn fetch_images(&self, endpoint: &str) -> Result<ImageListing, TrapcamError> {
        Ok(self.get_json(endpoint).await?)
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use serde_json::json;

    use super::*;
    use crate::test_support::spawn_backend;

    #[tokio::test]
    async fn should_fetch_image_listing() {
        let router = Router::new().route(
            "/images",
            get(|| async { axum::Json(json!({"images": ["static/a.jpg", "static/b.jpg"]})) }),
        );
        let backend = spawn_backend(router).await;

        let listing = backend.fetch_images("/images").await.unwrap();

        assert_eq!(listing.into_images(), vec!["static/a.jpg", "static/b.jpg"]);
    }

    #[tokio::test]
    async fn should_treat_missing_images_field_as_empty() {
        let router = Router::new().route(
            "/inference-images",
            get(|| async { axum::Json(json!({"error": "no detections yet"})) }),
        );
        let backend = spawn_backend(router).await;

        let listing = backend.fetch_images("/inference-images").await.unwrap();

        assert!(listing.into_images().is_empty());
    }

    #[tokio::test]
    async fn should_fail_on_error_status() {
        let router = Router::new().route(
            "/images",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "camera offline") }),
        );
        let backend = spawn_backend(router).await;

        let result = backend.fetch_images("/images").await;

        assert!(matches!(result, Err(TrapcamError::Fetch(_))));
    }

    #[tokio::test]
    async fn should_fail_on_undecodable_body() {
        let router = Router::new().route("/images", get(|| async { "<html>oops</html>" }));
        let backend = spawn_backend(router).await;

        let result = backend.fetch_images("/images").await;

        assert!(matches!(result, Err(TrapcamError::Fetch(_))));
    }
}

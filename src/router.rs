use axum::{routing::get, Router};

/// Liveness endpoint polled by the hosting platform.
///
/// Serves only `GET /`; everything else is a 404.
pub fn router() -> Router {
    Router::new().route("/", get(liveness))
}

async fn liveness() -> &'static str {
    "running"
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn root_reports_running() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        assert_eq!(&body[..], b"running");
    }

    #[tokio::test]
    async fn other_paths_are_not_found() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/registrations")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

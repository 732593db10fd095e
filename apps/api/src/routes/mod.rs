pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::catalog::handlers as catalog;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::readiness_handler))
        // Quiz + scoring
        .route("/api/questions", get(catalog::handle_list_questions))
        .route("/api/submit", post(assessment::handle_submit))
        // Catalog maintenance
        .route(
            "/api/v1/catalog/reload",
            post(catalog::handle_reload_catalog),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::catalog::snapshot::{fixtures::sample_catalog, CatalogSnapshot};
    use crate::catalog::CatalogHandle;
    use crate::config::Config;
    use crate::db::lazy_pool;

    fn test_state(snapshot: CatalogSnapshot) -> AppState {
        let config = Config::for_tests();
        AppState {
            db: lazy_pool(&config.database_url),
            config,
            catalog: CatalogHandle::new(snapshot),
        }
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let app = build_router(test_state(CatalogSnapshot::empty()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_questions_lists_quiz_with_options() {
        let app = build_router(test_state(sample_catalog()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/questions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let questions = body.as_array().unwrap();
        assert_eq!(questions.len(), 30);
        assert_eq!(questions[0]["category"], "Logical Reasoning");
        assert_eq!(questions[0]["options"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_submit_returns_ranked_careers() {
        let app = build_router(test_state(sample_catalog()));
        let response = app
            .oneshot(post_json(
                "/api/submit",
                json!({
                    "answers": {"TK1": 3, "TK2": 3, "TK3": 3, "TK4": 3},
                    "text": "I love solving puzzles with logic and pattern recognition"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["nlp_used"], true);
        assert_eq!(body["quiz_scores"], json!([["Technical Knowledge", 12]]));
        assert_eq!(body["careers"], json!(["Data Scientist", "Software Engineer"]));
        assert_eq!(body["career_details"][0]["career_id"], "C2");
        assert_eq!(
            body["career_details"][0]["resources"][0],
            json!({"type": "course", "name": "Intro to ML"})
        );
    }

    #[tokio::test]
    async fn test_submit_accepts_flat_payload() {
        let app = build_router(test_state(sample_catalog()));
        let response = app
            .oneshot(post_json("/api/submit", json!({"CR1": 3, "CR2": "2"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["nlp_used"], false);
        assert_eq!(body["weights"], json!({"quiz": 1.0, "nlp": 0.0}));
        assert_eq!(body["careers"], json!(["UX Designer"]));
    }

    #[tokio::test]
    async fn test_submit_before_catalog_load_is_unavailable() {
        let app = build_router(test_state(CatalogSnapshot::empty()));
        let response = app
            .oneshot(post_json("/api/submit", json!({"answers": {}})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "CATALOG_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_submit_rejects_array_body() {
        let app = build_router(test_state(sample_catalog()));
        let response = app
            .oneshot(post_json("/api/submit", json!([1, 2, 3])))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_submit_rejects_malformed_json_as_validation_error() {
        let app = build_router(test_state(sample_catalog()));
        let request = Request::builder()
            .method("POST")
            .uri("/api/submit")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_submit_without_content_type_is_still_scored() {
        let app = build_router(test_state(sample_catalog()));
        let request = Request::builder()
            .method("POST")
            .uri("/api/submit")
            .body(Body::from(r#"{"CR1": 3}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["careers"], json!(["UX Designer"]));
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_serving_previous_catalog() {
        // the lazy pool has no database behind it
        let state = test_state(sample_catalog());

        let response = build_router(state.clone())
            .oneshot(post_json("/api/v1/catalog/reload", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");

        let response = build_router(state)
            .oneshot(post_json("/api/submit", json!({"CR1": 3})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["careers"], json!(["UX Designer"]));
    }

    #[tokio::test]
    async fn test_readiness_reports_database_failure() {
        let app = build_router(test_state(sample_catalog()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["ok"], false);
        assert_eq!(body["catalog_loaded"], true);
    }
}

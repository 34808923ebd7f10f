use axum::{
    body::Body,
    routing::{get, post},
    Json, Router,
};
use http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "smart_parking");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_map_view_response_shape() {
    let app = create_test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/map/view")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    // Sin origen ni destino la vista usa el centro y zoom por defecto
    assert_eq!(body["zoom"], 12);
    assert_eq!(body["center"]["lat"], 20.5937);
    assert_eq!(body["center"]["lng"], 78.9629);
}

// Función helper para crear la app de test
async fn create_test_app() -> Router {
    Router::new()
        .route(
            "/test",
            get(|| async {
                Json(json!({
                    "status": "ok",
                    "service": "smart_parking"
                }))
            }),
        )
        .route(
            "/api/map/view",
            post(|| async {
                Json(json!({
                    "center": { "lat": 20.5937, "lng": 78.9629 },
                    "zoom": 12,
                    "origin": null,
                    "destination": null
                }))
            }),
        )
}

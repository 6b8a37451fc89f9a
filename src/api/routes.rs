//! API route definitions

use super::admin_handlers;
use super::cluster_handlers;
use super::handlers::{self, ApiState};
use super::project_handlers;
use crate::auth::middleware::{require_admin, require_admin_session};
use crate::API_BASE_PATH;
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Path of the admin bootstrap page
pub const ADMIN_PAGE_PATH: &str = "/wp-admin/semantix-seo";

/// Create the API router
pub fn create_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Every analysis route requires an admin caller with a valid nonce
    let api = Router::new()
        .route(
            "/projects",
            get(project_handlers::list_projects).post(project_handlers::create_project),
        )
        .route("/activities", get(handlers::list_activities))
        .route("/entities", get(handlers::list_entities))
        .route("/clusters", post(cluster_handlers::generate_clusters))
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    let admin = Router::new()
        .route(ADMIN_PAGE_PATH, get(admin_handlers::admin_page))
        .route_layer(from_fn_with_state(state.clone(), require_admin_session));

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        .nest(API_BASE_PATH, api)
        .merge(admin)
        // Known path, unsupported method: same answer as an unknown path
        .method_not_allowed_fallback(handlers::no_route)
        .fallback(handlers::no_route)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{admin_token, body_json, nonce_for, server_state, test_auth_config};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt; // for `oneshot`

    fn app() -> Router {
        create_router(server_state(Some(test_auth_config())))
    }

    fn authed(method: &str, path: &str, body: Option<serde_json::Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(format!("{}{}", API_BASE_PATH, path))
            .header("authorization", format!("Bearer {}", admin_token(1)))
            .header("x-wp-nonce", nonce_for(1))
            .header("content-type", "application/json");
        match body {
            Some(b) => builder.body(Body::from(b.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let resp = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_list_routes() {
        let resp = app().oneshot(authed("GET", "/projects", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let projects = body_json(resp).await;
        assert_eq!(projects.as_array().unwrap().len(), 2);
        assert_eq!(projects[0]["stats"]["semantic_score"], 85);

        let resp = app()
            .oneshot(authed("GET", "/activities", None))
            .await
            .unwrap();
        let activities = body_json(resp).await;
        assert_eq!(activities.as_array().unwrap().len(), 3);
        assert_eq!(activities[2]["status"], "processing");

        let resp = app().oneshot(authed("GET", "/entities", None)).await.unwrap();
        let entities = body_json(resp).await;
        assert_eq!(entities[0]["searchVolume"], 12000);
        assert_eq!(entities[1]["icon"], "Search");
    }

    #[tokio::test]
    async fn test_create_project_route() {
        let resp = app()
            .oneshot(authed(
                "POST",
                "/projects",
                Some(json!({"name": "Acme", "url": "https://acme.test"})),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let project = body_json(resp).await;
        assert_eq!(project["stats"]["semantic_score"], 0);
        assert_eq!(project["stats"]["entity_coverage"], "Not analyzed");
        let id = project["id"].as_u64().unwrap();
        assert!((1000..=9999).contains(&id));
    }

    #[tokio::test]
    async fn test_create_project_non_json_body() {
        let request = Request::post(format!("{}/projects", API_BASE_PATH))
            .header("authorization", format!("Bearer {}", admin_token(1)))
            .header("x-wp-nonce", nonce_for(1))
            .body(Body::from("name=Acme&url=x"))
            .unwrap();

        let resp = app().oneshot(request).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["code"], "missing_fields");
    }

    #[tokio::test]
    async fn test_clusters_route() {
        let resp = app()
            .oneshot(authed(
                "POST",
                "/clusters",
                Some(json!({"core_topic": "Widgets", "depth": 1})),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let root = body_json(resp).await;
        assert_eq!(root["id"], "core");
        assert_eq!(root["children"][0]["title"], "Widgets Strategy");
        assert_eq!(root["children"][1]["title"], "Widgets Tools");
        assert_eq!(root["children"][1]["searchVolume"], 8500);

        let resp = app()
            .oneshot(authed("POST", "/clusters", Some(json!({"core_topic": ""}))))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["code"], "missing_topic");
    }

    #[tokio::test]
    async fn test_api_requires_auth() {
        let resp = app()
            .oneshot(
                Request::get(format!("{}/projects", API_BASE_PATH))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(resp).await["code"], "rest_forbidden");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let resp = app()
            .oneshot(authed("GET", "/keywords", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["code"], "rest_no_route");
    }

    #[tokio::test]
    async fn test_wrong_method_is_json_404() {
        for (method, path) in [
            ("DELETE", "/projects"),
            ("GET", "/clusters"),
            ("POST", "/entities"),
            ("PUT", "/activities"),
        ] {
            let resp = app().oneshot(authed(method, path, None)).await.unwrap();
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{} {}", method, path);

            let json = body_json(resp).await;
            assert_eq!(json["code"], "rest_no_route");
            assert_eq!(
                json["message"],
                "No route was found matching the URL and request method."
            );
            assert_eq!(json["data"]["status"], 404);
        }

        let resp = app()
            .oneshot(Request::post("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["code"], "rest_no_route");
    }

    #[tokio::test]
    async fn test_admin_page_embeds_context() {
        let resp = app()
            .oneshot(
                Request::get(ADMIN_PAGE_PATH)
                    .header("authorization", format!("Bearer {}", admin_token(1)))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains(r#"<div id="semantix-root"></div>"#));
        assert!(html.contains(&format!(r#""nonce":"{}""#, nonce_for(1))));
        assert!(html.contains(r#""apiUrl":"http://localhost:8080/wp-json/semantix/v1/""#));
    }
}

pub mod catalog;
pub mod health;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::auth::require_session;
use crate::state::AppState;
use crate::wizard::handlers;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Wizard API
        .route("/wizards", post(handlers::handle_start))
        .route(
            "/wizards/:id",
            get(handlers::handle_get).delete(handlers::handle_delete),
        )
        .route("/wizards/:id/restart", post(handlers::handle_restart))
        .route(
            "/wizards/:id/active-section",
            put(handlers::handle_select_section),
        )
        .route(
            "/wizards/:id/sections/:section",
            post(handlers::handle_submit_section),
        )
        .route("/wizards/:id/preview", get(handlers::handle_preview))
        .route("/wizards/:id/finish", post(handlers::handle_finish))
        // Catalog API
        .route("/catalog/countries", get(catalog::handle_countries))
        .route(
            "/catalog/countries/:country/cities",
            get(catalog::handle_cities),
        )
        .route(
            "/catalog/education",
            get(catalog::handle_education_options),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/v1", api)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::generation::gateway::test_support::ScriptedGenerator;
    use crate::generation::gateway::GenerationGateway;
    use crate::wizard::service::WizardService;

    fn test_state(access_token: Option<&str>) -> AppState {
        let generator = ScriptedGenerator::new(vec![
            ("skills for a", Some("Python, Go, SQL")),
            ("Company:", Some("")),
        ]);
        AppState {
            wizards: WizardService::new(
                GenerationGateway::new(Arc::new(generator)),
                Duration::from_secs(3600),
            ),
            config: Config {
                gemini_api_key: "test-key".into(),
                gemini_base_url: "http://localhost:0".into(),
                generation_timeout: Duration::from_secs(1),
                access_token: access_token.map(str::to_string),
                wizard_idle_ttl: Duration::from_secs(3600),
                port: 0,
                rust_log: "info".into(),
            },
        }
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let router = build_router(test_state(None));
        let (status, body) = send(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_wizard_flow_over_http() {
        let router = build_router(test_state(None));
        let (status, created) = send(
            &router,
            Method::POST,
            "/api/v1/wizards",
            Some(json!({ "kind": "resume" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["activeSection"], "personalInfo");
        let id = created["id"].as_str().unwrap().to_string();

        let (status, snapshot) = send(
            &router,
            Method::POST,
            &format!("/api/v1/wizards/{id}/sections/skills"),
            Some(json!({ "role": "Data Engineer", "useAI": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(snapshot["document"]["skills"], json!(["Python", "Go", "SQL"]));

        let (status, selected) = send(
            &router,
            Method::PUT,
            &format!("/api/v1/wizards/{id}/active-section"),
            Some(json!({ "section": "projects" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(selected["activeSection"], "projects");

        let (status, preview) = send(
            &router,
            Method::GET,
            &format!("/api/v1/wizards/{id}/preview?template=minimal"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(preview["template"], "minimal");

        let (status, handoff) = send(
            &router,
            Method::POST,
            &format!("/api/v1/wizards/{id}/finish"),
            Some(json!({ "template": "modern" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(handoff["templateId"], "modern");
        assert_eq!(handoff["document"]["skills"][2], "SQL");
    }

    #[tokio::test]
    async fn test_error_envelopes() {
        let router = build_router(test_state(None));
        let (_, created) = send(
            &router,
            Method::POST,
            "/api/v1/wizards",
            Some(json!({ "kind": "resume" })),
        )
        .await;
        let id = created["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/v1/wizards/{id}/sections/workExperience"),
            Some(json!({ "company": "Acme" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/v1/wizards/{id}/sections/workExperience"),
            Some(json!({
                "company": "Acme",
                "position": "Engineer",
                "startDate": "2022-01-01",
                "currentlyWorking": true,
                "useAI": true
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["message"], "failed to save");

        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/v1/wizards/{id}/sections/projects"),
            Some(json!({ "name": "Ledger", "useAI": true })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["message"], "failed to generate");

        let (status, snapshot) =
            send(&router, Method::GET, &format!("/api/v1/wizards/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(snapshot["document"]["workExperience"], json!([]));
        assert_eq!(snapshot["document"]["projects"], json!([]));
        assert_eq!(snapshot["generation"]["projects"], "failed");

        let (status, _) = send(
            &router,
            Method::GET,
            &format!("/api/v1/wizards/{}", uuid::Uuid::new_v4()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_deleted_wizard_returns_not_found() {
        let router = build_router(test_state(None));
        let (_, created) = send(
            &router,
            Method::POST,
            "/api/v1/wizards",
            Some(json!({ "kind": "coverLetter" })),
        )
        .await;
        let uri = format!("/api/v1/wizards/{}", created["id"].as_str().unwrap());

        let (status, _) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_catalog_routes() {
        let router = build_router(test_state(None));
        let (status, countries) =
            send(&router, Method::GET, "/api/v1/catalog/countries", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(countries.as_array().unwrap().len(), 16);
        assert!(countries[0].get("dialCode").is_some());

        let (status, cities) = send(
            &router,
            Method::GET,
            "/api/v1/catalog/countries/South%20Korea/cities",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(cities.as_array().unwrap().contains(&json!("Seoul")));

        let (status, _) = send(
            &router,
            Method::GET,
            "/api/v1/catalog/countries/Atlantis/cities",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, education) =
            send(&router, Method::GET, "/api/v1/catalog/education", None).await;
        assert!(education["degrees"]
            .as_array()
            .unwrap()
            .contains(&json!("Other")));
    }

    #[tokio::test]
    async fn test_access_token_gates_api_but_not_health() {
        let router = build_router(test_state(Some("s3cret")));
        let (status, body) = send(&router, Method::GET, "/api/v1/catalog/countries", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");

        let request = Request::builder()
            .uri("/api/v1/catalog/countries")
            .header(header::AUTHORIZATION, "Bearer s3cret")
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (status, _) = send(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}

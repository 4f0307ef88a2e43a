use axum::Router;

pub mod events;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Connects to the configured event store, so this is where a bad
/// `DATABASE_URL` surfaces.
pub async fn routes(state: &crate::state::AppState) -> eyre::Result<Router> {
    Ok(Router::new().nest(domain_events::EVENTS_PATH, events::router(state).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::{create_router, health_router};
    use chrono::{TimeZone, Utc};
    use core_config::{
        app_info, database::DatabaseConfig, scheduler::SchedulerConfig, server::ServerConfig,
    };
    use domain_events::{FixedClock, RecordingNotifier, SharedCounter};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(notifier: Arc<RecordingNotifier>) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: DatabaseConfig::memory(),
                scheduler: SchedulerConfig::default(),
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            clock: Arc::new(FixedClock::new(
                Utc.with_ymd_and_hms(2025, 6, 23, 17, 0, 0).unwrap(),
            )),
            notifier,
            counter: Arc::new(SharedCounter::new()),
        }
    }

    async fn app(state: &AppState) -> Router {
        let api_routes = routes(state).await.unwrap();
        create_router::<crate::openapi::ApiDoc>(api_routes).merge(health_router(state.config.app))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_event_lifecycle_under_api_prefix() {
        let notifier = Arc::new(RecordingNotifier::new());
        let state = state(notifier.clone());
        let app = app(&state).await;

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/events?name=deploy&scheduledTime=2025-06-23T16:30:00Z")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["status"], "SCHEDULED");

        let response = app
            .clone()
            .oneshot(Request::get("/api/events/due").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let due = body_json(response).await;
        assert_eq!(due.as_array().map(Vec::len), Some(1));

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/events/1/complete")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(notifier.messages(), vec!["Event completed: deploy".to_string()]);
        assert_eq!(state.counter.get(), 1);

        let response = app
            .oneshot(Request::get("/api/events/due").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_openapi_document_lists_event_paths() {
        let state = state(Arc::new(RecordingNotifier::new()));
        let response = app(&state)
            .await
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_json(response).await;
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/events"));
        assert!(paths.contains_key("/events/due"));
        assert!(paths.contains_key("/events/{id}/complete"));
    }

    #[tokio::test]
    async fn test_health_reports_package() {
        let state = state(Arc::new(RecordingNotifier::new()));
        let response = app(&state)
            .await
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health = body_json(response).await;
        assert_eq!(health["status"], "ok");
        assert_eq!(health["name"], "scheduler_api");
    }

    #[tokio::test]
    async fn test_unknown_path_is_json_404() {
        let state = state(Arc::new(RecordingNotifier::new()));
        let response = app(&state)
            .await
            .oneshot(Request::get("/api/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "NOT_FOUND");
    }
}

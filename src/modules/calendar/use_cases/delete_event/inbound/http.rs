use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::HeaderMap,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::calendar::adapters::inbound::http_response::{self, RequestError};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteEventBody {
    #[serde(default)]
    pub id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<DeleteEventBody>, JsonRejection>,
) -> impl IntoResponse {
    if let Err(rejection) = http_response::require_json(&headers) {
        return rejection.into_response();
    }

    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return RequestError::from(rejection).into_response(),
    };

    let scope = state.request_scope();

    match state.events.delete_event(scope.token(), &body.id).await {
        Ok(()) => {
            tracing::info!(event_id = %body.id, "event deleted");
            http_response::ok("event deleted")
        }
        Err(error) => {
            tracing::error!(%error, event_id = %body.id, "failed to delete event");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod delete_event_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tokio_util::sync::CancellationToken;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::event::EventBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/delete_event", post(handle))
            .with_state(state)
    }

    fn request(body: &'static str) -> Request<Body> {
        Request::post("/delete_event")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_when_the_event_is_deleted() {
        let state = AppState::in_memory(CancellationToken::new());
        state
            .events
            .create_event(&CancellationToken::new(), EventBuilder::new().id("e-1").build())
            .await
            .unwrap();

        let response = app(state.clone())
            .oneshot(request(r#"{"id":"e-1"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "result": "event deleted" })
        );

        let again = app(state).oneshot(request(r#"{"id":"e-1"}"#)).await.unwrap();
        assert_eq!(again.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_id_is_missing() {
        let response = app(AppState::in_memory(CancellationToken::new()))
            .oneshot(request("{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "event ID cannot be empty" })
        );
    }

    #[tokio::test]
    async fn it_should_return_400_without_a_json_content_type() {
        let response = app(AppState::in_memory(CancellationToken::new()))
            .oneshot(
                Request::post("/delete_event")
                    .body(Body::from(r#"{"id":"e-1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "unsupported media type" })
        );
    }
}

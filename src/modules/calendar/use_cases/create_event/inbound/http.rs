use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::HeaderMap,
    response::IntoResponse,
};

use crate::modules::calendar::adapters::inbound::http_response::{self, RequestError};
use crate::modules::calendar::core::event::Event;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<Event>, JsonRejection>,
) -> impl IntoResponse {
    if let Err(rejection) = http_response::require_json(&headers) {
        return rejection.into_response();
    }

    let Json(event) = match body {
        Ok(b) => b,
        Err(rejection) => return RequestError::from(rejection).into_response(),
    };

    let scope = state.request_scope();
    let event_id = event.id.clone();
    let user_id = event.user_id.clone();

    match state.events.create_event(scope.token(), event).await {
        Ok(()) => {
            tracing::info!(%event_id, %user_id, "event created");
            http_response::ok("event created")
        }
        Err(error) => {
            tracing::error!(%error, %event_id, %user_id, "failed to create event");
            error.into_response()
        }
    }
}

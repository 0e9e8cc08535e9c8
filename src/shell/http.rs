use std::time::Duration;

use axum::{
    Router,
    http::{Method, StatusCode, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::modules::calendar::use_cases::create_event::inbound::http as create_http;
use crate::modules::calendar::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::calendar::use_cases::list_events_for_period::inbound::http as list_http;
use crate::modules::calendar::use_cases::update_event::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/create_event", post(create_http::handle))
        .route("/update_event", post(update_http::handle))
        .route("/delete_event", post(delete_http::handle))
        .route("/events_for_day", get(list_http::handle_day))
        .route("/events_for_week", get(list_http::handle_week))
        .route("/events_for_month", get(list_http::handle_month))
        .layer(request_timeout_layer(request_timeout))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Requests still running after `timeout` are answered with 408.
pub fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

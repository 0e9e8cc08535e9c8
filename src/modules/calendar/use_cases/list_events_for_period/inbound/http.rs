use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};

use crate::modules::calendar::adapters::inbound::http_response::{self, RequestError};
use crate::modules::calendar::core::period::Period;
use crate::shell::state::AppState;

type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListEventsParams {
    pub user_id: String,
    pub date: String,
}

impl ListEventsParams {
    /// Repeated keys keep their first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut user_id = None;
        let mut date = None;
        for (key, value) in pairs {
            match key.as_str() {
                "user_id" => {
                    user_id.get_or_insert(value);
                }
                "date" => {
                    date.get_or_insert(value);
                }
                _ => {}
            }
        }
        Self {
            user_id: user_id.unwrap_or_default(),
            date: date.unwrap_or_default(),
        }
    }
}

pub async fn handle_day(State(state): State<AppState>, params: QueryPairs) -> impl IntoResponse {
    handle(state, params, Period::Day).await
}

pub async fn handle_week(State(state): State<AppState>, params: QueryPairs) -> impl IntoResponse {
    handle(state, params, Period::Week).await
}

pub async fn handle_month(State(state): State<AppState>, params: QueryPairs) -> impl IntoResponse {
    handle(state, params, Period::Month).await
}

async fn handle(state: AppState, params: QueryPairs, period: Period) -> Response {
    let params = match params {
        Ok(Query(pairs)) => ListEventsParams::from_pairs(pairs),
        Err(rejection) => return RequestError::from(rejection).into_response(),
    };
    if params.user_id.is_empty() || params.date.is_empty() {
        return RequestError::MissingParameters.into_response();
    }

    let scope = state.request_scope();
    let result = state
        .events
        .get_events_for_period(scope.token(), &params.user_id, &params.date, period)
        .await;

    match result {
        Ok(events) => {
            tracing::debug!(
                user_id = %params.user_id,
                date = %params.date,
                period = period.name(),
                count = events.len(),
                "retrieved events"
            );
            http_response::ok(events)
        }
        Err(error) => {
            tracing::error!(
                %error,
                user_id = %params.user_id,
                date = %params.date,
                period = period.name(),
                "failed to get events"
            );
            error.into_response()
        }
    }
}

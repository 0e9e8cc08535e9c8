use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::period::Period;
use crate::modules::calendar::core::ports::EventRepository;
use crate::modules::calendar::core::validate::{
    validate_date, validate_event, validate_id, validate_user_id,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Entry point for inbound adapters: validate, then delegate to the repository.
///
/// A cancelled token fails the call with `Cancelled` before any other work.
#[async_trait]
pub trait EventUseCases: Send + Sync {
    async fn create_event(
        &self,
        cancel: &CancellationToken,
        event: Event,
    ) -> Result<(), CalendarError>;

    async fn update_event(
        &self,
        cancel: &CancellationToken,
        event: Event,
    ) -> Result<(), CalendarError>;

    async fn delete_event(
        &self,
        cancel: &CancellationToken,
        event_id: &str,
    ) -> Result<(), CalendarError>;

    async fn get_events_for_period(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        date: &str,
        period: Period,
    ) -> Result<Vec<Event>, CalendarError>;

    async fn get_events_for_day(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        date: &str,
    ) -> Result<Vec<Event>, CalendarError> {
        self.get_events_for_period(cancel, user_id, date, Period::Day)
            .await
    }

    async fn get_events_for_week(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        date: &str,
    ) -> Result<Vec<Event>, CalendarError> {
        self.get_events_for_period(cancel, user_id, date, Period::Week)
            .await
    }

    async fn get_events_for_month(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        date: &str,
    ) -> Result<Vec<Event>, CalendarError> {
        self.get_events_for_period(cancel, user_id, date, Period::Month)
            .await
    }
}

pub struct EventService<TRepository>
where
    TRepository: EventRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> EventService<TRepository>
where
    TRepository: EventRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }
}

fn ensure_active(cancel: &CancellationToken, operation: &str) -> Result<(), CalendarError> {
    if cancel.is_cancelled() {
        tracing::warn!(operation, "context cancelled before operation");
        return Err(CalendarError::Cancelled);
    }
    Ok(())
}

#[async_trait]
impl<TRepository> EventUseCases for EventService<TRepository>
where
    TRepository: EventRepository + 'static,
{
    async fn create_event(
        &self,
        cancel: &CancellationToken,
        event: Event,
    ) -> Result<(), CalendarError> {
        tracing::debug!(event_id = %event.id, user_id = %event.user_id, "creating event");
        ensure_active(cancel, "create_event")?;

        if let Err(error) = validate_event(&event) {
            tracing::warn!(%error, event_id = %event.id, "event validation failed");
            return Err(error);
        }

        self.repository.create(cancel, event).await
    }

    async fn update_event(
        &self,
        cancel: &CancellationToken,
        event: Event,
    ) -> Result<(), CalendarError> {
        tracing::debug!(event_id = %event.id, "updating event");
        ensure_active(cancel, "update_event")?;

        if let Err(error) = validate_event(&event) {
            tracing::warn!(%error, event_id = %event.id, "event validation failed during update");
            return Err(error);
        }

        self.repository.update(cancel, event).await
    }

    async fn delete_event(
        &self,
        cancel: &CancellationToken,
        event_id: &str,
    ) -> Result<(), CalendarError> {
        tracing::debug!(event_id, "deleting event");
        ensure_active(cancel, "delete_event")?;

        if let Err(error) = validate_id(event_id) {
            tracing::warn!("empty event id provided for deletion");
            return Err(error);
        }

        self.repository.delete(cancel, event_id).await
    }

    async fn get_events_for_period(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        date: &str,
        period: Period,
    ) -> Result<Vec<Event>, CalendarError> {
        tracing::debug!(user_id, date, period = period.name(), "getting events");
        ensure_active(cancel, "get_events")?;

        if let Err(error) = validate_user_id(user_id).and_then(|()| validate_date(date)) {
            tracing::warn!(%error, user_id, date, "invalid events query");
            return Err(error);
        }

        self.repository
            .list_by_period(cancel, user_id, date, period)
            .await
    }
}

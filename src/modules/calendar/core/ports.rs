use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::period::Period;

/// Storage port for calendar events.
///
/// Implementations enforce id uniqueness only; callers validate events first.
/// Every query returns owned copies sorted by date, then title.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, cancel: &CancellationToken, event: Event) -> Result<(), CalendarError>;

    async fn update(&self, cancel: &CancellationToken, event: Event) -> Result<(), CalendarError>;

    async fn delete(&self, cancel: &CancellationToken, event_id: &str) -> Result<(), CalendarError>;

    async fn list_by_period(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        date: &str,
        period: Period,
    ) -> Result<Vec<Event>, CalendarError>;

    async fn list_by_day(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        date: &str,
    ) -> Result<Vec<Event>, CalendarError> {
        self.list_by_period(cancel, user_id, date, Period::Day).await
    }

    async fn list_by_week(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        date: &str,
    ) -> Result<Vec<Event>, CalendarError> {
        self.list_by_period(cancel, user_id, date, Period::Week).await
    }

    async fn list_by_month(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        date: &str,
    ) -> Result<Vec<Event>, CalendarError> {
        self.list_by_period(cancel, user_id, date, Period::Month).await
    }
}

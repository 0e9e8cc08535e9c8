// Test double for the EventRepository port.
// Records every call and answers with success, so service tests can assert
// what reached storage.

use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::period::Period;
use crate::modules::calendar::core::ports::EventRepository;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;

#[derive(Default)]
pub struct RecordingEventRepository {
    calls: Mutex<Vec<String>>,
}

impl RecordingEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl EventRepository for RecordingEventRepository {
    async fn create(&self, _cancel: &CancellationToken, event: Event) -> Result<(), CalendarError> {
        self.record(format!("create:{}", event.id));
        Ok(())
    }

    async fn update(&self, _cancel: &CancellationToken, event: Event) -> Result<(), CalendarError> {
        self.record(format!("update:{}", event.id));
        Ok(())
    }

    async fn delete(&self, _cancel: &CancellationToken, event_id: &str) -> Result<(), CalendarError> {
        self.record(format!("delete:{event_id}"));
        Ok(())
    }

    async fn list_by_period(
        &self,
        _cancel: &CancellationToken,
        user_id: &str,
        date: &str,
        period: Period,
    ) -> Result<Vec<Event>, CalendarError> {
        self.record(format!("list:{}:{user_id}:{date}", period.name()));
        Ok(Vec::new())
    }
}

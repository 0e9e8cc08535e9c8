// In memory implementation of the EventRepository port.
//
// Purpose
// - Hold the authoritative event collection for a single process.
//
// Responsibilities
// - Store events in a map keyed by event id.
// - Serialize mutations behind the write lock; queries share the read lock and
//   sort before releasing it.

use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::event::{Event, sort_events};
use crate::modules::calendar::core::period::Period;
use crate::modules::calendar::core::ports::EventRepository;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<HashMap<String, Event>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

fn ensure_active(cancel: &CancellationToken) -> Result<(), CalendarError> {
    if cancel.is_cancelled() {
        return Err(CalendarError::Cancelled);
    }
    Ok(())
}

#[async_trait::async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, cancel: &CancellationToken, event: Event) -> Result<(), CalendarError> {
        ensure_active(cancel)?;

        let mut guard = self.events.write().await;
        tracing::debug!(event_id = %event.id, user_id = %event.user_id, "creating event in repository");
        match guard.entry(event.id.clone()) {
            Entry::Occupied(_) => {
                tracing::warn!(event_id = %event.id, "event conflict, id already exists");
                Err(CalendarError::Conflict)
            }
            Entry::Vacant(slot) => {
                slot.insert(event);
                Ok(())
            }
        }
    }

    async fn update(&self, cancel: &CancellationToken, event: Event) -> Result<(), CalendarError> {
        ensure_active(cancel)?;

        let mut guard = self.events.write().await;
        tracing::debug!(event_id = %event.id, "updating event in repository");
        match guard.get_mut(&event.id) {
            Some(stored) => {
                *stored = event;
                Ok(())
            }
            None => {
                tracing::warn!(event_id = %event.id, "event not found for update");
                Err(CalendarError::NotFound)
            }
        }
    }

    async fn delete(
        &self,
        cancel: &CancellationToken,
        event_id: &str,
    ) -> Result<(), CalendarError> {
        ensure_active(cancel)?;

        let mut guard = self.events.write().await;
        tracing::debug!(event_id, "deleting event in repository");
        if guard.remove(event_id).is_none() {
            tracing::warn!(event_id, "event not found for deletion");
            return Err(CalendarError::NotFound);
        }
        Ok(())
    }

    async fn list_by_period(
        &self,
        cancel: &CancellationToken,
        user_id: &str,
        date: &str,
        period: Period,
    ) -> Result<Vec<Event>, CalendarError> {
        ensure_active(cancel)?;
        let matcher = period.matcher(date)?;

        let guard = self.events.read().await;
        let mut items: Vec<Event> = guard
            .values()
            .filter(|event| event.user_id == user_id && matcher.contains(&event.date))
            .cloned()
            .collect();
        sort_events(&mut items);
        Ok(items)
    }
}

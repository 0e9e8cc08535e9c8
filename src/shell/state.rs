use crate::modules::calendar::adapters::outbound::event_repository_in_memory::InMemoryEventRepository;
use crate::modules::calendar::use_cases::event_use_cases::{EventService, EventUseCases};
use std::sync::Arc;
use tokio_util::sync::{CancellationToken, DropGuard};

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventUseCases>,
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(events: Arc<dyn EventUseCases>, shutdown: CancellationToken) -> Self {
        Self { events, shutdown }
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory(shutdown: CancellationToken) -> Self {
        let repository = Arc::new(InMemoryEventRepository::new());
        Self::new(Arc::new(EventService::new(repository)), shutdown)
    }

    /// Token for one request: cancelled on server shutdown, or when the
    /// returned scope is dropped because the client went away.
    pub fn request_scope(&self) -> RequestScope {
        let token = self.shutdown.child_token();
        RequestScope {
            _guard: token.clone().drop_guard(),
            token,
        }
    }
}

pub struct RequestScope {
    token: CancellationToken,
    _guard: DropGuard,
}

impl RequestScope {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

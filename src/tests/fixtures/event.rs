use crate::modules::calendar::core::event::Event;

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: Event {
                id: "event-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                date: "2025-01-15".to_string(),
                title: "This is a test".to_string(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}

#[cfg(test)]
mod calendar_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = EventBuilder::default().build();
        assert_eq!(built.id, "event-fixed-0001");
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.date, "2025-01-15");
        assert_eq!(built.title, "This is a test");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = EventBuilder::new()
            .id("eid-123")
            .user_id("uid-456")
            .date("2030-12-31")
            .title("custom")
            .build();

        assert_eq!(custom.id, "eid-123");
        assert_eq!(custom.user_id, "uid-456");
        assert_eq!(custom.date, "2030-12-31");
        assert_eq!(custom.title, "custom");
    }
}

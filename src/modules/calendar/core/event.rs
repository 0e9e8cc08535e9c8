use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar entry owned by one user.
///
/// `date` is kept as the `YYYY-MM-DD` string the caller sent, so day queries
/// and ordering compare strings while week and month queries parse on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
}

/// Strict `YYYY-MM-DD` parser: four-digit year, two-digit month and day.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_only = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_only {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Ordering used by every query: date ascending, then title.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));
}

#[cfg(test)]
mod calendar_event_tests {
    use super::*;
    use crate::tests::fixtures::event::EventBuilder;
    use chrono::Datelike;
    use rstest::rstest;

    #[rstest]
    #[case("2025-01-15", 2025, 1, 15)]
    #[case("2024-02-29", 2024, 2, 29)]
    #[case("0001-12-31", 1, 12, 31)]
    fn it_should_parse_valid_dates(
        #[case] raw: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let date = parse_date(raw).expect("expected a valid date");
        assert_eq!(date.year(), year);
        assert_eq!(date.month(), month);
        assert_eq!(date.day(), day);
    }

    #[rstest]
    #[case("2025/01/15")]
    #[case("2025-13-01")]
    #[case("2025-02-29")]
    #[case("2025-04-31")]
    #[case("2025-1-15")]
    #[case("25-01-15")]
    #[case("+2025-01-1")]
    #[case("2025-01-15 ")]
    #[case("")]
    #[case("bad")]
    fn it_should_reject_malformed_dates(#[case] raw: &str) {
        assert_eq!(parse_date(raw), None);
    }

    #[rstest]
    fn it_should_sort_by_date_then_title() {
        let mut events = vec![
            EventBuilder::new().id("3").date("2025-01-16").title("A").build(),
            EventBuilder::new().id("2").date("2025-01-15").title("B").build(),
            EventBuilder::new().id("1").date("2025-01-15").title("A").build(),
        ];
        sort_events(&mut events);
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[rstest]
    fn it_should_deserialize_missing_fields_as_empty() {
        let event: Event = serde_json::from_str(r#"{"id":"e-1"}"#).unwrap();
        assert_eq!(event.id, "e-1");
        assert_eq!(event.user_id, "");
        assert_eq!(event.date, "");
        assert_eq!(event.title, "");
    }
}

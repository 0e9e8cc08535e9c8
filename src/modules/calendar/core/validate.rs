use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::event::{Event, parse_date};

/// Checks run in order; the first violated rule is the one reported.
pub fn validate_event(event: &Event) -> Result<(), CalendarError> {
    validate_id(&event.id)?;
    validate_user_id(&event.user_id)?;
    if event.title.is_empty() {
        return Err(CalendarError::EmptyTitle);
    }
    validate_date(&event.date)
}

pub fn validate_id(id: &str) -> Result<(), CalendarError> {
    if id.is_empty() {
        return Err(CalendarError::EmptyId);
    }
    Ok(())
}

pub fn validate_user_id(user_id: &str) -> Result<(), CalendarError> {
    if user_id.is_empty() {
        return Err(CalendarError::EmptyUserId);
    }
    Ok(())
}

pub fn validate_date(date: &str) -> Result<(), CalendarError> {
    parse_date(date).map(|_| ()).ok_or(CalendarError::InvalidDate)
}

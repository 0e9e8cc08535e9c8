use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    #[error("event ID cannot be empty")]
    EmptyId,

    #[error("user ID cannot be empty")]
    EmptyUserId,

    #[error("event title cannot be empty")]
    EmptyTitle,

    #[error("invalid date format, expected YYYY-MM-DD")]
    InvalidDate,

    #[error("event with this ID already exists")]
    Conflict,

    #[error("event not found")]
    NotFound,

    #[error("operation cancelled")]
    Cancelled,
}

impl CalendarError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalendarError::EmptyId
                | CalendarError::EmptyUserId
                | CalendarError::EmptyTitle
                | CalendarError::InvalidDate
        )
    }
}

#[cfg(test)]
mod calendar_errors_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CalendarError::EmptyId, true)]
    #[case(CalendarError::EmptyUserId, true)]
    #[case(CalendarError::EmptyTitle, true)]
    #[case(CalendarError::InvalidDate, true)]
    #[case(CalendarError::Conflict, false)]
    #[case(CalendarError::NotFound, false)]
    #[case(CalendarError::Cancelled, false)]
    fn it_should_classify_validation_errors(#[case] error: CalendarError, #[case] expected: bool) {
        assert_eq!(error.is_validation(), expected);
    }

    #[rstest]
    fn it_should_expose_the_wire_messages() {
        assert_eq!(
            CalendarError::InvalidDate.to_string(),
            "invalid date format, expected YYYY-MM-DD"
        );
        assert_eq!(
            CalendarError::Conflict.to_string(),
            "event with this ID already exists"
        );
    }
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("{year}-{month}-{day} is not a valid Hijri date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("date is outside the supported calendar range")]
    OutOfRange,
}

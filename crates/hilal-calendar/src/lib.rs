//! Umm al-Qura Hijri calendar and the annual Islamic event timeline.
//!
//! ```rust
//! use hilal_calendar::{HijriDate, enumerate};
//!
//! let events = enumerate(1446);
//! assert_eq!(events[5].event_name, "Start of Ramadan");
//! assert_eq!(events[5].event_date, "2025-03-01");
//!
//! let ramadan = HijriDate::new(1446, 9, 1).unwrap();
//! assert_eq!(ramadan.to_string(), "1 Ramadan 1446 AH");
//! ```
pub mod error;
pub mod hijri;
pub mod timeline;

pub use error::CalendarError;
pub use hijri::HijriDate;
pub use timeline::{ANNUAL_EVENTS, AnnualEvent, TimelineEvent, enumerate};

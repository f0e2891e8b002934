//! The fixed list of annual events shown on the timeline.
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::hijri::HijriDate;

/// One anniversary in the Hijri year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnualEvent {
    pub month: u32,
    pub day: u32,
    pub name: &'static str,
}

const fn event(month: u32, day: u32, name: &'static str) -> AnnualEvent {
    AnnualEvent { month, day, name }
}

/// Emission order is part of the API; do not sort or deduplicate.
pub const ANNUAL_EVENTS: [AnnualEvent; 10] = [
    event(1, 1, "Start of the Hijri Year"),
    event(1, 10, "Day of Ashura"),
    event(3, 12, "Mawlid an Nabi"),
    event(7, 27, "Isra and Miraj"),
    event(8, 15, "Nisf Shaban"),
    event(9, 1, "Start of Ramadan"),
    event(9, 17, "Battle of Badr"),
    event(10, 1, "Eid al Fitr"),
    event(12, 9, "Yawm Arafah"),
    event(12, 10, "Eid al Adha"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    /// 1-based position within one [`enumerate`] call.
    pub id: u64,
    pub event_name: String,
    /// Gregorian date, `yyyy-MM-dd`.
    pub event_date: String,
}

/// Build the timeline for `hijri_year`.
///
/// Ids start at 1 and follow [`ANNUAL_EVENTS`] order. The result depends on
/// nothing but the year.
///
/// # Panics
///
/// If `hijri_year` is outside `MIN_YEAR..=MAX_YEAR`. Every month/day pair in
/// the table exists in every Umm al-Qura year, so a panic means the caller
/// passed a year that was never read from the calendar.
///
/// [`MIN_YEAR`]: crate::hijri::MIN_YEAR
/// [`MAX_YEAR`]: crate::hijri::MAX_YEAR
pub fn enumerate(hijri_year: i32) -> Vec<TimelineEvent> {
    info!(hijri_year, "Enumerating Islamic events");

    let events: Vec<TimelineEvent> = ANNUAL_EVENTS
        .iter()
        .zip(1u64..)
        .map(|(annual, id)| {
            let gregorian = HijriDate::new(hijri_year, annual.month, annual.day)
                .and_then(|date| date.to_gregorian())
                .unwrap_or_else(|err| panic!("`{}` in {hijri_year} AH: {err}", annual.name));

            let event_date = gregorian.format("%Y-%m-%d").to_string();
            debug!(id, event = annual.name, %event_date, "Added event");

            TimelineEvent {
                id,
                event_name: annual.name.to_owned(),
                event_date,
            }
        })
        .collect();

    info!(count = events.len(), "Enumerated Islamic events");
    events
}

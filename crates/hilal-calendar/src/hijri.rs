//! Umm al-Qura Islamic calendar.
//!
//! Month lengths come from the Umm al-Qura tables published for Saudi Arabia,
//! the same data the JDK ships as `Hijrah-umalqura`. The table covers
//! 1300 AH to 1600 AH (12 November 1882 to 25 November 2174); dates outside
//! it are [`CalendarError::OutOfRange`].
use std::fmt::Display;

use chrono::{Datelike as _, Days, Local, NaiveDate};

use crate::error::CalendarError;

pub const MIN_YEAR: i32 = 1300;
pub const MAX_YEAR: i32 = 1600;

const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiʻ I",
    "Rabiʻ II",
    "Jumada I",
    "Jumada II",
    "Rajab",
    "Shaʻban",
    "Ramadan",
    "Shawwal",
    "Dhuʻl-Qiʻdah",
    "Dhuʻl-Hijjah",
];

/// 1 Muharram 1300 AH.
const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1882, 11, 12) {
    Some(date) => date,
    None => panic!("epoch is a valid Gregorian date"),
};

const YEARS: usize = (MAX_YEAR - MIN_YEAR + 1) as usize;

/// One entry per year from [`MIN_YEAR`]; bit `m - 1` is set when month `m`
/// has 30 days, otherwise it has 29.
const MONTH_LENGTHS: [u16; YEARS] = [
    0x555, 0x2ab, 0x937, 0x2b6, 0x576, 0x36c, 0xb55, 0xaaa, 0x956, 0x49e,
    0x95d, 0x2ba, 0x5b5, 0x3aa, 0xb4b, 0xa96, 0x52e, 0x2ad, 0x56d, 0xb5a,
    0x752, 0xf25, 0xe8a, 0xd16, 0xa56, 0xab5, 0x6b4, 0xda9, 0xb92, 0xb25,
    0x64b, 0xa9b, 0x35a, 0x6d9, 0x5d4, 0xda5, 0xd4a, 0xa95, 0x536, 0x975,
    0x2f4, 0x6e9, 0x6d4, 0x6a9, 0x535, 0x25d, 0x4bd, 0x9ba, 0x3b4, 0xb69,
    0xb2a, 0xa55, 0x4ad, 0xa5d, 0x2da, 0x6d9, 0xeaa, 0xe94, 0xd2a, 0xc56,
    0x4ae, 0xa6d, 0x56a, 0xd55, 0xd4a, 0xa93, 0x52b, 0xa5b, 0x53a, 0x6b5,
    0xea9, 0xd52, 0xd29, 0xa55, 0x4ad, 0x56d, 0xaea, 0x6e4, 0xed1, 0xda2,
    0xaaa, 0x95a, 0x2da, 0x5b9, 0xbb2, 0x764, 0x6c9, 0x555, 0x2ab, 0x4db,
    0xaba, 0x5b4, 0xda9, 0xd52, 0xaa5, 0x92d, 0x26d, 0x8ed, 0x2da, 0xad5,
    0xaa5, 0xa4b, 0x497, 0x937, 0x2b6, 0x975, 0xd69, 0xd52, 0xc95, 0x92b,
    0x25b, 0x4db, 0x9d5, 0x5d2, 0xda5, 0xd4a, 0xa95, 0x54d, 0xaad, 0x3aa,
    0xbd2, 0xbc4, 0xb89, 0xa95, 0x52d, 0x5ad, 0xb6a, 0x6d4, 0xdc9, 0xd92,
    0xaa6, 0x956, 0x2ae, 0x56d, 0x36a, 0xb55, 0xaaa, 0x94d, 0x49d, 0x95d,
    0x2ba, 0x5b5, 0x5aa, 0xd55, 0xa9a, 0x92e, 0x26e, 0x55d, 0xada, 0x6d4,
    0x6a5, 0xb27, 0xa4d, 0x4ad, 0x56d, 0xb5a, 0x754, 0xf49, 0xe92, 0xd26,
    0xa56, 0x356, 0x6b5, 0xbaa, 0xb92, 0xb25, 0x68b, 0xa9b, 0x55a, 0xada,
    0x5b4, 0xda9, 0xb52, 0xa9a, 0x536, 0x276, 0x575, 0xaf2, 0x6d4, 0x6a9,
    0x555, 0x2ad, 0x4bd, 0x9ba, 0x574, 0xb69, 0xb52, 0xa95, 0x52d, 0xa5d,
    0x4da, 0xad9, 0x6b2, 0xe95, 0xe2a, 0xc96, 0x92e, 0xaad, 0x56a, 0xd65,
    0xd4a, 0xd15, 0x62b, 0xc5b, 0x53a, 0x6b5, 0xdb2, 0xd64, 0xd29, 0xa55,
    0x4ad, 0x96d, 0xaea, 0x6e8, 0xed1, 0xda4, 0xd4a, 0xa6a, 0x2da, 0x5b9,
    0xb72, 0xb68, 0x6d1, 0x655, 0x4ab, 0x95b, 0x2ba, 0x5b5, 0xda9, 0xd52,
    0xca6, 0x94e, 0x46e, 0x95d, 0x4da, 0xad5, 0xaaa, 0xa4d, 0x49b, 0x937,
    0x4b6, 0x975, 0xd6a, 0xd52, 0xaa5, 0x94b, 0x2ab, 0x55b, 0xad9, 0x5d2,
    0xdc5, 0xd92, 0xb25, 0x555, 0xab5, 0x5b4, 0xba9, 0x7a2, 0x745, 0x593,
    0xaab, 0x4d6, 0x9d6, 0x5d2, 0xba5, 0xb4a, 0xa95, 0x4ad, 0x15d, 0x2dd,
    0x9da, 0x5b4, 0x5a9, 0x52d, 0x25b, 0x8b7, 0x176, 0x56d, 0xb6a, 0xaca,
    0xa96, 0x52b, 0x15b, 0x2bb, 0x5b6, 0xdaa, 0xb94, 0xd46, 0xa8d, 0x52d,
    0xa9d, 0x55a, 0x755, 0x749, 0xf13, 0xe4a, 0xa96, 0x556, 0x6b5, 0xbaa,
    0xb94,
];

/// Days from [`EPOCH`] to 1 Muharram of each year, plus the end of the table.
const YEAR_STARTS: [i64; YEARS + 1] = {
    let mut starts = [0i64; YEARS + 1];
    let mut i = 0;
    while i < YEARS {
        starts[i + 1] = starts[i] + 348 + MONTH_LENGTHS[i].count_ones() as i64;
        i += 1;
    }
    starts
};

fn year_index(year: i32) -> Option<usize> {
    (MIN_YEAR..=MAX_YEAR)
        .contains(&year)
        .then(|| (year - MIN_YEAR) as usize)
}

fn days_in_month(mask: u16, month: u32) -> u32 {
    if mask & (1 << (month - 1)) != 0 { 30 } else { 29 }
}

/// Number of days in `year`, 354 or 355. `None` outside the table.
pub fn year_length(year: i32) -> Option<u32> {
    year_index(year).map(|i| 348 + MONTH_LENGTHS[i].count_ones())
}

/// Number of days in `month` (1-based) of `year`, 29 or 30.
pub fn month_length(year: i32, month: u32) -> Option<u32> {
    let index = year_index(year)?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(days_in_month(MONTH_LENGTHS[index], month))
}

/// A validated Umm al-Qura date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
}

impl HijriDate {
    /// # Errors
    ///
    /// * [`CalendarError::OutOfRange`] when `year` is outside
    ///   `MIN_YEAR..=MAX_YEAR`.
    /// * [`CalendarError::InvalidDate`] when the month is outside `1..=12` or
    ///   the day past the end of the month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if year_index(year).is_none() {
            return Err(CalendarError::OutOfRange);
        }

        match month_length(year, month) {
            Some(length) if (1..=length).contains(&day) => Ok(Self { year, month, day }),
            _ => Err(CalendarError::InvalidDate { year, month, day }),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    /// Days elapsed since 1 Muharram [`MIN_YEAR`].
    fn days_since_epoch(&self) -> i64 {
        let index = (self.year - MIN_YEAR) as usize;
        let before_month: i64 = (1..self.month)
            .map(|month| i64::from(days_in_month(MONTH_LENGTHS[index], month)))
            .sum();

        YEAR_STARTS[index] + before_month + i64::from(self.day) - 1
    }

    /// The same day in the Gregorian calendar.
    pub fn to_gregorian(&self) -> Result<NaiveDate, CalendarError> {
        let offset =
            u64::try_from(self.days_since_epoch()).map_err(|_| CalendarError::OutOfRange)?;

        EPOCH
            .checked_add_days(Days::new(offset))
            .ok_or(CalendarError::OutOfRange)
    }

    /// The Hijri date falling on `date`.
    ///
    /// # Errors
    ///
    /// [`CalendarError::OutOfRange`] for dates the table does not cover.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        let days = date.signed_duration_since(EPOCH).num_days();
        if days < 0 || days >= YEAR_STARTS[YEARS] {
            return Err(CalendarError::OutOfRange);
        }

        let index = YEAR_STARTS.partition_point(|&start| start <= days) - 1;
        let year = MIN_YEAR + index as i32;

        let mut remaining = days - YEAR_STARTS[index];
        let mut month = 1;
        loop {
            let length = i64::from(days_in_month(MONTH_LENGTHS[index], month));
            if remaining < length {
                break;
            }
            remaining -= length;
            month += 1;
        }

        Self::new(year, month, remaining as u32 + 1)
    }

    /// Today's Hijri date in the local time zone.
    pub fn today() -> Result<Self, CalendarError> {
        Self::from_gregorian(Local::now().date_naive())
    }
}

/// Renders as `"d MonthName yyyy AH"`, e.g. `"1 Ramadan 1446 AH"`.
impl Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month_name(), self.year)
    }
}

impl TryFrom<NaiveDate> for HijriDate {
    type Error = CalendarError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_gregorian(value)
    }
}

/// Format a Gregorian date the way the service displays it,
/// e.g. `"March 1, 2025"`.
pub fn format_gregorian_long(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

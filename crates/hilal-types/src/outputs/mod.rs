mod event_detail;
mod hadith;
mod quran;

pub use event_detail::EventDetail;
pub use hadith::HadithOfTheDay;
pub use quran::QuranOfTheDay;

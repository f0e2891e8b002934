use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Origin and sunnah of a calendar event, as written by the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    /// Name of the event the model is describing.
    pub event_name: String,
    /// How the event came to be observed, as a paragraph.
    pub origin: String,
    /// Reference link for `origin`.
    pub origin_ref_link: String,
    /// What is recommended on the day, as a paragraph.
    pub sunnah: String,
    /// Reference link for `sunnah`.
    pub sunnah_ref_link: String,
}

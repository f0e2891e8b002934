use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HadithOfTheDay {
    /// Text of the hadith.
    pub content: String,
    /// Authenticity grading, e.g. "Sahih".
    pub status: String,
    /// Collection and number.
    pub reference: String,
}

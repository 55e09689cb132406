// Domain model: the flat share record that every other module passes around.

use serde::{Deserialize, Serialize};

/// Placeholder written for any field the API response left out.
pub const UNKNOWN: &str = "Unknown";

/// Column names, in the fixed order used by the JSON snapshot, the CSV
/// header and the table.
pub const FIELD_NAMES: [&str; 4] = ["Post ID", "Shared By", "User ID", "Shared Time"];

/// One share of one post. All four fields are always filled in; missing
/// values from the API become [`UNKNOWN`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShareRecord {
    #[serde(rename = "Post ID")]
    pub post_id: String,
    #[serde(rename = "Shared By")]
    pub shared_by: String,
    #[serde(rename = "User ID")]
    pub user_id: String,
    #[serde(rename = "Shared Time")]
    pub shared_time: String,
}

impl ShareRecord {
    /// Field values in [`FIELD_NAMES`] order.
    pub fn values(&self) -> [&str; 4] {
        [
            self.post_id.as_str(),
            self.shared_by.as_str(),
            self.user_id.as_str(),
            self.shared_time.as_str(),
        ]
    }
}

//! Normalized book record produced from catalog volumes.

use serde::{Deserialize, Serialize};

use super::{Volume, VolumeInfo, VolumesResponse};

/// Placeholder for a missing title, author list or identifier.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for a missing description.
pub const NO_DESCRIPTION: &str = "Description not available";

/// Ordered search output, in catalog order.
pub type ResultSet = Vec<BookSummary>;

/// A book ready for display.
///
/// `isbn` is the display key but is not unique: several books may share a
/// real identifier or all fall back to [`UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    /// Title or [`UNKNOWN`].
    pub title: String,

    /// Author names joined with ", ", or [`UNKNOWN`].
    pub authors: String,

    /// First industry identifier or [`UNKNOWN`].
    pub isbn: String,

    /// Description or [`NO_DESCRIPTION`].
    pub description: String,

    /// Thumbnail URL; never a placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl BookSummary {
    /// Map a volume, defaulting each field on its own.
    #[must_use]
    pub fn from_volume(volume: &Volume) -> Self {
        volume.volume_info.as_ref().map_or_else(
            || Self::from_info(&VolumeInfo::default()),
            Self::from_info,
        )
    }

    /// Map bibliographic information, defaulting each field on its own.
    #[must_use]
    pub fn from_info(info: &VolumeInfo) -> Self {
        Self {
            title: info.title().unwrap_or(UNKNOWN).to_string(),
            authors: info.author_names().unwrap_or_else(|| UNKNOWN.to_string()),
            isbn: info.first_identifier().unwrap_or(UNKNOWN).to_string(),
            description: info.description().unwrap_or(NO_DESCRIPTION).to_string(),
            image: info.thumbnail().map(str::to_string),
        }
    }

    /// Returns true if the identifier fell back to [`UNKNOWN`].
    #[must_use]
    pub fn has_unknown_isbn(&self) -> bool {
        self.isbn == UNKNOWN
    }
}

impl From<&Volume> for BookSummary {
    fn from(volume: &Volume) -> Self {
        Self::from_volume(volume)
    }
}

impl VolumesResponse {
    /// Map every item to a [`BookSummary`], keeping catalog order.
    #[must_use]
    pub fn summaries(&self) -> ResultSet {
        self.volumes().iter().map(BookSummary::from_volume).collect()
    }
}

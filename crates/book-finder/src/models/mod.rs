//! Data models for catalog responses and normalized book records.
//!
//! Wire models use `#[serde(default)]` for every field and
//! `#[serde(rename_all = "camelCase")]` to match API naming.

mod book;
mod volume;

pub use book::{BookSummary, NO_DESCRIPTION, ResultSet, UNKNOWN};
pub use volume::{ImageLinks, IndustryIdentifier, Volume, VolumeInfo, VolumesResponse};

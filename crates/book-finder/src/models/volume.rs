//! Volume data model matching the Google Books `volumes` response schema.

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level body of a volumes search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesResponse {
    /// Resource type (`books#volumes`).
    #[serde(default)]
    pub kind: Option<String>,

    /// Total matches reported by the catalog.
    #[serde(default)]
    pub total_items: Option<i64>,

    /// Result items. Missing, `null` or non-array values all read as `None`.
    #[serde(default, deserialize_with = "items_or_none")]
    pub items: Option<Vec<Volume>>,
}

impl VolumesResponse {
    /// Items in catalog order, empty when the collection is absent.
    #[must_use]
    pub fn volumes(&self) -> &[Volume] {
        self.items.as_deref().unwrap_or_default()
    }
}

/// One result item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Catalog volume ID.
    #[serde(default)]
    pub id: Option<String>,

    /// Bibliographic information.
    #[serde(default)]
    pub volume_info: Option<VolumeInfo>,
}

/// Bibliographic information for a volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    /// Volume title.
    #[serde(default)]
    pub title: Option<String>,

    /// Author names in catalog order.
    #[serde(default)]
    pub authors: Option<Vec<String>>,

    /// Publisher name.
    #[serde(default)]
    pub publisher: Option<String>,

    /// Publication date as reported (year, year-month or full date).
    #[serde(default)]
    pub published_date: Option<String>,

    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,

    /// ISBN and other industry identifiers.
    #[serde(default)]
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,

    /// Cover image links.
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

impl VolumeInfo {
    /// Title, treating an empty string as missing.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Description, treating an empty string as missing.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Author names joined with ", ", or `None` when the list is absent.
    ///
    /// An empty list is present and joins to an empty string.
    #[must_use]
    pub fn author_names(&self) -> Option<String> {
        self.authors.as_ref().map(|names| names.join(", "))
    }

    /// Value of the first industry identifier, if any.
    #[must_use]
    pub fn first_identifier(&self) -> Option<&str> {
        self.industry_identifiers.as_ref()?.first()?.identifier.as_deref()
    }

    /// Thumbnail URL, if the catalog provides one.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.image_links.as_ref()?.thumbnail.as_deref()
    }
}

/// An industry identifier such as ISBN-13.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryIdentifier {
    /// Identifier scheme (`ISBN_10`, `ISBN_13`, `ISSN`, `OTHER`).
    #[serde(rename = "type", default)]
    pub id_type: Option<String>,

    /// Identifier value.
    #[serde(default)]
    pub identifier: Option<String>,
}

/// Cover image links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    /// Small thumbnail URL (about 80px wide).
    #[serde(default)]
    pub small_thumbnail: Option<String>,

    /// Thumbnail URL (about 128px wide).
    #[serde(default)]
    pub thumbnail: Option<String>,
}

fn items_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<Volume>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Ok(None),
    }
}

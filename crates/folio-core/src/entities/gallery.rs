use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An archive entry in the exclusive gallery.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(deserialize_with = "crate::lenient::string")]
    #[schemars(with = "String")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Free-form caption line (camera, year, location).
    #[serde(deserialize_with = "crate::lenient::string")]
    #[schemars(with = "String")]
    pub metadata: String,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A portfolio project card.
///
/// `image_url` may point into the media library by value; nothing checks it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "crate::lenient::string")]
    #[schemars(with = "String")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tech: Vec<String>,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_image_url: Option<String>,
    pub live_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Landing banner at the top of the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub title1: String,
    pub title2: String,
    pub subtitle: String,
    pub background_image: String,
}

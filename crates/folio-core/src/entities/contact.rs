use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct CustomLink {
    pub name: String,
    pub url: String,
}

/// Contact channels and social handles.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub linkedin: String,
    pub github: String,
    pub facebook: String,
    pub instagram: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_links: Option<Vec<CustomLink>>,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Navigation labels on the visitor-facing site.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct PublicMenu {
    pub home: String,
    pub projects: String,
    pub about: String,
    pub services: String,
    pub contact: String,
}

/// Tab labels in the admin panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct AdminMenu {
    pub hero: String,
    pub about: String,
    pub gallery: String,
    pub projects: String,
    pub services: String,
    pub media: String,
}

/// Label overrides keyed by surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct MenuNames {
    pub public: PublicMenu,
    pub admin: AdminMenu,
}

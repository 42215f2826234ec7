use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named skill with a proficiency level, nominally 0-100.
///
/// The level is not clamped; the admin form stores whatever integer was typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    #[serde(deserialize_with = "crate::lenient::integer")]
    #[schemars(with = "i64")]
    pub level: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub school: String,
}

/// One dated step of the career timeline. `year` is free text (`"2019 - 2021"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct TimelineEntry {
    #[serde(deserialize_with = "crate::lenient::string")]
    #[schemars(with = "String")]
    pub year: String,
    pub description: String,
}

/// Biography shown on the home page teaser and the dedicated about page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    pub homepage_title1: String,
    pub homepage_title_accent: String,
    pub homepage_description: String,
    pub homepage_image: String,
    pub detailed_bio: String,
    pub detailed_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub timeline: Vec<TimelineEntry>,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ServiceIcon;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    #[serde(deserialize_with = "crate::lenient::string")]
    #[schemars(with = "String")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon_type: ServiceIcon,
}

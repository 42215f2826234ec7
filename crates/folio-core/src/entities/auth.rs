use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Plaintext admin login pair stored inside the document.
///
/// This is a UI gate, not a security boundary: anyone who can read the
/// document can read the password.
///
/// Missing fields read as empty; [`crate::ContentDocument::credentials`]
/// substitutes `admin` for them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Credentials {
    #[serde(default, deserialize_with = "crate::lenient::string")]
    #[schemars(with = "String")]
    pub username: String,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    #[schemars(with = "String")]
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            password: "admin".into(),
        }
    }
}

impl Credentials {
    /// Exact, case-sensitive comparison of both fields.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

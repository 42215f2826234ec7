//! Enumerated document values.
//!
//! Enums serialize as lowercase strings, the form the site front end reads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ServiceIcon
// ---------------------------------------------------------------------------

/// Icon shown next to a service card.
///
/// Unknown values read as [`ServiceIcon::Code`], which is also the store's
/// default for a service without an icon.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Layout,
    Zap,
    Smartphone,
    #[default]
    #[serde(other)]
    Code,
}

impl ServiceIcon {
    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Code => "code",
            Self::Zap => "zap",
            Self::Smartphone => "smartphone",
        }
    }
}

impl fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Wire envelope shared by the content store and its clients.
//!
//! Every store response is `{"success": bool, "data"?: any, "message"?: string}`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::ContentDocument;

/// JSON body returned by every store endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StoreEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StoreEnvelope {
    /// Successful read carrying the stored document.
    #[must_use]
    pub fn with_data(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Successful write acknowledgment.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
        }
    }

    /// Failure with a human-readable reason.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Extract the document from a successful read.
    ///
    /// Returns `None` unless `success` is set and `data` is present. A payload
    /// that is present but not a document is reported as an error.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `data` does not match the document shape.
    pub fn into_document(self) -> Option<Result<ContentDocument, serde_json::Error>> {
        if !self.success {
            return None;
        }
        match self.data {
            None | Some(Value::Null) => None,
            Some(data) => Some(serde_json::from_value(data)),
        }
    }
}

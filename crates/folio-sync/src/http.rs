//! HTTP implementation of [`RemoteStore`].
//!
//! Centralizes status-code checks and envelope parsing so every failure mode
//! maps onto one [`RemoteError`] variant: non-success status →
//! [`RemoteError::Status`], non-JSON body → [`RemoteError::Malformed`],
//! `success: false` → [`RemoteError::Rejected`] / [`RemoteError::Missing`].

use folio_config::RemoteConfig;
use folio_core::ContentDocument;
use folio_core::responses::StoreEnvelope;

use crate::endpoints::Endpoint;
use crate::error::{RemoteError, SyncError};
use crate::remote::RemoteStore;

/// Bytes of a failing response body kept in the error.
const BODY_EXCERPT: usize = 500;

/// Store client speaking the `{success, data, message}` JSON envelope.
#[derive(Debug, Clone)]
pub struct HttpRemote {
    http: reqwest::Client,
}

impl HttpRemote {
    /// Build a client with the configured user agent and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Client`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &RemoteConfig) -> Result<Self, SyncError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an existing client.
    #[must_use]
    pub const fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl RemoteStore for HttpRemote {
    async fn get(&self, endpoint: &Endpoint) -> Result<ContentDocument, RemoteError> {
        let resp = check_response(self.http.get(endpoint.url().clone()).send().await?).await?;
        let envelope = parse_envelope(&resp.text().await?)?;
        match envelope.into_document() {
            Some(Ok(document)) => Ok(document),
            Some(Err(e)) => Err(RemoteError::Malformed(format!("data is not a document: {e}"))),
            None => Err(RemoteError::Missing),
        }
    }

    async fn put(&self, endpoint: &Endpoint, document: &ContentDocument) -> Result<(), RemoteError> {
        let resp = check_response(
            self.http
                .post(endpoint.url().clone())
                .json(document)
                .send()
                .await?,
        )
        .await?;
        let envelope = parse_envelope(&resp.text().await?)?;
        if envelope.success {
            Ok(())
        } else {
            Err(RemoteError::Rejected(
                envelope.message.unwrap_or_else(|| "unknown".into()),
            ))
        }
    }
}

/// Return the response unchanged on success, [`RemoteError::Status`] otherwise.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(RemoteError::Status {
            status: status.as_u16(),
            body: excerpt(&body, BODY_EXCERPT),
        });
    }
    Ok(resp)
}

/// Parse a store envelope, reporting non-JSON bodies as [`RemoteError::Malformed`].
pub fn parse_envelope(body: &str) -> Result<StoreEnvelope, RemoteError> {
    serde_json::from_str(body).map_err(|e| {
        RemoteError::Malformed(format!("{e}; body: {:?}", excerpt(body, 300)))
    })
}

fn excerpt(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let resp = mock_response(404, r#"{"success":false,"message":"No portfolio found"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            RemoteError::Status { status: 404, ref body } if body.contains("No portfolio found")
        ));
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(500, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, RemoteError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[test]
    fn parse_envelope_rejects_html() {
        let err = parse_envelope("<!doctype html><html>fallback page</html>").unwrap_err();
        assert!(matches!(err, RemoteError::Malformed(ref msg) if msg.contains("doctype")));
    }

    #[test]
    fn parse_envelope_accepts_bare_success() {
        let envelope = parse_envelope(r#"{"success":true}"#).unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        let text = "ééééé";
        let cut = excerpt(text, 3);
        assert_eq!(cut, "é");
        assert_eq!(excerpt("short", 100), "short");
    }

    #[test]
    fn client_builds_from_default_config() {
        assert!(HttpRemote::new(&RemoteConfig::default()).is_ok());
    }
}

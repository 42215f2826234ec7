//! The remote store seam.

use folio_core::ContentDocument;
use std::future::Future;

use crate::endpoints::Endpoint;
use crate::error::RemoteError;

/// A store holding the singleton document, addressed per endpoint.
///
/// [`crate::HttpRemote`] is the production implementation. Both methods are
/// tried once per endpoint; the synchronizer owns fallback and retry.
pub trait RemoteStore: Send + Sync + 'static {
    /// Read the document. Anything but a structurally valid document is an error.
    fn get(
        &self,
        endpoint: &Endpoint,
    ) -> impl Future<Output = Result<ContentDocument, RemoteError>> + Send;

    /// Replace the stored document wholesale.
    fn put(
        &self,
        endpoint: &Endpoint,
        document: &ContentDocument,
    ) -> impl Future<Output = Result<(), RemoteError>> + Send;
}

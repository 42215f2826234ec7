//! Blocking HTTP front end for [`ContentStore`].
//!
//! `tiny_http` hands out requests from a blocking `recv`, so the accept loop
//! runs on a `spawn_blocking` thread and drives each database call with
//! [`Handle::block_on`]. Requests are answered one at a time.

use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Header, Request, Response, Server};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::ContentStore;
use crate::error::StoreError;
use crate::handler::{self, RESPONSE_HEADERS, Reply};

/// A bound, not yet serving, store server.
pub struct StoreServer {
    server: Arc<Server>,
    store: Arc<ContentStore>,
    routes: Arc<[String]>,
}

impl StoreServer {
    /// Bind `addr` (`127.0.0.1:0` picks a free port).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Bind`] if the address cannot be bound.
    pub fn bind(addr: &str, store: ContentStore, routes: Vec<String>) -> Result<Self, StoreError> {
        let server = Server::http(addr).map_err(|e| StoreError::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            server: Arc::new(server),
            store: Arc::new(store),
            routes: routes.into(),
        })
    }

    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Start answering requests on the current Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoRuntime`] outside a Tokio runtime.
    pub fn spawn(self) -> Result<ServerHandle, StoreError> {
        let runtime = Handle::try_current().map_err(|_| StoreError::NoRuntime)?;
        let addr = self.local_addr();
        info!(addr = ?addr, routes = ?self.routes, "content store listening");

        let server = Arc::clone(&self.server);
        let task = runtime.spawn_blocking({
            let runtime = runtime.clone();
            move || serve(&self.server, &self.store, &self.routes, &runtime)
        });
        Ok(ServerHandle { server, addr, task })
    }
}

/// A running server. Call [`ServerHandle::shutdown`] to stop it.
pub struct ServerHandle {
    server: Arc<Server>,
    addr: Option<SocketAddr>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    #[must_use]
    pub const fn local_addr(&self) -> Option<SocketAddr> {
        self.addr
    }

    /// Base URL of the server, e.g. `http://127.0.0.1:8787`.
    #[must_use]
    pub fn base_url(&self) -> Option<String> {
        self.addr.map(|addr| format!("http://{addr}"))
    }

    /// Stop accepting requests and wait for the accept loop to exit.
    pub async fn shutdown(self) {
        self.server.unblock();
        if let Err(e) = self.task.await {
            warn!(error = %e, "content store loop ended abnormally");
        }
        info!("content store stopped");
    }
}

fn serve(server: &Server, store: &ContentStore, routes: &[String], runtime: &Handle) {
    for mut request in server.incoming_requests() {
        let mut body = Vec::new();
        if let Err(e) = request.as_reader().read_to_end(&mut body) {
            warn!(error = %e, "failed to read request body");
            body.clear();
        }

        let reply = runtime.block_on(handler::respond(
            store,
            routes,
            request.method(),
            request.url(),
            &body,
        ));
        debug!(
            method = %request.method(),
            url = request.url(),
            status = reply.status,
            "handled request"
        );
        send(request, &reply);
    }
}

fn send(request: Request, reply: &Reply) {
    let mut response = Response::from_string(reply.body()).with_status_code(reply.status);
    for (name, value) in RESPONSE_HEADERS {
        if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            response.add_header(header);
        }
    }
    if let Err(e) = request.respond(response) {
        warn!(error = %e, "failed to send response");
    }
}

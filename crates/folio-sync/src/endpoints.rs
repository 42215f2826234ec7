//! Endpoint fallback list.
//!
//! Deployments reach the store through different base paths (a dev server
//! proxying `/api`, an Apache install under a sub-path, a hosted function).
//! Instead of branching in code, the candidates are derived from
//! [`RemoteConfig`] into one ordered list that every request walks.

use folio_config::RemoteConfig;
use reqwest::Url;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::SyncError;

/// Hosts treated as a local development machine.
const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1", "::1", "[::1]"];

/// One candidate URL of the content store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Parse an absolute `http`/`https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::InvalidEndpoint`] for unparseable URLs and other schemes.
    pub fn parse(url: &str) -> Result<Self, SyncError> {
        let parsed = Url::parse(url).map_err(|e| SyncError::InvalidEndpoint {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SyncError::InvalidEndpoint {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        Ok(Self(parsed))
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Build the ordered endpoint list for `config`.
///
/// Order:
/// 1. `endpoints`, verbatim.
/// 2. For each API path, for each mount path: `origin + mount + api`.
///    When `origin` is a local host and `local_origin` is a different origin,
///    `local_origin + mount + first API path` (longest mount first) is placed
///    right after the very first generated candidate.
///
/// Duplicates keep their first position.
///
/// # Errors
///
/// Returns [`SyncError::InvalidEndpoint`] if any URL is malformed and
/// [`SyncError::NoEndpoints`] if the list comes out empty.
pub fn resolve(config: &RemoteConfig) -> Result<Vec<Endpoint>, SyncError> {
    let mut candidates: Vec<String> = config.endpoints.clone();

    let origin = config.origin.trim_end_matches('/');
    if !origin.is_empty() {
        let mut generated = Vec::new();
        for api in &config.api_paths {
            for mount in &config.mount_paths {
                generated.push(join(origin, mount, api));
            }
        }

        let local_origin = config.local_origin.trim_end_matches('/');
        if is_local_origin(origin)?
            && !local_origin.is_empty()
            && local_origin != origin
            && let Some(first_api) = config.api_paths.first()
        {
            let mut mounts: Vec<&String> = config.mount_paths.iter().collect();
            mounts.sort_by_key(|m| std::cmp::Reverse(normalize_mount(m).len()));
            let probes = mounts.into_iter().map(|m| join(local_origin, m, first_api));
            let rest = generated.split_off(generated.len().min(1));
            generated.extend(probes);
            generated.extend(rest);
        }

        candidates.extend(generated);
    }

    let mut endpoints: Vec<Endpoint> = Vec::with_capacity(candidates.len());
    for candidate in &candidates {
        let endpoint = Endpoint::parse(candidate)?;
        if !endpoints.contains(&endpoint) {
            endpoints.push(endpoint);
        }
    }

    if endpoints.is_empty() {
        return Err(SyncError::NoEndpoints);
    }
    Ok(endpoints)
}

fn is_local_origin(origin: &str) -> Result<bool, SyncError> {
    let url = Endpoint::parse(origin)?;
    Ok(url
        .url()
        .host_str()
        .is_some_and(|host| LOCAL_HOSTS.contains(&host)))
}

/// `""`, `"/"` → `""`; `"app"`, `"/app/"` → `"/app"`.
fn normalize_mount(mount: &str) -> String {
    let trimmed = mount.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn join(origin: &str, mount: &str, api: &str) -> String {
    let api = api.trim_start_matches('/');
    format!("{origin}{}/{api}", normalize_mount(mount))
}

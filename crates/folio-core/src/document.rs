//! The content document: the single aggregate holding all site content.
//!
//! There is exactly one document per deployment (row `id = 1` in every store).
//! Writes always replace it wholesale. Keys this version does not know about
//! are kept in [`ContentDocument::extra`] so a read-modify-write cycle never
//! drops them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::{
    About, AdminMenu, ContactInfo, Credentials, GalleryItem, Hero, MenuNames, Project,
    PublicMenu, Service,
};
use crate::errors::CoreError;

/// Fixed identity of the singleton document in every persistence backend.
pub const DOCUMENT_ID: i64 = 1;

/// Schema version written by this crate. Carried verbatim; never migrated.
pub const CURRENT_VERSION: i64 = 1;

/// All content rendered by the site.
///
/// Missing top-level sections are filled from [`ContentDocument::default`],
/// which is the documented fallback document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(deserialize_with = "crate::lenient::integer")]
    #[schemars(with = "i64")]
    pub version: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Credentials>,
    pub hero: Hero,
    pub about: About,
    pub contact: ContactInfo,
    pub gallery: Vec<GalleryItem>,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    pub menu_names: MenuNames,
    pub media_library: Vec<String>,
    /// Unrecognized top-level keys, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ContentDocument {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            auth: Some(Credentials::default()),
            hero: Hero {
                title1: "Hello".into(),
                title2: "World".into(),
                subtitle: "Welcome".into(),
                background_image: String::new(),
            },
            about: About {
                homepage_title1: "Hi".into(),
                homepage_title_accent: "There".into(),
                ..About::default()
            },
            contact: ContactInfo {
                custom_links: Some(Vec::new()),
                ..ContactInfo::default()
            },
            gallery: Vec::new(),
            projects: Vec::new(),
            services: Vec::new(),
            menu_names: MenuNames {
                public: PublicMenu {
                    home: "Home".into(),
                    projects: "Projects".into(),
                    about: "About".into(),
                    services: "Services".into(),
                    contact: "Contact".into(),
                },
                admin: AdminMenu {
                    hero: "Hero".into(),
                    about: "Persona".into(),
                    gallery: "Archive".into(),
                    projects: "Work".into(),
                    services: "Tech".into(),
                    media: "Vault".into(),
                },
            },
            media_library: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl ContentDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDocument`] if the text is not JSON or does
    /// not have the document shape.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDocument`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Credentials guarding the admin panel.
    ///
    /// Each field falls back to `admin` on its own when absent or empty.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        let fallback = Credentials::default();
        let Some(auth) = &self.auth else {
            return fallback;
        };
        Credentials {
            username: non_empty(&auth.username).unwrap_or(fallback.username),
            password: non_empty(&auth.password).unwrap_or(fallback.password),
        }
    }

    /// Plaintext comparison against [`Self::credentials`].
    #[must_use]
    pub fn credentials_match(&self, username: &str, password: &str) -> bool {
        self.credentials().matches(username, password)
    }

    /// Gate an admin login attempt.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCredentials`] on any mismatch.
    pub fn check_login(&self, username: &str, password: &str) -> Result<(), CoreError> {
        if self.credentials_match(username, password) {
            Ok(())
        } else {
            Err(CoreError::InvalidCredentials)
        }
    }

    /// Put an asset at the front of the media library.
    ///
    /// Duplicates are allowed; the library is an uncurated pool.
    pub fn add_media(&mut self, url: impl Into<String>) {
        self.media_library.insert(0, url.into());
    }

    /// Evict every media library entry equal to `url`. Returns how many were removed.
    ///
    /// References from projects or gallery items are left as they are.
    pub fn remove_media(&mut self, url: &str) -> usize {
        let before = self.media_library.len();
        self.media_library.retain(|entry| entry != url);
        before - self.media_library.len()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

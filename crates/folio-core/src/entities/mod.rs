//! Record types making up the content document.
//!
//! Every struct serializes in camelCase and fills missing fields with their
//! defaults, so documents written by older front ends still load.

mod about;
mod auth;
mod contact;
mod gallery;
mod hero;
mod menu;
mod project;
mod service;

pub use about::{About, Education, Skill, TimelineEntry};
pub use auth::Credentials;
pub use contact::{ContactInfo, CustomLink};
pub use gallery::GalleryItem;
pub use hero::Hero;
pub use menu::{AdminMenu, MenuNames, PublicMenu};
pub use project::Project;
pub use service::Service;

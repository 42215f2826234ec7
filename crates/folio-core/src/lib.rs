//! # folio-core
//!
//! Core types and error types for Folio.
//!
//! This crate provides the foundational types shared across all Folio crates:
//! - The [`ContentDocument`](document::ContentDocument) aggregate and its
//!   documented default
//! - Record types for each document section (hero, about, projects, ...)
//! - Enumerated document values
//! - Cross-cutting error types
//! - The JSON envelope spoken between the content store and its clients

pub mod document;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod lenient;
pub mod responses;

pub use document::ContentDocument;

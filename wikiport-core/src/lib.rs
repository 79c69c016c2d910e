//! # wikiport-core
//!
//! Core library for the wikiport vault-to-site markdown converter.
//!
//! This crate provides the building blocks for turning a wiki-style markdown
//! vault into static-site-ready markdown, in place: snapshot enumeration of
//! the vault, wiki-link resolution, and the diagram/callout block rewrites.

pub mod config;
pub mod pipeline;
pub mod rewrite;
pub mod vault;

pub use config::Config;
pub use pipeline::{ConvertError, Converter};
pub use vault::collect_document_paths;

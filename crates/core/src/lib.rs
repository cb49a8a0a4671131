//! Domain logic for the murasaki band site.
//!
//! This crate has no async code and no database access, so the language
//! pair, URL resolution, pagination math, and validation rules can be
//! exercised by both the repository layer and the HTTP layer (and unit
//! tested without a running server). The one I/O exception is the
//! thumbnail helper's image-header probe.

pub mod error;
pub mod language;
pub mod page_type;
pub mod pagination;
pub mod thumbnail;
pub mod types;
pub mod urls;
pub mod validation;

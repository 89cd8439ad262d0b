//! Template module library for schemastitch.
//!
//! A schema is assembled from reusable `.prisma` fragments stored on disk,
//! one subdirectory per category. This crate discovers those fragments into
//! a catalog, resolves user-supplied tokens against it, and composes the
//! final schema text. The catalog is built once and passed by value through
//! the resolver and composer; nothing in here holds global state.

mod compose;
mod discover;
mod error;
mod module;
mod preset;
mod provider;
mod resolve;

pub use compose::{compose, write_schema};
pub use discover::{FRAGMENT_EXTENSION, discover};
pub use error::{Error, Result};
pub use module::{ROOT_CATEGORY, TemplateModule};
pub use preset::{PRESETS, Preset};
pub use provider::Provider;
pub use resolve::resolve_tokens;

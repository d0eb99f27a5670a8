//! Reflang - language restricted entity reference selection
//!
//! Reflang narrows the entities a reference field may point at to a single
//! language. A restriction mode (`site_default`, `current_interface`,
//! `authors_default`, or a literal language code) is resolved per request
//! and injected into the entity query as an equality condition on the
//! entity type's language key.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Project file loading and validation
//! - `core`: Restriction resolution, query augmentation and selection handlers

pub mod cli;
pub mod config;
pub mod core;

//! # graphdoc-core
//!
//! Schema data model for GraphDoc.
//!
//! This crate defines the in-memory representation of a parsed GraphQL SDL
//! document:
//! - [`types::TypeRecord`] -- one top-level declaration (type, input, enum,
//!   or scalar) with its ordered field list
//! - [`types::TypeExpr`] -- a raw type expression such as `[String!]!`, with
//!   bare-identifier extraction
//! - [`SchemaRegistry`] -- every declaration of a document in order of
//!   appearance, plus the set of known scalar names
//!
//! Parsing lives in `graphdoc-sdl`; this crate has no I/O.

pub mod registry;
pub mod types;

pub use registry::{SchemaRegistry, BUILTIN_SCALARS};

//! # graphdoc-sdl
//!
//! SDL parser and Markdown renderer for GraphDoc.
//!
//! This crate provides:
//! - A single-pass, character-driven parser for a restricted GraphQL SDL
//!   grammar (`type`, `input`, `enum`, `scalar` declarations) that builds
//!   a [`graphdoc_core::SchemaRegistry`] directly, without an AST
//! - A Markdown renderer producing one section per declaration, with
//!   cross-links between custom types
//!
//! # Example
//!
//! ```
//! let source = r#"
//! type Query {
//!     user: User
//! }
//!
//! type User {
//!     id: ID!
//!     name: String
//! }
//! "#;
//!
//! let registry = graphdoc_sdl::parse(source).expect("parse failed");
//! assert_eq!(registry.len(), 2);
//!
//! let document = graphdoc_sdl::render_document(registry).expect("render failed");
//! assert!(document.starts_with("# Entrypoint Data Types"));
//! assert!(document.contains("## User"));
//! ```

pub mod error;
pub mod markdown;
pub mod parser;
mod scanner;

pub use error::{ParseError, RenderError, Span};
pub use markdown::render_document;
pub use parser::parse;

//! Tarn syntax tree.
//!
//! The abstract expression tree handed to the type checker by a front end:
//! literals, variables, application, lambda abstraction, grouping and
//! sequential `let`. Trees are plain owned data and can be built with the
//! constructor helpers on [`Expr`] or deserialized with serde.
//!
//! # Architecture
//!
//! - [`ast`]: expressions, patterns, literals and let-bindings
//! - [`span`]: byte-offset source spans carried on identifiers

pub mod ast;
pub mod span;

pub use ast::{Binding, Bindings, Expr, Ident, Lit, Pat};
pub use span::Span;

//! Abstract syntax tree node types.

pub mod expr;
pub mod pat;

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::span::Span;

pub use expr::{Binding, Bindings, Expr, Lit};
pub use pat::Pat;

/// A name as written in the source, with an optional location.
///
/// The `span` is excluded from `PartialEq` and `Hash`: two identifiers with
/// the same name refer to the same binding regardless of where they appear.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Ident {
            name: name.into(),
            span: None,
        }
    }

    pub fn with_span(name: impl Into<String>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span: Some(span),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Ident {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Ident {}

impl Hash for Ident {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::new(name)
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Ident::new(name)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

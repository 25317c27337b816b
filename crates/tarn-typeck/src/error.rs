//! Type error types.
//!
//! Errors are plain data: the checker stops at the first one and hands it
//! back to the caller, which decides how (and whether) to render it.

use serde::Serialize;
use thiserror::Error;

use crate::ty::{Ty, TyVar};

/// A type error encountered during inference.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
pub enum TypeError {
    /// A variable is used but not defined in scope.
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String },
    /// Two types that must be equal have incompatible structure.
    #[error("cannot unify `{left}` and `{right}`")]
    UnificationFailure { left: Ty, right: Ty },
    /// A type variable appears in its own definition.
    ///
    /// Example: unifying `'a` with `'a -> Int` would create the infinite
    /// type `((... -> Int) -> Int) -> Int`.
    #[error("infinite type: `{var}` occurs in `{ty}`")]
    InfiniteType { var: TyVar, ty: Ty },
    /// A construct the inference rules do not handle yet.
    #[error("unsupported construct: {description}")]
    UnsupportedConstruct { description: String },
}

impl TypeError {
    pub fn unbound(name: impl Into<String>) -> Self {
        TypeError::UnboundVariable { name: name.into() }
    }

    pub fn unsupported(description: impl Into<String>) -> Self {
        TypeError::UnsupportedConstruct {
            description: description.into(),
        }
    }

    /// Stable code identifying the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            TypeError::UnboundVariable { .. } => "E0001",
            TypeError::UnificationFailure { .. } => "E0002",
            TypeError::InfiniteType { .. } => "E0003",
            TypeError::UnsupportedConstruct { .. } => "E0004",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(TypeError::unbound("x").to_string(), "unbound variable `x`");
        assert_eq!(
            TypeError::UnificationFailure {
                left: Ty::int(),
                right: Ty::string(),
            }
            .to_string(),
            "cannot unify `Int` and `String`"
        );
        assert_eq!(
            TypeError::InfiniteType {
                var: TyVar::new("a"),
                ty: Ty::fun(Ty::var("a"), Ty::int()),
            }
            .to_string(),
            "infinite type: `'a` occurs in `'a -> Int`"
        );
        assert_eq!(
            TypeError::unsupported("wildcard pattern `_`").to_string(),
            "unsupported construct: wildcard pattern `_`"
        );
    }

    #[test]
    fn error_codes_are_distinct() {
        let errors = [
            TypeError::unbound("x"),
            TypeError::UnificationFailure {
                left: Ty::int(),
                right: Ty::unit(),
            },
            TypeError::InfiniteType {
                var: TyVar::new("a"),
                ty: Ty::var("a"),
            },
            TypeError::unsupported("pattern"),
        ];
        let codes: Vec<&str> = errors.iter().map(TypeError::code).collect();
        assert_eq!(codes, ["E0001", "E0002", "E0003", "E0004"]);
    }

    #[test]
    fn errors_serialize_as_structured_data() {
        let json = serde_json::to_value(TypeError::unbound("y")).expect("serializable");
        assert_eq!(json, serde_json::json!({ "UnboundVariable": { "name": "y" } }));
    }
}

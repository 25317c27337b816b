//! Patterns in parameter position.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::expr::Lit;
use super::Ident;

/// A pattern binding the parameter of a lambda or a let-bound function.
///
/// Only `Var` is understood by the type checker today. The remaining
/// variants are part of the tree so that front ends can already produce
/// them; the checker reports them as unsupported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Pat {
    /// `x`
    Var(Ident),
    /// `_`
    Wildcard,
    /// `42`, `"s"`, `()`
    Lit(Lit),
    /// `name@pat`
    As(Ident, Box<Pat>),
    /// `Con p1 p2 ...`
    Con(Ident, Vec<Pat>),
}

impl Pat {
    pub fn var(name: impl Into<Ident>) -> Pat {
        Pat::Var(name.into())
    }

    fn is_atomic(&self) -> bool {
        match self {
            Pat::Var(_) | Pat::Wildcard | Pat::As(..) => true,
            Pat::Lit(Lit::Int(n)) => *n >= 0,
            Pat::Lit(_) => true,
            Pat::Con(_, args) => args.is_empty(),
        }
    }

    pub(crate) fn fmt_atom(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_atomic() {
            write!(f, "{self}")
        } else {
            write!(f, "({self})")
        }
    }
}

impl fmt::Display for Pat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pat::Var(name) => write!(f, "{name}"),
            Pat::Wildcard => f.write_str("_"),
            Pat::Lit(lit) => write!(f, "{lit}"),
            Pat::As(name, inner) => {
                write!(f, "{name}@")?;
                inner.fmt_atom(f)
            }
            Pat::Con(name, args) => {
                write!(f, "{name}")?;
                for arg in args {
                    f.write_str(" ")?;
                    arg.fmt_atom(f)?;
                }
                Ok(())
            }
        }
    }
}

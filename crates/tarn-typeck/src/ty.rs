//! Type representation for the Tarn type system.
//!
//! Defines the core `Ty` enum, type constructors (`TyCon`), type variables
//! (`TyVar`), and polymorphic type schemes (`Scheme`). Function types are not
//! a separate case: `a -> b` is the arrow constructor applied twice.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::fresh::name_for;
use crate::subst::{Subst, Types};

/// Name of the binary arrow constructor.
pub const ARROW: &str = "->";

/// A type variable, identified by name.
///
/// Inference draws names from [`crate::fresh::NameSupply`]; builtin schemes
/// may use any name for their quantified variables.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TyVar(pub String);

impl TyVar {
    pub fn new(name: impl Into<String>) -> Self {
        TyVar(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TyVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}", self.0)
    }
}

/// A nullary type constructor -- `Int`, `String`, `List`, or the arrow.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TyCon {
    pub name: String,
}

impl TyCon {
    pub fn new(name: impl Into<String>) -> Self {
        TyCon { name: name.into() }
    }

    pub fn is_arrow(&self) -> bool {
        self.name == ARROW
    }
}

impl fmt::Display for TyCon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_arrow() {
            write!(f, "({ARROW})")
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// A Tarn type.
///
/// - `Con`: a named constructor (Int, String, List, ->, ...)
/// - `Var`: a type variable
/// - `App`: type-level application, left to right
///
/// Equality is structural.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Ty {
    Con(TyCon),
    Var(TyVar),
    App(Box<Ty>, Box<Ty>),
}

impl Ty {
    pub fn con(name: impl Into<String>) -> Ty {
        Ty::Con(TyCon::new(name))
    }

    pub fn var(name: impl Into<String>) -> Ty {
        Ty::Var(TyVar::new(name))
    }

    pub fn app(lhs: Ty, rhs: Ty) -> Ty {
        Ty::App(Box::new(lhs), Box::new(rhs))
    }

    /// Create an `Int` type.
    pub fn int() -> Ty {
        Ty::con("Int")
    }

    /// Create a `Float` type.
    pub fn float() -> Ty {
        Ty::con("Float")
    }

    /// Create a `String` type.
    pub fn string() -> Ty {
        Ty::con("String")
    }

    /// Create the `Unit` type.
    pub fn unit() -> Ty {
        Ty::con("Unit")
    }

    /// The bare arrow constructor.
    pub fn arrow() -> Ty {
        Ty::con(ARROW)
    }

    /// Create the function type `param -> ret`.
    pub fn fun(param: Ty, ret: Ty) -> Ty {
        Ty::app(Ty::app(Ty::arrow(), param), ret)
    }

    /// Curried function type `p1 -> p2 -> ... -> ret`.
    pub fn fun_n<I>(params: I, ret: Ty) -> Ty
    where
        I: IntoIterator<Item = Ty>,
        I::IntoIter: DoubleEndedIterator,
    {
        params
            .into_iter()
            .rev()
            .fold(ret, |acc, param| Ty::fun(param, acc))
    }

    /// Split a function type into parameter and result.
    pub fn as_fun(&self) -> Option<(&Ty, &Ty)> {
        match self {
            Ty::App(head, ret) => match head.as_ref() {
                Ty::App(arrow, param) if matches!(arrow.as_ref(), Ty::Con(c) if c.is_arrow()) => {
                    Some((param, ret))
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// Free type variables in order of first appearance, left to right.
    pub fn vars_in_order(&self) -> Vec<TyVar> {
        fn walk(ty: &Ty, out: &mut Vec<TyVar>) {
            match ty {
                Ty::Con(_) => {}
                Ty::Var(v) => {
                    if !out.contains(v) {
                        out.push(v.clone());
                    }
                }
                Ty::App(lhs, rhs) => {
                    walk(lhs, out);
                    walk(rhs, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }

    /// Rename free variables to `a, b, c, ...` in order of first appearance.
    ///
    /// Two principal types that differ only in variable names normalize to
    /// the same type, which makes results independent of how many fresh
    /// variables a run happened to draw.
    pub fn normalize(&self) -> Ty {
        let renaming: Subst = self
            .vars_in_order()
            .into_iter()
            .zip(1u64..)
            .map(|(var, index)| (var, Ty::Var(TyVar::new(name_for(index)))))
            .collect();
        self.apply(&renaming)
    }

    fn fmt_arg(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::App(..) => write!(f, "({self})"),
            _ => write!(f, "{self}"),
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((param, ret)) = self.as_fun() {
            if param.as_fun().is_some() {
                write!(f, "({param})")?;
            } else {
                write!(f, "{param}")?;
            }
            return write!(f, " -> {ret}");
        }
        match self {
            Ty::Con(c) => write!(f, "{c}"),
            Ty::Var(v) => write!(f, "{v}"),
            Ty::App(lhs, rhs) => {
                if lhs.as_fun().is_some() {
                    write!(f, "({lhs})")?;
                } else {
                    write!(f, "{lhs}")?;
                }
                f.write_str(" ")?;
                rhs.fmt_arg(f)
            }
        }
    }
}

/// A polymorphic type scheme: a type with universally quantified variables.
///
/// For example, the type of `id` is `forall a. a -> a`, represented as
/// `Scheme { vars: {a}, ty: a -> a }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scheme {
    /// The quantified (generic) type variables.
    pub vars: BTreeSet<TyVar>,
    /// The underlying type (may reference vars).
    pub ty: Ty,
}

impl Scheme {
    /// Create a monomorphic scheme (no quantified variables).
    pub fn mono(ty: Ty) -> Self {
        Scheme {
            vars: BTreeSet::new(),
            ty,
        }
    }

    pub fn poly(vars: impl IntoIterator<Item = TyVar>, ty: Ty) -> Self {
        Scheme {
            vars: vars.into_iter().collect(),
            ty,
        }
    }

    /// Quantify every free variable of `ty`.
    pub fn closed(ty: Ty) -> Self {
        Scheme {
            vars: ty.free_vars(),
            ty,
        }
    }

    pub fn is_mono(&self) -> bool {
        self.vars.is_empty()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vars.is_empty() {
            return write!(f, "{}", self.ty);
        }
        f.write_str("∀")?;
        for var in &self.vars {
            write!(f, " {var}")?;
        }
        write!(f, ". {}", self.ty)
    }
}

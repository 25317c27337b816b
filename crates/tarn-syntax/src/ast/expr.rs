//! Expressions, literals and let-bindings.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::pat::Pat;
use super::Ident;

/// A literal value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Lit {
    Int(i64),
    Float(f64),
    String(String),
    Unit,
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lit::Int(n) => write!(f, "{n}"),
            Lit::Float(x) => write!(f, "{x:?}"),
            Lit::String(s) => write!(f, "{s:?}"),
            Lit::Unit => f.write_str("()"),
        }
    }
}

/// The bindings of a `let`, keyed by name in source order.
///
/// Order matters: a binding may refer to the bindings before it, never to
/// itself or to the ones after it.
pub type Bindings = IndexMap<String, Binding>;

/// A Tarn expression.
///
/// - `Lit`: a literal (`42`, `"hi"`, `()`)
/// - `Var`: a reference to a name in scope
/// - `App`: application of a function to one argument (`f x`)
/// - `Abs`: a one-parameter lambda (`\x -> body`)
/// - `Group`: a parenthesized expression, semantically transparent
/// - `Let`: sequential, non-recursive bindings followed by a body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Lit(Lit),
    Var(Ident),
    App(Box<Expr>, Box<Expr>),
    Abs(Pat, Box<Expr>),
    Group(Box<Expr>),
    Let(Bindings, Box<Expr>),
}

impl Expr {
    pub fn int(n: i64) -> Expr {
        Expr::Lit(Lit::Int(n))
    }

    pub fn float(x: f64) -> Expr {
        Expr::Lit(Lit::Float(x))
    }

    pub fn string(s: impl Into<String>) -> Expr {
        Expr::Lit(Lit::String(s.into()))
    }

    pub fn unit() -> Expr {
        Expr::Lit(Lit::Unit)
    }

    pub fn var(name: impl Into<Ident>) -> Expr {
        Expr::Var(name.into())
    }

    pub fn app(lhs: Expr, rhs: Expr) -> Expr {
        Expr::App(Box::new(lhs), Box::new(rhs))
    }

    /// Curried application of `func` to each argument in turn: `f a b c`.
    pub fn apply(func: Expr, args: impl IntoIterator<Item = Expr>) -> Expr {
        args.into_iter().fold(func, Expr::app)
    }

    /// `\param -> body` with a plain variable parameter.
    pub fn lambda(param: impl Into<Ident>, body: Expr) -> Expr {
        Expr::Abs(Pat::Var(param.into()), Box::new(body))
    }

    pub fn abs(param: Pat, body: Expr) -> Expr {
        Expr::Abs(param, Box::new(body))
    }

    pub fn group(inner: Expr) -> Expr {
        Expr::Group(Box::new(inner))
    }

    /// Build a `let` from bindings in source order.
    ///
    /// A later binding with the same name replaces the earlier one but keeps
    /// its position.
    pub fn let_in(bindings: impl IntoIterator<Item = Binding>, body: Expr) -> Expr {
        let bindings = bindings
            .into_iter()
            .map(|binding| (binding.name.name.clone(), binding))
            .collect();
        Expr::Let(bindings, Box::new(body))
    }

    /// Strip any number of `Group` wrappers.
    pub fn ungroup(&self) -> &Expr {
        match self {
            Expr::Group(inner) => inner.ungroup(),
            other => other,
        }
    }

    fn is_atomic(&self) -> bool {
        match self {
            Expr::Lit(Lit::Int(n)) => *n >= 0,
            Expr::Lit(Lit::Float(x)) => x.is_sign_positive(),
            Expr::Lit(_) | Expr::Var(_) | Expr::Group(_) => true,
            Expr::App(..) | Expr::Abs(..) | Expr::Let(..) => false,
        }
    }

    fn fmt_atom(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_atomic() {
            write!(f, "{self}")
        } else {
            write!(f, "({self})")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Lit(lit) => write!(f, "{lit}"),
            Expr::Var(name) => write!(f, "{name}"),
            Expr::App(lhs, rhs) => {
                match lhs.as_ref() {
                    Expr::Abs(..) | Expr::Let(..) => write!(f, "({lhs})")?,
                    _ => write!(f, "{lhs}")?,
                }
                f.write_str(" ")?;
                rhs.fmt_atom(f)
            }
            Expr::Abs(param, body) => {
                f.write_str("\\")?;
                param.fmt_atom(f)?;
                write!(f, " -> {body}")
            }
            Expr::Group(inner) => write!(f, "({inner})"),
            Expr::Let(bindings, body) => {
                f.write_str("let ")?;
                for (i, binding) in bindings.values().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{binding}")?;
                }
                write!(f, " in {body}")
            }
        }
    }
}

/// One `let` binding: `name param1 param2 ... = body`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    pub name: Ident,
    #[serde(default)]
    pub params: Vec<Pat>,
    pub body: Expr,
}

impl Binding {
    /// A function binding whose parameters are plain variables.
    pub fn new<I>(name: impl Into<Ident>, params: I, body: Expr) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        Binding {
            name: name.into(),
            params: params.into_iter().map(|p| Pat::Var(p.into())).collect(),
            body,
        }
    }

    /// A binding with no parameters: `name = body`.
    pub fn value(name: impl Into<Ident>, body: Expr) -> Self {
        Binding {
            name: name.into(),
            params: Vec::new(),
            body,
        }
    }

    pub fn with_patterns(name: impl Into<Ident>, params: Vec<Pat>, body: Expr) -> Self {
        Binding {
            name: name.into(),
            params,
            body,
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for param in &self.params {
            f.write_str(" ")?;
            param.fmt_atom(f)?;
        }
        write!(f, " = {}", self.body)
    }
}

//! Tarn type checker: Hindley-Milner type inference with Algorithm W.
//!
//! This crate infers the principal type of a Tarn expression under a typing
//! environment, or reports why it has none. It supports:
//!
//! - Hindley-Milner type inference with let-polymorphism
//! - Unification with occurs check
//! - Sequential, non-recursive `let` blocks
//! - Builtin environments configured from TOML signatures
//!
//! # Architecture
//!
//! - [`ty`]: Core type representation (Ty, TyCon, TyVar, Scheme)
//! - [`subst`]: Explicit substitutions and the [`Types`](subst::Types) trait
//! - [`fresh`]: Fresh type-variable names (`a`, `b`, ..., `z`, `aa`, ...)
//! - [`unify`]: Most general unifier with occurs check
//! - [`env`]: Persistent type environment, generalization and instantiation
//! - [`infer`]: Algorithm W inference engine
//! - [`error`]: Type error kinds
//! - [`sig`]: Textual type signatures
//! - [`prelude`]: Builtin environments loaded from TOML
//! - [`builtins`]: The default builtin environment

pub mod builtins;
pub mod env;
pub mod error;
pub mod fresh;
pub mod infer;
pub mod prelude;
pub mod sig;
pub mod subst;
pub mod ty;
pub mod unify;

use tarn_syntax::Expr;
use tracing::debug;

pub use crate::env::TypeEnv;
pub use crate::error::TypeError;
pub use crate::infer::Typer;
pub use crate::subst::{Subst, Types};
pub use crate::ty::{Scheme, Ty, TyCon, TyVar};

/// Infer the type of `expr` under `env`.
///
/// Each call starts a fresh run. Fresh variables count from `a`, skipping
/// any name already free in `env`. The result is not normalized; use
/// [`Ty::normalize`] to compare types up to renaming.
pub fn infer_type(expr: &Expr, env: &TypeEnv) -> Result<Ty, TypeError> {
    infer_type_with_subst(expr, env).map(|(_, ty)| ty)
}

/// Like [`infer_type`], but also returns the final substitution.
pub fn infer_type_with_subst(expr: &Expr, env: &TypeEnv) -> Result<(Subst, Ty), TypeError> {
    debug!(%expr, env = env.len(), "inferring");
    let mut typer = Typer::for_env(env);
    let result = typer.infer(expr, env);
    match &result {
        Ok((_, ty)) => debug!(%ty, vars = typer.vars_issued(), "inferred"),
        Err(err) => debug!(code = err.code(), %err, "inference failed"),
    }
    result
}

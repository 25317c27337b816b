//! Algorithm W inference engine for Tarn.
//!
//! Walks the expression tree and returns, for every subexpression, the
//! substitution discovered so far together with its type. Implements
//! Hindley-Milner inference with:
//! - Let-polymorphism (generalize + instantiate)
//! - Occurs check (rejects infinite types)
//! - Sequential, non-recursive `let`
//! - Fail-fast errors: the first problem aborts the run

use tarn_syntax::{Binding, Expr, Lit, Pat};
use tracing::debug;

use crate::env::TypeEnv;
use crate::error::TypeError;
use crate::fresh::NameSupply;
use crate::subst::{Subst, Types};
use crate::ty::{Scheme, Ty};
use crate::unify::mgu;

/// One inference run.
///
/// Owns the fresh-variable counter, so every independent run should use its
/// own `Typer`. Reusing a `Typer` for several expressions keeps their
/// variables apart.
#[derive(Debug, Default)]
pub struct Typer {
    names: NameSupply,
}

impl Typer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A run whose fresh variables never collide with the free variables of
    /// `env`, so monomorphic types supplied by the caller are not captured.
    pub fn for_env(env: &TypeEnv) -> Self {
        Typer {
            names: NameSupply::avoiding(env.free_vars()),
        }
    }

    /// Infer the type of `expr` under `env`.
    pub fn infer(&mut self, expr: &Expr, env: &TypeEnv) -> Result<(Subst, Ty), TypeError> {
        match expr {
            Expr::Group(inner) => self.infer(inner, env),

            Expr::Lit(lit) => Ok((Subst::empty(), lit_ty(lit))),

            Expr::Var(ident) => {
                let scheme = env
                    .lookup(&ident.name)
                    .ok_or_else(|| TypeError::unbound(ident.name.clone()))?;
                Ok((Subst::empty(), scheme.instantiate(&mut self.names)))
            }

            Expr::App(lhs, rhs) => {
                let result = self.names.fresh_var();
                let (s1, fun_ty) = self.infer(lhs, env)?;
                let (s2, arg_ty) = self.infer(rhs, &env.apply(&s1))?;
                let s3 = mgu(&fun_ty.apply(&s2), &Ty::fun(arg_ty, result.clone()))?;
                let ty = result.apply(&s3);
                Ok((s3.compose(&s2.compose(&s1)), ty))
            }

            Expr::Abs(param, body) => {
                let (param_ty, scope) = self.infer_pat(param, env)?;
                let (s, body_ty) = self.infer(body, &scope)?;
                let ty = Ty::fun(param_ty, body_ty).apply(&s);
                Ok((s, ty))
            }

            Expr::Let(bindings, body) => {
                let mut subst = Subst::empty();
                let mut scope = env.clone();
                for binding in bindings.values() {
                    let name = &binding.name.name;
                    let (s, ty) = self.infer_binding(binding, &scope)?;
                    subst = s.compose(&subst);
                    scope = scope.apply(&s);
                    let scheme = scope.generalize(&ty);
                    debug!(%name, %scheme, "generalized let binding");
                    scope = scope.extend(name.clone(), scheme);
                }
                let (s, ty) = self.infer(body, &scope)?;
                Ok((s.compose(&subst), ty))
            }
        }
    }

    /// Infer the function type of `name p1 p2 ... = body`.
    ///
    /// Parameters are monomorphic inside the body. The result is
    /// `p1 -> p2 -> ... -> body` with the body's substitution applied.
    pub fn infer_binding(
        &mut self,
        binding: &Binding,
        env: &TypeEnv,
    ) -> Result<(Subst, Ty), TypeError> {
        let mut scope = env.clone();
        let mut params = Vec::with_capacity(binding.params.len());
        for pat in &binding.params {
            let (ty, next) = self.infer_pat(pat, &scope)?;
            params.push(ty);
            scope = next;
        }
        let (s, body_ty) = self.infer(&binding.body, &scope)?;
        let ty = Ty::fun_n(params, body_ty).apply(&s);
        Ok((s, ty))
    }

    /// Introduce the names bound by a parameter pattern.
    ///
    /// Returns the pattern's type and the environment extended with its
    /// bindings. Bindings are never generalized.
    pub fn infer_pat(&mut self, pat: &Pat, env: &TypeEnv) -> Result<(Ty, TypeEnv), TypeError> {
        match pat {
            Pat::Var(ident) => {
                let ty = self.names.fresh_var();
                let scope = env.extend(ident.name.clone(), Scheme::mono(ty.clone()));
                Ok((ty, scope))
            }
            Pat::Wildcard | Pat::Lit(_) | Pat::As(..) | Pat::Con(..) => Err(
                TypeError::unsupported(format!("{} pattern `{pat}`", pat_kind(pat))),
            ),
        }
    }

    /// Number of fresh variables drawn by this run so far.
    pub fn vars_issued(&self) -> u64 {
        self.names.issued()
    }
}

/// The type of a literal.
pub fn lit_ty(lit: &Lit) -> Ty {
    match lit {
        Lit::Int(_) => Ty::int(),
        Lit::Float(_) => Ty::float(),
        Lit::String(_) => Ty::string(),
        Lit::Unit => Ty::unit(),
    }
}

fn pat_kind(pat: &Pat) -> &'static str {
    match pat {
        Pat::Var(_) => "variable",
        Pat::Wildcard => "wildcard",
        Pat::Lit(_) => "literal",
        Pat::As(..) => "as",
        Pat::Con(..) => "constructor",
    }
}

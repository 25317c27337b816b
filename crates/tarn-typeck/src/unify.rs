//! Most general unifier with occurs check.
//!
//! `mgu` returns the smallest substitution that makes two types equal, or a
//! `TypeError` if none exists. No substitution entry is ever created without
//! first passing the occurs check, so substitutions stay acyclic.

use tracing::trace;

use crate::error::TypeError;
use crate::subst::{Subst, Types};
use crate::ty::{Ty, TyVar};

/// Compute the most general unifier of `left` and `right`.
pub fn mgu(left: &Ty, right: &Ty) -> Result<Subst, TypeError> {
    if left == right {
        return Ok(Subst::empty());
    }
    match (left, right) {
        (Ty::Var(v), ty) | (ty, Ty::Var(v)) => bind(v, ty),

        // Unify heads first, then arguments under the head's solution.
        (Ty::App(l1, r1), Ty::App(l2, r2)) => {
            let s1 = mgu(l1, l2)?;
            let s2 = mgu(&r1.apply(&s1), &r2.apply(&s1))?;
            Ok(s2.compose(&s1))
        }

        _ => Err(TypeError::UnificationFailure {
            left: left.clone(),
            right: right.clone(),
        }),
    }
}

/// Bind `var` to `ty`, rejecting infinite types.
fn bind(var: &TyVar, ty: &Ty) -> Result<Subst, TypeError> {
    if matches!(ty, Ty::Var(other) if other == var) {
        return Ok(Subst::empty());
    }
    if ty.free_vars().contains(var) {
        return Err(TypeError::InfiniteType {
            var: var.clone(),
            ty: ty.clone(),
        });
    }
    trace!(%var, %ty, "bind");
    Ok(Subst::singleton(var.clone(), ty.clone()))
}

// ── Tests ──────────────────────────────────────────────────────────────

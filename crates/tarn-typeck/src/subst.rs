//! Substitutions and the [`Types`] trait.
//!
//! A substitution is a finite map from type variables to types, recording
//! the partial solutions found by unification. The unifier's occurs check
//! guarantees no entry ever refers back to its own variable.

use std::collections::BTreeSet;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::ty::{Scheme, Ty, TyVar};

/// Anything that mentions type variables: types, schemes, environments.
pub trait Types {
    /// The type variables occurring free in `self`.
    fn free_vars(&self) -> BTreeSet<TyVar>;

    /// Replace free variables according to `subst`.
    fn apply(&self, subst: &Subst) -> Self;
}

impl Types for Ty {
    fn free_vars(&self) -> BTreeSet<TyVar> {
        match self {
            Ty::Con(_) => BTreeSet::new(),
            Ty::Var(v) => BTreeSet::from([v.clone()]),
            Ty::App(lhs, rhs) => {
                let mut vars = lhs.free_vars();
                vars.extend(rhs.free_vars());
                vars
            }
        }
    }

    fn apply(&self, subst: &Subst) -> Ty {
        match self {
            Ty::Con(_) => self.clone(),
            Ty::Var(v) => subst.get(v).cloned().unwrap_or_else(|| self.clone()),
            Ty::App(lhs, rhs) => Ty::app(lhs.apply(subst), rhs.apply(subst)),
        }
    }
}

impl Types for Scheme {
    fn free_vars(&self) -> BTreeSet<TyVar> {
        self.ty
            .free_vars()
            .into_iter()
            .filter(|v| !self.vars.contains(v))
            .collect()
    }

    /// Quantified variables are bound by the scheme and shadow the
    /// substitution.
    fn apply(&self, subst: &Subst) -> Scheme {
        let mut inner = subst.clone();
        for var in &self.vars {
            inner.map.remove(var);
        }
        Scheme {
            vars: self.vars.clone(),
            ty: self.ty.apply(&inner),
        }
    }
}

/// A finite mapping from type variable to type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subst {
    map: FxHashMap<TyVar, Ty>,
}

impl Subst {
    /// The identity substitution.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `{var ↦ ty}`.
    pub fn singleton(var: TyVar, ty: Ty) -> Self {
        let mut map = FxHashMap::default();
        map.insert(var, ty);
        Subst { map }
    }

    pub fn get(&self, var: &TyVar) -> Option<&Ty> {
        self.map.get(var)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TyVar, &Ty)> {
        self.map.iter()
    }

    /// Compose `self` after `inner`.
    ///
    /// Applying the result equals applying `inner` first and `self` second.
    /// Inference chains these as `s3.compose(&s2.compose(&s1))`, so the
    /// rightmost substitution is always the oldest.
    pub fn compose(&self, inner: &Subst) -> Subst {
        let mut map = self.map.clone();
        map.extend(inner.map.iter().map(|(v, t)| (v.clone(), t.clone())));
        for ty in map.values_mut() {
            *ty = ty.apply(self);
        }
        Subst { map }
    }
}

impl FromIterator<(TyVar, Ty)> for Subst {
    fn from_iter<I: IntoIterator<Item = (TyVar, Ty)>>(iter: I) -> Self {
        Subst {
            map: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Subst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        f.write_str("{")?;
        for (i, (var, ty)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{var} ↦ {ty}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> TyVar {
        TyVar::new("a")
    }

    fn b() -> TyVar {
        TyVar::new("b")
    }

    #[test]
    fn free_vars_of_types() {
        assert!(Ty::int().free_vars().is_empty());
        let ty = Ty::fun(Ty::var("b"), Ty::app(Ty::con("List"), Ty::var("a")));
        assert_eq!(ty.free_vars(), BTreeSet::from([a(), b()]));
    }

    #[test]
    fn apply_preserves_unbound_vars() {
        let subst = Subst::singleton(a(), Ty::int());
        assert_eq!(Ty::var("b").apply(&subst), Ty::var("b"));
        assert_eq!(
            Ty::fun(Ty::var("a"), Ty::var("b")).apply(&subst),
            Ty::fun(Ty::int(), Ty::var("b"))
        );
    }

    #[test]
    fn apply_is_simultaneous() {
        let swap: Subst = [(a(), Ty::var("b")), (b(), Ty::var("a"))].into_iter().collect();
        assert_eq!(
            Ty::fun(Ty::var("a"), Ty::var("b")).apply(&swap),
            Ty::fun(Ty::var("b"), Ty::var("a"))
        );
    }

    #[test]
    fn compose_applies_inner_then_outer() {
        let inner = Subst::singleton(a(), Ty::var("b"));
        let outer = Subst::singleton(b(), Ty::int());
        let composed = outer.compose(&inner);

        let ty = Ty::fun(Ty::var("a"), Ty::var("b"));
        assert_eq!(ty.apply(&composed), ty.apply(&inner).apply(&outer));
        assert_eq!(composed.get(&a()), Some(&Ty::int()));
        assert_eq!(composed.get(&b()), Some(&Ty::int()));
    }

    #[test]
    fn compose_inner_entry_wins_on_shared_key() {
        let inner = Subst::singleton(a(), Ty::string());
        let outer = Subst::singleton(a(), Ty::int());
        assert_eq!(outer.compose(&inner).get(&a()), Some(&Ty::string()));
    }

    #[test]
    fn compose_is_associative_up_to_application() {
        let s1 = Subst::singleton(a(), Ty::fun(Ty::var("b"), Ty::var("c")));
        let s2 = Subst::singleton(b(), Ty::var("c"));
        let s3 = Subst::singleton(TyVar::new("c"), Ty::float());

        let left = s3.compose(&s2).compose(&s1);
        let right = s3.compose(&s2.compose(&s1));

        let probe = Ty::fun(Ty::var("a"), Ty::fun(Ty::var("b"), Ty::var("c")));
        assert_eq!(probe.apply(&left), probe.apply(&right));
        assert_eq!(
            probe.apply(&right),
            Ty::fun(
                Ty::fun(Ty::float(), Ty::float()),
                Ty::fun(Ty::float(), Ty::float())
            )
        );
    }

    #[test]
    fn scheme_apply_skips_quantified_vars() {
        let scheme = Scheme::poly([a()], Ty::fun(Ty::var("a"), Ty::var("b")));
        let subst: Subst = [(a(), Ty::int()), (b(), Ty::string())].into_iter().collect();
        assert_eq!(
            scheme.apply(&subst).ty,
            Ty::fun(Ty::var("a"), Ty::string())
        );
        assert_eq!(scheme.free_vars(), BTreeSet::from([b()]));
    }

    #[test]
    fn subst_display_is_sorted() {
        let subst: Subst = [(b(), Ty::int()), (a(), Ty::var("c"))].into_iter().collect();
        assert_eq!(subst.to_string(), "{'a ↦ 'c, 'b ↦ Int}");
        assert_eq!(Subst::empty().to_string(), "{}");
    }
}

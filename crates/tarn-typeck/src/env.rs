//! Type environment.
//!
//! The environment maps value names to their type schemes. It is a
//! persistent map: `extend` returns a new environment sharing structure with
//! the old one, so nested scopes form a tree of overlays and an enclosing
//! scope never sees the bindings of an inner one.

use std::collections::BTreeSet;

use im::OrdMap;

use crate::fresh::NameSupply;
use crate::subst::{Subst, Types};
use crate::ty::{Scheme, Ty, TyVar};

/// A type environment: an immutable mapping from names to type schemes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeEnv {
    bindings: OrdMap<String, Scheme>,
}

impl TypeEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new environment where `name` maps to `scheme`, shadowing any
    /// earlier binding of the same name. `self` is left untouched.
    pub fn extend(&self, name: impl Into<String>, scheme: Scheme) -> TypeEnv {
        TypeEnv {
            bindings: self.bindings.update(name.into(), scheme),
        }
    }

    /// Look up a name.
    pub fn lookup(&self, name: &str) -> Option<&Scheme> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Scheme)> {
        self.bindings.iter()
    }

    /// Quantify the variables of `ty` that are not free in this environment.
    ///
    /// Variables still free in the environment belong to an enclosing scope
    /// (for example a lambda parameter) and must stay monomorphic.
    pub fn generalize(&self, ty: &Ty) -> Scheme {
        let env_vars = self.free_vars();
        let vars = ty
            .free_vars()
            .into_iter()
            .filter(|v| !env_vars.contains(v))
            .collect();
        Scheme {
            vars,
            ty: ty.clone(),
        }
    }
}

impl Types for TypeEnv {
    fn free_vars(&self) -> BTreeSet<TyVar> {
        self.bindings
            .values()
            .flat_map(|scheme| scheme.free_vars())
            .collect()
    }

    fn apply(&self, subst: &Subst) -> TypeEnv {
        if subst.is_empty() {
            return self.clone();
        }
        TypeEnv {
            bindings: self
                .bindings
                .iter()
                .map(|(name, scheme)| (name.clone(), scheme.apply(subst)))
                .collect(),
        }
    }
}

impl<N: Into<String>> FromIterator<(N, Scheme)> for TypeEnv {
    fn from_iter<I: IntoIterator<Item = (N, Scheme)>>(iter: I) -> Self {
        TypeEnv {
            bindings: iter
                .into_iter()
                .map(|(name, scheme)| (name.into(), scheme))
                .collect(),
        }
    }
}

impl Scheme {
    /// Instantiate the scheme with fresh type variables.
    ///
    /// Every quantified variable is replaced by a variable drawn from
    /// `names`, so two instantiations never share a variable.
    pub fn instantiate(&self, names: &mut NameSupply) -> Ty {
        if self.vars.is_empty() {
            return self.ty.clone();
        }
        let subst: Subst = self
            .vars
            .iter()
            .map(|v| (v.clone(), names.fresh_var()))
            .collect();
        self.ty.apply(&subst)
    }
}

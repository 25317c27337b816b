//! Fresh type variable names.

use std::collections::BTreeSet;

use tracing::trace;

use crate::ty::{Ty, TyVar};

/// Name for the `index`-th fresh variable, counting from 1.
///
/// `1 -> a`, `26 -> z`, `27 -> aa`, `28 -> ab`, ... (bijective base 26), so
/// names are short and strictly increasing in length-then-alphabetical order.
pub fn name_for(index: u64) -> String {
    debug_assert!(index > 0, "fresh variable indices start at 1");
    let mut n = index;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Per-run supply of fresh type variables.
///
/// Each inference run owns one supply. The counter is bumped before a name
/// is produced, so the first variable is `'a` unless that name is reserved.
#[derive(Debug, Default)]
pub struct NameSupply {
    counter: u64,
    reserved: BTreeSet<TyVar>,
}

impl NameSupply {
    pub fn new() -> Self {
        Self::default()
    }

    /// A supply that never produces any of `reserved`, typically the free
    /// variables of the environment a run starts from.
    pub fn avoiding(reserved: BTreeSet<TyVar>) -> Self {
        NameSupply {
            counter: 0,
            reserved,
        }
    }

    /// Number of names consumed so far, including reserved ones skipped.
    pub fn issued(&self) -> u64 {
        self.counter
    }

    pub fn fresh_name(&mut self) -> TyVar {
        loop {
            self.counter += 1;
            let var = TyVar::new(name_for(self.counter));
            if !self.reserved.contains(&var) {
                trace!(%var, "fresh type variable");
                return var;
            }
        }
    }

    pub fn fresh_var(&mut self) -> Ty {
        Ty::Var(self.fresh_name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_follow_bijective_base_26() {
        assert_eq!(name_for(1), "a");
        assert_eq!(name_for(2), "b");
        assert_eq!(name_for(26), "z");
        assert_eq!(name_for(27), "aa");
        assert_eq!(name_for(28), "ab");
        assert_eq!(name_for(52), "az");
        assert_eq!(name_for(53), "ba");
        assert_eq!(name_for(702), "zz");
        assert_eq!(name_for(703), "aaa");
    }

    #[test]
    fn supply_starts_at_a() {
        let mut supply = NameSupply::new();
        assert_eq!(supply.fresh_var(), Ty::var("a"));
        assert_eq!(supply.fresh_var(), Ty::var("b"));
        assert_eq!(supply.issued(), 2);
    }

    #[test]
    fn supply_never_repeats() {
        let mut supply = NameSupply::new();
        let names: HashSet<TyVar> = (0..2000).map(|_| supply.fresh_name()).collect();
        assert_eq!(names.len(), 2000);
    }

    #[test]
    fn reserved_names_are_skipped() {
        let reserved = BTreeSet::from([TyVar::new("a"), TyVar::new("c")]);
        let mut supply = NameSupply::avoiding(reserved);
        assert_eq!(supply.fresh_name(), TyVar::new("b"));
        assert_eq!(supply.fresh_name(), TyVar::new("d"));
        assert_eq!(supply.issued(), 4);
    }

    #[test]
    fn independent_supplies_do_not_share_state() {
        let mut first = NameSupply::new();
        let mut second = NameSupply::new();
        first.fresh_name();
        first.fresh_name();
        assert_eq!(second.fresh_name(), TyVar::new("a"));
    }
}

//! Built-in value registration.
//!
//! The default environment a caller can start from when it has no prelude
//! of its own: a few combinators and the primitive operations on `Int`,
//! `Float` and `String`.

use crate::env::TypeEnv;
use crate::ty::{Scheme, Ty};

/// Build the default builtin environment.
///
/// After this call, the environment contains:
/// - Combinators: id, const, flip, compose, apply
/// - Int arithmetic: add, sub, mul
/// - Float arithmetic: addf
/// - String operations: concat, show
/// - The unit value: unit
pub fn default_env() -> TypeEnv {
    let a = || Ty::var("a");
    let b = || Ty::var("b");
    let c = || Ty::var("c");

    let int_binop = Scheme::mono(Ty::fun_n([Ty::int(), Ty::int()], Ty::int()));

    TypeEnv::new()
        // ── Combinators ──────────────────────────────────────────────
        .extend("id", Scheme::closed(Ty::fun(a(), a())))
        .extend("const", Scheme::closed(Ty::fun_n([a(), b()], a())))
        .extend(
            "flip",
            Scheme::closed(Ty::fun_n(
                [Ty::fun_n([a(), b()], c()), b(), a()],
                c(),
            )),
        )
        .extend(
            "compose",
            Scheme::closed(Ty::fun_n(
                [Ty::fun(b(), c()), Ty::fun(a(), b()), a()],
                c(),
            )),
        )
        .extend("apply", Scheme::closed(Ty::fun_n([Ty::fun(a(), b()), a()], b())))
        // ── Arithmetic ───────────────────────────────────────────────
        .extend("add", int_binop.clone())
        .extend("sub", int_binop.clone())
        .extend("mul", int_binop)
        .extend(
            "addf",
            Scheme::mono(Ty::fun_n([Ty::float(), Ty::float()], Ty::float())),
        )
        // ── Strings ──────────────────────────────────────────────────
        .extend(
            "concat",
            Scheme::mono(Ty::fun_n([Ty::string(), Ty::string()], Ty::string())),
        )
        .extend("show", Scheme::closed(Ty::fun(a(), Ty::string())))
        .extend("unit", Scheme::mono(Ty::unit()))
}

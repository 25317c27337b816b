//! Builtin environments loaded from TOML preludes.

use std::fs;

use tarn_syntax::Expr;
use tarn_typeck::builtins::default_env;
use tarn_typeck::prelude::{Prelude, PreludeError};
use tarn_typeck::sig::SignatureError;
use tarn_typeck::{infer_type, Ty};

const DEFAULT_PRELUDE: &str = r#"
[values]
id = "forall a. a -> a"
const = "forall a b. a -> b -> a"
flip = "forall a b c. (a -> b -> c) -> b -> a -> c"
compose = "(b -> c) -> (a -> b) -> a -> c"
apply = "(a -> b) -> a -> b"
add = "Int -> Int -> Int"
sub = "Int -> Int -> Int"
mul = "Int -> Int -> Int"
addf = "Float -> Float -> Float"
concat = "String -> String -> String"
show = "∀ 'a. 'a -> String"
unit = "()"
"#;

#[test]
fn test_default_env_matches_its_prelude() {
    let env = Prelude::from_toml_str(DEFAULT_PRELUDE)
        .unwrap()
        .to_env()
        .unwrap();
    assert_eq!(env, default_env());
}

#[test]
fn test_load_prelude_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prelude.toml");
    fs::write(
        &path,
        r#"
        [values]
        length = "forall a. List a -> Int"
        nil = "List a"
        "#,
    )
    .unwrap();

    let env = Prelude::load(&path).unwrap().to_env().unwrap();
    let expr = Expr::app(Expr::var("length"), Expr::var("nil"));
    assert_eq!(infer_type(&expr, &env), Ok(Ty::int()));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    match Prelude::load(&path) {
        Err(PreludeError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_invalid_toml() {
    let err = Prelude::from_toml_str("[values\nid = 1").unwrap_err();
    assert!(matches!(err, PreludeError::Toml(_)));
}

#[test]
fn test_non_string_signature_is_rejected() {
    let err = Prelude::from_toml_str("[values]\nid = 1").unwrap_err();
    assert!(matches!(err, PreludeError::Toml(_)));
}

#[test]
fn test_signature_error_is_reported_with_its_name() {
    let prelude = Prelude::from_toml_str(
        r#"
        [values]
        fine = "Int"
        leaky = "forall a. a -> b"
        "#,
    )
    .unwrap();
    match prelude.to_env() {
        Err(PreludeError::Signature { name, source }) => {
            assert_eq!(name, "leaky");
            assert_eq!(
                source,
                SignatureError::UnboundTypeVariable { name: "b".into() }
            );
        }
        other => panic!("expected Signature error, got {other:?}"),
    }
}

#[test]
fn test_prelude_extends_builtins() {
    let prelude = Prelude::from_toml_str("[values]\nlength = \"String -> Int\"").unwrap();
    let env = prelude.extend_env(&default_env()).unwrap();
    let expr = Expr::app(
        Expr::var("length"),
        Expr::apply(Expr::var("show"), [Expr::int(1)]),
    );
    assert_eq!(infer_type(&expr, &env), Ok(Ty::int()));
}

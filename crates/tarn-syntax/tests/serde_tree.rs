//! Trees arriving as JSON from an external front end.

use tarn_syntax::{Binding, Expr, Ident, Lit, Pat, Span};

// ── Helpers ────────────────────────────────────────────────────────────

fn from_json(src: &str) -> Expr {
    serde_json::from_str(src).expect("valid expression JSON")
}

// ── Deserialization ────────────────────────────────────────────────────

#[test]
fn test_let_from_json_keeps_binding_order() {
    let expr = from_json(
        r#"{
            "Let": [
                {
                    "second": { "name": { "name": "second" }, "body": { "Lit": { "Int": 2 } } },
                    "first": {
                        "name": { "name": "first", "span": { "start": 4, "end": 9 } },
                        "params": [ { "Var": { "name": "x" } } ],
                        "body": { "Var": { "name": "x" } }
                    }
                },
                { "App": [ { "Var": { "name": "first" } }, { "Lit": "Unit" } ] }
            ]
        }"#,
    );

    let Expr::Let(bindings, body) = &expr else {
        panic!("expected let, got {expr:?}");
    };
    let names: Vec<&str> = bindings.keys().map(String::as_str).collect();
    assert_eq!(names, ["second", "first"]);

    let first = &bindings["first"];
    assert_eq!(first.name.span, Some(Span::new(4, 9)));
    assert_eq!(first.params, vec![Pat::var("x")]);
    assert!(bindings["second"].params.is_empty());

    assert_eq!(
        **body,
        Expr::app(Expr::var("first"), Expr::Lit(Lit::Unit))
    );
}

#[test]
fn test_reserved_patterns_deserialize() {
    let expr = from_json(
        r#"{ "Abs": [ { "Con": [ { "name": "Just" }, [ "Wildcard" ] ] }, { "Lit": { "Float": 1.5 } } ] }"#,
    );
    assert_eq!(
        expr,
        Expr::abs(
            Pat::Con(Ident::new("Just"), vec![Pat::Wildcard]),
            Expr::float(1.5)
        )
    );
}

// ── Serialization ──────────────────────────────────────────────────────

#[test]
fn test_round_trip_through_json() {
    let expr = Expr::let_in(
        [Binding::new("id", ["x"], Expr::var("x"))],
        Expr::apply(Expr::var("id"), [Expr::string("hello")]),
    );
    let json = serde_json::to_string(&expr).expect("serializable");
    assert!(!json.contains("span"), "absent spans are omitted: {json}");
    assert_eq!(from_json(&json), expr);
}

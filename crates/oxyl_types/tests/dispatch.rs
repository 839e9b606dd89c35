use oxyl_syntax::Operator;
use oxyl_types::{Expr, Kind, TypeError, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn value_of(kind: Kind) -> BoxedStrategy<Value> {
    match kind {
        Kind::Int => any::<i64>().prop_map(Value::Int).boxed(),
        Kind::Float => any::<f64>().prop_map(Value::Float).boxed(),
        Kind::Bool => any::<bool>().prop_map(Value::Bool).boxed(),
        Kind::None => Just(Value::None).boxed(),
    }
}

/// 所有 (左类型, 运算符, 右类型) 中通过检查阶段的组合
fn legal_triples() -> Vec<(Kind, Operator, Kind)> {
    let mut triples = Vec::new();
    for lhs in Kind::ALL {
        for op in Operator::ALL {
            if let Ok(rhs_kinds) = lhs.legal_operands(op) {
                for rhs in rhs_kinds {
                    triples.push((lhs, op, rhs));
                }
            }
        }
    }
    triples
}

fn legal_case() -> impl Strategy<Value = (Operator, Kind, Value, Value)> {
    proptest::sample::select(legal_triples()).prop_flat_map(|(lhs, op, rhs)| {
        (Just(op), Just(lhs.check_operands(op, rhs).unwrap()), value_of(lhs), value_of(rhs))
    })
}

#[test]
fn test_two_phase_protocol() {
    let (left, right) = (Value::Int(1), Value::Float(2.0));

    let legal = left.kind().legal_operands(Operator::Plus).unwrap();
    assert!(legal.contains(&right.kind()));

    let result = left
        .kind()
        .executor(Operator::Plus)
        .unwrap()
        .apply(&left, &right)
        .unwrap();
    assert_eq!(result, Value::Float(3.0));
    assert_eq!(result.kind(), Kind::Float);
}

#[test]
fn test_illegal_pair_fails_check() {
    let err = Kind::Float
        .check_operands(Operator::Plus, Kind::Bool)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "operator '+' cannot be applied to types Float and Bool"
    );
}

#[test]
fn test_every_kind_has_rules_table() {
    for kind in Kind::ALL {
        assert_eq!(kind.rules().name(), kind.name());
    }
    assert!(legal_triples().iter().all(|(lhs, _, _)| *lhs != Kind::None));
}

#[test]
fn test_same_kind_arithmetic_preserves_kind() {
    for op in [Operator::Plus, Operator::Dash, Operator::Star, Operator::Slash] {
        assert_eq!(Kind::Int.check_operands(op, Kind::Int), Ok(Kind::Int));
        assert_eq!(Kind::Float.check_operands(op, Kind::Float), Ok(Kind::Float));
        assert_eq!(Kind::Int.check_operands(op, Kind::Float), Ok(Kind::Float));
        assert_eq!(Kind::Float.check_operands(op, Kind::Int), Ok(Kind::Float));
    }
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4i64)
        .map(|i| {
            std::thread::spawn(move || {
                let expr = Expr::binary(Operator::Star, Expr::literal(i), Expr::literal(2.0));
                expr.evaluate()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(Value::Float(i as f64 * 2.0)));
    }
}

proptest! {
    #[test]
    fn executor_agrees_with_check((op, result_kind, left, right) in legal_case()) {
        let executor = left.kind().executor(op).unwrap();
        match executor.apply(&left, &right) {
            Ok(value) => prop_assert_eq!(value.kind(), result_kind),
            Err(TypeError::DivisionByZero { .. }) => {
                prop_assert!(right == Value::Int(0));
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn int_division_truncates_toward_zero(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        let expr = Expr::binary(Operator::Slash, Expr::literal(a), Expr::literal(b));
        prop_assert_eq!(expr.evaluate(), Ok(Value::Int(a.wrapping_div(b))));
    }

    #[test]
    fn int_float_addition_promotes(a in -1_000_000i64..1_000_000, b in -1.0e6f64..1.0e6) {
        let expr = Expr::binary(Operator::Plus, Expr::literal(a), Expr::literal(b));
        prop_assert_eq!(expr.evaluate(), Ok(Value::Float(a as f64 + b)));
    }
}

use abacus_eval::{evaluate, EvalError, OperationLookup, OperationRegistry, Side};
use proptest::prelude::*;

fn eval(line: &str) -> Result<f64, EvalError> {
    evaluate(line, &OperationRegistry::new())
}

// 有限操作数；Display 输出可被原样解析回同一个 f64
fn finite() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("operand must be finite", |x| x.is_finite())
}

fn nonzero() -> impl Strategy<Value = f64> {
    finite().prop_filter("divisor must be non-zero", |x| *x != 0.0)
}

fn operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["+", "-", "*", "/", "^"])
}

proptest! {
    #[test]
    fn add_matches_native(a in finite(), b in finite()) {
        prop_assert_eq!(eval(&format!("{} + {}", a, b)).unwrap(), a + b);
    }

    #[test]
    fn sub_matches_native(a in finite(), b in finite()) {
        prop_assert_eq!(eval(&format!("{} - {}", a, b)).unwrap(), a - b);
    }

    #[test]
    fn mul_matches_native(a in finite(), b in finite()) {
        prop_assert_eq!(eval(&format!("{} * {}", a, b)).unwrap(), a * b);
    }

    #[test]
    fn div_matches_native(a in finite(), b in nonzero()) {
        prop_assert_eq!(eval(&format!("{} / {}", a, b)).unwrap(), a / b);
    }

    #[test]
    fn evaluation_is_idempotent(a in finite(), op in operator(), b in finite()) {
        let line = format!("{} {} {}", a, op, b);
        let registry = OperationRegistry::new();
        let first = evaluate(&line, &registry).unwrap();
        let second = evaluate(&line, &registry).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}

#[test]
fn test_reference_expressions() {
    assert_eq!(eval("1 + 2").unwrap(), 3.0);
    assert_eq!(eval("2 * 4").unwrap(), 8.0);
    assert_eq!(eval("2 ^ 4").unwrap(), 16.0);
    assert_eq!(eval("1 / 4").unwrap(), 0.25);
    assert_eq!(eval("1E5 + 1").unwrap(), 100001.0);
    assert_eq!(eval("  10 - 4  ").unwrap(), 6.0);
}

#[test]
fn test_division_by_zero_follows_ieee() {
    assert_eq!(eval("1 / 0").unwrap(), f64::INFINITY);
    assert_eq!(eval("-1 / 0").unwrap(), f64::NEG_INFINITY);
    assert!(eval("0 / 0").unwrap().is_nan());
}

#[test]
fn test_infinite_operands_are_accepted() {
    assert_eq!(eval("inf - 1").unwrap(), f64::INFINITY);
    assert_eq!(eval("1 + -infinity").unwrap(), f64::NEG_INFINITY);
}

#[test]
fn test_unknown_tokens() {
    let registry = OperationRegistry::new();

    for token in ["%", "x", "//", "**", "plus"] {
        assert!(registry.lookup(token).is_none());
        match evaluate(&format!("1 {} 2", token), &registry) {
            Err(EvalError::UnknownOperator { token: t, .. }) => assert_eq!(t, token),
            other => panic!("expected UnknownOperator for '{}', got {:?}", token, other),
        }
    }
}

#[test]
fn test_empty_input_is_malformed() {
    assert!(matches!(
        eval(""),
        Err(EvalError::MalformedExpression { parts: 0, .. })
    ));
    assert!(matches!(
        eval("\t  "),
        Err(EvalError::MalformedExpression { parts: 0, .. })
    ));
}

#[test]
fn test_invalid_operand_identifies_side() {
    assert!(matches!(
        eval("one + 2"),
        Err(EvalError::InvalidOperand { side: Side::Left, .. })
    ));
    assert!(matches!(
        eval("1 + two"),
        Err(EvalError::InvalidOperand { side: Side::Right, .. })
    ));
    // 第二个空格之后的内容全部属于右操作数
    assert!(matches!(
        eval("1 + 2 3"),
        Err(EvalError::InvalidOperand { side: Side::Right, .. })
    ));
    assert!(matches!(
        eval("NaN + 1"),
        Err(EvalError::InvalidOperand { side: Side::Left, .. })
    ));
}

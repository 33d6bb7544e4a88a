use std::cell::Cell;

use pretty_assertions::assert_eq;

use super::*;
use crate::{Decimal, Value, ValueKind};

#[test]
fn predicate_case_tests_and_applies() {
    let c = case(|v: &i32| *v > 10, |v| v * 2);
    assert!(c.test(&11));
    assert!(!c.test(&10));
    assert_eq!(c.apply(&21), 42);
    assert!(!c.is_default());
}

#[test]
fn default_case_never_tests_true() {
    let c: Case<'_, i32, &str> = otherwise(|| "fallback");
    assert!(!c.test(&0));
    assert!(!c.test(&i32::MAX));
    assert!(c.is_default());
}

#[test]
fn default_case_ignores_value() {
    let c: Case<'_, i32, &str> = otherwise(|| "fallback");
    assert_eq!(c.apply(&1), "fallback");
    assert_eq!(c.apply(&2), "fallback");
}

#[test]
fn default_producer_runs_on_each_apply() {
    let calls = Cell::new(0);
    let c: Case<'_, (), u32> = otherwise(|| {
        calls.set(calls.get() + 1);
        calls.get()
    });
    assert_eq!(c.apply(&()), 1);
    assert_eq!(c.apply(&()), 2);
}

#[test]
fn is_matches_exact_kind() {
    let c = is(ValueKind::Int, |_: &Value| "int");
    assert!(c.test(&Value::Int(5)));
    assert!(!c.test(&Value::Float(5.0)));
    assert!(!c.test(&Value::from(Decimal::from(5))));
    assert!(!c.test(&Value::Void));
}

#[test]
fn is_distinguishes_every_kind() {
    let values = [
        Value::Int(1),
        Value::Float(1.0),
        Value::Bool(true),
        Value::Char('1'),
        Value::from("1"),
        Value::from(Decimal::one()),
        Value::List(vec![Value::Int(1)]),
        Value::Void,
    ];
    for probe in &values {
        let c = is(probe.kind(), |_: &Value| ());
        let hits = values.iter().filter(|v| c.test(v)).count();
        assert_eq!(hits, 1, "kind {} matched more than itself", probe.kind());
    }
}

#[test]
fn custom_tagged_type() {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum ShapeKind {
        Circle,
        Square,
    }

    enum Shape {
        Circle(f64),
        Square(f64),
    }

    impl Tagged for Shape {
        type Tag = ShapeKind;

        fn tag(&self) -> ShapeKind {
            match self {
                Shape::Circle(_) => ShapeKind::Circle,
                Shape::Square(_) => ShapeKind::Square,
            }
        }
    }

    let width = |s: &Shape| match s {
        Shape::Square(side) => *side,
        Shape::Circle(radius) => *radius * 2.0,
    };
    let c = is(ShapeKind::Square, width);
    assert!(c.test(&Shape::Square(2.0)));
    assert!(!c.test(&Shape::Circle(2.0)));
    assert_eq!(c.apply(&Shape::Square(2.0)).to_bits(), 2.0_f64.to_bits());
    assert_eq!(width(&Shape::Circle(1.5)).to_bits(), 3.0_f64.to_bits());
}

#[test]
fn when_and_fallback_constructors() {
    let p: Case<'_, str, usize> = Case::when(|s: &str| s.is_empty(), str::len);
    assert!(p.test(""));
    assert_eq!(p.apply("abc"), 3);

    let d: Case<'_, str, usize> = Case::fallback(|| 7);
    assert!(d.is_default());
    assert_eq!(d.apply("ignored"), 7);
}

#[test]
fn references_forward_to_case() {
    let c = case(|v: &u8| *v == 1, |_| 'y');
    let r = &c;
    assert!(r.test(&1));
    assert_eq!(r.apply(&1), 'y');
    assert!(!r.is_default());
}

#[test]
fn debug_names_variant() {
    let p = case(|_: &i32| true, |_| ());
    let d: Case<'_, i32, ()> = otherwise(|| ());
    assert_eq!(format!("{p:?}"), "Case::Predicate");
    assert_eq!(format!("{d:?}"), "Case::Default");
}

#[test]
fn cases_can_borrow_locals() {
    let threshold = 3;
    let label = String::from("big");
    let c = case(|v: &i32| *v > threshold, |_| label.as_str());
    assert_eq!(c.apply(&4), "big");
    assert!(!c.test(&3));
}

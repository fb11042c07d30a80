use outcome_rail::{Context, Outcome};

#[test]
fn success_carries_value_and_empty_context() {
    let outcome = Outcome::success(42);

    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert_eq!(outcome.value(), Some(&42));
    assert!(outcome.context().is_empty());
}

#[test]
fn success_with_keeps_explicit_context() {
    let outcome = Outcome::success_with("payload", Context::new("cache hit").with_param("age", 12));

    assert!(outcome.is_success());
    assert_eq!(outcome.context().message(), "cache hit");
    assert_eq!(outcome.context().param_count(), 1);
}

#[test]
fn failure_has_no_value_by_default() {
    let outcome: Outcome<i32> = Outcome::failure("lookup failed");

    assert!(outcome.is_failure());
    assert_eq!(outcome.value(), None);
    assert_eq!(outcome.context().message(), "lookup failed");
}

#[test]
fn failure_keeps_the_exact_context_it_was_given() {
    let context = Context::new("quota exceeded").with_param("limit", 10);
    let outcome: Outcome<i32> = Outcome::failure(context.clone());

    assert_eq!(outcome.context(), &context);
}

#[test]
fn failure_with_keeps_partial_value() {
    let outcome = Outcome::failure_with("checksum mismatch", vec![1u8, 2, 3]);

    assert!(outcome.is_failure());
    assert_eq!(outcome.value(), Some(&vec![1u8, 2, 3]));
    assert_eq!(outcome.context().message(), "checksum mismatch");
}

#[test]
fn failure_partial_value_is_distinct_from_absent() {
    let with_zero = Outcome::failure_with("ran out", 0);
    let without: Outcome<i32> = Outcome::failure("ran out");

    assert_eq!(with_zero.value(), Some(&0));
    assert_eq!(without.value(), None);
    assert_ne!(with_zero, without);
}

#[test]
fn into_parts_mirrors_accessors() {
    let (value, context) = Outcome::success_with(7, Context::new("step")).into_parts();
    assert_eq!(value, Some(7));
    assert_eq!(context.message(), "step");

    let (value, context) = Outcome::<i32>::failure("gone").into_parts();
    assert_eq!(value, None);
    assert_eq!(context.message(), "gone");
}

#[test]
fn into_value_and_into_context_consume() {
    assert_eq!(Outcome::success(9).into_value(), Some(9));
    assert_eq!(Outcome::<i32>::failure("x").into_value(), None);
    assert_eq!(Outcome::success(9).into_context(), Context::EMPTY);
    assert_eq!(
        Outcome::<i32>::failure("x").into_context(),
        Context::new("x")
    );
}

#[test]
fn map_transforms_success_value_only() {
    let mapped = Outcome::success(21).map(|n| n * 2);
    assert_eq!(mapped.value(), Some(&42));

    let failed = Outcome::<i32>::failure(Context::new("bad")).map(|n| n * 2);
    assert!(failed.is_failure());
    assert_eq!(failed.context().message(), "bad");
}

#[test]
fn map_touches_partial_failure_value() {
    let failed = Outcome::failure_with("partial parse", 3).map(|n| n + 1);

    assert!(failed.is_failure());
    assert_eq!(failed.value(), Some(&4));
    assert_eq!(failed.context().message(), "partial parse");
}

#[test]
fn or_else_recovers_failures_and_skips_successes() {
    let recovered = Outcome::<i32>::failure("missing").or_else(|_| Outcome::success(0));
    assert_eq!(recovered.value(), Some(&0));

    let mut called = false;
    let untouched = Outcome::success(5).or_else(|failed| {
        called = true;
        failed
    });
    assert_eq!(untouched.value(), Some(&5));
    assert!(!called, "or_else handler must not run on success");
}

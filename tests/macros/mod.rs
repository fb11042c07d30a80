use outcome_rail::{context, failure, Context, Outcome, ParamValue};

#[test]
fn context_macro_with_plain_message() {
    let ctx = context!("cache miss");

    assert_eq!(ctx, Context::new("cache miss"));
}

#[test]
fn context_macro_formats_arguments() {
    let shard = 12;
    let ctx = context!("shard {} unavailable after {} tries", shard, 3);

    assert_eq!(ctx.message(), "shard 12 unavailable after 3 tries");
    assert_eq!(ctx.param_count(), 0);
}

#[test]
fn context_macro_with_inline_capture() {
    let user = "ada";
    let ctx = context!("no such user {user}");

    assert_eq!(ctx.message(), "no such user ada");
}

#[test]
fn context_macro_attaches_params_after_semicolon() {
    let ctx = context!("timeout after {} ms", 250; "endpoint" => "billing", "attempts" => 3);

    assert_eq!(ctx.message(), "timeout after 250 ms");
    assert_eq!(ctx.param("endpoint"), Some(&ParamValue::Str("billing".to_string())));
    assert_eq!(ctx.param("attempts"), Some(&ParamValue::Int(3)));
}

#[test]
fn context_macro_params_without_format_arguments() {
    let ctx = context!("degraded"; "replicas" => 1, "healthy" => false);

    assert_eq!(ctx.message(), "degraded");
    assert_eq!(ctx.param("healthy"), Some(&ParamValue::Bool(false)));
}

#[test]
fn context_macro_accepts_trailing_comma_in_params() {
    let ctx = context!("m"; "a" => 1, "b" => 2,);

    assert_eq!(ctx.param_count(), 2);
}

#[test]
fn failure_macro_builds_failed_outcome() {
    let failed: Outcome<i32> = failure!("shard {} offline", 7);

    assert!(failed.is_failure());
    assert_eq!(failed.value(), None);
    assert_eq!(failed.context().message(), "shard 7 offline");
}

#[test]
fn failure_macro_accepts_params() {
    let failed: Outcome<String> = failure!("rate limited"; "retry_after_s" => 30);

    assert!(failed.is_failure());
    assert_eq!(
        failed.context().param("retry_after_s"),
        Some(&ParamValue::Int(30))
    );
}

#[test]
fn macro_contexts_flow_through_pipelines() {
    let outcome = Outcome::success(2)
        .then(|n| {
            if n > 1 {
                failure!("value {} too large", n; "limit" => 1)
            } else {
                Outcome::success(n)
            }
        })
        .then(|n: i32| Outcome::success(n + 1));

    assert!(outcome.is_failure());
    assert_eq!(outcome.context().message(), "value 2 too large");
    assert_eq!(outcome.context().param("limit"), Some(&ParamValue::Int(1)));
}

//! Call instrumentation tests: transparency, passthrough, summary caps.

use dotlog::debug::{
    ARG_SUMMARY_MARKER, TracerConfig, global, instrument, time_it, truncate_summary,
};
use dotlog::foundation::Value;

fn setup() {
    global::configure(TracerConfig::new().enabled().silent());
}

#[test]
fn argument_summary_cap() {
    // 250 chars cut to 200 plus marker; 150 chars left unchanged.
    let long = truncate_summary("x".repeat(250));
    assert_eq!(long.chars().count(), 200 + ARG_SUMMARY_MARKER.len());
    assert!(long.ends_with(ARG_SUMMARY_MARKER));

    let short = truncate_summary("x".repeat(150));
    assert_eq!(short.chars().count(), 150);
}

#[test]
fn instrumented_callable_is_transparent_to_errors() {
    setup();
    #[derive(Debug, PartialEq)]
    enum AppError {
        Invalid(&'static str),
    }

    let mut parse = instrument("parse", |_args: &[Value]| -> Result<Value, AppError> {
        Err(AppError::Invalid("bad input"))
    });
    // Same kind, same payload, surfaced to the caller.
    assert_eq!(parse(&[Value::Nil]), Err(AppError::Invalid("bad input")));
}

#[test]
fn instrumented_callable_returns_value_unchanged() {
    setup();
    let payload = Value::map([
        (Value::from("k"), Value::Int(1)),
        (Value::from("l"), Value::Int(2)),
    ]);
    let expected = payload.clone();
    let mut produce = instrument("produce", move |_: &[Value]| -> Result<Value, String> {
        Ok(payload.clone())
    });
    assert_eq!(produce(&[]), Ok(expected));
}

#[test]
fn call_message_includes_name_and_arguments() {
    setup();
    let mut add = instrument("add", |args: &[Value]| -> Result<Value, String> {
        match (&args[0], &args[1]) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
            _ => Err("expected ints".to_string()),
        }
    });
    assert_eq!(add(&[Value::Int(2), Value::Int(3)]), Ok(Value::Int(5)));

    let joined = global::take_lines().join("\n");
    assert!(joined.contains("call add(2, 3)"));
    assert!(joined.contains("return add -> Int:\n"));
    assert!(joined.contains('5'));
}

#[test]
fn return_message_carries_the_type_tag_and_formatted_content() {
    setup();
    let mut listify = instrument("listify", |_: &[Value]| -> Result<Value, String> {
        Ok(Value::list([Value::Int(1), Value::Int(2), Value::Int(3)]))
    });
    let _ = listify(&[]);

    let joined = global::take_lines().join("\n");
    assert!(joined.contains("return listify -> List:"));
    assert!(joined.contains("[\n  1,\n  2,\n  3\n]"));
}

#[test]
fn nested_instrumented_calls_indent_inward() {
    setup();
    let mut inner = instrument("inner", |_: &[Value]| -> Result<Value, String> {
        Ok(Value::Int(1))
    });
    let mut outer = instrument("outer", move |args: &[Value]| -> Result<Value, String> {
        inner(args)
    });
    let _ = outer(&[]);

    let lines = global::take_lines();
    let inner_call = lines
        .iter()
        .find(|l| l.contains("call inner"))
        .cloned()
        .unwrap_or_default();
    let outer_call = lines
        .iter()
        .find(|l| l.contains("call outer"))
        .cloned()
        .unwrap_or_default();
    assert!(inner_call.starts_with(".."));
    assert!(!outer_call.starts_with(".."));
}

#[test]
fn time_it_emits_elapsed_seconds() {
    global::configure(TracerConfig::new().enabled().silent());
    let mut slow = time_it("slow", |_: &[Value]| -> Result<Value, String> {
        std::thread::sleep(std::time::Duration::from_millis(5));
        Ok(Value::Nil)
    });
    assert_eq!(slow(&[]), Ok(Value::Nil));

    let lines = global::take_lines();
    let timing = lines
        .iter()
        .find(|l| l.starts_with("slow took "))
        .cloned()
        .unwrap_or_default();
    assert!(timing.ends_with('s'));
}

#[test]
fn time_it_does_not_alter_errors() {
    global::configure(TracerConfig::new().silent());
    let mut failing = time_it("failing", |_: &[Value]| -> Result<Value, i32> { Err(-1) });
    assert_eq!(failing(&[]), Err(-1));
}

//! Trace emission tests: headers, suppression, depth, type discovery.

use dotlog::debug::{
    CallSite, INDENT_STEP, Tracer, TracerConfig, WARNING_PREFIX, dotlog, global, trace_scope,
};
use proptest::prelude::*;

fn silent() -> Tracer {
    Tracer::new(TracerConfig::new().enabled().silent())
}

fn site(line: u32) -> CallSite {
    CallSite::new("src/demo.rs", "demo", "work", line)
}

#[test]
fn header_then_message_on_first_emission() {
    let mut tracer = silent();
    tracer.emit(&site(7), "hello");
    let lines = tracer.take_lines();
    assert_eq!(lines, vec!["src/demo.rs [demo.work:7]", "[7]hello"]);
}

#[test]
fn consecutive_same_depth_emissions_print_one_header() {
    let mut tracer = silent();
    tracer.emit(&site(7), "one");
    tracer.emit(&site(8), "two");
    tracer.emit(&site(9), "three");
    let lines = tracer.take_lines();
    let headers = lines.iter().filter(|l| l.contains("src/demo.rs [")).count();
    assert_eq!(headers, 1);
    assert_eq!(lines.len(), 4);
}

#[test]
fn returning_to_a_previous_depth_reprints_the_header() {
    let mut tracer = silent();
    tracer.emit(&site(1), "outer");
    tracer.enter(None);
    tracer.emit(&site(2), "inner");
    tracer.exit();
    tracer.emit(&site(3), "outer");
    let lines = tracer.take_lines();
    let headers = lines.iter().filter(|l| l.contains("src/demo.rs [")).count();
    assert_eq!(headers, 3);
}

#[test]
fn disabled_tracer_has_no_side_effects() {
    let mut tracer = Tracer::disabled();
    tracer.emit(&site(1), "ignored");
    tracer.emit_warning("also ignored");
    assert!(tracer.buffer().is_empty());
    assert_eq!(tracer.last_indent(), None);
}

#[test]
fn emit_warning_is_indented_and_prefixed() {
    let mut tracer = silent();
    tracer.enter(None);
    tracer.emit_warning("something odd");
    let lines = tracer.take_lines();
    assert_eq!(lines, vec![format!("..{WARNING_PREFIX} something odd")]);
}

#[test]
fn macro_emission_captures_the_test_function() {
    global::configure(TracerConfig::new().enabled().silent());
    dotlog!("x = {}", 41 + 1);
    let lines = global::take_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("emit.rs ["));
    assert!(lines[0].contains("macro_emission_captures_the_test_function"));
    assert!(lines[1].ends_with("]x = 42"));
}

#[test]
fn receiver_type_shows_in_macro_header() {
    struct Engine;
    impl Engine {
        fn run(&self) {
            dotlog!(self; "running");
        }
    }
    global::configure(TracerConfig::new().enabled().silent());
    Engine.run();
    let lines = global::take_lines();
    assert!(lines[0].contains("[Engine."));
}

#[test]
fn scope_type_is_discovered_by_nested_untyped_emissions() {
    struct Pipeline;
    global::configure(TracerConfig::new().enabled().silent());
    let pipeline = Pipeline;
    let _scope = trace_scope!(pipeline);
    dotlog!("step");
    let lines = global::take_lines();
    assert!(lines[0].starts_with(INDENT_STEP));
    assert!(lines[0].contains("[Pipeline."));
}

#[test]
fn scope_guard_restores_depth_on_drop() {
    global::configure(TracerConfig::new().enabled().silent());
    {
        let _scope = trace_scope!();
        assert_eq!(global::with(|t| t.depth()), 1);
    }
    assert_eq!(global::with(|t| t.depth()), 0);
}

proptest! {
    #[test]
    fn indent_length_is_monotonic_in_depth(levels in 1usize..8) {
        // Strictly nested scopes: the leading dots of each emitted message
        // line never shrink as depth grows, two per level.
        let mut tracer = silent();
        for i in 0..levels {
            tracer.emit(&site(u32::try_from(i).unwrap_or(0)), "msg");
            tracer.enter(None);
        }
        let lines = tracer.take_lines();
        let mut last_dots = 0;
        for line in lines.iter().filter(|l| l.ends_with("msg")) {
            let dots = line.chars().take_while(|c| *c == '.').count();
            prop_assert!(dots >= last_dots);
            prop_assert_eq!(dots % INDENT_STEP.len(), 0);
            last_dots = dots;
        }
        prop_assert_eq!(last_dots, (levels - 1) * INDENT_STEP.len());
    }

    #[test]
    fn header_count_is_one_for_any_run_of_same_depth_emissions(n in 1usize..20) {
        let mut tracer = silent();
        for i in 0..n {
            tracer.emit(&site(u32::try_from(i).unwrap_or(0)), "msg");
        }
        let lines = tracer.take_lines();
        let headers = lines.iter().filter(|l| l.contains("src/demo.rs [")).count();
        prop_assert_eq!(headers, 1);
        prop_assert_eq!(lines.len(), n + 1);
    }
}

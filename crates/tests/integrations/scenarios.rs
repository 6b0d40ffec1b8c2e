use logger::{ConfigurationError, LogLevel};
use tests::capturing_factory;

#[test]
fn every_label_in_any_casing_builds_a_logger() {
    let (factory, _) = capturing_factory();
    for level in LogLevel::VALUES {
        let label = level.as_str();
        let mixed: String = label
            .chars()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.to_ascii_lowercase() } else { c })
            .collect();
        for input in [label.to_lowercase(), label.to_string(), mixed] {
            assert!(factory.create_logger(&input).is_ok(), "{input}");
        }
    }
}

#[test]
fn rejected_input_is_echoed_upper_case() {
    let (factory, _) = capturing_factory();
    let err = factory.create_logger("Verbose").unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidLevel(_)));
    assert_eq!(
        err.to_string(),
        "The log level 'VERBOSE' specified in config is not an acceptable log level."
    );
}

#[test]
fn debug_level_info_record_is_plain() {
    let (factory, output) = capturing_factory();
    let logger = factory.create_logger("debug").unwrap();

    logger.info("connected to 10.0.0.1");

    assert_eq!(output.contents(), "[INFO ] connected to 10.0.0.1\n");
}

#[test]
fn trace_level_warn_record_has_location_before_tab() {
    let (factory, output) = capturing_factory();
    let logger = factory.create_logger("TRACE").unwrap();

    logger.warn("queue is 90% full");

    let lines = output.lines();
    assert_eq!(lines.len(), 1);
    let (prefix, message) = lines[0].split_once('\t').unwrap();
    assert_eq!(message, "queue is 90% full");
    assert!(prefix.starts_with("[WARN "));
    assert!(prefix.ends_with(']'));

    let location = prefix.trim_start_matches("[WARN ").trim_end_matches(']').trim();
    let (file, line) = location.rsplit_once(':').unwrap();
    assert!(file.ends_with("scenarios.rs"), "{file}");
    assert!(line.parse::<u32>().is_ok(), "{line}");
}

#[test]
fn only_trace_and_all_annotate_records() {
    for level in LogLevel::VALUES.into_iter().filter(|l| *l != LogLevel::OFF) {
        let (factory, output) = capturing_factory();
        let logger = factory.create_logger(level.as_str()).unwrap();

        logger.mark("m");

        let line = output.contents();
        let annotated = line.contains('\t') && line.contains("scenarios.rs:");
        assert_eq!(annotated, level.wants_source_location(), "{level}: {line:?}");
    }
}

#[test]
fn warn_threshold_suppresses_info_and_debug() {
    let (factory, output) = capturing_factory();
    let logger = factory.create_logger("WARN").unwrap();

    logger.debug("d");
    logger.info("i");
    logger.warn("w");
    logger.error("e");
    logger.fatal("f");

    assert_eq!(output.lines(), ["[WARN ] w", "[ERROR] e", "[FATAL] f"]);
}

#[test]
fn later_call_overrides_threshold_of_earlier_handles() {
    let (factory, output) = capturing_factory();
    let info = factory.create_logger("INFO").unwrap();
    let error = factory.create_logger("ERROR").unwrap();

    info.warn("dropped");
    error.warn("dropped");
    info.error("kept");

    assert_eq!(info.level(), Some(LogLevel::ERROR));
    assert_eq!(output.lines(), ["[ERROR] kept"]);
}

#[test]
fn switching_to_trace_changes_layout_for_new_handles_only() {
    let (factory, output) = capturing_factory();
    let plain = factory.create_logger("info").unwrap();
    let trace = factory.create_logger("all").unwrap();

    plain.info("plain");
    trace.info("annotated");

    let lines = output.lines();
    assert_eq!(lines[0], "[INFO ] plain");
    assert!(lines[1].starts_with("[INFO  ") && lines[1].ends_with("\tannotated"));
}

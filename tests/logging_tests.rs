use ctxlog::prelude::*;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::level_filters::LevelFilter;

// Collects everything a subscriber writes so tests can inspect it.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn output(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn with_text_subscriber(f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.output()
}

fn with_json_subscriber(f: impl FnOnce()) -> Vec<serde_json::Value> {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(Level::TRACE)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture
        .output()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn handle_request(ctx: &Context) {
    let ctx = ctxlog::with_field(ctx, "user", "alice");
    charge_card(&ctx, 42);
}

fn charge_card(ctx: &Context, cents: u64) {
    ctxlog::with(ctx).with_field("cents", cents).info("charging card");
}

#[test]
fn test_fields_reach_deep_log_statements() {
    let output = with_text_subscriber(|| {
        let ctx = ctxlog::with_field(&Context::background(), "request_id", "r-1");
        handle_request(&ctx);
    });

    assert!(output.contains("INFO"));
    assert!(output.contains("charging card"));
    assert!(output.contains(r#"cents=42 request_id="r-1" user="alice""#));
}

#[test]
fn test_json_output_carries_fields() {
    let events = with_json_subscriber(|| {
        let ctx = ctxlog::with_fields(
            &Context::background(),
            [("request_id", json!("r-1")), ("attempt", json!(2))],
        );
        ctxlog::with(&ctx).warn("retrying");
    });

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event["level"], json!("WARN"));
    assert_eq!(event["target"], json!("ctxlog"));
    assert_eq!(event["fields"]["message"], json!("retrying"));
    assert_eq!(event["fields"]["logger"], json!("ctxlog"));
    assert_eq!(event["fields"]["fields"], json!(r#"attempt=2 request_id="r-1""#));
}

#[test]
fn test_every_level_is_emitted() {
    let events = with_json_subscriber(|| {
        let entry = ctxlog::with(&Context::background());
        entry.trace("t");
        entry.debug("d");
        entry.info("i");
        entry.warn("w");
        entry.error("e");
    });

    let levels: Vec<_> = events.iter().map(|e| e["level"].clone()).collect();
    assert_eq!(
        levels,
        vec![
            json!("TRACE"),
            json!("DEBUG"),
            json!("INFO"),
            json!("WARN"),
            json!("ERROR")
        ]
    );
}

#[test]
fn test_logger_level_filters_before_subscriber() {
    let events = with_json_subscriber(|| {
        let logger = LoggerBuilder::new()
            .name("audit")
            .level("warn")
            .build()
            .unwrap();
        let ctx = ctxlog::set(&Context::background(), Entry::new(Arc::new(logger)));
        let ctx = ctxlog::with_field(&ctx, "user", "alice");

        ctxlog::with(&ctx).info("dropped");
        ctxlog::with(&ctx).log(Level::ERROR, "kept");
    });

    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["fields"]["message"], json!("kept"));
    assert_eq!(events[0]["fields"]["logger"], json!("audit"));
}

#[test]
fn test_off_logger_emits_nothing() {
    let output = with_text_subscriber(|| {
        let entry = Entry::new(Arc::new(Logger::new("quiet", LevelFilter::OFF)));
        entry.error("never seen");
    });
    assert!(output.is_empty());
}

#[test]
fn test_cleared_context_logs_without_old_fields() {
    let output = with_text_subscriber(|| {
        let ctx = ctxlog::with_field(&Context::background(), "secret", "s3cr3t");
        ctxlog::with(&ctxlog::clear(&ctx)).info("after clear");
    });

    assert!(output.contains("after clear"));
    assert!(!output.contains("s3cr3t"));
}

#[test]
fn test_span_carries_fields() {
    let output = with_text_subscriber(|| {
        let ctx = ctxlog::with_field(&Context::background(), "user", "alice");
        ctxlog::with(&ctx)
            .span()
            .in_scope(|| tracing::info!("inside span"));
    });

    assert!(output.contains("inside span"));
    assert!(output.contains(r#"user="alice""#));
}

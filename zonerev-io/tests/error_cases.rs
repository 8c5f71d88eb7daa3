//! Negative tests covering key `ReverseError` variants

use std::io::Cursor;
use zonerev_io::{reverse_stream, ReverseError, ReverseOptions, ZoneError};

fn reverse_err(input: &str) -> (ReverseError, Vec<u8>) {
    reverse_err_with(input, &ReverseOptions::default())
}

fn reverse_err_with(input: &str, options: &ReverseOptions) -> (ReverseError, Vec<u8>) {
    let mut out = Vec::new();
    let err = reverse_stream(Cursor::new(input), &mut out, options).expect_err("should fail");
    (err, out)
}

#[test]
fn malformed_json_is_fatal_without_output() {
    let (err, out) = reverse_err(r#"{"options": {"config": "#);
    assert!(matches!(err, ReverseError::JsonParse { .. }));
    assert!(out.is_empty());
}

#[test]
fn trailing_garbage_is_rejected() {
    let (err, _) = reverse_err(r#"{"options": {}} extra"#);
    assert!(matches!(err, ReverseError::JsonParse { .. }));
}

#[test]
fn missing_options_is_fatal() {
    let (err, out) = reverse_err(r#"{"module_name": "zone"}"#);
    match err {
        ReverseError::PointerNotFound {
            pointer,
            reached_path,
            available_keys,
        } => {
            assert_eq!(pointer, "/options/config");
            assert_eq!(reached_path, "/options");
            assert_eq!(available_keys, "module_name");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(out.is_empty());
}

#[test]
fn missing_config_is_fatal() {
    let (err, _) = reverse_err(r#"{"options": {"title": "zone"}}"#);
    assert!(matches!(err, ReverseError::PointerNotFound { .. }));
}

#[test]
fn config_must_be_an_object() {
    let (err, _) = reverse_err(r#"{"options": {"config": null}}"#);
    assert!(matches!(err, ReverseError::PointerTargetWrongType { .. }));
    assert!(err.to_string().contains("points to null"));
}

#[test]
fn missing_zone_path_is_fatal() {
    let (err, out) = reverse_err(r#"{"options": {"config": {"zone.finish_index": 1}}}"#);
    assert!(matches!(
        err,
        ReverseError::Zone(ZoneError::MissingField { field: "zone.path" })
    ));
    assert!(out.is_empty());
}

#[test]
fn missing_finish_index_is_fatal() {
    let (err, _) = reverse_err(r#"{"options": {"config": {"zone.path": [1, 2]}}}"#);
    assert!(matches!(
        err,
        ReverseError::Zone(ZoneError::MissingField {
            field: "zone.finish_index"
        })
    ));
}

#[test]
fn string_finish_index_is_a_type_error() {
    let (err, _) = reverse_err(
        r#"{"options": {"config": {"zone.path": [1, 2], "zone.finish_index": "1"}}}"#,
    );
    assert_eq!(
        err.to_string(),
        "Field 'zone.finish_index' has type string, expected integer"
    );
}

#[test]
fn path_must_be_an_array() {
    let (err, _) = reverse_err(
        r#"{"options": {"config": {"zone.path": "abc", "zone.finish_index": 1}}}"#,
    );
    assert!(matches!(
        err,
        ReverseError::Zone(ZoneError::TypeMismatch {
            field: "zone.path",
            expected: "array",
            found: "string",
        })
    ));
}

#[test]
fn invalid_pointer_is_rejected() {
    let options = ReverseOptions {
        config_pointer: "options/config".to_string(),
        ..ReverseOptions::default()
    };
    let (err, _) = reverse_err_with(r#"{"options": {"config": {}}}"#, &options);
    assert!(matches!(err, ReverseError::InvalidPointer { .. }));
}

#[test]
fn finish_index_overflow_is_fatal_without_output() {
    let (err, out) = reverse_err(
        r#"{"options": {"config": {"zone.path": [1, 2], "zone.finish_index": -9223372036854775808}}}"#,
    );
    assert!(matches!(
        err,
        ReverseError::Zone(ZoneError::FinishIndexOutOfRange {
            finish_index: i64::MIN,
            len: 2,
        })
    ));
    assert!(out.is_empty());
}

struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_is_an_io_error() {
    let input = r#"{"options": {"config": {"zone.path": [1, 2], "zone.finish_index": 1}}}"#;
    let err = reverse_stream(Cursor::new(input), BrokenPipe, &ReverseOptions::default())
        .expect_err("should fail");
    match err {
        ReverseError::Io(source) => assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error: {other:?}"),
    }
}

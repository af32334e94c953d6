use hitload_common::{is_error_code, Sample, TRANSPORT_ERROR_CODE};
use std::time::Duration;

#[test]
fn test_sample_new() {
    let s = Sample::new(Duration::from_millis(12), 200);
    assert_eq!(s.duration, Duration::from_millis(12));
    assert_eq!(s.code, 200);
}

#[test]
fn test_is_error_classification() {
    assert!(is_error_code(TRANSPORT_ERROR_CODE));
    assert!(is_error_code(500));
    assert!(is_error_code(503));
    assert!(!is_error_code(200));
    assert!(!is_error_code(404));
    assert!(!is_error_code(499));

    assert!(Sample::new(Duration::ZERO, TRANSPORT_ERROR_CODE).is_error());
    assert!(!Sample::new(Duration::ZERO, 301).is_error());
}

#[test]
fn test_sample_json_shape() {
    let s = Sample::new(Duration::new(1, 500), 201);
    let json = serde_json::to_value(s).unwrap();
    assert_eq!(json["code"], 201);
    assert_eq!(json["duration"]["secs"], 1);
    assert_eq!(json["duration"]["nanos"], 500);

    let decoded: Sample = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, s);
}

use hitload_runner::config::{RunConfig, DEFAULT_CONCURRENCY, DEFAULT_DURATION_SECS};
use std::time::Duration;

#[test]
fn test_default_config_is_valid() {
    let config = RunConfig::default();
    assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
    assert_eq!(config.duration, Some(Duration::from_secs(DEFAULT_DURATION_SECS)));
    assert!(config.requests.is_none());
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_request_budget_alone_is_valid() {
    let config = RunConfig { concurrency: 4, duration: None, requests: Some(100) };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_zero_concurrency_rejected() {
    let config = RunConfig { concurrency: 0, ..RunConfig::default() };
    assert_eq!(config.validate(), Err("concurrency must be at least 1".to_string()));
}

#[test]
fn test_unbounded_run_rejected() {
    let config = RunConfig { concurrency: 1, duration: None, requests: None };
    assert!(config.validate().is_err());
}

#[test]
fn test_zero_limits_rejected() {
    let zero_duration = RunConfig { concurrency: 1, duration: Some(Duration::ZERO), requests: None };
    assert_eq!(zero_duration.validate(), Err("duration must be greater than zero".to_string()));

    let zero_budget = RunConfig { concurrency: 1, duration: None, requests: Some(0) };
    assert_eq!(zero_budget.validate(), Err("request budget must be greater than zero".to_string()));
}

#[test]
fn test_duration_past_clock_range_rejected() {
    let config = RunConfig { concurrency: 1, duration: Some(Duration::from_secs(u64::MAX)), requests: Some(1) };
    assert_eq!(
        config.validate(),
        Err(format!("duration of {}s is too large", u64::MAX))
    );
}

#[test]
fn test_long_but_representable_duration_accepted() {
    // One year fits comfortably in the monotonic clock.
    let config = RunConfig { concurrency: 1, duration: Some(Duration::from_secs(365 * 24 * 3600)), requests: None };
    assert_eq!(config.validate(), Ok(()));
}

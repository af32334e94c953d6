use hitload_runner::targets::TargetSet;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;

fn three_targets() -> TargetSet {
    TargetSet::new(vec![
        "http://127.0.0.1:8080/a".to_string(),
        "http://127.0.0.1:8080/b".to_string(),
        "http://127.0.0.1:8080/c".to_string(),
    ])
    .unwrap()
}

#[test]
fn test_empty_target_list_rejected() {
    assert!(TargetSet::new(Vec::new()).is_none());
}

#[test]
fn test_url_for_roll_wraps() {
    let targets = three_targets();
    assert_eq!(targets.len(), 3);
    assert_eq!(targets.url_for_roll(0), "http://127.0.0.1:8080/a");
    assert_eq!(targets.url_for_roll(2), "http://127.0.0.1:8080/c");
    assert_eq!(targets.url_for_roll(3), "http://127.0.0.1:8080/a");
}

#[test]
fn test_single_target_always_picked() {
    let targets = TargetSet::new(vec!["http://localhost/".to_string()]).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        assert_eq!(targets.pick(&mut rng), "http://localhost/");
    }
}

#[test]
fn test_pick_covers_every_target() {
    let targets = three_targets();
    let mut rng = StdRng::seed_from_u64(42);

    let seen: HashSet<&str> = (0..200).map(|_| targets.pick(&mut rng)).collect();
    assert_eq!(seen.len(), 3, "some targets were never picked: {seen:?}");
    for url in &seen {
        assert!(targets.urls().iter().any(|u| u == url));
    }
}

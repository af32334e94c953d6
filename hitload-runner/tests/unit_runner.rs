use hitload_runner::runner::Budget;
use std::sync::Arc;

// `runner::run` needs a live HTTP server; it is exercised end-to-end in
// hitload-integration-tests. The request budget is the pure part.

#[test]
fn test_budget_hands_out_exactly_its_limit() {
    let budget = Budget::new(Some(3));
    assert!(budget.try_take());
    assert!(budget.try_take());
    assert!(budget.try_take());
    assert!(!budget.try_take());
    assert!(!budget.try_take());
}

#[test]
fn test_unlimited_budget_never_runs_out() {
    let budget = Budget::new(None);
    for _ in 0..10_000 {
        assert!(budget.try_take());
    }
}

#[test]
fn test_budget_is_not_overdrawn_across_threads() {
    let budget = Arc::new(Budget::new(Some(1_000)));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let budget = Arc::clone(&budget);
            std::thread::spawn(move || {
                let mut taken = 0u64;
                while budget.try_take() {
                    taken += 1;
                }
                taken
            })
        })
        .collect();

    let total: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total, 1_000);
}

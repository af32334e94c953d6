use hitload_client::Client;
use hitload_common::Sample;
use hitload_stats::Accumulator;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::sync::mpsc;

use crate::config::{RunConfig, SAMPLE_CHANNEL_CAPACITY};
use crate::targets::TargetSet;

/// Shared request budget; `None` means unlimited.
#[derive(Debug)]
pub struct Budget {
    remaining: Option<AtomicU64>,
}

impl Budget {
    pub fn new(limit: Option<u64>) -> Self {
        Self { remaining: limit.map(AtomicU64::new) }
    }

    /// Claim one request. Returns `false` once the budget is spent.
    pub fn try_take(&self) -> bool {
        match &self.remaining {
            None => true,
            Some(remaining) => remaining
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
                .is_ok(),
        }
    }
}

/// Drive `targets` with `config.concurrency` workers until the deadline passes
/// or the request budget is spent. Every sample is funneled through one channel
/// into a single accumulator, which is returned once all workers have exited.
pub async fn run(client: Client, targets: TargetSet, config: RunConfig) -> Result<Accumulator, String> {
    config.validate()?;

    let mut accumulator = Accumulator::new();
    let deadline = config.duration.and_then(|d| Instant::now().checked_add(d));
    let budget = Arc::new(Budget::new(config.requests));
    let targets = Arc::new(targets);
    let (tx, mut rx) = mpsc::channel(SAMPLE_CHANNEL_CAPACITY);

    tracing::info!(
        concurrency = config.concurrency,
        targets = targets.len(),
        duration = ?config.duration,
        requests = ?config.requests,
        "starting run"
    );

    for id in 0..config.concurrency {
        tokio::spawn(worker(
            id,
            client.clone(),
            Arc::clone(&targets),
            Arc::clone(&budget),
            deadline,
            tx.clone(),
        ));
    }
    // Only worker senders remain; recv returns None once the last one exits.
    drop(tx);

    while let Some(sample) = rx.recv().await {
        accumulator.add(sample);
    }

    tracing::info!(samples = accumulator.len(), "run finished");
    Ok(accumulator)
}

async fn worker(
    id: usize,
    client: Client,
    targets: Arc<TargetSet>,
    budget: Arc<Budget>,
    deadline: Option<Instant>,
    tx: mpsc::Sender<Sample>,
) {
    let mut rng = StdRng::from_entropy();
    let mut sent: u64 = 0;

    tracing::debug!(worker = id, "worker started");
    while deadline.map_or(true, |d| Instant::now() < d) && budget.try_take() {
        let url = targets.pick(&mut rng);
        let sample = client.probe(url).await;
        if tx.send(sample).await.is_err() {
            break;
        }
        sent += 1;
    }
    tracing::debug!(worker = id, requests = sent, "worker finished");
}

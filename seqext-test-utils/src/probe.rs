// Copyright 2026 seqext contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Instrumentation for asserting sequential, in-order execution of
//! asynchronous operations.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering::SeqCst};
use std::sync::{Arc, Mutex};

/// Records the start order of probed operations and the maximum number of
/// them that were ever live at the same time.
///
/// Clones share the same counters, so a probe can be cloned into the futures
/// it observes and inspected afterwards from the test body. A mapper that
/// runs operations strictly one at a time must leave
/// [`max_live`](ConcurrencyProbe::max_live) at 1.
#[derive(Clone, Default)]
pub struct ConcurrencyProbe {
    inner: Arc<ProbeState>,
}

#[derive(Default)]
struct ProbeState {
    live: AtomicUsize,
    max_live: AtomicUsize,
    started: Mutex<Vec<usize>>,
}

impl ConcurrencyProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `future` while tracking it as a live operation tagged with `tag`.
    ///
    /// The probe yields to the executor before and after awaiting `future`
    /// so that any accidentally overlapping operation gets a chance to run
    /// and be counted.
    pub async fn observe<F: Future>(&self, tag: usize, future: F) -> F::Output {
        self.inner
            .started
            .lock()
            .expect("probe lock poisoned")
            .push(tag);
        let live = self.inner.live.fetch_add(1, SeqCst) + 1;
        self.inner.max_live.fetch_max(live, SeqCst);

        tokio::task::yield_now().await;
        let output = future.await;
        tokio::task::yield_now().await;

        self.inner.live.fetch_sub(1, SeqCst);
        output
    }

    /// The highest number of simultaneously live operations observed so far.
    #[must_use]
    pub fn max_live(&self) -> usize {
        self.inner.max_live.load(SeqCst)
    }

    /// Tags of all operations that started, in start order.
    #[must_use]
    pub fn started(&self) -> Vec<usize> {
        self.inner
            .started
            .lock()
            .expect("probe lock poisoned")
            .clone()
    }

    /// How many operations were invoked.
    #[must_use]
    pub fn invocations(&self) -> usize {
        self.started().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_records_start_order() {
        let probe = ConcurrencyProbe::new();

        probe.observe(7, async {}).await;
        probe.observe(3, async {}).await;

        assert_eq!(probe.started(), vec![7, 3]);
        assert_eq!(probe.invocations(), 2);
        assert_eq!(probe.max_live(), 1);
    }

    #[tokio::test]
    async fn test_probe_detects_overlap() {
        let probe = ConcurrencyProbe::new();

        let first = probe.observe(0, async {});
        let second = probe.observe(1, async {});
        tokio::join!(first, second);

        assert_eq!(probe.max_live(), 2);
    }
}

// Collected interceptor failures

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::interceptors::WatcherEvent;

/// One failed interceptor callback
#[derive(Debug)]
pub struct CollectedFailure {
    /// Position of the interceptor in registration order
    pub interceptor_index: usize,
    pub interceptor: String,
    pub event: WatcherEvent,
    pub error: anyhow::Error,
}

impl std::fmt::Display for CollectedFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "interceptor #{} ({}) failed on {}: {:#}",
            self.interceptor_index, self.interceptor, self.event, self.error
        )
    }
}

/// Shared, ordered accumulator of interceptor failures.
///
/// Cloning the sink clones the handle, so the composite interceptor and the
/// test driver observe the same list.
#[derive(Debug, Clone, Default)]
pub struct FailureSink {
    failures: Arc<Mutex<Vec<CollectedFailure>>>,
}

impl FailureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, failure: CollectedFailure) {
        self.lock().push(failure);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Rendered failures, in the order they were collected
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    /// Drain all collected failures
    pub fn take(&self) -> Vec<CollectedFailure> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CollectedFailure>> {
        // A panicking interceptor never holds this lock, keep collecting regardless
        self.failures.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn failure(index: usize, event: WatcherEvent) -> CollectedFailure {
        CollectedFailure {
            interceptor_index: index,
            interceptor: format!("watcher-{}", index),
            event,
            error: anyhow!("failure {}", index),
        }
    }

    #[test]
    fn test_sink_shared_between_clones() {
        let sink = FailureSink::new();
        let handle = sink.clone();

        handle.push(failure(0, WatcherEvent::TestStarted));
        handle.push(failure(2, WatcherEvent::MainSectionStarted));

        assert_eq!(sink.len(), 2);
        let messages = sink.messages();
        assert_eq!(
            messages[0],
            "interceptor #0 (watcher-0) failed on onTestStarted: failure 0"
        );
        assert!(messages[1].contains("onMainSectionStarted"));
    }

    #[test]
    fn test_take_drains() {
        let sink = FailureSink::new();
        sink.push(failure(1, WatcherEvent::TestFinished));

        let taken = sink.take();
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].interceptor_index, 1);
        assert!(sink.is_empty());
    }
}

use crate::source::SourceError;
use crate::source::TabularDataSource;
use crate::spreadsheet::SheetData;
use std::time::Duration;
use tracing::info;
use tracing::warn;

/// Bounded retry schedule for transient source failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub max_attempts: usize,
    /// Pause before each retry; the last entry is reused when the schedule runs out.
    pub backoff: Vec<Duration>,
}

impl Default for RetryPolicy {
    /// One retry after a pause long enough for spreadsheet service quotas to reset.
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 2,
            backoff: vec![Duration::from_secs(960)],
        }
    }
}

impl RetryPolicy {
    /// Policy making a single attempt.
    pub fn never() -> Self {
        RetryPolicy {
            max_attempts: 1,
            backoff: Vec::new(),
        }
    }

    /// Pause before the given retry (1-based).
    pub fn delay(&self, retry: usize) -> Duration {
        self.backoff
            .get(retry.saturating_sub(1))
            .or(self.backoff.last())
            .copied()
            .unwrap_or_default()
    }
}

/// Data source wrapper retrying transient failures according to a policy.
pub struct RetryingSource<S> {
    inner: S,
    policy: RetryPolicy,
    sleep: fn(Duration),
}

impl<S: TabularDataSource> RetryingSource<S> {
    pub fn new(inner: S, policy: RetryPolicy) -> Self {
        Self {
            inner,
            policy,
            sleep: std::thread::sleep,
        }
    }

    /// Replaces the function used to wait between attempts.
    pub fn with_sleep(mut self, sleep: fn(Duration)) -> Self {
        self.sleep = sleep;
        self
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: TabularDataSource> TabularDataSource for RetryingSource<S> {
    fn fetch(&mut self, id: &str) -> Result<SheetData, SourceError> {
        let mut attempt = 1;
        loop {
            match self.inner.fetch(id) {
                Err(error) if error.is_transient() && attempt < self.policy.max_attempts => {
                    let delay = self.policy.delay(attempt);
                    warn!("Failed to load data. {error}");
                    info!("Waiting {} seconds before attempt {}.", delay.as_secs(), attempt + 1);
                    (self.sleep)(delay);
                    self.inner.refresh()?;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    fn refresh(&mut self) -> Result<(), SourceError> {
        self.inner.refresh()
    }
}

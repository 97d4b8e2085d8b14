use std::future::Future;
use std::time::Duration;

#[derive(Debug, PartialEq, Eq)]
pub enum RetryError {
    Exhausted { attempts: u32, last_error: String },
}

impl std::fmt::Display for RetryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetryError::Exhausted {
                attempts,
                last_error,
            } => write!(f, "Exhausted after {} attempts: {}", attempts, last_error),
        }
    }
}

impl std::error::Error for RetryError {}

/// How many times and for how long to run one unit of work. The work itself
/// stays unaware of attempt numbers; the caller decides what to do once the
/// budget is spent.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Wall-clock bound for a single attempt; exceeding it counts as an
    /// attempt failure against the budget.
    pub attempt_timeout: Duration,
    /// Base delay between attempts, grown by `backoff_factor` each retry.
    pub backoff_base: Duration,
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            attempt_timeout: Duration::from_secs(300),
            backoff_base: Duration::from_secs(1),
            backoff_factor: 2.0,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, attempt_timeout: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            attempt_timeout,
            ..Self::default()
        }
    }

    fn backoff_delay(&self, completed_attempts: u32) -> Duration {
        let factor = self.backoff_factor.powi(completed_attempts.max(1) as i32 - 1);
        self.backoff_base.mul_f64(factor)
    }

    /// Run `op` until it succeeds or the attempt budget is exhausted. Each
    /// attempt is bounded by `attempt_timeout`; a timed-out attempt is
    /// recorded like any other failure.
    pub async fn run<F, Fut>(&self, mut op: F) -> Result<(), RetryError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<(), String>>,
    {
        let mut last_error = String::from("no attempts were made");

        for attempt in 1..=self.max_attempts {
            match tokio::time::timeout(self.attempt_timeout, op()).await {
                Ok(Ok(())) => return Ok(()),
                Ok(Err(e)) => {
                    last_error = e;
                }
                Err(_) => {
                    last_error = format!(
                        "attempt timed out after {}s",
                        self.attempt_timeout.as_secs()
                    );
                }
            }

            if attempt < self.max_attempts {
                tokio::time::sleep(self.backoff_delay(attempt)).await;
            }
        }

        Err(RetryError::Exhausted {
            attempts: self.max_attempts,
            last_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            attempt_timeout: Duration::from_millis(50),
            backoff_base: Duration::from_millis(1),
            backoff_factor: 1.0,
        }
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = fast_policy(3)
            .run(|| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failure() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = fast_policy(3)
            .run(|| {
                let counter = counter.clone();
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err("transient".to_string())
                    } else {
                        Ok(())
                    }
                }
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_exhaustion_reports_attempts_and_last_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = fast_policy(3)
            .run(|| {
                let counter = counter.clone();
                async move {
                    let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                    Err(format!("failure {}", n))
                }
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(
            result.unwrap_err(),
            RetryError::Exhausted {
                attempts: 3,
                last_error: "failure 3".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_timeout_counts_against_budget() {
        let result = fast_policy(2)
            .run(|| async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok(())
            })
            .await;

        match result.unwrap_err() {
            RetryError::Exhausted {
                attempts,
                last_error,
            } => {
                assert_eq!(attempts, 2);
                assert!(last_error.contains("timed out"));
            }
        }
    }
}

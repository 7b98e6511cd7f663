use std::time::Duration;

use crate::config::Config;

/// Poll interval used when none is given.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// How long to keep retrying a contended open, and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl RetryPolicy {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout, poll_interval: DEFAULT_POLL_INTERVAL }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Zero intervals would spin; clamp to one millisecond.
    pub(crate) fn effective_poll(&self) -> Duration {
        self.poll_interval.max(Duration::from_millis(1))
    }
}

impl From<&Config> for RetryPolicy {
    fn from(cfg: &Config) -> Self {
        Self::new(cfg.wait_timeout).with_poll_interval(cfg.poll_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_config_mapping() {
        let p = RetryPolicy::new(Duration::from_secs(1));
        assert_eq!(p.poll_interval, DEFAULT_POLL_INTERVAL);

        let cfg = Config {
            wait_timeout: Duration::from_millis(750),
            poll_interval: Duration::from_millis(25),
            ..Config::default()
        };
        let from_cfg = RetryPolicy::from(&cfg);
        assert_eq!(from_cfg.timeout, Duration::from_millis(750));
        assert_eq!(from_cfg.poll_interval, Duration::from_millis(25));
        assert_eq!(RetryPolicy::new(Duration::ZERO).with_poll_interval(Duration::ZERO).effective_poll(), Duration::from_millis(1));
    }
}

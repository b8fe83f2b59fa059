use crate::tools::env_args::retrieve_parsed_arg_value;
use derive_getters::Getters;
use std::time::Duration;

const CHECK_INTERVAL_ARG: &str = "--check-interval-hours";
const RETRY_INITIAL_DELAY_ARG: &str = "--retry-initial-delay-seconds";
const RETRY_MAX_DELAY_ARG: &str = "--retry-max-delay-seconds";
const MAX_RETRIES_ARG: &str = "--max-retries";
const DEFAULT_CHECK_INTERVAL_IN_HOURS: u64 = 24;
const DEFAULT_RETRY_INITIAL_DELAY_IN_SECONDS: u64 = 30;
const DEFAULT_RETRY_MAX_DELAY_IN_SECONDS: u64 = 60 * 60;
const DEFAULT_MAX_RETRIES: u32 = 5;

#[derive(Debug, Clone, Getters)]
pub struct SchedulerConfig {
    interval: Duration,
    initial_backoff: Duration,
    max_backoff: Duration,
    max_retries: u32,
}

impl SchedulerConfig {
    pub fn new(
        interval: Duration,
        initial_backoff: Duration,
        max_backoff: Duration,
        max_retries: u32,
    ) -> Self {
        Self {
            interval,
            initial_backoff,
            max_backoff,
            max_retries,
        }
    }

    pub fn from_args() -> Self {
        let interval_in_hours =
            retrieve_parsed_arg_value(CHECK_INTERVAL_ARG, DEFAULT_CHECK_INTERVAL_IN_HOURS).max(1);
        Self::new(
            Duration::from_secs(interval_in_hours * 60 * 60),
            Duration::from_secs(retrieve_parsed_arg_value(
                RETRY_INITIAL_DELAY_ARG,
                DEFAULT_RETRY_INITIAL_DELAY_IN_SECONDS,
            )),
            Duration::from_secs(retrieve_parsed_arg_value(
                RETRY_MAX_DELAY_ARG,
                DEFAULT_RETRY_MAX_DELAY_IN_SECONDS,
            )),
            retrieve_parsed_arg_value(MAX_RETRIES_ARG, DEFAULT_MAX_RETRIES),
        )
    }

    /// Delay before the given retry (starting at 0), doubling each time, up to the max backoff.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

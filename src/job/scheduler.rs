use crate::job::config::SchedulerConfig;
use crate::job::expiry_check::ExpiryCheckJob;
use crate::member::error::FetchError;
use chrono::{Local, NaiveDate};
use dto::cycle_report::CycleReport;
use log::{error, info, warn};
use rocket::tokio::sync::Mutex;
use rocket::tokio::time::sleep;
use std::sync::Arc;

/// What the scheduler should do after a cycle.
#[derive(Debug, PartialEq)]
pub enum JobOutcome {
    Success(CycleReport),
    /// The cycle couldn't fetch its members and should be run again later.
    Retry(FetchError),
    /// Another cycle was already running; this one didn't start.
    AlreadyRunning,
}

impl From<Result<CycleReport, FetchError>> for JobOutcome {
    fn from(result: Result<CycleReport, FetchError>) -> Self {
        match result {
            Ok(report) => JobOutcome::Success(report),
            Err(error) => JobOutcome::Retry(error),
        }
    }
}

/// Periodically runs the expiry check, making sure two cycles never overlap.
pub struct Scheduler {
    job: Arc<ExpiryCheckJob>,
    config: SchedulerConfig,
    running: Mutex<()>,
}

impl Scheduler {
    pub fn new(job: Arc<ExpiryCheckJob>, config: SchedulerConfig) -> Self {
        Self {
            job,
            config,
            running: Mutex::new(()),
        }
    }

    pub fn job(&self) -> &ExpiryCheckJob {
        &self.job
    }

    /// Run a cycle for today, unless one is already running.
    pub async fn run_once(&self) -> JobOutcome {
        self.run_once_for(Local::now().date_naive()).await
    }

    async fn run_once_for(&self, today: NaiveDate) -> JobOutcome {
        let Ok(_guard) = self.running.try_lock() else {
            warn!("Membership expiry check already running, skipping.");
            return JobOutcome::AlreadyRunning;
        };
        self.job.run(today).await.into()
    }

    /// Run a cycle, running it again with an increasing delay as long as it asks to.
    pub async fn run_with_retries(&self) -> JobOutcome {
        let mut attempt = 0;
        loop {
            let outcome = self.run_once().await;
            match outcome {
                JobOutcome::Retry(ref error) if attempt < *self.config.max_retries() => {
                    let delay = self.config.backoff_delay(attempt);
                    warn!(
                        "Membership expiry check failed, retrying [attempt: {}, delay: {delay:?}, error: {error}]",
                        attempt + 1
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                JobOutcome::Retry(ref error) => {
                    error!("Membership expiry check failed, giving up until next cycle [error: {error}]");
                    return outcome;
                }
                _ => return outcome,
            }
        }
    }

    /// Run a cycle right away, then once every interval.
    pub async fn run_forever(self: Arc<Self>) {
        info!(
            "Membership expiry check scheduled [interval: {:?}]",
            self.config.interval()
        );
        loop {
            self.run_with_retries().await;
            sleep(*self.config.interval()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::expiry_check::tests::{
        COMPANY_ID, MEMBER_EXPIRY_PATH, MEMBERS_AS_JSON, build_job, mock_members, today,
    };
    use crate::notification::sink::tests::RecordingSink;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn build_scheduler(base_url: String, max_retries: u32) -> Scheduler {
        let job = build_job(base_url, COMPANY_ID, Arc::new(RecordingSink::default()));
        let config = SchedulerConfig::new(
            Duration::from_secs(24 * 60 * 60),
            Duration::from_millis(1),
            Duration::from_millis(5),
            max_retries,
        );
        Scheduler::new(Arc::new(job), config)
    }

    #[test]
    fn should_convert_result_to_outcome() {
        let report = CycleReport::new(1, 0, 1, 0);
        assert_eq!(JobOutcome::Success(report), JobOutcome::from(Ok(report)));
        assert_eq!(
            JobOutcome::Retry(FetchError::Timeout),
            JobOutcome::from(Err(FetchError::Timeout))
        );
    }

    #[async_test]
    async fn should_succeed() {
        let mock_server = MockServer::start().await;
        mock_members(
            &mock_server,
            ResponseTemplate::new(200).set_body_string(MEMBERS_AS_JSON),
        )
        .await;
        let scheduler = build_scheduler(mock_server.uri(), 3);

        let outcome = scheduler.run_once_for(today()).await;

        assert_eq!(JobOutcome::Success(CycleReport::new(6, 2, 3, 0)), outcome);
    }

    #[async_test]
    async fn should_not_overlap() {
        let mock_server = MockServer::start().await;
        let scheduler = build_scheduler(mock_server.uri(), 3);
        let _guard = scheduler.running.lock().await;

        let outcome = scheduler.run_once_for(today()).await;

        assert_eq!(JobOutcome::AlreadyRunning, outcome);
    }

    #[async_test]
    async fn should_retry_until_giving_up() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MEMBER_EXPIRY_PATH))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&mock_server)
            .await;
        let scheduler = build_scheduler(mock_server.uri(), 2);

        let outcome = scheduler.run_with_retries().await;

        assert_eq!(JobOutcome::Retry(FetchError::ServerError), outcome);
    }

    #[async_test]
    async fn should_stop_retrying_once_successful() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MEMBER_EXPIRY_PATH))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path(MEMBER_EXPIRY_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success": true, "data": []}"#))
            .expect(1)
            .mount(&mock_server)
            .await;
        let scheduler = build_scheduler(mock_server.uri(), 5);

        let outcome = scheduler.run_with_retries().await;

        assert_eq!(JobOutcome::Success(CycleReport::default()), outcome);
    }
}

use crate::expiry::evaluator::evaluate;
use crate::member::cache::MemberCache;
use crate::member::config::ClubServiceConfig;
use crate::member::error::Result;
use crate::member::retrieve_expiries::retrieve_member_expiries;
use crate::notification::dispatcher::NotificationDispatcher;
use crate::notification::sink::NotificationSink;
use chrono::NaiveDate;
use dto::cycle_report::CycleReport;
use dto::member_expiry_data::MemberExpiryData;
use log::{error, info, warn};
use reqwest::Client;
use std::sync::{Arc, Mutex};

/// One expiry evaluation cycle: fetch every member, classify them, notify those who need it.
pub struct ExpiryCheckJob {
    client: Client,
    config: ClubServiceConfig,
    dispatcher: NotificationDispatcher,
    cache: Mutex<MemberCache>,
}

impl ExpiryCheckJob {
    pub fn new(
        client: Client,
        config: ClubServiceConfig,
        sink: Arc<dyn NotificationSink>,
        cache: MemberCache,
    ) -> Self {
        Self {
            client,
            config,
            dispatcher: NotificationDispatcher::new(sink),
            cache: Mutex::new(cache),
        }
    }

    /// Run a cycle for the given day.
    /// Only a failure to fetch the members is an error; nothing is dispatched then.
    pub async fn run(&self, today: NaiveDate) -> Result<CycleReport> {
        if !self.config.has_company() {
            error!("Company ID is 0, skipping check.");
            return Ok(CycleReport::default());
        }

        info!("Membership expiry check started [today: {today}]");
        let members = self.refresh_member_expiries().await?;
        let (classified, skipped) = evaluate(today, &members);
        let mut report = CycleReport::new(members.len(), skipped, 0, 0);

        for (record, bucket) in classified {
            match self.dispatcher.dispatch(&record, bucket).await {
                Ok(()) => report.record_dispatched(),
                Err(error) => {
                    error!(
                        "Can't post notification, ignoring [member: {}, error: {error}]",
                        record.id()
                    );
                    report.record_failed();
                }
            }
        }

        info!("Membership expiry check done [report: {report:?}]");
        Ok(report)
    }

    /// Member expiries, as cached if they have been fetched recently.
    /// Nothing is fetched while no company is configured.
    pub async fn cached_member_expiries(&self) -> Result<Vec<MemberExpiryData>> {
        if !self.config.has_company() {
            warn!("Company ID is 0, no member to retrieve.");
            return Ok(vec![]);
        }
        let company_id = *self.config.company_id();
        if let Some(members) = self.lock_cache().and_then(|mut cache| cache.get(company_id)) {
            return Ok(members);
        }
        self.refresh_member_expiries().await
    }

    pub fn invalidate_cache(&self) {
        if let Some(mut cache) = self.lock_cache() {
            cache.invalidate(*self.config.company_id());
        }
    }

    async fn refresh_member_expiries(&self) -> Result<Vec<MemberExpiryData>> {
        let members = retrieve_member_expiries(&self.client, &self.config).await?;
        if let Some(mut cache) = self.lock_cache() {
            cache.store(*self.config.company_id(), members.clone());
        }
        Ok(members)
    }

    fn lock_cache(&self) -> Option<std::sync::MutexGuard<'_, MemberCache>> {
        self.cache
            .lock()
            .map_err(|error| warn!("Member cache is poisoned, bypassing it [error: {error}]"))
            .ok()
    }
}

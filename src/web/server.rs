use crate::error::Result;
use crate::job::config::SchedulerConfig;
use crate::job::expiry_check::ExpiryCheckJob;
use crate::job::scheduler::Scheduler;
use crate::member::cache::MemberCache;
use crate::member::config::ClubServiceConfig;
use crate::notification::email_sink::EmailSink;
use crate::notification::log_sink::LogSink;
use crate::notification::sink::{FanOutSink, NotificationSink};
use crate::notification::tray::{NotificationTray, SharedTray};
use crate::tools::env_args::retrieve_parsed_arg_value;
use crate::tools::web::build_client;
use crate::web::api::server::mount_api;
use log::info;
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use std::sync::Arc;

const PORT_ARG: &str = "--port";
const DEFAULT_PORT: u16 = 8000;

/// Build the whole service from args: API, notification sinks and expiry check scheduler.
pub fn build_server() -> Result<Rocket<Build>> {
    let config = ClubServiceConfig::from_args();
    let client = build_client(config.api_token().as_deref(), *config.request_timeout())?;
    let cache = MemberCache::new(*config.member_cache_lifespan());

    let tray = NotificationTray::shared();
    let sink = build_sink(tray.clone())?;
    let job = ExpiryCheckJob::new(client, config, sink, cache);
    let scheduler = Arc::new(Scheduler::new(Arc::new(job), SchedulerConfig::from_args()));

    let rocket_build = rocket::build()
        .configure(rocket::Config::figment().merge(("port", get_api_port())))
        .attach(schedule_expiry_checks(scheduler.clone()));
    Ok(mount_api(rocket_build, tray, scheduler))
}

/// Tray and logs always get notifications; emails only when recipients are configured.
fn build_sink(tray: SharedTray) -> Result<Arc<dyn NotificationSink>> {
    let mut sinks: Vec<Arc<dyn NotificationSink>> = vec![];
    sinks.push(tray);
    sinks.push(Arc::new(LogSink));
    match EmailSink::from_args()? {
        Some(email_sink) => sinks.push(Arc::new(email_sink)),
        None => info!("No notification recipients, notifications won't be emailed."),
    }
    Ok(Arc::new(FanOutSink::new(sinks)))
}

fn schedule_expiry_checks(scheduler: Arc<Scheduler>) -> AdHoc {
    AdHoc::on_liftoff("Membership expiry check scheduler", move |_| {
        let scheduler = scheduler.clone();
        Box::pin(async move {
            rocket::tokio::spawn(scheduler.run_forever());
        })
    })
}

fn get_api_port() -> u16 {
    retrieve_parsed_arg_value(PORT_ARG, DEFAULT_PORT)
}

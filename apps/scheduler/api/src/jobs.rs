use domain_events::Clock;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::info;

/// Line logged on every tick of the time report
pub fn time_report_message(clock: &dyn Clock) -> String {
    let now = clock.now().with_timezone(&clock.zone());
    format!("Scheduled task - current time: {}", now.to_rfc3339())
}

/// Start the periodic time report on `cron_expr` (six fields, seconds first).
///
/// The returned scheduler keeps running until shut down.
pub async fn start_time_report(
    cron_expr: &str,
    clock: Arc<dyn Clock>,
) -> eyre::Result<JobScheduler> {
    info!(cron = cron_expr, "Starting scheduled time report");

    let sched = JobScheduler::new().await?;

    let job = Job::new_async(cron_expr, move |_uuid, _l| {
        let clock = clock.clone();

        Box::pin(async move {
            info!("{}", time_report_message(clock.as_ref()));
        })
    })?;

    sched.add(job).await?;
    sched.start().await?;

    Ok(sched)
}

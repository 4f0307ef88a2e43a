use crate::{ConfigError, FromEnv, env_or_default, env_parse_or};
use std::time::Duration;

/// Runtime knobs for the scheduling service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Offset reported as the clock's zone, e.g. `+00:00`
    pub clock_utc_offset: String,
    /// Simulated latency of the logging notifier
    pub notification_delay: Duration,
    /// Six-field cron expression for the periodic time report
    pub time_report_cron: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            clock_utc_offset: "+00:00".to_string(),
            notification_delay: Duration::from_millis(100),
            time_report_cron: "*/5 * * * * *".to_string(),
        }
    }
}

impl FromEnv for SchedulerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            clock_utc_offset: env_or_default("CLOCK_UTC_OFFSET", &defaults.clock_utc_offset),
            notification_delay: Duration::from_millis(env_parse_or(
                "NOTIFICATION_DELAY_MS",
                100u64,
            )?),
            time_report_cron: env_or_default("TIME_REPORT_CRON", &defaults.time_report_cron),
        })
    }
}

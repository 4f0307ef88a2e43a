use axum_helpers::{ShutdownCoordinator, create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_events::{LoggingNotifier, SharedCounter, SystemClock};
use eyre::eyre;
use std::sync::Arc;
use tracing::info;

mod api;
mod config;
mod jobs;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let clock = SystemClock::from_offset(&config.scheduler.clock_utc_offset).map_err(|e| {
        eyre!(
            "Invalid CLOCK_UTC_OFFSET '{}': {}",
            config.scheduler.clock_utc_offset,
            e
        )
    })?;

    let shutdown = ShutdownCoordinator::new();

    // Pending notification delays end early once shutdown starts
    let notifier = LoggingNotifier::new(config.scheduler.notification_delay)
        .with_shutdown(shutdown.subscribe());

    let state = AppState {
        config,
        clock: Arc::new(clock),
        notifier: Arc::new(notifier),
        counter: Arc::new(SharedCounter::new()),
    };

    // Build router with API routes (connects to the event store)
    let api_routes = api::routes(&state).await?;

    // create_router adds docs/middleware to our composed routes
    let app = create_router::<openapi::ApiDoc>(api_routes).merge(health_router(state.config.app));

    let mut time_report =
        jobs::start_time_report(&state.config.scheduler.time_report_cron, state.clock.clone())
            .await?;

    info!(
        "Starting scheduler API ({:?} graceful shutdown timeout)",
        state.config.server.shutdown_timeout
    );

    create_app(app, &state.config.server, shutdown)
        .await
        .map_err(|e| eyre!("Server error: {}", e))?;

    time_report.shutdown().await?;

    info!(
        events_created = state.counter.get(),
        "Scheduler API shutdown complete"
    );
    Ok(())
}

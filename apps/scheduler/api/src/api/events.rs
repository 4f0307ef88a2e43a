use axum::Router;
use core_config::database::StoreKind;
use domain_events::{
    EventRepository, EventService, InMemoryEventRepository, PgEventRepository, handlers,
};
use eyre::eyre;
use tracing::info;

use crate::state::AppState;

/// Event routes backed by the store selected with `EVENT_STORE`
pub async fn router(state: &AppState) -> eyre::Result<Router> {
    match state.config.database.store {
        StoreKind::Memory => {
            info!("Using in-memory event store");
            Ok(handlers::router(service(state, InMemoryEventRepository::new())))
        }
        StoreKind::Postgres => {
            let url = state
                .config
                .database
                .url
                .as_deref()
                .ok_or_else(|| eyre!("DATABASE_URL is required for the postgres event store"))?;

            let repository = PgEventRepository::connect(url)
                .await
                .map_err(|e| eyre!("PostgreSQL connection failed: {}", e))?;

            info!("Using PostgreSQL event store");
            Ok(handlers::router(service(state, repository)))
        }
    }
}

fn service<R: EventRepository>(state: &AppState, repository: R) -> EventService<R> {
    EventService::new(
        repository,
        state.clock.clone(),
        state.notifier.clone(),
        state.counter.clone(),
    )
}

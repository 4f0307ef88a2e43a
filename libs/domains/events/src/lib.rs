//! Events Domain
//!
//! Named events with a scheduled time. Clients create them, ask which ones
//! are due, and mark them completed, which fires a user notification.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, timestamp parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌───────┐ ┌──────────┐ ┌─────────┐
//! │   Service   │ ──► │ Clock │ │ Notifier │ │ Counter │
//! └──────┬──────┘     └───────┘ └──────────┘ └─────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + in-memory / Postgres implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Event, EventStatus, request params
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_events::{
//!     EventService, InMemoryEventRepository, LoggingNotifier, SharedCounter, SystemClock,
//!     handlers,
//! };
//!
//! let service = EventService::new(
//!     InMemoryEventRepository::new(),
//!     Arc::new(SystemClock::utc()),
//!     Arc::new(LoggingNotifier::default()),
//!     Arc::new(SharedCounter::new()),
//! );
//!
//! let router = handlers::router(service);
//! ```

pub mod clock;
pub mod counter;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notifier;
pub mod postgres;
pub mod repository;
pub mod service;

/// Mount point of the event routes below the API prefix
pub const EVENTS_PATH: &str = "/events";

pub use clock::{Clock, FixedClock, SystemClock};
pub use counter::SharedCounter;
pub use error::{EventError, EventResult};
pub use handlers::ApiDoc;
pub use models::{CreateEventParams, Event, EventStatus, parse_instant};
pub use notifier::{
    LoggingNotifier, NotificationError, NotificationResult, Notifier, RecordingNotifier,
};
pub use postgres::PgEventRepository;
pub use repository::{EventRepository, InMemoryEventRepository};
pub use service::EventService;

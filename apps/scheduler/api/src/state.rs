use domain_events::{Clock, Notifier, SharedCounter};
use std::sync::Arc;

use crate::config::Config;

/// Collaborators shared by every event service the app builds
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    pub notifier: Arc<dyn Notifier>,
    pub counter: Arc<SharedCounter>,
}

//! User notification seam.
//!
//! [`LoggingNotifier`] is wired in production, [`RecordingNotifier`] in
//! tests. Callers treat delivery as best-effort.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

pub type NotificationResult<T> = Result<T, NotificationError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `message` to the user. May block for a while.
    async fn notify_user(&self, message: &str) -> NotificationResult<()>;
}

/// Simulates a slow transport: waits `delay`, then logs the message.
///
/// A shutdown signal cuts the wait short; the interruption is logged and
/// the message is still reported as sent.
#[derive(Debug, Clone)]
pub struct LoggingNotifier {
    delay: Duration,
    shutdown: Option<watch::Receiver<bool>>,
}

impl LoggingNotifier {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            shutdown: None,
        }
    }

    /// Interrupt pending delays once `shutdown` flips to `true`.
    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    /// Returns `true` if the wait was interrupted.
    async fn wait(&self) -> bool {
        if self.delay.is_zero() {
            return false;
        }

        let Some(mut shutdown) = self.shutdown.clone() else {
            tokio::time::sleep(self.delay).await;
            return false;
        };

        let interrupted = async move {
            let closed = shutdown.wait_for(|stopping| *stopping).await.is_err();
            if closed {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            _ = tokio::time::sleep(self.delay) => false,
            _ = interrupted => true,
        }
    }
}

impl Default for LoggingNotifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn notify_user(&self, message: &str) -> NotificationResult<()> {
        if self.wait().await {
            warn!("Notification delay interrupted by shutdown");
        }

        info!("Notification sent: {}", message);
        Ok(())
    }
}

/// Keeps every message in memory; can be switched to fail.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every call fails after recording the message
    pub fn failing() -> Self {
        let notifier = Self::default();
        notifier.set_failing(true);
        notifier
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_user(&self, message: &str) -> NotificationResult<()> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());

        if self.fail.load(Ordering::SeqCst) {
            return Err(NotificationError::Delivery("recording notifier set to fail".into()));
        }

        Ok(())
    }
}

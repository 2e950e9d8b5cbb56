mod webhook;

pub use webhook::WebhookNotifier;

use async_trait::async_trait;
use tracing::info;

use crate::Result;

/// Delivers a celebration URL through an out-of-band channel. The poller
/// only calls this; it never inspects the delivery beyond error
/// propagation.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, url: &str) -> Result<()>;
}

/// Used when no webhook is configured; the URL still lands in the log.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, url: &str) -> Result<()> {
        info!("ℹ notification: {url}");
        Ok(())
    }
}

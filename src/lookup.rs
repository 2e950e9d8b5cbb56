use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error, info};

use crate::browser::PageSource;
use crate::config::PageConfig;
use crate::models::Store;
use crate::notifiers::Notifier;
use crate::opener::UrlOpener;
use crate::stock::is_out_of_stock;
use crate::Result;

/// Polls a store's tracked product links and fires the configured side
/// effects when one turns up in stock.
pub struct StoreLookup {
    page: PageConfig,
    open_browser: bool,
    capture_dir: PathBuf,
    notifier: Arc<dyn Notifier>,
    opener: Arc<dyn UrlOpener>,
}

impl StoreLookup {
    pub fn new(
        page: PageConfig,
        open_browser: bool,
        notifier: Arc<dyn Notifier>,
        opener: Arc<dyn UrlOpener>,
    ) -> Self {
        Self {
            page,
            open_browser,
            capture_dir: PathBuf::from("."),
            notifier,
            opener,
        }
    }

    /// Directory screenshots are written to. Defaults to the working
    /// directory.
    pub fn with_capture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.capture_dir = dir.into();
        self
    }

    /// Checks every tracked link of one store, strictly in list order.
    ///
    /// Links are never polled concurrently within a store, so the vendor
    /// sees at most one of our requests in flight at a time. A navigation
    /// failure (timeout or network error) abandons the rest of this
    /// store's links for the cycle; every other fault propagates to the
    /// caller untouched.
    pub async fn poll_store(&self, session: &dyn PageSource, store: &Store) -> Result<()> {
        for link in &store.links {
            let mut page = session.new_page().await?;
            page.set_navigation_timeout(Duration::from_millis(self.page.navigation_timeout_ms));
            page.set_user_agent(&self.page.user_agent).await?;

            let product = link.product_name();

            if let Err(err) = page.navigate(&link.url).await {
                error!("✖ [{}] {} skipping; timed out: {}", store.name, product, err);
                page.close().await?;
                return Ok(());
            }

            let text = page.body_text().await?;
            if let Some(text) = &text {
                debug!("{text}");
            }

            if is_out_of_stock(text.as_deref(), &link.oos_labels) {
                info!("✖ [{}] {} is still out of stock", store.name, product);
            } else {
                info!("🚀🚀🚀 [{}] {} IN STOCK 🚀🚀🚀", store.name, product);
                info!("{}", link.url);

                if self.page.capture {
                    debug!("ℹ saving screenshot");
                    let shot = page.screenshot().await?;
                    let filename = format!("success-{}.png", Utc::now().timestamp_millis());
                    std::fs::write(self.capture_dir.join(filename), shot)?;
                }

                let given_url = store.celebration_url(link);

                if self.open_browser {
                    self.opener.open(given_url).await?;
                }

                self.notifier.notify(given_url).await?;
            }

            page.close().await?;
        }

        Ok(())
    }
}

use async_trait::async_trait;

use crate::Result;

/// Launches a URL in the user's default browser. This is a human-facing
/// window, separate from the headless automation session.
#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, url: &str) -> Result<()>;
}

pub struct SystemOpener;

#[async_trait]
impl UrlOpener for SystemOpener {
    async fn open(&self, url: &str) -> Result<()> {
        open::that(url)?;
        Ok(())
    }
}

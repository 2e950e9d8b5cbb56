use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use scraper::{Html, Selector};

use crate::config::BrowserConfig;
use crate::utils::error::AppError;
use crate::Result;

/// Shared browser automation handle. One page is created per tracked link
/// and released when that link has been checked.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn new_page(&self) -> Result<Box<dyn ProductPage>>;
}

/// A single isolated page/tab scoped to one product link's lifetime.
#[async_trait]
pub trait ProductPage: Send {
    fn set_navigation_timeout(&mut self, timeout: Duration);

    async fn set_user_agent(&mut self, user_agent: &str) -> Result<()>;

    /// Navigates to `url` and waits for the page to finish loading
    /// (network idle). Errors from here are what the poller treats as
    /// navigation failure.
    async fn navigate(&mut self, url: &str) -> Result<()>;

    /// The visible text content of the page body, `None` when the document
    /// has no body text to extract.
    async fn body_text(&mut self) -> Result<Option<String>>;

    /// PNG screenshot of the current viewport.
    async fn screenshot(&mut self) -> Result<Vec<u8>>;

    async fn close(self: Box<Self>) -> Result<()>;
}

pub struct ChromeSession {
    browser: Browser,
}

impl ChromeSession {
    pub fn launch(config: &BrowserConfig) -> Result<Self> {
        let mut launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .sandbox(false) // Often needed in containerized environments
            .args(vec![
                std::ffi::OsStr::new("--no-sandbox"),
                std::ffi::OsStr::new("--disable-dev-shm-usage"),
                std::ffi::OsStr::new("--disable-gpu"),
                std::ffi::OsStr::new("--disable-extensions"),
            ])
            .build()
            .map_err(|e| AppError::Browser(format!("failed to create launch options: {e}")))?;

        if let Some(chrome_path) = &config.chrome_path {
            launch_options.path = Some(std::path::PathBuf::from(chrome_path));
        }

        let browser = Browser::new(launch_options)
            .map_err(|e| AppError::Browser(format!("failed to launch browser: {e}")))?;

        Ok(Self { browser })
    }
}

#[async_trait]
impl PageSource for ChromeSession {
    async fn new_page(&self) -> Result<Box<dyn ProductPage>> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| AppError::Browser(format!("failed to create tab: {e}")))?;
        Ok(Box::new(ChromePage { tab }))
    }
}

pub struct ChromePage {
    tab: Arc<Tab>,
}

#[async_trait]
impl ProductPage for ChromePage {
    fn set_navigation_timeout(&mut self, timeout: Duration) {
        self.tab.set_default_timeout(timeout);
    }

    async fn set_user_agent(&mut self, user_agent: &str) -> Result<()> {
        self.tab
            .set_user_agent(user_agent, None, None)
            .map_err(|e| AppError::Browser(format!("failed to set user agent: {e}")))?;
        Ok(())
    }

    async fn navigate(&mut self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| AppError::Navigation(e.to_string()))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| AppError::Navigation(e.to_string()))?;
        Ok(())
    }

    async fn body_text(&mut self) -> Result<Option<String>> {
        let html_content = self
            .tab
            .get_content()
            .map_err(|e| AppError::Browser(format!("failed to get page content: {e}")))?;

        let document = Html::parse_document(&html_content);
        let body_selector = Selector::parse("body")
            .map_err(|e| AppError::Browser(format!("invalid body selector: {e:?}")))?;

        let text = document
            .select(&body_selector)
            .next()
            .map(|body| body.text().collect::<Vec<_>>().join(" ").trim().to_string());

        Ok(text.filter(|t| !t.is_empty()))
    }

    async fn screenshot(&mut self) -> Result<Vec<u8>> {
        self.tab
            .capture_screenshot(
                headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption::Png,
                None,
                None,
                true,
            )
            .map_err(|e| AppError::Browser(format!("screenshot capture failed: {e}")))
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.tab
            .close(true)
            .map_err(|e| AppError::Browser(format!("failed to close tab: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_text_extraction_from_html() {
        // The DOM-to-text step is plain scraper parsing; exercise it
        // without a live Chrome.
        let html = r#"
            <html>
                <body>
                    <h1>RTX 4090</h1>
                    <button>Sold Out</button>
                </body>
            </html>
        "#;

        let document = Html::parse_document(html);
        let selector = Selector::parse("body").unwrap();
        let text = document
            .select(&selector)
            .next()
            .map(|body| body.text().collect::<Vec<_>>().join(" "))
            .unwrap();

        assert!(text.contains("RTX 4090"));
        assert!(text.contains("Sold Out"));
    }

    #[test]
    fn test_session_launch_without_chrome() {
        let config = BrowserConfig {
            headless: true,
            chrome_path: Some("/nonexistent/chrome".to_string()),
        };

        // Launching against a bogus binary must surface a browser error,
        // not panic.
        match ChromeSession::launch(&config) {
            Ok(_) => {}
            Err(e) => assert!(matches!(e, AppError::Browser(_))),
        }
    }
}

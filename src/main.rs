use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use futures::future::join_all;
use tracing::{debug, info, warn};

use shelfwatch::browser::ChromeSession;
use shelfwatch::config::AppConfig;
use shelfwatch::lookup::StoreLookup;
use shelfwatch::notifiers::{LogNotifier, Notifier, WebhookNotifier};
use shelfwatch::opener::SystemOpener;

#[derive(Parser, Debug)]
#[command(
    name = "shelfwatch",
    about = "Polls store product pages and alerts when an item is back in stock"
)]
struct Cli {
    /// Poll every store once and exit instead of looping
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shelfwatch=debug".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    info!("Starting shelfwatch with {} store(s)...", config.stores.len());

    let session = ChromeSession::launch(&config.browser)?;

    let notifier: Arc<dyn Notifier> = match WebhookNotifier::from_config(&config.notifications.webhook) {
        Some(webhook) => Arc::new(webhook),
        None => Arc::new(LogNotifier),
    };

    let lookup = StoreLookup::new(
        config.page.clone(),
        config.open_browser,
        notifier,
        Arc::new(SystemOpener),
    );

    loop {
        // Stores are polled concurrently with each other; links within one
        // store stay strictly sequential inside poll_store.
        let polls = config.stores.iter().map(|store| {
            let lookup = &lookup;
            let session = &session;
            async move {
                if let Err(err) = lookup.poll_store(session, store).await {
                    warn!("[{}] polling failed: {err}", store.name);
                }
            }
        });
        join_all(polls).await;

        if cli.once {
            break;
        }

        debug!("cycle complete; sleeping {}s", config.poll_interval_secs);
        tokio::time::sleep(Duration::from_secs(config.poll_interval_secs)).await;
    }

    info!("Shutting down...");
    Ok(())
}

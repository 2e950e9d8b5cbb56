use serde::{Deserialize, Serialize};

/// A vendor website plus the list of product pages tracked on it.
///
/// Stores are read-only configuration: they are loaded once at startup and
/// handed to the poller by reference. Link order is significant — links are
/// polled in exactly the order they appear here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Store {
    /// Display name used in log lines.
    pub name: String,

    /// Optional cart/checkout shortcut opened instead of the product page
    /// when an item comes back in stock.
    #[serde(default)]
    pub cart_url: Option<String>,

    pub links: Vec<ProductLink>,
}

/// One trackable product page belonging to a store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductLink {
    pub brand: String,
    pub model: String,
    pub url: String,

    /// Vendor-specific text fragments whose presence on the page means the
    /// item is unavailable. An empty list makes every page look in-stock.
    #[serde(default)]
    pub oos_labels: Vec<String>,
}

impl Store {
    /// The URL surfaced to the user when an in-stock item is found: the
    /// store's cart shortcut if configured, otherwise the product page.
    pub fn celebration_url<'a>(&'a self, link: &'a ProductLink) -> &'a str {
        self.cart_url.as_deref().unwrap_or(&link.url)
    }
}

impl ProductLink {
    /// Human-readable product name, e.g. "NVIDIA RTX4090".
    pub fn product_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::config::StorefrontConfig;
use crate::reviews::ReviewStore;
use crate::services::WebhookClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the cart, the review board, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cart: CartStore,
    reviews: ReviewStore,
    webhook: Option<WebhookClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Loads the review board from its persistence file and builds the
    /// webhook client when a webhook URL is configured.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let reviews = ReviewStore::load(&config.reviews_path);
        let webhook = config
            .webhook_url()
            .map(|url| WebhookClient::new(url.clone()));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                cart: CartStore::new(),
                reviews,
                webhook,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the review board.
    #[must_use]
    pub fn reviews(&self) -> &ReviewStore {
        &self.inner.reviews
    }

    /// Get the webhook client, if one is configured.
    #[must_use]
    pub fn webhook(&self) -> Option<&WebhookClient> {
        self.inner.webhook.as_ref()
    }
}

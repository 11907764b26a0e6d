//! # iShop Shell Library
//!
//! Composition root and screens of the iShop app. `run()` is the whole
//! startup sequence; `main.rs` only calls it.
//!
//! ## Module Organization
//! ```text
//! ishop_shell/
//! ├── lib.rs           ◄─── You are here (startup & demo session)
//! ├── config.rs        ◄─── Feature flags: TOML + ISHOP_* env
//! ├── integrations.rs  ◄─── SDK launch plan
//! ├── state/
//! │   ├── mod.rs       ◄─── AppState (composition root)
//! │   └── cart.rs      ◄─── Cart manager + badge + cart screen
//! ├── commands/        ◄─── Cart, catalog and navigation commands
//! ├── catalog.rs       ◄─── Mock product catalog
//! ├── navigation.rs    ◄─── Menu, root screen, mock user
//! ├── settings.rs      ◄─── Settings rows and OnActivate
//! ├── ui.rs            ◄─── UI dispatch queue
//! └── error.rs         ◄─── ShellError, ApiError
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod integrations;
pub mod navigation;
pub mod settings;
pub mod state;
pub mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{AppConfiguration, CONFIG_PATH_ENV};
use error::ShellResult;
use integrations::{handles_open_url, start_integrations, TracingBootstrap};
use state::AppState;
use ui::{UiHandle, UiQueue};

/// Products the demo session puts in the cart.
const DEMO_PRODUCTS: [&str; 3] = ["oxford-shirt", "oxford-shirt", "stoneware-mug"];

/// Runs the shell.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging     tracing-subscriber, RUST_LOG or default      │
/// │  2. Load Configuration     ISHOP_CONFIG or platform config dir + env    │
/// │  3. Start Integrations     launch plan, in order, first failure aborts  │
/// │  4. Build AppState         bus → cart → badge/screen → menu/settings    │
/// │  5. Demo Session           background adds drained on the UI queue      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> ShellResult<()> {
    init_tracing();

    info!("Starting iShop");

    let config_path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
    let config = AppConfiguration::load(config_path)?;
    info!(
        title = %config.app.title,
        login_screen = config.login_screen_enabled(),
        "Configuration loaded"
    );

    let mut bootstrap = TracingBootstrap::default();
    let started = start_integrations(&config, &mut bootstrap)?;
    info!(
        integrations = started.len(),
        open_url = handles_open_url(&config),
        "Integrations started"
    );

    let state = Arc::new(AppState::build(config)?);
    info!(root = ?state.navigation.root(), "State initialized");

    run_demo_session(state).await;
    Ok(())
}

/// Simulates a browsing session: a background task posts cart actions, the
/// UI queue applies them.
async fn run_demo_session(state: Arc<AppState>) {
    let (handle, mut queue) = UiQueue::channel();
    state.cart.screen().appear();

    let producer = tokio::spawn(post_demo_actions(Arc::clone(&state), handle));

    let ran = queue.run_until_idle().await;
    if let Err(e) = producer.await {
        warn!(error = %e, "Demo producer failed");
    }

    let cart = commands::cart::get_cart(&state.cart);
    info!(
        tasks = ran,
        count = cart.count,
        badge = %cart.badge,
        subtotal = %cart.subtotal,
        "Demo session finished"
    );
}

async fn post_demo_actions(state: Arc<AppState>, ui: UiHandle) {
    for product_id in DEMO_PRODUCTS {
        let state = Arc::clone(&state);
        ui.post(move || match commands::cart::add_to_cart(&state.catalog, &state.cart, product_id) {
            Ok(cart) => info!(product_id, badge = %cart.badge, "Added to cart"),
            Err(e) => warn!(product_id, error = %e, "Add to cart failed"),
        });
    }

    let nav_state = Arc::clone(&state);
    ui.post(move || match commands::navigation::select_cart_tab(&nav_state.navigation) {
        Ok(destination) => info!(%destination, "Cart button tapped"),
        Err(e) => warn!(error = %e, "Cart button failed"),
    });

    ui.post(move || {
        let lines = state.cart.screen().lines().len();
        let cart = commands::cart::clear_cart(&state.cart);
        info!(lines, badge = %cart.badge, "Cart cleared");
    });
}

/// Filter used when `RUST_LOG` is unset, blank or unparseable.
pub const DEFAULT_LOG_FILTER: &str = "info,ishop_shell=debug,ishop_cart=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=ishop_cart=trace` - Show badge refreshes
/// - Default: INFO, DEBUG for iShop crates
fn init_tracing() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();
}

/// Builds the log filter from a `RUST_LOG` value.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter() {
        assert_eq!(DEFAULT_LOG_FILTER, "info,ishop_shell=debug,ishop_cart=debug");

        for unset in [None, Some(""), Some("   ")] {
            let filter = log_filter(unset).to_string();
            assert!(filter.contains("ishop_shell=debug"), "{}", filter);
            assert!(filter.contains("ishop_cart=debug"), "{}", filter);
        }
    }

    #[test]
    fn test_rust_log_overrides_default() {
        let filter = log_filter(Some("error")).to_string();
        assert_eq!(filter, "error");
        assert!(!filter.contains("ishop_shell"));
    }
}

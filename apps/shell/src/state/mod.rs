//! # State Module
//!
//! Composition root of the shell. Every long-lived object is built here once
//! and handed to commands by reference; nothing is global.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    AppState::build(config)                              │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────────────┐  │
//! │  │  CartState   │  │ NavigationState  │  │  SettingsState           │  │
//! │  │              │  │                  │  │                          │  │
//! │  │  bus         │  │  Mutex<Menu>     │  │  Mutex<SettingsScreen>   │  │
//! │  │  CartManager │  │  RootScreen      │  │                          │  │
//! │  │  CartBadge   │  │                  │  │                          │  │
//! │  │  CartScreen  │  │                  │  │                          │  │
//! │  └──────────────┘  └──────────────────┘  └──────────────────────────┘  │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐                                │
//! │  │  Catalog     │  │  ConfigState     │   read-only after build        │
//! │  └──────────────┘  └──────────────────┘                                │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartState: CartManager is mutex-guarded, observers use RwLock       │
//! │  • Navigation/Settings: Mutex for exclusive selection changes          │
//! │  • Catalog/Config: immutable                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;

pub use cart::CartState;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::info;

use crate::catalog::Catalog;
use crate::config::AppConfiguration;
use crate::error::ShellResult;
use crate::navigation::{Menu, RootScreen};
use crate::settings::{default_settings, LogActivation, OnActivate, SettingsScreen};

/// Menu selection and the screen shown at launch.
#[derive(Debug)]
pub struct NavigationState {
    menu: Mutex<Menu>,
    root: RootScreen,
}

impl NavigationState {
    pub fn new(root: RootScreen) -> Self {
        NavigationState {
            menu: Mutex::new(Menu::default()),
            root,
        }
    }

    pub fn root(&self) -> &RootScreen {
        &self.root
    }

    /// Runs `f` with exclusive access to the menu.
    pub fn with_menu<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Menu) -> R,
    {
        f(&mut self.menu.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

/// The settings screen.
#[derive(Debug)]
pub struct SettingsState {
    screen: Mutex<SettingsScreen>,
}

impl SettingsState {
    pub fn new(action: Arc<dyn OnActivate>) -> Self {
        SettingsState {
            screen: Mutex::new(SettingsScreen::new(default_settings(action))),
        }
    }

    pub fn screen(&self) -> MutexGuard<'_, SettingsScreen> {
        self.screen.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Configuration the shell was started with.
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    config: AppConfiguration,
}

impl ConfigState {
    pub fn new(config: AppConfiguration) -> Self {
        ConfigState { config }
    }

    pub fn config(&self) -> &AppConfiguration {
        &self.config
    }
}

/// Everything the shell's screens and commands operate on.
#[derive(Debug)]
pub struct AppState {
    pub cart: CartState,
    pub navigation: NavigationState,
    pub settings: SettingsState,
    pub catalog: Catalog,
    pub config: ConfigState,
}

impl AppState {
    /// Builds the shell with settings rows that only log their taps.
    pub fn build(config: AppConfiguration) -> ShellResult<Self> {
        Self::build_with_action(config, Arc::new(LogActivation))
    }

    /// Builds the shell, giving every settings row `action`.
    pub fn build_with_action(
        config: AppConfiguration,
        action: Arc<dyn OnActivate>,
    ) -> ShellResult<Self> {
        let catalog = Catalog::mock()?;
        let root = RootScreen::for_config(&config);

        info!(
            categories = catalog.categories().len(),
            login_screen = config.login_screen_enabled(),
            "App state built"
        );

        Ok(AppState {
            cart: CartState::new(),
            navigation: NavigationState::new(root),
            settings: SettingsState::new(action),
            catalog,
            config: ConfigState::new(config),
        })
    }
}

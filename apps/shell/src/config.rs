//! # App Configuration
//!
//! Static feature flags that decide which screens and SDKs the shell wires up.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ISHOP_LOGIN_SCREEN=1                                               │
//! │     ISHOP_STRIPE=true  ISHOP_STRIPE_PUBLISHABLE_KEY=pk_test_...        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/ishop/ishop.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.ishop.iShop/ishop.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Login screen off, every integration off                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [app]
//! title = "iShop"
//!
//! [login]
//! screen_enabled = true
//! twitter_enabled = false
//! facebook_enabled = true
//! firebase_enabled = true
//!
//! [payments]
//! stripe_enabled = true
//! stripe_publishable_key = "pk_test_123"
//! apple_pay_enabled = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ShellError, ShellResult};

/// Title shown on the home screen navigation bar.
pub const DEFAULT_APP_TITLE: &str = "iShop";

/// Environment variable pointing at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "ISHOP_CONFIG";

// =============================================================================
// Sections
// =============================================================================

/// General app settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    DEFAULT_APP_TITLE.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            title: default_title(),
        }
    }
}

/// Login screen and social login providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSettings {
    /// Show the login screen before the host screen.
    /// All SDK integrations hang off this flag.
    #[serde(default)]
    pub screen_enabled: bool,

    #[serde(default)]
    pub twitter_enabled: bool,

    #[serde(default)]
    pub facebook_enabled: bool,

    /// Firebase backs email login and crash reporting.
    #[serde(default)]
    pub firebase_enabled: bool,
}

/// Payment providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSettings {
    #[serde(default)]
    pub stripe_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_publishable_key: Option<String>,

    #[serde(default)]
    pub apple_pay_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_pay_merchant_identifier: Option<String>,
}

// =============================================================================
// App Configuration
// =============================================================================

/// Complete shell configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfiguration {
    #[serde(default)]
    pub app: AppSettings,

    #[serde(default)]
    pub login: LoginSettings,

    #[serde(default)]
    pub payments: PaymentSettings,
}

impl AppConfiguration {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`ishop.toml`), if it exists
    /// 3. `ISHOP_*` environment variables
    pub fn load(config_path: Option<PathBuf>) -> ShellResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading app config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file without applying overrides.
    pub fn from_file(path: &Path) -> ShellResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ShellResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ShellError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ShellError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ShellError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "App config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ShellResult<()> {
        if self.app.title.trim().is_empty() {
            return Err(ShellError::InvalidConfig("app title must not be empty".into()));
        }

        if self.payments.stripe_enabled {
            match self.payments.stripe_publishable_key.as_deref() {
                Some(key) if key.starts_with("pk_") => {}
                Some(_) => {
                    return Err(ShellError::InvalidConfig(
                        "Stripe publishable key must start with pk_".into(),
                    ))
                }
                None => {
                    return Err(ShellError::InvalidConfig(
                        "Stripe is enabled but no publishable key is set".into(),
                    ))
                }
            }
        }

        if self.payments.apple_pay_enabled
            && self
                .payments
                .apple_pay_merchant_identifier
                .as_deref()
                .map_or(true, |id| id.trim().is_empty())
        {
            return Err(ShellError::InvalidConfig(
                "Apple Pay is enabled but no merchant identifier is set".into(),
            ));
        }

        Ok(())
    }

    /// Applies `ISHOP_*` overrides read through `lookup`.
    ///
    /// Unparseable booleans are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str, target: &mut bool| {
            if let Some(raw) = lookup(key) {
                match parse_flag(&raw) {
                    Some(value) => {
                        debug!(key, value, "Overriding flag from environment");
                        *target = value;
                    }
                    None => warn!(key, value = %raw, "Ignoring unparseable flag in environment"),
                }
            }
        };

        flag("ISHOP_LOGIN_SCREEN", &mut self.login.screen_enabled);
        flag("ISHOP_TWITTER_LOGIN", &mut self.login.twitter_enabled);
        flag("ISHOP_FACEBOOK_LOGIN", &mut self.login.facebook_enabled);
        flag("ISHOP_FIREBASE", &mut self.login.firebase_enabled);
        flag("ISHOP_STRIPE", &mut self.payments.stripe_enabled);
        flag("ISHOP_APPLE_PAY", &mut self.payments.apple_pay_enabled);

        if let Some(key) = lookup("ISHOP_STRIPE_PUBLISHABLE_KEY") {
            self.payments.stripe_publishable_key = Some(key);
        }

        if let Some(id) = lookup("ISHOP_APPLE_MERCHANT_ID") {
            self.payments.apple_pay_merchant_identifier = Some(id);
        }

        if let Some(title) = lookup("ISHOP_APP_TITLE") {
            self.app.title = title;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ishop", "iShop")
            .map(|dirs| dirs.config_dir().join("ishop.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn login_screen_enabled(&self) -> bool {
        self.login.screen_enabled
    }

    pub fn twitter_login_enabled(&self) -> bool {
        self.login.twitter_enabled
    }

    pub fn facebook_login_enabled(&self) -> bool {
        self.login.facebook_enabled
    }

    pub fn firebase_integration_enabled(&self) -> bool {
        self.login.firebase_enabled
    }

    pub fn stripe_payment_enabled(&self) -> bool {
        self.payments.stripe_enabled
    }

    pub fn apple_payment_enabled(&self) -> bool {
        self.payments.apple_pay_enabled
    }
}

/// Parses the boolean spellings accepted in environment overrides.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

//! # SDK Launch Plan
//!
//! Which third-party SDKs start at launch, derived only from configuration.
//!
//! ```text
//! login.screen_enabled?
//!   ├── no  ──► nothing starts
//!   └── yes ──► Twitter? ─► Firebase? ─► Stripe? ─► Apple Pay? ─► Facebook?
//! ```
//!
//! The SDKs themselves are external collaborators behind
//! [`IntegrationBootstrap`]; this module only decides what to start and in
//! which order.

use std::fmt;

use tracing::info;

use crate::config::AppConfiguration;
use crate::error::{ShellError, ShellResult};

/// A third-party SDK the shell can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integration {
    TwitterLogin,
    Firebase,
    StripePayments,
    ApplePay,
    FacebookLogin,
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Integration::TwitterLogin => "Twitter login",
            Integration::Firebase => "Firebase",
            Integration::StripePayments => "Stripe payments",
            Integration::ApplePay => "Apple Pay",
            Integration::FacebookLogin => "Facebook login",
        };
        f.write_str(name)
    }
}

/// Integrations to start, in start order.
pub fn launch_plan(config: &AppConfiguration) -> Vec<Integration> {
    if !config.login_screen_enabled() {
        return Vec::new();
    }

    [
        (config.twitter_login_enabled(), Integration::TwitterLogin),
        (config.firebase_integration_enabled(), Integration::Firebase),
        (config.stripe_payment_enabled(), Integration::StripePayments),
        (config.apple_payment_enabled(), Integration::ApplePay),
        (config.facebook_login_enabled(), Integration::FacebookLogin),
    ]
    .into_iter()
    .filter_map(|(enabled, integration)| enabled.then_some(integration))
    .collect()
}

/// True when inbound URLs (OAuth callbacks) must be routed to the Facebook SDK.
pub fn handles_open_url(config: &AppConfiguration) -> bool {
    config.login_screen_enabled() && config.facebook_login_enabled()
}

/// Starts one SDK. Implemented by the platform layer.
pub trait IntegrationBootstrap {
    fn start(&mut self, integration: Integration, config: &AppConfiguration) -> ShellResult<()>;
}

/// Bootstrap that records what would start and logs it.
#[derive(Debug, Default)]
pub struct TracingBootstrap {
    started: Vec<Integration>,
}

impl TracingBootstrap {
    pub fn started(&self) -> &[Integration] {
        &self.started
    }
}

impl IntegrationBootstrap for TracingBootstrap {
    fn start(&mut self, integration: Integration, config: &AppConfiguration) -> ShellResult<()> {
        match integration {
            Integration::StripePayments => {
                let key = config.payments.stripe_publishable_key.as_deref().ok_or_else(|| {
                    ShellError::IntegrationFailed {
                        integration: integration.to_string(),
                        reason: "missing publishable key".into(),
                    }
                })?;
                let key_prefix: String = key.chars().take(7).collect();
                info!(%integration, %key_prefix, "Integration started");
            }
            Integration::ApplePay => {
                let merchant = config
                    .payments
                    .apple_pay_merchant_identifier
                    .as_deref()
                    .unwrap_or_default();
                info!(%integration, merchant, "Integration started");
            }
            _ => info!(%integration, "Integration started"),
        }

        self.started.push(integration);
        Ok(())
    }
}

/// Runs the launch plan against `bootstrap`, stopping at the first failure.
pub fn start_integrations<B>(
    config: &AppConfiguration,
    bootstrap: &mut B,
) -> ShellResult<Vec<Integration>>
where
    B: IntegrationBootstrap + ?Sized,
{
    let plan = launch_plan(config);
    for &integration in &plan {
        bootstrap.start(integration, config)?;
    }
    Ok(plan)
}

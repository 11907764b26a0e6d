//! # Settings Screen
//!
//! User settings rows. What a row does when tapped is an [`OnActivate`]
//! capability supplied by whoever builds the list.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │  Profile                               >  │  More
//! │  Payment Info                             │  Text
//! │  Email Notifications                [ ]   │  Toggle (off)
//! │  Push Notifications                 [x]   │  Toggle (on)
//! │  Privacy Policy                        >  │  More
//! │  Terms & Conditions                    >  │  More
//! └───────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::navigation::Destination;

/// How a settings row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingsStyle {
    /// Disclosure indicator, opens another screen.
    More,
    /// Plain text row.
    Text,
    /// Row with a switch.
    Toggle,
}

/// What an action is told about the row that fired it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationContext {
    /// Screen hosting the row.
    pub screen: Destination,
    pub title: String,
    /// Toggle state after the tap, for toggle rows.
    pub toggle_value: Option<bool>,
}

/// Capability invoked when a row is tapped.
pub trait OnActivate: Send + Sync {
    fn on_activate(&self, context: &ActivationContext);
}

impl<F> OnActivate for F
where
    F: Fn(&ActivationContext) + Send + Sync,
{
    fn on_activate(&self, context: &ActivationContext) {
        self(context)
    }
}

/// Default action: log the tap.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogActivation;

impl OnActivate for LogActivation {
    fn on_activate(&self, context: &ActivationContext) {
        info!(
            screen = %context.screen,
            item = %context.title,
            toggle = ?context.toggle_value,
            "Settings item activated"
        );
    }
}

/// One settings row.
#[derive(Clone)]
pub struct SettingsItem {
    title: String,
    style: SettingsStyle,
    toggle_value: Option<bool>,
    action: Arc<dyn OnActivate>,
}

impl SettingsItem {
    pub fn new(
        title: impl Into<String>,
        style: SettingsStyle,
        action: Arc<dyn OnActivate>,
    ) -> Self {
        SettingsItem {
            title: title.into(),
            style,
            toggle_value: None,
            action,
        }
    }

    /// A toggle row starting at `value`.
    pub fn toggle(title: impl Into<String>, value: bool, action: Arc<dyn OnActivate>) -> Self {
        SettingsItem {
            toggle_value: Some(value),
            ..SettingsItem::new(title, SettingsStyle::Toggle, action)
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn style(&self) -> SettingsStyle {
        self.style
    }

    pub fn toggle_value(&self) -> Option<bool> {
        self.toggle_value
    }

    /// Handles a tap: flips the switch of a toggle row, then runs the action.
    pub fn activate(&mut self) {
        if let Some(value) = self.toggle_value.as_mut() {
            *value = !*value;
        }

        let context = ActivationContext {
            screen: Destination::Settings,
            title: self.title.clone(),
            toggle_value: self.toggle_value,
        };
        self.action.on_activate(&context);
    }
}

impl fmt::Debug for SettingsItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsItem")
            .field("title", &self.title)
            .field("style", &self.style)
            .field("toggle_value", &self.toggle_value)
            .finish_non_exhaustive()
    }
}

/// The stock settings rows, all sharing `action`.
pub fn default_settings(action: Arc<dyn OnActivate>) -> Vec<SettingsItem> {
    vec![
        SettingsItem::new("Profile", SettingsStyle::More, Arc::clone(&action)),
        SettingsItem::new("Payment Info", SettingsStyle::Text, Arc::clone(&action)),
        SettingsItem::toggle("Email Notifications", false, Arc::clone(&action)),
        SettingsItem::toggle("Push Notifications", true, Arc::clone(&action)),
        SettingsItem::new("Privacy Policy", SettingsStyle::More, Arc::clone(&action)),
        SettingsItem::new("Terms & Conditions", SettingsStyle::More, action),
    ]
}

/// The settings screen.
#[derive(Debug)]
pub struct SettingsScreen {
    items: Vec<SettingsItem>,
}

impl SettingsScreen {
    pub fn new(items: Vec<SettingsItem>) -> Self {
        SettingsScreen { items }
    }

    pub fn items(&self) -> &[SettingsItem] {
        &self.items
    }

    /// Taps the row at `index`. Returns `None` for an out-of-range row.
    pub fn activate(&mut self, index: usize) -> Option<&SettingsItem> {
        let item = self.items.get_mut(index)?;
        item.activate();
        Some(item)
    }
}

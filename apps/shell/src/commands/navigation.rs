//! Menu and settings commands.

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::navigation::{Destination, NavigationItem};
use crate::settings::{SettingsItem, SettingsStyle};
use crate::state::{NavigationState, SettingsState};

/// Menu rows and the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub items: Vec<NavigationItem>,
    pub selected: Option<Destination>,
}

/// One settings row as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRow {
    pub title: String,
    pub style: SettingsStyle,
    pub toggle_value: Option<bool>,
}

impl From<&SettingsItem> for SettingsRow {
    fn from(item: &SettingsItem) -> Self {
        SettingsRow {
            title: item.title().to_string(),
            style: item.style(),
            toggle_value: item.toggle_value(),
        }
    }
}

/// Gets the menu.
pub fn get_menu(navigation: &NavigationState) -> MenuResponse {
    debug!("get_menu command");
    navigation.with_menu(|menu| MenuResponse {
        items: menu.items().to_vec(),
        selected: menu.selected().map(|item| item.destination),
    })
}

/// Selects a menu row.
///
/// ## Errors
/// `VALIDATION_ERROR` for an index past the last row.
pub fn select_menu_item(
    navigation: &NavigationState,
    index: usize,
) -> Result<Destination, ApiError> {
    debug!(index, "select_menu_item command");
    navigation
        .with_menu(|menu| menu.select(index).map(|item| item.destination))
        .ok_or_else(|| ApiError::validation(format!("No menu item at index {}", index)))
}

/// The toolbar cart button: jumps to the cart row of the menu.
pub fn select_cart_tab(navigation: &NavigationState) -> Result<Destination, ApiError> {
    debug!("select_cart_tab command");
    navigation
        .with_menu(|menu| menu.select_cart().map(|item| item.destination))
        .ok_or_else(|| ApiError::internal("Menu has no cart entry"))
}

/// Gets the settings rows.
pub fn get_settings(settings: &SettingsState) -> Vec<SettingsRow> {
    debug!("get_settings command");
    settings.screen().items().iter().map(SettingsRow::from).collect()
}

/// Taps a settings row.
///
/// ## Errors
/// `VALIDATION_ERROR` for an index past the last row.
pub fn activate_setting(settings: &SettingsState, index: usize) -> Result<SettingsRow, ApiError> {
    debug!(index, "activate_setting command");
    settings
        .screen()
        .activate(index)
        .map(SettingsRow::from)
        .ok_or_else(|| ApiError::validation(format!("No settings item at index {}", index)))
}

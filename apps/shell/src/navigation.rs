//! # Navigation
//!
//! Side-bar menu, the signed-in user shown in its header, and the choice of
//! root screen at launch.
//!
//! ```text
//! login.screen_enabled?
//!   ├── yes ──► RootScreen::Login
//!   └── no  ──► RootScreen::Host { user: John Smith }
//!                  └── Menu: Home | Shopping Cart | Settings | Logout
//! ```

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::AppConfiguration;

/// Where a menu row leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Destination {
    Home,
    ShoppingCart,
    Settings,
    Logout,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Destination::Home => "home",
            Destination::ShoppingCart => "shopping_cart",
            Destination::Settings => "settings",
            Destination::Logout => "logout",
        };
        f.write_str(name)
    }
}

/// Presentation style of the navigation host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HostStyle {
    #[default]
    SideBar,
}

/// A row in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub title: String,
    pub destination: Destination,
}

impl NavigationItem {
    pub fn new(title: impl Into<String>, destination: Destination) -> Self {
        NavigationItem {
            title: title.into(),
            destination,
        }
    }
}

/// Title of the cart menu row and of the cart screen.
pub const SHOPPING_CART_TITLE: &str = "Shopping Cart";

/// Menu row the cart button jumps to.
pub const CART_MENU_INDEX: usize = 1;

/// The navigation menu with its current selection.
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<NavigationItem>,
    style: HostStyle,
    selected: usize,
}

impl Menu {
    pub fn new(items: Vec<NavigationItem>, style: HostStyle) -> Self {
        Menu {
            items,
            style,
            selected: 0,
        }
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    pub fn style(&self) -> HostStyle {
        self.style
    }

    /// Currently selected row.
    pub fn selected(&self) -> Option<&NavigationItem> {
        self.items.get(self.selected)
    }

    /// Selects the row at `index`. Out-of-range indices leave the selection
    /// unchanged and return `None`.
    pub fn select(&mut self, index: usize) -> Option<&NavigationItem> {
        if index >= self.items.len() {
            debug!(index, "Menu selection out of range");
            return None;
        }
        self.selected = index;
        let item = &self.items[index];
        debug!(destination = %item.destination, "Menu selection changed");
        Some(item)
    }

    /// What the toolbar cart button does.
    pub fn select_cart(&mut self) -> Option<&NavigationItem> {
        self.select(CART_MENU_INDEX)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Menu::new(
            vec![
                NavigationItem::new("Home", Destination::Home),
                NavigationItem::new(SHOPPING_CART_TITLE, Destination::ShoppingCart),
                NavigationItem::new("Settings", Destination::Settings),
                NavigationItem::new("Logout", Destination::Logout),
            ],
            HostStyle::SideBar,
        )
    }
}

const MOCK_AVATAR_URL: &str =
    "https://pbs.twimg.com/profile_images/681369932207013888/CHESpTzF.jpg";

/// User shown in the menu header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: Option<String>,
}

impl User {
    /// Placeholder user when no login screen is shown.
    pub fn mock() -> Self {
        User {
            first_name: "John".into(),
            last_name: "Smith".into(),
            avatar_url: Some(MOCK_AVATAR_URL.into()),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Screen presented at launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootScreen {
    Login,
    Host { user: User },
}

impl RootScreen {
    pub fn for_config(config: &AppConfiguration) -> Self {
        if config.login_screen_enabled() {
            RootScreen::Login
        } else {
            RootScreen::Host { user: User::mock() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu() {
        let menu = Menu::default();
        let titles: Vec<&str> = menu.items().iter().map(|i| i.title.as_str()).collect();

        assert_eq!(titles, vec!["Home", "Shopping Cart", "Settings", "Logout"]);
        assert_eq!(menu.style(), HostStyle::SideBar);
        assert_eq!(menu.selected().map(|i| i.destination), Some(Destination::Home));
    }

    #[test]
    fn test_cart_button_selects_cart_row() {
        let mut menu = Menu::default();

        let item = menu.select_cart().unwrap();
        assert_eq!(item.destination, Destination::ShoppingCart);
        assert_eq!(menu.selected().unwrap().title, SHOPPING_CART_TITLE);
    }

    #[test]
    fn test_out_of_range_select_keeps_selection() {
        let mut menu = Menu::default();
        menu.select(2);

        assert!(menu.select(9).is_none());
        assert_eq!(menu.selected().unwrap().destination, Destination::Settings);
    }

    #[test]
    fn test_root_screen_follows_login_flag() {
        let mut config = AppConfiguration::default();
        config.login.screen_enabled = false;
        match RootScreen::for_config(&config) {
            RootScreen::Host { user } => assert_eq!(user.full_name(), "John Smith"),
            other => panic!("unexpected root screen: {:?}", other),
        }

        config.login.screen_enabled = true;
        assert_eq!(RootScreen::for_config(&config), RootScreen::Login);
    }
}

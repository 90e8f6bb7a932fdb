//! Menu catalog records and option pricing.

use crate::menu_actor::MenuError;
use crate::model::{LineItem, LineItemId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items. Catalog codes start at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A menu category with its display name, e.g. `hamburger` shown as "Burgers".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
}

impl MenuCategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A priced option attached to a menu item, e.g. "set (fries + cola)" for +3000.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    pub name: String,
    pub price: u64,
}

impl MenuOption {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A sellable item in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: u64,
    pub category: String,
    pub description: String,
    /// Mutually exclusive variants; at most one is chosen.
    pub set_options: Vec<MenuOption>,
    /// Independent extras; any subset is chosen.
    pub add_options: Vec<MenuOption>,
}

/// Payload for creating a menu item. Matches the catalog's JSON shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    pub price: u64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub set_options: Vec<MenuOption>,
    #[serde(default)]
    pub add_options: Vec<MenuOption>,
}

/// Partial update for a menu item; `None` fields are left as they are.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<u64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub set_options: Option<Vec<MenuOption>>,
    pub add_options: Option<Vec<MenuOption>>,
}

/// Which options the customer picked, by index into the item's option lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSelection {
    pub set_option: Option<usize>,
    pub add_options: Vec<usize>,
}

impl OptionSelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_set(mut self, index: usize) -> Self {
        self.set_option = Some(index);
        self
    }

    pub fn with_add(mut self, index: usize) -> Self {
        self.add_options.push(index);
        self
    }

    fn sorted_adds(&self) -> Vec<usize> {
        let mut adds = self.add_options.clone();
        adds.sort_unstable();
        adds
    }
}

impl MenuItem {
    /// Builds a line item for `quantity` units of this item with the given options.
    ///
    /// The unit price is the base price plus every chosen option. The line item id
    /// encodes the selection, so identical selections aggregate in the cart and
    /// different ones stay separate.
    pub fn line_item(
        &self,
        quantity: u32,
        selection: &OptionSelection,
    ) -> Result<LineItem, MenuError> {
        let adds = selection.sorted_adds();
        if adds.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(MenuError::UnknownOption(format!(
                "add option listed twice for {}",
                self.id
            )));
        }

        let mut price = self.price;
        let mut labels = Vec::new();

        if let Some(index) = selection.set_option {
            let option = self.set_options.get(index).ok_or_else(|| {
                MenuError::UnknownOption(format!("set option {index} for {}", self.id))
            })?;
            price = self.add_option_price(price, option)?;
            labels.push(option.name.clone());
        }
        for &index in &adds {
            let option = self.add_options.get(index).ok_or_else(|| {
                MenuError::UnknownOption(format!("add option {index} for {}", self.id))
            })?;
            price = self.add_option_price(price, option)?;
            labels.push(option.name.clone());
        }

        let id = LineItemId::for_selection(self.id, selection.set_option, &adds);
        Ok(LineItem::new(id, price, quantity)
            .with_name(self.name.clone())
            .with_options(labels))
    }

    fn add_option_price(&self, price: u64, option: &MenuOption) -> Result<u64, MenuError> {
        price
            .checked_add(option.price)
            .ok_or_else(|| MenuError::PriceOverflow(self.id.to_string()))
    }
}

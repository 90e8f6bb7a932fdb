use crate::model::MenuItemId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// Identity of one distinct selection in a cart, not of a single unit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(pub String);

impl LineItemId {
    /// `100` for a plain item, `100-s1-a0-a1` with a set option and two add options.
    /// `adds` must already be sorted.
    pub fn for_selection(menu_item: MenuItemId, set_option: Option<usize>, adds: &[usize]) -> Self {
        let mut id = menu_item.to_string();
        if let Some(index) = set_option {
            let _ = write!(id, "-s{index}");
        }
        for index in adds {
            let _ = write!(id, "-a{index}");
        }
        Self(id)
    }
}

impl From<&str> for LineItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LineItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in the cart. `price` is the unit price captured when the item was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    #[serde(default)]
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    #[serde(default)]
    pub options: Vec<String>,
}

impl LineItem {
    pub fn new(id: impl Into<LineItemId>, price: u64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            price,
            quantity,
            options: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// `price * quantity`, or `None` on overflow.
    pub fn subtotal(&self) -> Option<u64> {
        self.price.checked_mul(u64::from(self.quantity))
    }
}

//! Custom actions for the Menu actor.

use crate::model::{LineItem, OptionSelection};

/// Operations on a menu item beyond standard CRUD.
#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Prices `quantity` units of the item with the chosen options.
    ///
    /// # Errors
    /// Fails with `UnknownOption` if the selection references an option the item does not offer.
    PriceSelection {
        quantity: u32,
        selection: OptionSelection,
    },
}

/// Results from MenuActions - variants match 1:1 with MenuAction
#[derive(Debug, Clone)]
pub enum MenuActionResult {
    /// A line item carrying the unit price at the time of the request.
    PriceSelection(LineItem),
}

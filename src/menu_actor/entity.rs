//! [`ActorEntity`] implementation for [`MenuItem`].

use super::actions::{MenuAction, MenuActionResult};
use super::MenuError;
use crate::framework::ActorEntity;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;

fn require(field: &str, value: &str) -> Result<(), MenuError> {
    if value.trim().is_empty() {
        return Err(MenuError::ValidationError(format!("{field} must not be empty")));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        require("name", &params.name)?;
        require("category", &params.category)?;
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            category: params.category,
            description: params.description,
            set_options: params.set_options,
            add_options: params.add_options,
        })
    }

    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(name) = update.name {
            require("name", &name)?;
            self.name = name;
        }
        if let Some(category) = update.category {
            require("category", &category)?;
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(set_options) = update.set_options {
            self.set_options = set_options;
        }
        if let Some(add_options) = update.add_options {
            self.add_options = add_options;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MenuAction,
        _ctx: &(),
    ) -> Result<MenuActionResult, MenuError> {
        match action {
            MenuAction::PriceSelection {
                quantity,
                selection,
            } => Ok(MenuActionResult::PriceSelection(
                self.line_item(quantity, &selection)?,
            )),
        }
    }
}

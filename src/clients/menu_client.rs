use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
use crate::model::{
    LineItem, MenuCategory, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, OptionSelection,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
///
/// Serves the catalog to registers and the admin menu-management screens.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_menu_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Like `get`, but a missing item is an error.
    pub async fn menu_item(&self, id: MenuItemId) -> Result<MenuItem, MenuError> {
        self.get(id)
            .await?
            .ok_or_else(|| MenuError::NotFound(id.to_string()))
    }

    /// Items in one category, in catalog order.
    #[instrument(skip(self))]
    pub async fn menu_items_in(&self, category: &str) -> Result<Vec<MenuItem>, MenuError> {
        let mut items = self.list().await?;
        items.retain(|item| item.category == category);
        Ok(items)
    }

    /// Distinct categories in order of first appearance in the catalog.
    pub async fn categories(&self) -> Result<Vec<String>, MenuError> {
        let mut categories: Vec<String> = Vec::new();
        for item in self.list().await? {
            if !categories.contains(&item.category) {
                categories.push(item.category);
            }
        }
        Ok(categories)
    }

    /// The categories in use, each with its display name from `names`.
    ///
    /// Categories without an entry in `names` are shown by id.
    pub async fn named_categories(&self, names: &[MenuCategory]) -> Result<Vec<MenuCategory>, MenuError> {
        Ok(self
            .categories()
            .await?
            .into_iter()
            .map(|id| match names.iter().find(|category| category.id == id) {
                Some(named) => named.clone(),
                None => MenuCategory::new(id.clone(), id),
            })
            .collect())
    }

    /// Prices `quantity` units of an item with the chosen options.
    #[instrument(skip(self))]
    pub async fn price_selection(
        &self,
        id: MenuItemId,
        quantity: u32,
        selection: OptionSelection,
    ) -> Result<LineItem, MenuError> {
        debug!("Sending request");
        let action = MenuAction::PriceSelection {
            quantity,
            selection,
        };
        match self
            .inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)?
        {
            MenuActionResult::PriceSelection(line) => Ok(line),
        }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError<MenuError>) -> Self::Error {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            other => MenuError::from(other.to_string()),
        }
    }
}

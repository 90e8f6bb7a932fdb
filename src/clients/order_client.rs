use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderId, OrderPayload, SalesReport};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Payload validation happens in the Order actor's `from_create_params`.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, payload), fields(total = payload.total_price))]
    pub async fn create_order(&self, payload: OrderPayload) -> Result<OrderId, OrderError> {
        debug!(?payload, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    pub async fn orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    /// Statistics over every order submitted so far.
    #[instrument(skip(self))]
    pub async fn sales_report(&self) -> Result<SalesReport, OrderError> {
        let orders = self.list().await?;
        Ok(SalesReport::from_orders(&orders))
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError<OrderError>) -> Self::Error {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::from(other.to_string()),
        }
    }
}

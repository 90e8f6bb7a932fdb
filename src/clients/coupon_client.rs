use crate::clients::actor_client::ActorClient;
use crate::coupon_actor::CouponError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{normalize_code, Coupon, CouponCreate, CouponId, CouponUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Coupon actor.
#[derive(Clone)]
pub struct CouponClient {
    inner: ResourceClient<Coupon>,
}

impl CouponClient {
    pub fn new(inner: ResourceClient<Coupon>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_coupon(&self, params: CouponCreate) -> Result<CouponId, CouponError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_coupon(&self, id: CouponId, update: CouponUpdate) -> Result<Coupon, CouponError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    #[instrument(skip(self))]
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, CouponError> {
        let code = normalize_code(code);
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|coupon| coupon.code == code))
    }

    /// A coupon that can be applied right now.
    pub async fn redeemable(&self, code: &str) -> Result<Coupon, CouponError> {
        let coupon = self
            .find_by_code(code)
            .await?
            .ok_or_else(|| CouponError::NotFound(code.to_string()))?;
        if !coupon.active {
            return Err(CouponError::Inactive(coupon.code));
        }
        Ok(coupon)
    }
}

#[async_trait]
impl ActorClient<Coupon> for CouponClient {
    type Error = CouponError;

    fn inner(&self) -> &ResourceClient<Coupon> {
        &self.inner
    }

    fn map_error(e: FrameworkError<CouponError>) -> Self::Error {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => CouponError::NotFound(id),
            other => CouponError::from(other.to_string()),
        }
    }
}

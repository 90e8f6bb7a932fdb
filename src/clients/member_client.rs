use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::member_actor::{MemberAction, MemberActionResult, MemberError};
use crate::model::{normalize_phone, Member, MemberCreate, MemberId, MemberUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Member actor.
#[derive(Clone)]
pub struct MemberClient {
    inner: ResourceClient<Member>,
}

impl MemberClient {
    pub fn new(inner: ResourceClient<Member>) -> Self {
        Self { inner }
    }

    /// Registers a member after checking no one else uses the phone number.
    ///
    /// The check and the create are two requests; concurrent registrations of the
    /// same number from different registers are not serialised against each other.
    #[instrument(skip(self))]
    pub async fn register_member(&self, params: MemberCreate) -> Result<MemberId, MemberError> {
        debug!("Sending request");
        if let Some(existing) = self.find_by_phone(&params.phone).await? {
            return Err(MemberError::AlreadyExists(existing.phone));
        }
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_member(&self, id: MemberId, update: MemberUpdate) -> Result<Member, MemberError> {
        debug!("Sending request");
        if let Some(phone) = &update.phone {
            if let Some(existing) = self.find_by_phone(phone).await? {
                if existing.id != id {
                    return Err(MemberError::AlreadyExists(existing.phone));
                }
            }
        }
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Like `get`, but a missing member is an error.
    pub async fn member(&self, id: MemberId) -> Result<Member, MemberError> {
        self.get(id)
            .await?
            .ok_or_else(|| MemberError::NotFound(id.to_string()))
    }

    /// Finds a member by phone number in any formatting.
    #[instrument(skip(self))]
    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<Member>, MemberError> {
        let digits = normalize_phone(phone);
        if digits.is_empty() {
            return Ok(None);
        }
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|member| member.phone == digits))
    }

    /// Spends points; returns the remaining balance.
    #[instrument(skip(self))]
    pub async fn redeem_points(&self, id: MemberId, points: u64) -> Result<u64, MemberError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, MemberAction::RedeemPoints(points))
            .await
            .map_err(Self::map_error)?
        {
            MemberActionResult::RedeemPoints(balance) => Ok(balance),
            other => Err(MemberError::from(format!("unexpected result {other:?}"))),
        }
    }

    /// Credits points; returns the new balance.
    #[instrument(skip(self))]
    pub async fn accrue_points(&self, id: MemberId, points: u64) -> Result<u64, MemberError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, MemberAction::AccruePoints(points))
            .await
            .map_err(Self::map_error)?
        {
            MemberActionResult::AccruePoints(balance) => Ok(balance),
            other => Err(MemberError::from(format!("unexpected result {other:?}"))),
        }
    }
}

#[async_trait]
impl ActorClient<Member> for MemberClient {
    type Error = MemberError;

    fn inner(&self) -> &ResourceClient<Member> {
        &self.inner
    }

    fn map_error(e: FrameworkError<MemberError>) -> Self::Error {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => MemberError::NotFound(id),
            other => MemberError::from(other.to_string()),
        }
    }
}

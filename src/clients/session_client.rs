use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    LineItem, LineItemId, Member, MemberId, MenuItemId, OptionSelection, OrderConfirmation,
    PaymentMethod,
};
use crate::session::{OrderSession, SessionId, SessionSnapshot};
use crate::session_actor::{CheckoutError, SessionAction, SessionActionResult, SessionOpen};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client a register uses to drive its order session.
///
/// Cart operations return the session snapshot after the change, so the caller
/// always renders a consistent view.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<OrderSession>,
}

impl SessionClient {
    pub fn new(inner: ResourceClient<OrderSession>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn open_session(&self, register: &str) -> Result<SessionId, CheckoutError> {
        debug!("Sending request");
        let params = SessionOpen {
            register: register.to_string(),
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    pub async fn snapshot(&self, id: SessionId) -> Result<SessionSnapshot, CheckoutError> {
        self.get(id)
            .await?
            .map(|session| session.snapshot())
            .ok_or_else(|| CheckoutError::NotFound(id.to_string()))
    }

    /// Discards the session entirely. Use [`clear`](Self::clear) to start a new order on it.
    pub async fn close_session(&self, id: SessionId) -> Result<(), CheckoutError> {
        self.delete(id).await
    }

    #[instrument(skip(self))]
    async fn act(
        &self,
        id: SessionId,
        action: SessionAction,
    ) -> Result<SessionActionResult, CheckoutError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    async fn act_for_snapshot(
        &self,
        id: SessionId,
        action: SessionAction,
    ) -> Result<SessionSnapshot, CheckoutError> {
        match self.act(id, action).await? {
            SessionActionResult::Snapshot(snapshot) => Ok(snapshot),
            other => Err(unexpected(other)),
        }
    }

    async fn act_for_member(
        &self,
        id: SessionId,
        action: SessionAction,
    ) -> Result<Option<Member>, CheckoutError> {
        match self.act(id, action).await? {
            SessionActionResult::Member(member) => Ok(member),
            other => Err(unexpected(other)),
        }
    }

    pub async fn add_item(&self, id: SessionId, item: LineItem) -> Result<SessionSnapshot, CheckoutError> {
        self.act_for_snapshot(id, SessionAction::AddItem(item)).await
    }

    pub async fn add_menu_item(
        &self,
        id: SessionId,
        menu_item: MenuItemId,
        quantity: u32,
        selection: OptionSelection,
    ) -> Result<SessionSnapshot, CheckoutError> {
        let action = SessionAction::AddMenuItem {
            menu_item,
            quantity,
            selection,
        };
        self.act_for_snapshot(id, action).await
    }

    pub async fn remove_item(&self, id: SessionId, item: LineItemId) -> Result<SessionSnapshot, CheckoutError> {
        self.act_for_snapshot(id, SessionAction::RemoveItem(item)).await
    }

    pub async fn update_quantity(
        &self,
        id: SessionId,
        item: LineItemId,
        quantity: u32,
    ) -> Result<SessionSnapshot, CheckoutError> {
        self.act_for_snapshot(id, SessionAction::UpdateQuantity { item, quantity })
            .await
    }

    pub async fn set_payment_method(
        &self,
        id: SessionId,
        method: Option<PaymentMethod>,
    ) -> Result<SessionSnapshot, CheckoutError> {
        self.act_for_snapshot(id, SessionAction::SetPaymentMethod(method))
            .await
    }

    pub async fn set_member(
        &self,
        id: SessionId,
        member: Option<MemberId>,
    ) -> Result<SessionSnapshot, CheckoutError> {
        self.act_for_snapshot(id, SessionAction::SetMember(member)).await
    }

    /// Links the member with this phone number and returns it.
    pub async fn link_member_by_phone(&self, id: SessionId, phone: &str) -> Result<Member, CheckoutError> {
        self.act_for_member(id, SessionAction::LinkMemberByPhone(phone.to_string()))
            .await?
            .ok_or_else(|| CheckoutError::ActorCommunicationError("member missing from reply".into()))
    }

    /// The linked member's current record, if a member is linked.
    pub async fn current_member(&self, id: SessionId) -> Result<Option<Member>, CheckoutError> {
        self.act_for_member(id, SessionAction::CurrentMember).await
    }

    pub async fn set_total_discount(&self, id: SessionId, amount: u64) -> Result<SessionSnapshot, CheckoutError> {
        self.act_for_snapshot(id, SessionAction::SetTotalDiscount(amount))
            .await
    }

    pub async fn apply_coupon(&self, id: SessionId, code: &str) -> Result<SessionSnapshot, CheckoutError> {
        self.act_for_snapshot(id, SessionAction::ApplyCoupon(code.to_string()))
            .await
    }

    pub async fn set_used_points(&self, id: SessionId, points: u64) -> Result<SessionSnapshot, CheckoutError> {
        self.act_for_snapshot(id, SessionAction::SetUsedPoints(points))
            .await
    }

    pub async fn clear(&self, id: SessionId) -> Result<SessionSnapshot, CheckoutError> {
        self.act_for_snapshot(id, SessionAction::Clear).await
    }

    #[instrument(skip(self))]
    pub async fn checkout(&self, id: SessionId) -> Result<OrderConfirmation, CheckoutError> {
        match self.act(id, SessionAction::Checkout).await? {
            SessionActionResult::Confirmation(confirmation) => Ok(confirmation),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: SessionActionResult) -> CheckoutError {
    CheckoutError::ActorCommunicationError(format!("unexpected action result {result:?}"))
}

#[async_trait]
impl ActorClient<OrderSession> for SessionClient {
    type Error = CheckoutError;

    fn inner(&self) -> &ResourceClient<OrderSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError<CheckoutError>) -> Self::Error {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => CheckoutError::NotFound(id),
            other => CheckoutError::from(other.to_string()),
        }
    }
}

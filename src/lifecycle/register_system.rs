use crate::clients::{CouponClient, MemberClient, MenuClient, OrderClient, SessionClient};
use crate::lifecycle::seed::{SeedData, SeedError, SeedSummary};
use crate::menu_actor::MenuError;
use crate::model::{MenuCategory, PaymentMethodInfo};
use crate::session_actor::{CheckoutPolicy, SessionServices};
use tracing::{error, info};

/// Settings for [`RegisterSystem::new`].
#[derive(Debug, Clone)]
pub struct SystemSettings {
    /// Request queue capacity of every actor.
    pub channel_capacity: usize,
    /// Methods a session may select.
    pub payment_methods: Vec<PaymentMethodInfo>,
    /// Display names for menu category ids.
    pub categories: Vec<MenuCategory>,
    pub policy: CheckoutPolicy,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            payment_methods: PaymentMethodInfo::defaults(),
            categories: Vec::new(),
            policy: CheckoutPolicy::default(),
        }
    }
}

/// The runtime orchestrator for the point-of-sale actors.
///
/// `RegisterSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Handing the collaborator clients to the Session actor
/// - **Seeding**: Loading the catalog, members and coupons at start-up
///
/// # Architecture
///
/// - **Menu, Member, Coupon, Order actors**: collaborators with no dependencies
/// - **Session actor**: every open register session; depends on all four
///
/// # Example
///
/// ```ignore
/// let system = RegisterSystem::new(SystemSettings::default());
/// system.seed(&SeedData::builtin()?).await?;
///
/// let session = system.session_client.open_session("front").await?;
/// system.session_client.add_item(session, LineItem::new("cola1", 2000, 1)).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RegisterSystem {
    pub menu_client: MenuClient,
    pub member_client: MemberClient,
    pub coupon_client: CouponClient,
    pub order_client: OrderClient,
    pub session_client: SessionClient,
    payment_methods: Vec<PaymentMethodInfo>,
    categories: Vec<MenuCategory>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RegisterSystem {
    /// Creates every actor, wires the Session actor's context and spawns each in its own task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(settings: SystemSettings) -> Self {
        let capacity = settings.channel_capacity;

        // 1. Create actors
        let (menu_actor, menu_client) = crate::menu_actor::new(capacity);
        let (member_actor, member_client) = crate::member_actor::new(capacity);
        let (coupon_actor, coupon_client) = crate::coupon_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);
        let (session_actor, session_client) = crate::session_actor::new(capacity);

        // 2. Start actors with injected context
        let services = SessionServices {
            menu: menu_client.clone(),
            members: member_client.clone(),
            coupons: coupon_client.clone(),
            orders: order_client.clone(),
            payment_methods: settings.payment_methods.clone(),
            policy: settings.policy,
        };
        let handles = vec![
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(member_actor.run(())),
            tokio::spawn(coupon_actor.run(())),
            tokio::spawn(order_actor.run(())),
            tokio::spawn(session_actor.run(services)),
        ];

        info!(capacity, payment_methods = settings.payment_methods.len(), "Register system started");

        Self {
            menu_client,
            member_client,
            coupon_client,
            order_client,
            session_client,
            payment_methods: settings.payment_methods,
            categories: settings.categories,
            handles,
        }
    }

    /// Accepted payment methods, for the payment selection screen.
    pub fn payment_methods(&self) -> &[PaymentMethodInfo] {
        &self.payment_methods
    }

    /// Categories that have menu items, with their display names, for the category tabs.
    pub async fn menu_categories(&self) -> Result<Vec<MenuCategory>, MenuError> {
        self.menu_client.named_categories(&self.categories).await
    }

    /// Loads menu items, members and coupons. Stops at the first record that is rejected.
    pub async fn seed(&self, data: &SeedData) -> Result<SeedSummary, SeedError> {
        let mut summary = SeedSummary::default();
        for item in &data.menu_items {
            self.menu_client.create_menu_item(item.clone()).await?;
            summary.menu_items += 1;
        }
        for member in &data.members {
            self.member_client.register_member(member.clone()).await?;
            summary.members += 1;
        }
        for coupon in &data.coupons {
            self.coupon_client.create_coupon(coupon.clone()).await?;
            summary.coupons += 1;
        }
        info!(
            menu_items = summary.menu_items,
            members = summary.members,
            coupons = summary.coupons,
            "Seeded"
        );
        Ok(summary)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels. The Session actor stops first and
    /// releases its collaborator clients, which lets the collaborators stop in turn.
    /// Clones of a client held elsewhere keep their actor alive until dropped.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.session_client);
        drop(self.menu_client);
        drop(self.member_client);
        drop(self.coupon_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

use order_session::clients::{CouponClient, MemberClient, MenuClient, OrderClient, SessionClient};
use order_session::coupon_actor::CouponError;
use order_session::framework::mock::MockClient;
use order_session::member_actor::{MemberActionResult, MemberError};
use order_session::menu_actor::{MenuActionResult, MenuError};
use order_session::model::{
    Coupon, CouponId, LineItem, LineItemId, Member, MemberId, MenuItem, MenuItemId,
    OptionSelection, Order, OrderId, PaymentMethod, PaymentMethodInfo,
};
use order_session::order_actor::OrderError;
use order_session::session::{SessionError, SessionState};
use order_session::session_actor::{CheckoutError, CheckoutPolicy, SessionServices};

/// Real Session actor with every collaborator mocked.
///
/// Each test queues the exact requests the Session actor is expected to make,
/// drives a register through the `SessionClient`, then verifies the mocks.
struct Harness {
    menu: MockClient<MenuItem>,
    members: MockClient<Member>,
    coupons: MockClient<Coupon>,
    orders: MockClient<Order>,
}

impl Harness {
    fn new() -> Self {
        Self {
            menu: MockClient::new(),
            members: MockClient::new(),
            coupons: MockClient::new(),
            orders: MockClient::new(),
        }
    }

    fn start(&self) -> SessionClient {
        let services = SessionServices {
            menu: MenuClient::new(self.menu.client()),
            members: MemberClient::new(self.members.client()),
            coupons: CouponClient::new(self.coupons.client()),
            orders: OrderClient::new(self.orders.client()),
            payment_methods: PaymentMethodInfo::defaults(),
            policy: CheckoutPolicy::default(),
        };
        let (actor, client) = order_session::session_actor::new(10);
        tokio::spawn(actor.run(services));
        client
    }

    fn verify(&self) {
        self.menu.verify();
        self.members.verify();
        self.coupons.verify();
        self.orders.verify();
    }
}

fn minji(points: u64) -> Member {
    Member {
        id: MemberId(1),
        name: "Kim Minji".into(),
        phone: "01012345678".into(),
        points,
    }
}

fn coupon(code: &str, discount: u64, active: bool) -> Coupon {
    Coupon {
        id: CouponId(1),
        code: code.into(),
        discount,
        active,
    }
}

#[tokio::test]
async fn checkout_redeems_submits_and_accrues() {
    let mut h = Harness::new();
    // SetMember and SetUsedPoints each check the member record
    h.members.expect_get(MemberId(1)).return_ok(Some(minji(500)));
    h.members.expect_get(MemberId(1)).return_ok(Some(minji(500)));
    h.members
        .expect_action(MemberId(1))
        .return_ok(MemberActionResult::RedeemPoints(0));
    h.orders.expect_create().return_ok(OrderId(1));
    h.members
        .expect_action(MemberId(1))
        .return_ok(MemberActionResult::AccruePoints(55));

    let sessions = h.start();
    let session = sessions.open_session("front").await.unwrap();
    sessions
        .add_item(session, LineItem::new("cola", 2000, 3))
        .await
        .unwrap();
    sessions.set_member(session, Some(MemberId(1))).await.unwrap();
    sessions.set_used_points(session, 500).await.unwrap();
    let ready = sessions
        .set_payment_method(session, Some(PaymentMethod::from("card")))
        .await
        .unwrap();
    assert_eq!(ready.state, SessionState::CheckoutReady);
    assert_eq!(ready.amount_due, 5500);

    let confirmation = sessions.checkout(session).await.unwrap();
    assert_eq!(confirmation.order_id, OrderId(1));
    assert_eq!(confirmation.total_price, 6000);
    assert_eq!(confirmation.used_points, 500);
    assert_eq!(confirmation.amount_due, 5500);
    assert_eq!(confirmation.earned_points, 55);

    let after = sessions.snapshot(session).await.unwrap();
    assert_eq!(after.state, SessionState::Empty);
    assert!(after.items.is_empty());
    assert_eq!(after.member_id, None);
    assert_eq!(after.payment_method, None);
    assert_eq!(after.register, "front");

    h.verify();
}

#[tokio::test]
async fn failed_order_refunds_points_and_keeps_cart() {
    let mut h = Harness::new();
    h.members.expect_get(MemberId(1)).return_ok(Some(minji(500)));
    h.members.expect_get(MemberId(1)).return_ok(Some(minji(500)));
    h.members
        .expect_action(MemberId(1))
        .return_ok(MemberActionResult::RedeemPoints(0));
    h.orders
        .expect_create()
        .return_entity_err(OrderError::InvalidPayload("rejected".into()));
    // Refund of the redeemed points
    h.members
        .expect_action(MemberId(1))
        .return_ok(MemberActionResult::AccruePoints(500));

    let sessions = h.start();
    let session = sessions.open_session("front").await.unwrap();
    sessions
        .add_item(session, LineItem::new("cola", 2000, 1))
        .await
        .unwrap();
    sessions.set_member(session, Some(MemberId(1))).await.unwrap();
    sessions.set_used_points(session, 500).await.unwrap();
    sessions
        .set_payment_method(session, Some(PaymentMethod::from("cash")))
        .await
        .unwrap();

    let result = sessions.checkout(session).await;
    assert_eq!(
        result,
        Err(CheckoutError::Order(OrderError::InvalidPayload("rejected".into())))
    );

    let after = sessions.snapshot(session).await.unwrap();
    assert_eq!(after.items.len(), 1);
    assert_eq!(after.used_points, 500);
    assert_eq!(after.member_id, Some(MemberId(1)));
    assert_eq!(after.state, SessionState::CheckoutReady);

    h.verify();
}

#[tokio::test]
async fn checkout_without_payment_method_touches_no_collaborator() {
    let h = Harness::new();
    let sessions = h.start();
    let session = sessions.open_session("front").await.unwrap();
    sessions
        .add_item(session, LineItem::new("fries", 2500, 1))
        .await
        .unwrap();

    let result = sessions.checkout(session).await;
    assert_eq!(result, Err(CheckoutError::Session(SessionError::NoPaymentMethod)));

    let empty = sessions.open_session("drive-thru").await.unwrap();
    let result = sessions.checkout(empty).await;
    assert_eq!(result, Err(CheckoutError::Session(SessionError::EmptyOrder)));

    h.verify();
}

#[tokio::test]
async fn menu_items_are_priced_by_the_menu_actor() {
    let mut h = Harness::new();
    let priced = LineItem::new("100-s1-a1", 9000, 1)
        .with_name("Classic Burger")
        .with_options(vec!["Set".into(), "Extra cheese".into()]);
    h.menu
        .expect_action(MenuItemId(100))
        .return_ok(MenuActionResult::PriceSelection(priced));
    h.menu
        .expect_action(MenuItemId(100))
        .return_entity_err(MenuError::UnknownOption("set option 7 for 100".into()));

    let sessions = h.start();
    let session = sessions.open_session("front").await.unwrap();
    let selection = OptionSelection::none().with_set(1).with_add(1);
    let snapshot = sessions
        .add_menu_item(session, MenuItemId(100), 1, selection)
        .await
        .unwrap();
    assert_eq!(snapshot.total_price, 9000);
    assert_eq!(snapshot.items[0].id, LineItemId::from("100-s1-a1"));

    let result = sessions
        .add_menu_item(session, MenuItemId(100), 1, OptionSelection::none().with_set(7))
        .await;
    assert!(matches!(
        result,
        Err(CheckoutError::Menu(MenuError::UnknownOption(_)))
    ));
    assert_eq!(sessions.snapshot(session).await.unwrap().total_price, 9000);

    // Zero is rejected before the menu is asked
    let result = sessions
        .add_menu_item(session, MenuItemId(100), 0, OptionSelection::none())
        .await;
    assert_eq!(result, Err(CheckoutError::Session(SessionError::InvalidQuantity(0))));

    h.verify();
}

#[tokio::test]
async fn link_member_by_phone() {
    let mut h = Harness::new();
    h.members.expect_list().return_ok(vec![minji(500)]);
    h.members.expect_list().return_ok(vec![minji(500)]);
    h.members.expect_get(MemberId(1)).return_ok(Some(minji(700)));

    let sessions = h.start();
    let session = sessions.open_session("front").await.unwrap();

    let linked = sessions
        .link_member_by_phone(session, "010-1234-5678")
        .await
        .unwrap();
    assert_eq!(linked.id, MemberId(1));

    let result = sessions.link_member_by_phone(session, "010-0000-0000").await;
    assert_eq!(
        result,
        Err(CheckoutError::Member(MemberError::NotFound("010-0000-0000".into())))
    );

    // The failed lookup left the first link in place; the record is re-read
    let current = sessions.current_member(session).await.unwrap();
    assert_eq!(current.map(|m| m.points), Some(700));

    h.verify();
}

#[tokio::test]
async fn points_are_checked_against_current_balance() {
    let mut h = Harness::new();
    h.members.expect_get(MemberId(1)).return_ok(Some(minji(500)));
    h.members.expect_get(MemberId(1)).return_ok(Some(minji(500)));

    let sessions = h.start();
    let session = sessions.open_session("front").await.unwrap();
    sessions
        .add_item(session, LineItem::new("cola", 2000, 1))
        .await
        .unwrap();

    let result = sessions.set_used_points(session, 100).await;
    assert_eq!(result, Err(CheckoutError::Session(SessionError::NoMemberLinked)));

    sessions.set_member(session, Some(MemberId(1))).await.unwrap();
    let result = sessions.set_used_points(session, 800).await;
    assert_eq!(
        result,
        Err(CheckoutError::Session(SessionError::PointsExceedBalance {
            requested: 800,
            available: 500,
        }))
    );
    assert_eq!(sessions.snapshot(session).await.unwrap().used_points, 0);

    // Zero needs no lookup
    sessions.set_used_points(session, 0).await.unwrap();

    h.verify();
}

#[tokio::test]
async fn points_cover_at_most_the_amount_left_to_pay() {
    let mut h = Harness::new();
    h.members.expect_get(MemberId(1)).return_ok(Some(minji(12000)));
    h.members.expect_get(MemberId(1)).return_ok(Some(minji(12000)));
    h.members.expect_get(MemberId(1)).return_ok(Some(minji(12000)));

    let sessions = h.start();
    let session = sessions.open_session("front").await.unwrap();
    sessions
        .add_item(session, LineItem::new("cola", 2000, 1))
        .await
        .unwrap();
    sessions.set_total_discount(session, 1000).await.unwrap();
    sessions.set_member(session, Some(MemberId(1))).await.unwrap();

    let result = sessions.set_used_points(session, 12000).await;
    assert_eq!(
        result,
        Err(CheckoutError::Session(SessionError::PointsExceedAmountDue {
            points: 12000,
            payable: 1000,
        }))
    );
    assert_eq!(sessions.snapshot(session).await.unwrap().used_points, 0);

    let snapshot = sessions.set_used_points(session, 1000).await.unwrap();
    assert_eq!(snapshot.used_points, 1000);
    assert_eq!(snapshot.amount_due, 0);

    h.verify();
}

#[tokio::test]
async fn coupons_set_the_total_discount() {
    let mut h = Harness::new();
    h.coupons
        .expect_list()
        .return_ok(vec![coupon("WELCOME1000", 1000, true)]);
    h.coupons
        .expect_list()
        .return_ok(vec![coupon("SPRING3000", 3000, false)]);
    h.coupons.expect_list().return_ok(vec![]);

    let sessions = h.start();
    let session = sessions.open_session("front").await.unwrap();
    sessions
        .add_item(session, LineItem::new("burger", 5000, 1))
        .await
        .unwrap();

    let snapshot = sessions.apply_coupon(session, " welcome1000 ").await.unwrap();
    assert_eq!(snapshot.total_discount, 1000);
    assert_eq!(snapshot.amount_due, 4000);

    let result = sessions.apply_coupon(session, "SPRING3000").await;
    assert_eq!(
        result,
        Err(CheckoutError::Coupon(CouponError::Inactive("SPRING3000".into())))
    );

    let result = sessions.apply_coupon(session, "NOPE").await;
    assert_eq!(result, Err(CheckoutError::Coupon(CouponError::NotFound("NOPE".into()))));
    assert_eq!(sessions.snapshot(session).await.unwrap().total_discount, 1000);

    h.verify();
}

#[tokio::test]
async fn payment_method_must_be_accepted() {
    let h = Harness::new();
    let sessions = h.start();
    let session = sessions.open_session("front").await.unwrap();

    let result = sessions
        .set_payment_method(session, Some(PaymentMethod::from("crypto")))
        .await;
    assert_eq!(
        result,
        Err(CheckoutError::UnknownPaymentMethod(PaymentMethod::from("crypto")))
    );

    let snapshot = sessions
        .set_payment_method(session, Some(PaymentMethod::from("card")))
        .await
        .unwrap();
    assert_eq!(snapshot.payment_method, Some(PaymentMethod::from("card")));

    let snapshot = sessions.set_payment_method(session, None).await.unwrap();
    assert_eq!(snapshot.payment_method, None);

    h.verify();
}

#[tokio::test]
async fn sessions_on_different_registers_are_independent() {
    let h = Harness::new();
    let sessions = h.start();
    let front = sessions.open_session("front").await.unwrap();
    let back = sessions.open_session("back").await.unwrap();

    sessions
        .add_item(front, LineItem::new("cola", 2000, 2))
        .await
        .unwrap();
    sessions
        .add_item(back, LineItem::new("fries", 2500, 1))
        .await
        .unwrap();
    sessions.clear(front).await.unwrap();

    assert!(sessions.snapshot(front).await.unwrap().items.is_empty());
    assert_eq!(sessions.snapshot(back).await.unwrap().total_price, 2500);

    sessions.close_session(back).await.unwrap();
    let result = sessions.snapshot(back).await;
    assert_eq!(result, Err(CheckoutError::NotFound(back.to_string())));

    h.verify();
}

use order_session::clients::ActorClient;
use order_session::coupon_actor::CouponError;
use order_session::lifecycle::{RegisterSystem, SeedData, SeedSummary, SystemSettings};
use order_session::member_actor::MemberError;
use order_session::menu_actor::MenuError;
use order_session::model::{
    CouponUpdate, LineItem, LineItemId, MemberCreate, MemberId, MenuCategory, MenuItemCreate,
    MenuItemId, MenuItemUpdate, MenuOption, OptionSelection, PaymentMethod,
};
use order_session::session::{SessionError, SessionState};
use order_session::session_actor::CheckoutError;

const CLASSIC_BURGER: MenuItemId = MenuItemId(100);
const COLA: MenuItemId = MenuItemId(105);

async fn seeded_system() -> RegisterSystem {
    let seed = SeedData::builtin().expect("builtin seed");
    let system = RegisterSystem::new(SystemSettings {
        payment_methods: seed.accepted_payment_methods(),
        categories: seed.categories.clone(),
        ..SystemSettings::default()
    });
    system.seed(&seed).await.expect("seeding failed");
    system
}

/// Full end-to-end test with all real actors: build a cart, link a member,
/// discount, redeem points, check out, then read the member and the report.
#[tokio::test]
async fn test_full_checkout_integration() {
    let system = seeded_system().await;
    let sessions = &system.session_client;

    let session = sessions.open_session("front").await.unwrap();
    sessions
        .add_item(session, LineItem::new("burger1", 5000, 2))
        .await
        .unwrap();
    let snapshot = sessions
        .add_item(session, LineItem::new("cola1", 2000, 1))
        .await
        .unwrap();
    assert_eq!(snapshot.total_price, 12000);
    assert_eq!(snapshot.state, SessionState::Building);

    let member = sessions
        .link_member_by_phone(session, "010-1234-5678")
        .await
        .unwrap();
    assert_eq!(member.id, MemberId(1));
    assert_eq!(member.points, 500);

    sessions.set_used_points(session, 500).await.unwrap();
    sessions.set_total_discount(session, 1000).await.unwrap();
    let ready = sessions
        .set_payment_method(session, Some(PaymentMethod::from("card")))
        .await
        .unwrap();
    assert!(ready.can_checkout);
    assert_eq!(ready.state, SessionState::CheckoutReady);
    assert_eq!(ready.amount_due, 10500);

    let confirmation = sessions.checkout(session).await.unwrap();
    assert_eq!(confirmation.amount_due, 10500);
    assert_eq!(confirmation.earned_points, 105);

    // 500 - 500 redeemed + 105 earned
    let member = system.member_client.member(MemberId(1)).await.unwrap();
    assert_eq!(member.points, 105);

    let after = sessions.snapshot(session).await.unwrap();
    assert!(after.items.is_empty());
    assert!(!after.can_checkout);

    let report = system.order_client.sales_report().await.unwrap();
    assert_eq!(report.order_count, 1);
    assert_eq!(report.gross_sales, 12000);
    assert_eq!(report.total_discount, 1000);
    assert_eq!(report.points_redeemed, 500);
    assert_eq!(report.net_sales, 10500);
    assert_eq!(
        report.by_payment_method.get(&PaymentMethod::from("card")),
        Some(&10500)
    );
    assert_eq!(report.items[0].id, LineItemId::from("burger1"));
    assert_eq!(report.items[0].revenue, 10000);
    assert_eq!(report.items[1].quantity, 1);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_menu_selections_aggregate_by_options() {
    let system = seeded_system().await;
    let sessions = &system.session_client;
    let session = sessions.open_session("front").await.unwrap();

    let set_with_cheese = OptionSelection::none().with_set(1).with_add(1);
    let snapshot = sessions
        .add_menu_item(session, CLASSIC_BURGER, 1, set_with_cheese.clone())
        .await
        .unwrap();
    assert_eq!(snapshot.total_price, 5000 + 3000 + 1000);

    sessions
        .add_menu_item(session, CLASSIC_BURGER, 1, set_with_cheese)
        .await
        .unwrap();
    let snapshot = sessions
        .add_menu_item(session, CLASSIC_BURGER, 1, OptionSelection::none())
        .await
        .unwrap();
    assert_eq!(snapshot.items.len(), 2);
    assert_eq!(snapshot.items[0].quantity, 2);
    assert_eq!(snapshot.items[0].name, "Classic Burger");
    assert_eq!(snapshot.total_price, 9000 * 2 + 5000);

    let result = sessions
        .add_menu_item(session, MenuItemId(999), 1, OptionSelection::none())
        .await;
    assert!(matches!(result, Err(CheckoutError::Menu(_))));

    // Lowering to zero removes the line
    let plain = snapshot.items[1].id.clone();
    let snapshot = sessions.update_quantity(session, plain, 0).await.unwrap();
    assert_eq!(snapshot.items.len(), 1);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_concurrent_registers() {
    let system = seeded_system().await;

    let mut handles = Vec::new();
    for register in 0..5 {
        let sessions = system.session_client.clone();
        handles.push(tokio::spawn(async move {
            let session = sessions
                .open_session(&format!("register-{register}"))
                .await?;
            sessions
                .add_menu_item(session, COLA, 1, OptionSelection::none())
                .await?;
            sessions
                .set_payment_method(session, Some(PaymentMethod::from("cash")))
                .await?;
            sessions.checkout(session).await
        }));
    }

    for handle in handles {
        let confirmation = handle.await.unwrap().unwrap();
        assert_eq!(confirmation.amount_due, 2000);
        assert_eq!(confirmation.earned_points, 0);
    }

    let report = system.order_client.sales_report().await.unwrap();
    assert_eq!(report.order_count, 5);
    assert_eq!(report.net_sales, 10000);
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].quantity, 5);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_rejected_register_operations() {
    let system = seeded_system().await;
    let sessions = &system.session_client;
    let session = sessions.open_session("front").await.unwrap();
    sessions
        .add_menu_item(session, COLA, 2, OptionSelection::none())
        .await
        .unwrap();

    let result = sessions
        .set_payment_method(session, Some(PaymentMethod::from("bitcoin")))
        .await;
    assert_eq!(
        result,
        Err(CheckoutError::UnknownPaymentMethod(PaymentMethod::from("bitcoin")))
    );

    let result = sessions.apply_coupon(session, "spring3000").await;
    assert_eq!(
        result,
        Err(CheckoutError::Coupon(CouponError::Inactive("SPRING3000".into())))
    );
    let snapshot = sessions.apply_coupon(session, "welcome1000").await.unwrap();
    assert_eq!(snapshot.total_discount, 1000);

    let result = sessions.set_total_discount(session, 5000).await;
    assert_eq!(
        result,
        Err(CheckoutError::Session(SessionError::DiscountExceedsTotal {
            discount: 5000,
            total: 4000,
        }))
    );

    // Park Sora has no points
    sessions
        .link_member_by_phone(session, "01098765432")
        .await
        .unwrap();
    let result = sessions.set_used_points(session, 100).await;
    assert_eq!(
        result,
        Err(CheckoutError::Session(SessionError::PointsExceedBalance {
            requested: 100,
            available: 0,
        }))
    );

    let snapshot = sessions.snapshot(session).await.unwrap();
    assert_eq!(snapshot.total_discount, 1000);
    assert_eq!(snapshot.used_points, 0);
    assert_eq!(snapshot.payment_method, None);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_seeding_and_catalog() {
    let seed = SeedData::builtin().unwrap();
    let system = RegisterSystem::new(SystemSettings::default());
    let summary = system.seed(&seed).await.unwrap();
    assert_eq!(
        summary,
        SeedSummary {
            menu_items: 9,
            members: 3,
            coupons: 2,
        }
    );

    let categories = system.menu_client.categories().await.unwrap();
    assert_eq!(categories, vec!["hamburger", "side", "drink", "dessert"]);
    let burgers = system.menu_client.menu_items_in("hamburger").await.unwrap();
    assert_eq!(burgers.len(), 3);
    assert_eq!(burgers[0].id, CLASSIC_BURGER);

    let duplicate = system
        .member_client
        .register_member(MemberCreate {
            name: "Someone Else".into(),
            phone: "010 2222 3333".into(),
            points: 0,
        })
        .await;
    assert_eq!(duplicate, Err(MemberError::AlreadyExists("01022223333".into())));
    assert_eq!(system.member_client.list().await.unwrap().len(), 3);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_menu_administration() {
    let system = seeded_system().await;
    let menu = &system.menu_client;

    let updated = menu
        .update_menu_item(
            COLA,
            MenuItemUpdate {
                price: Some(2200),
                ..MenuItemUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 2200);
    assert_eq!(updated.name, "Cola");
    assert_eq!(updated.category, "drink");
    assert_eq!(updated.description, "Chilled cola");

    let result = menu
        .update_menu_item(
            COLA,
            MenuItemUpdate {
                name: Some("  ".into()),
                price: Some(1),
                ..MenuItemUpdate::default()
            },
        )
        .await;
    assert!(matches!(result, Err(MenuError::ValidationError(_))));
    let stored = menu.menu_item(COLA).await.unwrap();
    assert_eq!((stored.name.as_str(), stored.price), ("Cola", 2200));

    let result = menu
        .update_menu_item(
            COLA,
            MenuItemUpdate {
                category: Some(String::new()),
                ..MenuItemUpdate::default()
            },
        )
        .await;
    assert!(matches!(result, Err(MenuError::ValidationError(_))));

    // New prices apply to items added afterwards
    let sessions = &system.session_client;
    let session = sessions.open_session("front").await.unwrap();
    let snapshot = sessions
        .add_menu_item(session, COLA, 1, OptionSelection::none())
        .await
        .unwrap();
    assert_eq!(snapshot.total_price, 2200);

    menu.delete(COLA).await.unwrap();
    assert!(menu.get(COLA).await.unwrap().is_none());
    let result = sessions
        .add_menu_item(session, COLA, 1, OptionSelection::none())
        .await;
    assert_eq!(
        result,
        Err(CheckoutError::Menu(MenuError::NotFound(COLA.to_string())))
    );
    assert_eq!(menu.delete(COLA).await, Err(MenuError::NotFound(COLA.to_string())));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_overflowing_option_price_is_rejected() {
    let system = seeded_system().await;
    let id = system
        .menu_client
        .create_menu_item(MenuItemCreate {
            name: "Golden Burger".into(),
            price: u64::MAX - 10,
            category: "hamburger".into(),
            add_options: vec![MenuOption::new("Gold leaf", 100)],
            ..MenuItemCreate::default()
        })
        .await
        .unwrap();

    let sessions = &system.session_client;
    let session = sessions.open_session("front").await.unwrap();
    let result = sessions
        .add_menu_item(session, id, 1, OptionSelection::none().with_add(0))
        .await;
    assert_eq!(
        result,
        Err(CheckoutError::Menu(MenuError::PriceOverflow(id.to_string())))
    );
    assert!(sessions.snapshot(session).await.unwrap().items.is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_deactivated_coupon_stops_applying() {
    let system = seeded_system().await;
    let coupon = system
        .coupon_client
        .find_by_code("WELCOME1000")
        .await
        .unwrap()
        .expect("seeded coupon");

    let sessions = &system.session_client;
    let session = sessions.open_session("front").await.unwrap();
    sessions
        .add_menu_item(session, CLASSIC_BURGER, 1, OptionSelection::none())
        .await
        .unwrap();

    let updated = system
        .coupon_client
        .update_coupon(
            coupon.id,
            CouponUpdate {
                active: Some(false),
                ..CouponUpdate::default()
            },
        )
        .await
        .unwrap();
    assert!(!updated.active);
    assert_eq!(updated.discount, 1000);

    let result = sessions.apply_coupon(session, "WELCOME1000").await;
    assert_eq!(
        result,
        Err(CheckoutError::Coupon(CouponError::Inactive("WELCOME1000".into())))
    );
    assert_eq!(sessions.snapshot(session).await.unwrap().total_discount, 0);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_categories_carry_display_names() {
    let system = seeded_system().await;

    let categories = system.menu_categories().await.unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0], MenuCategory::new("hamburger", "Burgers"));
    assert_eq!(categories[2], MenuCategory::new("drink", "Drinks"));

    system
        .menu_client
        .create_menu_item(MenuItemCreate {
            name: "Kimchi Fries".into(),
            price: 3500,
            category: "special".into(),
            ..MenuItemCreate::default()
        })
        .await
        .unwrap();
    let categories = system.menu_categories().await.unwrap();
    assert_eq!(categories.last(), Some(&MenuCategory::new("special", "special")));

    system.shutdown().await.expect("Shutdown failed");
}

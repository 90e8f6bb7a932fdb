//! # Order Session Demo
//!
//! Starts the [`RegisterSystem`], seeds it, and runs several registers through a
//! full checkout at the same time:
//!
//! 1. Open a session and add a burger set, drinks and a side.
//! 2. Apply a coupon and link a member by phone.
//! 3. Redeem points, pick a payment method, check out.
//!
//! Finishes by printing the sales report as JSON.

use order_session::clients::{ActorClient, SessionClient};
use order_session::config::Config;
use order_session::lifecycle::tracing::setup_tracing;
use order_session::lifecycle::{RegisterSystem, SeedData};
use order_session::model::{MenuItem, OptionSelection, OrderConfirmation, PaymentMethod};
use order_session::session_actor::CheckoutError;
use tracing::{info, warn, Instrument};

const DEMO_COUPON: &str = "WELCOME1000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load().unwrap_or_else(|e| e.exit());
    setup_tracing(config.log_format, &config.log_level);

    let seed = SeedData::load(config.seed_file.as_deref())?;
    let system = RegisterSystem::new(config.system_settings(&seed));
    system.seed(&seed).await?;

    let menu = system.menu_client.list().await?;
    let categories: Vec<String> = system
        .menu_categories()
        .await?
        .into_iter()
        .map(|category| category.name)
        .collect();
    info!(items = menu.len(), ?categories, "Menu loaded");

    let members = system.member_client.list().await?;
    let payment = system
        .payment_methods()
        .first()
        .map(|method| method.id.clone());

    let mut handles = Vec::with_capacity(config.registers);
    for index in 0..config.registers {
        let register = format!("register-{}", index + 1);
        let phone = members
            .get(index % members.len().max(1))
            .map(|member| member.phone.clone());
        let span = tracing::info_span!("register", name = %register);
        handles.push(tokio::spawn(
            run_register(
                system.session_client.clone(),
                register,
                menu.clone(),
                phone,
                payment.clone(),
            )
            .instrument(span),
        ));
    }

    for handle in handles {
        match handle.await? {
            Ok(confirmation) => info!(
                order_id = %confirmation.order_id,
                amount_due = confirmation.amount_due,
                earned_points = confirmation.earned_points,
                "Order placed"
            ),
            Err(e) => warn!(error = %e, "Register failed to check out"),
        }
    }

    let report = system.order_client.sales_report().await?;
    info!(
        orders = report.order_count,
        gross_sales = report.gross_sales,
        net_sales = report.net_sales,
        "Sales report"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}

/// One customer at one register, from empty cart to confirmation.
async fn run_register(
    sessions: SessionClient,
    register: String,
    menu: Vec<MenuItem>,
    member_phone: Option<String>,
    payment: Option<PaymentMethod>,
) -> Result<OrderConfirmation, CheckoutError> {
    let session = sessions.open_session(&register).await?;

    // A set meal with extra cheese, if the menu has anything with options.
    if let Some(burger) = menu.iter().find(|item| item.set_options.len() > 1) {
        let selection = OptionSelection::none().with_set(1).with_add(1);
        sessions.add_menu_item(session, burger.id, 1, selection).await?;
    }
    if let Some(drink) = menu.iter().find(|item| item.category == "drink") {
        let snapshot = sessions
            .add_menu_item(session, drink.id, 2, OptionSelection::none())
            .await?;
        if let Some(line) = snapshot.items.last() {
            sessions.update_quantity(session, line.id.clone(), 1).await?;
        }
    }
    if let Some(side) = menu.iter().find(|item| item.category == "side") {
        sessions
            .add_menu_item(session, side.id, 1, OptionSelection::none())
            .await?;
    }

    if let Err(e) = sessions.apply_coupon(session, DEMO_COUPON).await {
        warn!(error = %e, "Coupon not applied");
    }

    if let Some(phone) = member_phone {
        let member = sessions.link_member_by_phone(session, &phone).await?;
        let snapshot = sessions.snapshot(session).await?;
        let remaining = snapshot
            .total_price
            .saturating_sub(snapshot.total_discount);
        let points = member.points.min(remaining).min(1000);
        sessions.set_used_points(session, points).await?;
        info!(member = %member.id, points, "Member linked");
    }

    let snapshot = sessions.set_payment_method(session, payment).await?;
    info!(
        total = snapshot.total_price,
        amount_due = snapshot.amount_due,
        state = %snapshot.state,
        "Ready to check out"
    );

    let confirmation = sessions.checkout(session).await?;
    sessions.close_session(session).await?;
    Ok(confirmation)
}

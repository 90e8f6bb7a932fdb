//! Sales statistics over submitted orders.

use crate::model::{LineItemId, Order, PaymentMethod};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Units sold and revenue for one line item id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSales {
    pub id: LineItemId,
    pub name: String,
    pub quantity: u64,
    pub revenue: u64,
}

/// Aggregate figures for the admin dashboard.
///
/// `gross_sales` sums order totals; `net_sales` sums what customers actually paid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub order_count: usize,
    pub gross_sales: u64,
    pub total_discount: u64,
    pub points_redeemed: u64,
    pub net_sales: u64,
    pub by_payment_method: BTreeMap<PaymentMethod, u64>,
    /// Highest revenue first; ties broken by id.
    pub items: Vec<ItemSales>,
    /// Net sales per UTC day.
    pub daily: BTreeMap<NaiveDate, u64>,
}

impl SalesReport {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut report = SalesReport {
            order_count: orders.len(),
            ..Default::default()
        };
        let mut items: BTreeMap<LineItemId, ItemSales> = BTreeMap::new();

        for order in orders {
            report.gross_sales = report.gross_sales.saturating_add(order.total_price);
            report.total_discount = report.total_discount.saturating_add(order.discount);
            report.points_redeemed = report.points_redeemed.saturating_add(order.used_points);
            report.net_sales = report.net_sales.saturating_add(order.amount_due);

            let by_method = report
                .by_payment_method
                .entry(order.payment_method.clone())
                .or_default();
            *by_method = by_method.saturating_add(order.amount_due);

            let day = report.daily.entry(order.created_at.date_naive()).or_default();
            *day = day.saturating_add(order.amount_due);

            for line in &order.items {
                let entry = items.entry(line.id.clone()).or_insert_with(|| ItemSales {
                    id: line.id.clone(),
                    name: line.name.clone(),
                    quantity: 0,
                    revenue: 0,
                });
                entry.quantity = entry.quantity.saturating_add(u64::from(line.quantity));
                entry.revenue = entry
                    .revenue
                    .saturating_add(line.subtotal().unwrap_or(u64::MAX));
            }
        }

        report.items = items.into_values().collect();
        report
            .items
            .sort_by(|a, b| b.revenue.cmp(&a.revenue).then_with(|| a.id.cmp(&b.id)));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineItem, OrderId, OrderPayload};
    use chrono::{TimeZone, Utc};

    fn order(id: u32, day: u32, method: &str, items: Vec<LineItem>, discount: u64) -> Order {
        let total_price = items.iter().map(|i| i.subtotal().unwrap()).sum();
        let payload = OrderPayload {
            items,
            payment_method: PaymentMethod::from(method),
            member_id: None,
            discount,
            used_points: 0,
            total_price,
        };
        let created_at = Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap();
        Order::from_payload(OrderId(id), payload, created_at)
    }

    #[test]
    fn empty_report_is_all_zero() {
        let report = SalesReport::from_orders(&[]);
        assert_eq!(report, SalesReport::default());
    }

    #[test]
    fn report_aggregates_totals_methods_items_and_days() {
        let orders = vec![
            order(
                1,
                1,
                "card",
                vec![
                    LineItem::new("burger1", 5000, 2).with_name("Burger"),
                    LineItem::new("cola1", 2000, 1).with_name("Cola"),
                ],
                1000,
            ),
            order(2, 1, "cash", vec![LineItem::new("cola1", 2000, 3)], 0),
            order(3, 2, "card", vec![LineItem::new("fries", 2500, 1)], 0),
        ];

        let report = SalesReport::from_orders(&orders);
        assert_eq!(report.order_count, 3);
        assert_eq!(report.gross_sales, 12000 + 6000 + 2500);
        assert_eq!(report.total_discount, 1000);
        assert_eq!(report.net_sales, 11000 + 6000 + 2500);
        assert_eq!(report.by_payment_method[&PaymentMethod::from("card")], 13500);
        assert_eq!(report.by_payment_method[&PaymentMethod::from("cash")], 6000);

        let ids: Vec<&str> = report.items.iter().map(|i| i.id.0.as_str()).collect();
        assert_eq!(ids, vec!["burger1", "cola1", "fries"]);
        assert_eq!(report.items[1].quantity, 4);
        assert_eq!(report.items[1].revenue, 8000);
        assert_eq!(report.items[1].name, "Cola");

        let may_first = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(report.daily[&may_first], 17000);
        assert_eq!(report.daily.len(), 2);
    }
}

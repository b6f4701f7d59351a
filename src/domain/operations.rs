use chrono::{DateTime, NaiveDate};
use tracing::debug;

use super::records::{LineItem, Product, PurchaseRecord};
use super::stats::SellerStats;

/// Fold the record-level totals of a purchase into the seller's aggregate
///
/// Applies everything that does not depend on resolving individual line
/// items: the transaction count, the transaction-level amount and discount
/// sums, the distinct-customer set, and the year-month transaction bucket.
pub fn apply_purchase(stats: &mut SellerStats, record: &PurchaseRecord) {
    stats.record_sale(record.total_amount, record.total_discount);
    stats.record_customer(record.customer_id);

    match month_key(&record.date) {
        Some(bucket) => stats.record_month(bucket),
        None => {
            debug!(
                seller_id = stats.seller_id(),
                date = %record.date,
                "unparseable purchase date, month bucket skipped"
            );
        }
    }
}

/// Fold one resolved line item into the seller's aggregate
///
/// The caller has already resolved the product and asked the revenue
/// strategy for the line's realized revenue. A missing quantity counts as
/// zero units for the item and cost totals.
pub fn apply_line_item(
    stats: &mut SellerStats,
    item: &LineItem,
    product: &Product,
    line_revenue: f64,
) {
    let quantity = item.quantity.unwrap_or(0);

    stats.record_item(&item.sku, quantity);

    let cost = product.purchase_price * quantity as f64;
    stats.add_line_revenue(line_revenue, cost);
}

/// Derive the `YYYY-MM` bucket key from a purchase date
///
/// Accepts plain `YYYY-MM-DD` dates and RFC 3339 timestamps; anything else
/// yields `None`.
pub fn month_key(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()))
        .map(|date| date.format("%Y-%m").to_string())
}

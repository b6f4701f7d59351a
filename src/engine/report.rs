use serde::{Deserialize, Serialize};

use crate::domain::{SellerStats, TopProduct, round2};

/// Public per-seller report row
///
/// Monetary fields are rounded to 2 decimal places here and nowhere
/// earlier; the accumulators keep full precision until formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: u64,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

/// Map one finalized accumulator to its report row
pub fn build_report(stats: &SellerStats) -> SellerReport {
    SellerReport {
        seller_id: stats.seller_id(),
        name: stats.full_name(),
        revenue: round2(stats.revenue()),
        profit: round2(stats.profit()),
        sales_count: stats.total_sales(),
        top_products: stats.top_products().to_vec(),
        bonus: round2(stats.bonus()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Seller;

    fn stats() -> SellerStats {
        let mut stats = SellerStats::new(&Seller {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Chen".to_string(),
            start_date: String::new(),
            position: String::new(),
        });
        stats.record_sale(100.0, 0.0);
        stats.add_line_revenue(100.123456, 20.0);
        stats.set_bonus(12.3456);
        stats.set_top_products(vec![TopProduct {
            sku: "X".to_string(),
            quantity: 2,
        }]);
        stats
    }

    #[test]
    fn copies_identity_and_counters() {
        let report = build_report(&stats());

        assert_eq!(report.seller_id, 7);
        assert_eq!(report.name, "Ada Chen");
        assert_eq!(report.sales_count, 1);
        assert_eq!(report.top_products.len(), 1);
    }

    #[test]
    fn rounds_monetary_fields_to_two_decimals() {
        let report = build_report(&stats());

        assert_eq!(report.revenue, 100.12);
        assert_eq!(report.profit, 80.12);
        assert_eq!(report.bonus, 12.35);
    }

    #[test]
    fn serializes_with_the_public_field_names() {
        let value = serde_json::to_value(build_report(&stats())).unwrap();

        assert_eq!(value["seller_id"], 7);
        assert_eq!(value["name"], "Ada Chen");
        assert_eq!(value["sales_count"], 1);
        assert_eq!(value["top_products"][0]["sku"], "X");
        assert_eq!(value["top_products"][0]["quantity"], 2);
        assert!(value.get("revenue").is_some());
        assert!(value.get("profit").is_some());
        assert!(value.get("bonus").is_some());
    }
}

//! Run the report with custom revenue and bonus strategies
//!
//! The engine only sees the two capability traits, so anything from a
//! closure to a configurable struct can stand in for the reference
//! calculations. Run with: `cargo run --example custom_strategies`

use sales::prelude::*;
use serde_json::json;

/// Revenue net of a flat payment-processing fee per line
struct NetOfFees {
    fee: f64,
}

impl RevenueStrategy for NetOfFees {
    fn revenue(&self, item: &LineItem, product: &Product) -> f64 {
        let gross = DEFAULT_REVENUE.revenue(item, product);
        (gross - self.fee).max(0.0)
    }
}

fn main() {
    let document = json!({
        "sellers": [
            { "id": 1, "first_name": "Ada", "last_name": "Chen" },
            { "id": 2, "first_name": "Bo", "last_name": "Diaz" },
            { "id": 3, "first_name": "Cy", "last_name": "Ueda" }
        ],
        "products": [
            { "sku": "TEA-1", "purchase_price": 4.0 },
            { "sku": "CUP-2", "purchase_price": 1.5 }
        ],
        "purchase_records": [
            {
                "seller_id": 1, "customer_id": 10, "date": "2024-03-01",
                "total_amount": 24.0, "total_discount": 0.0,
                "items": [{ "sku": "TEA-1", "quantity": 3, "sale_price": 8.0, "discount": 0.0 }]
            },
            {
                "seller_id": 2, "customer_id": 11, "date": "2024-03-02",
                "total_amount": 30.0, "total_discount": 3.0,
                "items": [
                    { "sku": "TEA-1", "quantity": 2, "sale_price": 8.0, "discount": 10.0 },
                    { "sku": "CUP-2", "quantity": 4, "sale_price": 4.0, "discount": 0.0 }
                ]
            },
            {
                "seller_id": 3, "customer_id": 12, "date": "2024-03-02",
                "total_amount": 8.0, "total_discount": 0.0,
                "items": [{ "sku": "CUP-2", "quantity": 2, "sale_price": 4.0, "discount": 0.0 }]
            }
        ]
    });

    let data = dataset_from_value(&document).expect("demo dataset is well-formed");

    let revenue = NetOfFees { fee: 0.35 };
    // Everyone above the median gets a flat thank-you bonus
    let bonus = |rank: usize, total: usize, _: &SellerStats| {
        if rank * 2 <= total { 50.0 } else { 0.0 }
    };
    let options = AnalyzeOptions::new(&revenue, &bonus);

    let reports = analyze(&data, &options).expect("demo dataset analyzes cleanly");

    let mut stdout = std::io::stdout();
    write_reports(&reports, &mut stdout).expect("stdout is writable");
}

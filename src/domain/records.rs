use serde::Deserialize;

/// Seller reference data, immutable over the whole run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Seller {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub position: String,
}

/// Product reference data, keyed by SKU
///
/// Only `sku` and `purchase_price` take part in the aggregation; other
/// descriptive fields in the source document are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub sku: String,
    #[serde(default)]
    pub name: String,
    pub purchase_price: f64,
}

/// One product/quantity entry inside a purchase record
///
/// The value fields are optional: source documents occasionally omit them,
/// and the revenue strategy is the one that decides what a missing value is
/// worth (the reference strategy says zero).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItem {
    pub sku: String,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub discount: Option<f64>,
}

/// One transaction/receipt attributed to a seller
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: u64,
    pub customer_id: u64,
    pub date: String,
    pub total_amount: f64,
    #[serde(default)]
    pub total_discount: f64,
    pub items: Vec<LineItem>,
}

/// The full dataset document consumed by `analyze`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

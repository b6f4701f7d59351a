use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::records::Seller;

/// One entry of a seller's top-products list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// SKU to cumulative-quantity tally that remembers first-sale order
///
/// Iteration order is the order in which SKUs were first added, which is what
/// makes the top-products tie-break stable with respect to insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductTally {
    quantities: HashMap<String, u64>,
    order: Vec<String>,
}

impl ProductTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Add quantity for a SKU, registering the SKU on first sight
    pub(crate) fn add(&mut self, sku: &str, quantity: u64) {
        if let Some(total) = self.quantities.get_mut(sku) {
            *total += quantity;
        } else {
            self.quantities.insert(sku.to_string(), quantity);
            self.order.push(sku.to_string());
        }
    }

    /// Cumulative quantity for a SKU, zero if never sold
    pub fn quantity(&self, sku: &str) -> u64 {
        self.quantities.get(sku).copied().unwrap_or(0)
    }

    /// Number of distinct SKUs sold
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no SKU was ever added
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in first-sale order
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.order
            .iter()
            .map(|sku| (sku.as_str(), self.quantity(sku)))
    }
}

/// Per-seller running aggregate built during the join pass
///
/// Created once per known seller before any transaction is processed,
/// mutated only by the operations module while records are folded in, then
/// frozen for ranking, bonus assignment, and formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    seller_id: u64,
    first_name: String,
    last_name: String,
    start_date: String,
    position: String,
    total_sales: u64,
    total_amount: f64,
    total_discount: f64,
    revenue: f64,
    profit: f64,
    total_items_sold: u64,
    customers: HashSet<u64>,
    products_sold: ProductTally,
    sales_by_month: HashMap<String, u64>,
    bonus: f64,
    top_products: Vec<TopProduct>,
}

impl SellerStats {
    /// Create a zeroed aggregate carrying the seller's identity fields
    pub fn new(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id,
            first_name: seller.first_name.clone(),
            last_name: seller.last_name.clone(),
            start_date: seller.start_date.clone(),
            position: seller.position.clone(),
            total_sales: 0,
            total_amount: 0.0,
            total_discount: 0.0,
            revenue: 0.0,
            profit: 0.0,
            total_items_sold: 0,
            customers: HashSet::new(),
            products_sold: ProductTally::new(),
            sales_by_month: HashMap::new(),
            bonus: 0.0,
            top_products: Vec::new(),
        }
    }

    /// Get the seller id
    pub fn seller_id(&self) -> u64 {
        self.seller_id
    }

    /// Get the seller's first name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Get the seller's last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Get the seller's start date as recorded in the reference data
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Get the seller's position
    pub fn position(&self) -> &str {
        &self.position
    }

    /// First and last name joined by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Count of transactions attributed to this seller
    pub fn total_sales(&self) -> u64 {
        self.total_sales
    }

    /// Sum of transaction-level total amounts
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    /// Sum of transaction-level total discounts
    pub fn total_discount(&self) -> f64 {
        self.total_discount
    }

    /// Revenue accumulated across line items
    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    /// Profit accumulated across line items (revenue minus cost)
    pub fn profit(&self) -> f64 {
        self.profit
    }

    /// Total quantity sold across all line items
    pub fn total_items_sold(&self) -> u64 {
        self.total_items_sold
    }

    /// Number of distinct customers seen (membership is not exposed)
    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// SKU to cumulative-quantity tally for this seller
    pub fn products_sold(&self) -> &ProductTally {
        &self.products_sold
    }

    /// Transaction count for a `YYYY-MM` bucket, zero if none recorded
    pub fn monthly_sales(&self, bucket: &str) -> u64 {
        self.sales_by_month.get(bucket).copied().unwrap_or(0)
    }

    /// Number of distinct `YYYY-MM` buckets with at least one transaction
    pub fn tracked_months(&self) -> usize {
        self.sales_by_month.len()
    }

    /// Bonus assigned by the ranking stage, zero before it runs
    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    /// Top sold products, empty before the selection stage runs
    pub fn top_products(&self) -> &[TopProduct] {
        &self.top_products
    }

    // Internal mutation methods for use by the operations module and the
    // ranking/top-products stages

    pub(crate) fn record_sale(&mut self, total_amount: f64, total_discount: f64) {
        self.total_sales += 1;
        self.total_amount += total_amount;
        self.total_discount += total_discount;
    }

    pub(crate) fn record_customer(&mut self, customer_id: u64) {
        self.customers.insert(customer_id);
    }

    pub(crate) fn record_month(&mut self, bucket: String) {
        *self.sales_by_month.entry(bucket).or_insert(0) += 1;
    }

    pub(crate) fn record_item(&mut self, sku: &str, quantity: u64) {
        self.products_sold.add(sku, quantity);
        self.total_items_sold += quantity;
    }

    pub(crate) fn add_line_revenue(&mut self, line_revenue: f64, cost: f64) {
        self.revenue += line_revenue;
        self.profit += line_revenue - cost;
    }

    pub(crate) fn set_bonus(&mut self, bonus: f64) {
        self.bonus = bonus;
    }

    pub(crate) fn set_top_products(&mut self, top_products: Vec<TopProduct>) {
        self.top_products = top_products;
    }
}

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use crate::domain::{apply_line_item, apply_purchase, Product, PurchaseRecord, Seller, SellerStats};
use crate::strategy::RevenueStrategy;

/// Single-pass join of purchase records against seller and product indexes
///
/// Accumulators are created up front, one per known seller in input order,
/// and both lookup indexes are built once. Records are then folded in one at
/// a time; a record referencing an unknown seller is skipped whole, an item
/// referencing an unknown SKU is skipped alone. Both skips are surfaced as
/// warnings, never as errors.
pub struct PurchaseProcessor<'a> {
    stats: Vec<SellerStats>,
    seller_index: HashMap<u64, usize>,
    product_index: HashMap<&'a str, &'a Product>,
    revenue: &'a dyn RevenueStrategy,
}

impl<'a> PurchaseProcessor<'a> {
    /// Build the accumulators and the two lookup indexes
    pub fn new(
        sellers: &[Seller],
        products: &'a [Product],
        revenue: &'a dyn RevenueStrategy,
    ) -> Self {
        let mut stats = Vec::with_capacity(sellers.len());
        let mut seller_index = HashMap::with_capacity(sellers.len());

        for seller in sellers {
            match seller_index.entry(seller.id) {
                Entry::Vacant(slot) => {
                    slot.insert(stats.len());
                    stats.push(SellerStats::new(seller));
                }
                Entry::Occupied(slot) => {
                    // Duplicate reference rows keep their original position,
                    // the later row wins
                    debug!(seller_id = seller.id, "duplicate seller id in reference data");
                    stats[*slot.get()] = SellerStats::new(seller);
                }
            }
        }

        let product_index = products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        Self {
            stats,
            seller_index,
            product_index,
            revenue,
        }
    }

    /// Fold one purchase record into the accumulators
    pub fn process_record(&mut self, record: &PurchaseRecord) {
        let Some(&slot) = self.seller_index.get(&record.seller_id) else {
            warn!(
                seller_id = record.seller_id,
                "purchase record references unknown seller, record skipped"
            );
            return;
        };

        let stats = &mut self.stats[slot];
        apply_purchase(stats, record);

        for item in &record.items {
            let Some(product) = self.product_index.get(item.sku.as_str()).copied() else {
                warn!(
                    seller_id = record.seller_id,
                    sku = %item.sku,
                    "line item references unknown product, item skipped"
                );
                continue;
            };

            let line_revenue = self.revenue.revenue(item, product);
            apply_line_item(stats, item, product, line_revenue);
        }
    }

    /// Number of accumulators (known sellers)
    pub fn seller_count(&self) -> usize {
        self.stats.len()
    }

    /// Release the accumulators in seller-input order
    pub fn into_stats(self) -> Vec<SellerStats> {
        self.stats
    }
}

use crate::domain::{ProductTally, SellerStats, TopProduct};

/// Maximum number of entries in a seller's top-products list
pub const TOP_PRODUCT_LIMIT: usize = 10;

/// Reduce a product tally to its highest-quantity entries
///
/// Stable sort over the tally's first-sale order, so equal quantities keep
/// the order in which the SKUs were first sold.
pub fn select_top_products(tally: &ProductTally) -> Vec<TopProduct> {
    let mut entries: Vec<TopProduct> = tally
        .entries()
        .map(|(sku, quantity)| TopProduct {
            sku: sku.to_string(),
            quantity,
        })
        .collect();

    entries.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    entries.truncate(TOP_PRODUCT_LIMIT);
    entries
}

/// Assign every seller its top-products list
pub fn assign_top_products(stats: &mut [SellerStats]) {
    for seller in stats.iter_mut() {
        let top = select_top_products(seller.products_sold());
        seller.set_top_products(top);
    }
}

use crate::domain::{LineItem, Product};

/// Capability mapping a line item to its realized revenue
///
/// Called once per resolved line item during the join pass. Implementations
/// are expected to be pure; the engine never retries or caches calls.
pub trait RevenueStrategy: Send + Sync {
    /// Realized revenue for one line item of a purchase
    fn revenue(&self, item: &LineItem, product: &Product) -> f64;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> f64 + Send + Sync,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> f64 {
        self(item, product)
    }
}

/// Reference revenue calculation: discounted sale price over the quantity
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRevenue;

/// Default revenue strategy as a named constant
pub const DEFAULT_REVENUE: DefaultRevenue = DefaultRevenue;

impl RevenueStrategy for DefaultRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> f64 {
        let (Some(quantity), Some(sale_price), Some(discount)) =
            (item.quantity, item.sale_price, item.discount)
        else {
            return 0.0;
        };

        sale_price * quantity as f64 * (1.0 - discount / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            sku: "X".to_string(),
            name: String::new(),
            purchase_price: 10.0,
        }
    }

    fn item(quantity: Option<u64>, sale_price: Option<f64>, discount: Option<f64>) -> LineItem {
        LineItem {
            sku: "X".to_string(),
            quantity,
            sale_price,
            discount,
        }
    }

    #[test]
    fn full_price_line() {
        let revenue = DEFAULT_REVENUE.revenue(&item(Some(2), Some(50.0), Some(0.0)), &product());
        assert_eq!(revenue, 100.0);
    }

    #[test]
    fn discount_is_a_percentage() {
        let revenue = DEFAULT_REVENUE.revenue(&item(Some(4), Some(25.0), Some(10.0)), &product());
        assert_eq!(revenue, 90.0);
    }

    #[test]
    fn full_discount_yields_zero() {
        let revenue = DEFAULT_REVENUE.revenue(&item(Some(3), Some(20.0), Some(100.0)), &product());
        assert_eq!(revenue, 0.0);
    }

    #[test]
    fn missing_quantity_yields_zero() {
        let revenue = DEFAULT_REVENUE.revenue(&item(None, Some(50.0), Some(0.0)), &product());
        assert_eq!(revenue, 0.0);
    }

    #[test]
    fn missing_sale_price_yields_zero() {
        let revenue = DEFAULT_REVENUE.revenue(&item(Some(2), None, Some(0.0)), &product());
        assert_eq!(revenue, 0.0);
    }

    #[test]
    fn missing_discount_yields_zero() {
        let revenue = DEFAULT_REVENUE.revenue(&item(Some(2), Some(50.0), None), &product());
        assert_eq!(revenue, 0.0);
    }

    #[test]
    fn zero_quantity_yields_zero() {
        let revenue = DEFAULT_REVENUE.revenue(&item(Some(0), Some(50.0), Some(0.0)), &product());
        assert_eq!(revenue, 0.0);
    }

    #[test]
    fn closures_are_revenue_strategies() {
        let flat_fee = |_item: &LineItem, _product: &Product| 7.0;
        let revenue = flat_fee.revenue(&item(Some(1), Some(1.0), Some(0.0)), &product());
        assert_eq!(revenue, 7.0);
    }
}

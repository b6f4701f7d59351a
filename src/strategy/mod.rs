pub mod bonus;
pub mod registry;
pub mod revenue;

// Re-export the strategy capabilities and their reference implementations
pub use bonus::{BonusStrategy, DEFAULT_BONUS, DefaultBonus};
pub use registry::options_from_value;
pub use revenue::{DEFAULT_REVENUE, DefaultRevenue, RevenueStrategy};

/// The two calculation capabilities `analyze` is parameterized over
///
/// Strategies are borrowed, not owned: the engine calls them but never
/// manages their lifecycle. `AnalyzeOptions::default()` wires the reference
/// implementations.
#[derive(Clone, Copy)]
pub struct AnalyzeOptions<'a> {
    pub calculate_revenue: &'a dyn RevenueStrategy,
    pub calculate_bonus: &'a dyn BonusStrategy,
}

impl<'a> AnalyzeOptions<'a> {
    /// Bundle a revenue and a bonus strategy
    pub fn new(
        calculate_revenue: &'a dyn RevenueStrategy,
        calculate_bonus: &'a dyn BonusStrategy,
    ) -> Self {
        Self {
            calculate_revenue,
            calculate_bonus,
        }
    }
}

impl Default for AnalyzeOptions<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_REVENUE, &DEFAULT_BONUS)
    }
}

use crate::domain::{SellerStats, round2};

/// Capability mapping a seller's rank to a monetary bonus
///
/// Called once per seller after the ranking stage, with the 1-based rank,
/// the total number of sellers, and a read-only view of the accumulator.
pub trait BonusStrategy: Send + Sync {
    /// Bonus for the seller at `rank` out of `total_sellers`
    fn bonus(&self, rank: usize, total_sellers: usize, stats: &SellerStats) -> f64;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStats) -> f64 + Send + Sync,
{
    fn bonus(&self, rank: usize, total_sellers: usize, stats: &SellerStats) -> f64 {
        self(rank, total_sellers, stats)
    }
}

/// Reference bonus policy: a profit share decided by rank tier
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBonus;

/// Default bonus strategy as a named constant
pub const DEFAULT_BONUS: DefaultBonus = DefaultBonus;

impl BonusStrategy for DefaultBonus {
    fn bonus(&self, rank: usize, total_sellers: usize, stats: &SellerStats) -> f64 {
        // The last-place guard is evaluated ahead of the tier branches, so a
        // sole seller (or the runner-up in a field of two) lands on zero.
        let rate = if rank == total_sellers {
            return 0.0;
        } else if rank == 1 {
            0.15
        } else if rank == 2 || rank == 3 {
            0.10
        } else {
            0.05
        };

        round2(stats.profit() * rate)
    }
}

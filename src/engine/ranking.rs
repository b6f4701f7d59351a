use crate::domain::SellerStats;
use crate::strategy::BonusStrategy;

/// Order sellers by profit and assign rank-derived bonuses
///
/// The sort is stable and descending on profit, so equal-profit sellers
/// keep their relative order from the join pass, which is seller-input
/// order. Rank is the 1-based position in the sorted sequence.
pub fn rank_and_assign_bonus(stats: &mut [SellerStats], bonus: &dyn BonusStrategy) {
    stats.sort_by(|a, b| b.profit().total_cmp(&a.profit()));

    let total_sellers = stats.len();
    for (position, seller) in stats.iter_mut().enumerate() {
        let amount = bonus.bonus(position + 1, total_sellers, seller);
        seller.set_bonus(amount);
    }
}

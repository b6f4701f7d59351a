use super::error::AnalyzeError;
use super::processor::PurchaseProcessor;
use super::ranking::rank_and_assign_bonus;
use super::report::{SellerReport, build_report};
use super::top_products::assign_top_products;
use super::validate::validate;
use crate::domain::SalesData;
use crate::strategy::AnalyzeOptions;

/// Compute the per-seller sales performance report
///
/// One pass over the purchase records joined against the seller and product
/// indexes, then the ranking, bonus, top-products, and formatting stages in
/// order. The returned sequence is sorted by profit descending, one row per
/// seller in the input. Pure apart from warning logs: all mutable state
/// lives inside this call, so concurrent invocations on disjoint inputs do
/// not interfere.
pub fn analyze(
    data: &SalesData,
    options: &AnalyzeOptions<'_>,
) -> Result<Vec<SellerReport>, AnalyzeError> {
    validate(data)?;

    let mut processor =
        PurchaseProcessor::new(&data.sellers, &data.products, options.calculate_revenue);
    for record in &data.purchase_records {
        processor.process_record(record);
    }

    let mut stats = processor.into_stats();
    rank_and_assign_bonus(&mut stats, options.calculate_bonus);
    assign_top_products(&mut stats);

    Ok(stats.iter().map(build_report).collect())
}

use serde_json::Value;

use super::bonus::{BonusStrategy, DEFAULT_BONUS};
use super::revenue::{DEFAULT_REVENUE, RevenueStrategy};
use super::AnalyzeOptions;
use crate::engine::AnalyzeError;

/// Key naming the revenue strategy inside an options record
pub const REVENUE_KEY: &str = "calculateRevenue";

/// Key naming the bonus strategy inside an options record
pub const BONUS_KEY: &str = "calculateBonus";

/// Resolve a revenue strategy by registry name
pub fn revenue_strategy(name: &str) -> Option<&'static dyn RevenueStrategy> {
    match name {
        "default" => Some(&DEFAULT_REVENUE),
        _ => None,
    }
}

/// Resolve a bonus strategy by registry name
pub fn bonus_strategy(name: &str) -> Option<&'static dyn BonusStrategy> {
    match name {
        "default" => Some(&DEFAULT_BONUS),
        _ => None,
    }
}

/// Resolve an untyped options record into typed analyze options
///
/// This is where the options half of the input gate lives: an absent or
/// non-object options value is `InvalidOptions`, and each strategy key must
/// name a registered strategy or the resolution fails with
/// `MissingStrategy`.
pub fn options_from_value(options: Option<&Value>) -> Result<AnalyzeOptions<'static>, AnalyzeError> {
    let record = match options {
        Some(Value::Object(record)) => record,
        _ => return Err(AnalyzeError::InvalidOptions),
    };

    let revenue_name = strategy_name(record.get(REVENUE_KEY), REVENUE_KEY)?;
    let bonus_name = strategy_name(record.get(BONUS_KEY), BONUS_KEY)?;

    let calculate_revenue = revenue_strategy(revenue_name)
        .ok_or_else(|| AnalyzeError::MissingStrategy(revenue_name.to_string()))?;
    let calculate_bonus = bonus_strategy(bonus_name)
        .ok_or_else(|| AnalyzeError::MissingStrategy(bonus_name.to_string()))?;

    Ok(AnalyzeOptions::new(calculate_revenue, calculate_bonus))
}

fn strategy_name<'v>(value: Option<&'v Value>, key: &str) -> Result<&'v str, AnalyzeError> {
    value
        .and_then(Value::as_str)
        .ok_or_else(|| AnalyzeError::MissingStrategy(key.to_string()))
}

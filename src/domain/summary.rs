//! Daily fee record handed back to the host aggregator.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Canonical daily fee record.
///
/// All metric fields are decimal strings in whole tokens. Lyra routes every
/// fee to liquidity providers, so user fees and supply-side revenue mirror
/// the total while the three revenue fields are always `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyFeeSummary {
    /// Timestamp exactly as the caller supplied it (not day-aligned).
    pub timestamp: i64,
    pub daily_fees: String,
    pub daily_user_fees: String,
    pub daily_supply_side_revenue: String,
    pub daily_revenue: String,
    pub daily_holders_revenue: String,
    pub daily_protocol_revenue: String,
}

impl DailyFeeSummary {
    /// Build the record for `timestamp` from the day's total fees.
    pub fn from_total(timestamp: i64, total_fees: U256) -> Self {
        let total = total_fees.to_string();
        Self {
            timestamp,
            daily_fees: total.clone(),
            daily_user_fees: total.clone(),
            daily_supply_side_revenue: total,
            daily_revenue: "0".to_string(),
            daily_holders_revenue: "0".to_string(),
            daily_protocol_revenue: "0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_fields_mirror_total() {
        let summary = DailyFeeSummary::from_total(1_656_161_234, U256::from(42u64));
        assert_eq!(summary.timestamp, 1_656_161_234);
        assert_eq!(summary.daily_fees, "42");
        assert_eq!(summary.daily_user_fees, "42");
        assert_eq!(summary.daily_supply_side_revenue, "42");
    }

    #[test]
    fn test_revenue_fields_are_zero() {
        let summary = DailyFeeSummary::from_total(0, U256::from(1_000u64));
        assert_eq!(summary.daily_revenue, "0");
        assert_eq!(summary.daily_holders_revenue, "0");
        assert_eq!(summary.daily_protocol_revenue, "0");
    }

    #[test]
    fn test_serializes_with_host_field_names() {
        let summary = DailyFeeSummary::from_total(10, U256::ZERO);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["timestamp"], 10);
        assert_eq!(json["dailyFees"], "0");
        assert_eq!(json["dailySupplySideRevenue"], "0");
        assert_eq!(json["dailyHoldersRevenue"], "0");
    }
}

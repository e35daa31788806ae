//! Fee snapshots and their aggregation.
//!
//! The subgraph reports every fee component as a base-10 integer string in
//! 18-decimal fixed point. Amounts routinely exceed `u64`, so all sums are
//! carried as `U256`. Each snapshot is scaled down to whole tokens before it
//! joins the daily total.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Fixed-point unit: 10^18 raw units per whole token.
pub const FEE_UNIT: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// One market's fee breakdown for a single 24-hour period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSnapshot {
    pub vega_fees: String,
    pub variance_fees: String,
    pub spot_price_fees: String,
    pub option_price_fees: String,
    pub liquidator_fees: String,
    pub sm_liquidation_fees: String,
    pub lp_liquidation_fees: String,
}

/// Why a snapshot could not be summed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// A fee field was not a non-negative base-10 integer.
    #[error("field `{field}` is not an unsigned integer: {value:?}")]
    Invalid { field: &'static str, value: String },

    /// The running total no longer fits in 256 bits.
    #[error("fee total overflows 256 bits")]
    Overflow,
}

impl FeeSnapshot {
    /// Snapshot with every fee component set to the same raw amount.
    #[cfg(test)]
    pub(crate) fn uniform(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            vega_fees: raw.clone(),
            variance_fees: raw.clone(),
            spot_price_fees: raw.clone(),
            option_price_fees: raw.clone(),
            liquidator_fees: raw.clone(),
            sm_liquidation_fees: raw.clone(),
            lp_liquidation_fees: raw,
        }
    }

    /// Fee components paired with their subgraph field names.
    pub fn components(&self) -> [(&'static str, &str); 7] {
        [
            ("vegaFees", self.vega_fees.as_str()),
            ("varianceFees", self.variance_fees.as_str()),
            ("spotPriceFees", self.spot_price_fees.as_str()),
            ("optionPriceFees", self.option_price_fees.as_str()),
            ("liquidatorFees", self.liquidator_fees.as_str()),
            ("smLiquidationFees", self.sm_liquidation_fees.as_str()),
            ("lpLiquidationFees", self.lp_liquidation_fees.as_str()),
        ]
    }

    /// Whole tokens in this snapshot, sub-unit remainder dropped.
    pub fn whole_units(&self) -> Result<U256, AmountError> {
        Ok(self.total_raw()? / FEE_UNIT)
    }

    /// Sum of all seven components in raw (10^18-scaled) units.
    pub fn total_raw(&self) -> Result<U256, AmountError> {
        self.components()
            .into_iter()
            .try_fold(U256::ZERO, |acc, (field, value)| {
                acc.checked_add(parse_amount(field, value)?)
                    .ok_or(AmountError::Overflow)
            })
    }
}

/// Parse one raw fee amount.
fn parse_amount(field: &'static str, value: &str) -> Result<U256, AmountError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::Invalid {
            field,
            value: value.to_string(),
        });
    }
    // Digits only, so the sole remaining failure is width.
    U256::from_str_radix(value, 10).map_err(|_| AmountError::Overflow)
}

/// Daily fees in whole tokens.
///
/// Every snapshot is truncated to whole tokens on its own, so sub-unit
/// remainders of different markets never combine.
pub fn aggregate_daily_fees(snapshots: &[FeeSnapshot]) -> Result<U256, AmountError> {
    snapshots.iter().try_fold(U256::ZERO, |acc, snapshot| {
        acc.checked_add(snapshot.whole_units()?)
            .ok_or(AmountError::Overflow)
    })
}

//! Shared fixtures for the adapter integration tests.

use lyra_fees_adapter::domain::FeeSnapshot;

/// Snapshot with every fee component set to the same raw amount.
pub fn uniform_snapshot(raw: impl Into<String>) -> FeeSnapshot {
    let raw = raw.into();
    FeeSnapshot {
        vega_fees: raw.clone(),
        variance_fees: raw.clone(),
        spot_price_fees: raw.clone(),
        option_price_fees: raw.clone(),
        liquidator_fees: raw.clone(),
        sm_liquidation_fees: raw.clone(),
        lp_liquidation_fees: raw,
    }
}

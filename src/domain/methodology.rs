//! Static methodology metadata published alongside the adapter.

use serde::Serialize;

/// Human-readable description of how each metric is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Methodology {
    pub fees: &'static str,
    pub user_fees: &'static str,
    pub supply_side_revenue: &'static str,
    pub revenue: &'static str,
    pub holders_revenue: &'static str,
    pub protocol_revenue: &'static str,
}

/// Lyra's fee distribution: everything users pay goes to LPs.
pub const LYRA_METHODOLOGY: Methodology = Methodology {
    fees: "All fees collected comes from user fees",
    user_fees: "Fees paid by users",
    supply_side_revenue: "LPs revenue, from user fees",
    revenue: "Governance have no revenue",
    holders_revenue: "Token holders have no revenue",
    protocol_revenue: "Protocol have no revenue",
};

/// Adapter metadata envelope (`meta` in the host contract).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdapterMeta {
    pub methodology: Methodology,
}

impl Default for AdapterMeta {
    fn default() -> Self {
        Self {
            methodology: LYRA_METHODOLOGY,
        }
    }
}

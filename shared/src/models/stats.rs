//! Dashboard Stats Model (仪表盘统计)

use serde::{Deserialize, Serialize};

/// Aggregate counters computed by the backend, read-only on the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub today_reservations: u32,
    /// Records still waiting for an operator decision
    pub pending_count: u32,
    pub monthly_revenue: f64,
    pub total_customers: u32,
}

//! Pricing outcome data structures.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use vcg_core::RouteId;

/// Terminal state of one pricing solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingStatus {
    /// The solver proved optimality of the assembled program.
    Optimal,
    /// No path satisfies the active constraints. Not an error: the
    /// column-generation loop simply has no improving column.
    Infeasible,
}

impl std::fmt::Display for PricingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingStatus::Optimal => write!(f, "Optimal"),
            PricingStatus::Infeasible => write!(f, "Infeasible"),
        }
    }
}

/// Result of one pricing call.
#[derive(Debug, Clone)]
pub struct PricingOutcome {
    /// Whether an improving column was appended to the route pool.
    pub column_found: bool,
    /// Optimal reduced cost, when the solve reached optimality.
    pub reduced_cost: Option<f64>,
    /// Identifier of the appended route, when a column was found.
    pub route_id: Option<RouteId>,
    pub status: PricingStatus,
    pub solve_time: Duration,
}

impl PricingOutcome {
    pub(crate) fn no_column(
        status: PricingStatus,
        reduced_cost: Option<f64>,
        solve_time: Duration,
    ) -> Self {
        Self {
            column_found: false,
            reduced_cost,
            route_id: None,
            status,
            solve_time,
        }
    }

    /// Format a human-readable summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Pricing Summary\n{}\n", "=".repeat(40)));
        s.push_str(&format!("Status: {}\n", self.status));
        if let Some(reduced_cost) = self.reduced_cost {
            s.push_str(&format!("Reduced Cost: {:.6}\n", reduced_cost));
        }
        if let Some(route_id) = self.route_id {
            s.push_str(&format!("New Route: #{}\n", route_id.value()));
        } else {
            s.push_str("New Route: none\n");
        }
        s.push_str(&format!("Solve Time: {:.2?}\n", self.solve_time));
        s
    }
}

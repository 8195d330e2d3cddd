//! Minimum-reduced-cost path pricing
//!
//! This module formulates the column-generation pricing sub-problem as a
//! mixed-integer linear program and solves it through the `good_lp` solver
//! backend.
//!
//! ## MILP Formulation
//!
//! ```text
//! minimize    Σ_(i,j) cost(i,j) · x(i,j)  -  Σ_{v ≠ Source} dual(v) · Σ_j x(v,j)
//!             └──────────────────────────┘   └──────────────────────────────────┘
//!             raw path cost                  dual credit from the master
//!
//! subject to:
//!   Σ_i x(i,v) = Σ_j x(v,j)                  Flow balance (v ≠ Source, Sink)
//!   Σ x(i,j) ≤ stop_limit                    Stop cap          [max_stop]
//!   Σ demand(j) · x(i,j) ≤ capacity          Load cap          [max_load]
//!   Σ time(i,j) · x(i,j) ≤ duration_limit    Time budget       [max_time]
//!   t(i) + time(i,j) ≤ t(j) + M(1 - x(i,j))  Visit ordering    [time_windows]
//!   lower(v) ≤ t(v) ≤ upper(v)               Visit windows     [time_windows]
//!   x(i,j) ∈ {0,1}
//! ```
//!
//! A strictly negative optimal objective (below the improvement tolerance)
//! means the selected path would enter the master basis with negative reduced
//! cost; the path is then reconstructed from the selected legs and appended
//! to the route pool. An infeasible program simply means no path satisfies
//! the active constraints and is reported as "no improving column".
//!
//! ## Big-M Constraints
//!
//! The visit-ordering constraint must vanish on unselected legs. When
//! [`PricingLimits::big_m`] is `None` the constant is derived from the
//! instance itself as the worst case of `upper(i) + time(i,j) - lower(j)`
//! over all legs, the tightest value that can never bind on an unselected
//! leg for any schedule inside the windows. An explicit override below that
//! bound silently corrupts feasibility.

mod options;
mod solution;
mod solver;

pub use options::{PricingLimits, PricingOptions};
pub use solution::{PricingOutcome, PricingStatus};
pub use solver::{solve_pricing, PricingError};

use vcg_core::{DualValues, Network, RoutePool};

/// Facade bundling constraint toggles and bounds for repeated pricing calls.
#[derive(Debug, Clone, Default)]
pub struct Pricer {
    options: PricingOptions,
    limits: PricingLimits,
}

impl Pricer {
    /// Create a pricer with all optional constraint families off and
    /// default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full toggle set.
    pub fn with_options(mut self, options: PricingOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the constraint bounds.
    pub fn with_limits(mut self, limits: PricingLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Toggle the stop-cap constraint family.
    pub fn with_max_stop(mut self, on: bool) -> Self {
        self.options.max_stop = on;
        self
    }

    /// Toggle the load-cap constraint family.
    pub fn with_max_load(mut self, on: bool) -> Self {
        self.options.max_load = on;
        self
    }

    /// Toggle the time-budget constraint family.
    pub fn with_max_time(mut self, on: bool) -> Self {
        self.options.max_time = on;
        self
    }

    /// Toggle the time-window constraint family.
    pub fn with_time_windows(mut self, on: bool) -> Self {
        self.options.time_windows = on;
        self
    }

    pub fn options(&self) -> &PricingOptions {
        &self.options
    }

    pub fn limits(&self) -> &PricingLimits {
        &self.limits
    }

    /// Run one pricing call; appends at most one route to `routes`.
    pub fn price(
        &self,
        network: &Network,
        duals: &DualValues,
        routes: &mut RoutePool,
    ) -> Result<PricingOutcome, PricingError> {
        solver::solve_pricing(network, duals, routes, &self.options, &self.limits)
    }
}

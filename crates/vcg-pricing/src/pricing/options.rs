//! Pricing configuration: constraint toggles and bounds.

use serde::{Deserialize, Serialize};

/// Which optional constraint families the formulation includes.
///
/// Flow balance is always enforced; the four toggles below each activate an
/// orthogonal constraint family and compose freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingOptions {
    /// Cap the number of legs a route may use.
    pub max_stop: bool,
    /// Cap the demand accumulated along the route.
    pub max_load: bool,
    /// Cap the total travel time of the route.
    pub max_time: bool,
    /// Enforce per-stop earliest/latest visit times.
    pub time_windows: bool,
}

impl PricingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_stop(mut self, on: bool) -> Self {
        self.max_stop = on;
        self
    }

    pub fn with_max_load(mut self, on: bool) -> Self {
        self.max_load = on;
        self
    }

    pub fn with_max_time(mut self, on: bool) -> Self {
        self.max_time = on;
        self
    }

    pub fn with_time_windows(mut self, on: bool) -> Self {
        self.time_windows = on;
        self
    }

    /// True when an active family needs leg travel times.
    pub(crate) fn needs_times(&self) -> bool {
        self.max_time || self.time_windows
    }
}

/// Bounds for the optional constraint families.
///
/// These are instance parameters, not constants of the method. The defaults
/// match the classic small-instance setup: four legs (three customer stops
/// plus the closing leg), capacity 10 and a duration budget of 60.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingLimits {
    /// Maximum number of selected legs (`max_stop`). Equality at the bound
    /// is allowed.
    pub stop_limit: usize,
    /// Vehicle capacity (`max_load`).
    pub capacity: f64,
    /// Route duration budget (`max_time`).
    pub duration_limit: f64,
    /// A column improves the master only if its reduced cost is strictly
    /// below the negation of this tolerance; guards against floating-point
    /// noise around zero.
    pub reduced_cost_tolerance: f64,
    /// Big-M for the time-window ordering constraints. `None` derives the
    /// constant from the instance data. An explicit value must exceed
    /// `upper(i) + time(i,j) - lower(j)` for every leg, otherwise
    /// feasibility is silently corrupted.
    pub big_m: Option<f64>,
}

impl Default for PricingLimits {
    fn default() -> Self {
        Self {
            stop_limit: 4,
            capacity: 10.0,
            duration_limit: 60.0,
            reduced_cost_tolerance: 1e-5,
            big_m: None,
        }
    }
}

impl PricingLimits {
    pub fn with_stop_limit(mut self, stop_limit: usize) -> Self {
        self.stop_limit = stop_limit;
        self
    }

    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_duration_limit(mut self, duration_limit: f64) -> Self {
        self.duration_limit = duration_limit;
        self
    }

    pub fn with_reduced_cost_tolerance(mut self, tolerance: f64) -> Self {
        self.reduced_cost_tolerance = tolerance;
        self
    }

    pub fn with_big_m(mut self, big_m: f64) -> Self {
        self.big_m = Some(big_m);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_default_off() {
        let options = PricingOptions::new();
        assert!(!options.max_stop);
        assert!(!options.max_load);
        assert!(!options.max_time);
        assert!(!options.time_windows);
        assert!(!options.needs_times());
    }

    #[test]
    fn test_needs_times() {
        assert!(PricingOptions::new().with_max_time(true).needs_times());
        assert!(PricingOptions::new().with_time_windows(true).needs_times());
        assert!(!PricingOptions::new().with_max_load(true).needs_times());
    }

    #[test]
    fn test_default_limits() {
        let limits = PricingLimits::default();
        assert_eq!(limits.stop_limit, 4);
        assert_eq!(limits.capacity, 10.0);
        assert_eq!(limits.duration_limit, 60.0);
        assert_eq!(limits.reduced_cost_tolerance, 1e-5);
        assert!(limits.big_m.is_none());
    }

    #[test]
    fn test_limit_builders() {
        let limits = PricingLimits::default()
            .with_stop_limit(6)
            .with_capacity(25.0)
            .with_big_m(500.0);
        assert_eq!(limits.stop_limit, 6);
        assert_eq!(limits.capacity, 25.0);
        assert_eq!(limits.big_m, Some(500.0));
    }
}

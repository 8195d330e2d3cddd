//! # vcg-pricing: Pricing Sub-Problem for VRP Column Generation
//!
//! This crate implements the pricing oracle of a column-generation scheme for
//! the Vehicle Routing Problem: given a routing network and the dual prices
//! of the restricted master problem, it searches for a single elementary
//! Source-to-Sink path with negative reduced cost and, when one exists,
//! materializes it as a new column in the shared route pool.
//!
//! ## Constraint Families
//!
//! | Family | Toggle | Bound |
//! |--------|--------|-------|
//! | Flow balance | always on | - |
//! | Stop cap | `max_stop` | [`PricingLimits::stop_limit`] |
//! | Load cap | `max_load` | [`PricingLimits::capacity`] |
//! | Time budget | `max_time` | [`PricingLimits::duration_limit`] |
//! | Time windows | `time_windows` | per-stop [`vcg_core::TimeWindow`] |
//!
//! Toggles are independent and compose freely; any subset (including none)
//! is valid.
//!
//! ## Example
//!
//! ```ignore
//! use vcg_core::{DualValues, Network, RoutePool};
//! use vcg_pricing::Pricer;
//!
//! let network: Network = build_instance();
//! let duals: DualValues = master.duals();
//! let mut routes = RoutePool::new();
//!
//! let pricer = Pricer::new().with_max_stop(true).with_max_load(true);
//! let outcome = pricer.price(&network, &duals, &mut routes)?;
//! println!("{}", outcome.summary());
//! ```

pub mod pricing;

pub use pricing::{
    solve_pricing, Pricer, PricingError, PricingLimits, PricingOptions, PricingOutcome,
    PricingStatus,
};

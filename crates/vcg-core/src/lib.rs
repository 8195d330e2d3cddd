//! # vcg-core: VRP Column-Generation Data Model
//!
//! Provides the network and route data structures shared between the
//! restricted master problem and the pricing sub-problem.
//!
//! Networks are modeled as **directed graphs** where:
//! - **Nodes**: stops — the depot `Source`/`Sink` pair and customers
//! - **Edges**: legs carrying a travel cost and an optional travel time
//!
//! ## Quick Start
//!
//! ```rust
//! use vcg_core::{Leg, Network, Stop};
//!
//! let mut network = Network::new();
//! let source = network.add_stop(Stop::source());
//! let a = network.add_stop(Stop::customer("A", 2.0));
//! let sink = network.add_stop(Stop::sink());
//!
//! network.add_leg(source, a, Leg::new(5.0));
//! network.add_leg(a, sink, Leg::new(5.0));
//!
//! assert_eq!(network.num_stops(), 3);
//! ```
//!
//! ## Core Data Structures
//!
//! - [`Network`] - The routing network (petgraph `DiGraph<Stop, Leg>`)
//! - [`Stop`] / [`StopKind`] - Depot terminals and customers
//! - [`Leg`] - A directed travel edge with cost and optional time
//! - [`Route`] / [`RoutePool`] - Generated columns and their append-only pool
//! - [`DualValues`] - Dual prices supplied by the master problem
//!
//! ## Modules
//!
//! - [`duals`] - Dual-price map from the master problem
//! - [`route`] - Routes (columns) and the append-only route pool

use petgraph::graph::DiGraph;
use serde::{Deserialize, Serialize};

pub mod duals;
pub mod route;

pub use duals::DualValues;
pub use petgraph::graph::NodeIndex;
pub use route::{Route, RouteId, RouteLeg, RoutePool};

/// Kind of stop in the routing network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    /// Route origin (depot departure). Carries no demand and no dual.
    Source,
    /// Route terminus (depot return).
    Sink,
    /// A customer to visit.
    Customer,
}

/// Earliest/latest feasible visit time at a stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub earliest: f64,
    pub latest: f64,
}

impl TimeWindow {
    pub fn new(earliest: f64, latest: f64) -> Self {
        Self { earliest, latest }
    }

    /// An inverted window admits no feasible visit time at all.
    pub fn is_inverted(&self) -> bool {
        self.earliest > self.latest
    }
}

/// A node in the routing network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    /// Unique human-readable name; duals are keyed by it.
    pub name: String,
    pub kind: StopKind,
    /// Demand collected when visiting this stop (zero for terminals).
    pub demand: f64,
    /// Visit window, required when time-window constraints are active.
    pub window: Option<TimeWindow>,
}

impl Stop {
    /// The depot departure terminal, conventionally named "Source".
    pub fn source() -> Self {
        Self {
            name: "Source".to_string(),
            kind: StopKind::Source,
            demand: 0.0,
            window: None,
        }
    }

    /// The depot return terminal, conventionally named "Sink".
    pub fn sink() -> Self {
        Self {
            name: "Sink".to_string(),
            kind: StopKind::Sink,
            demand: 0.0,
            window: None,
        }
    }

    /// A customer stop with the given demand.
    pub fn customer(name: impl Into<String>, demand: f64) -> Self {
        Self {
            name: name.into(),
            kind: StopKind::Customer,
            demand,
            window: None,
        }
    }

    /// Set the visit time window.
    pub fn with_window(mut self, earliest: f64, latest: f64) -> Self {
        self.window = Some(TimeWindow::new(earliest, latest));
        self
    }
}

/// A directed travel edge between two stops.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Leg {
    /// Travel cost.
    pub cost: f64,
    /// Travel time, required when time-based constraints are active.
    pub time: Option<f64>,
}

impl Leg {
    pub fn new(cost: f64) -> Self {
        Self { cost, time: None }
    }

    /// Set the travel time.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }
}

/// The routing network handed to each pricing call.
///
/// The graph is public, mirroring how callers construct instances directly
/// with petgraph; instance loaders live in external crates.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub graph: DiGraph<Stop, Leg>,
}

impl Network {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
        }
    }

    pub fn add_stop(&mut self, stop: Stop) -> NodeIndex {
        self.graph.add_node(stop)
    }

    pub fn add_leg(&mut self, from: NodeIndex, to: NodeIndex, leg: Leg) {
        self.graph.add_edge(from, to, leg);
    }

    /// Index of the Source terminal, if present.
    pub fn source(&self) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&ix| self.graph[ix].kind == StopKind::Source)
    }

    /// Index of the Sink terminal, if present.
    pub fn sink(&self) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&ix| self.graph[ix].kind == StopKind::Sink)
    }

    pub fn stop_name(&self, ix: NodeIndex) -> &str {
        &self.graph[ix].name
    }

    pub fn num_stops(&self) -> usize {
        self.graph.node_count()
    }

    pub fn num_legs(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_network() -> Network {
        let mut network = Network::new();
        let source = network.add_stop(Stop::source());
        let a = network.add_stop(Stop::customer("A", 2.0).with_window(0.0, 20.0));
        let sink = network.add_stop(Stop::sink());
        network.add_leg(source, a, Leg::new(5.0).with_time(3.0));
        network.add_leg(a, sink, Leg::new(5.0).with_time(4.0));
        network
    }

    #[test]
    fn test_terminal_lookup() {
        let network = small_network();
        let source = network.source().expect("source present");
        let sink = network.sink().expect("sink present");
        assert_eq!(network.stop_name(source), "Source");
        assert_eq!(network.stop_name(sink), "Sink");
        assert_eq!(network.num_stops(), 3);
        assert_eq!(network.num_legs(), 2);
    }

    #[test]
    fn test_terminals_absent() {
        let mut network = Network::new();
        network.add_stop(Stop::customer("A", 1.0));
        assert!(network.source().is_none());
        assert!(network.sink().is_none());
    }

    #[test]
    fn test_customer_builder() {
        let stop = Stop::customer("A", 2.5).with_window(1.0, 9.0);
        assert_eq!(stop.kind, StopKind::Customer);
        assert_eq!(stop.demand, 2.5);
        let window = stop.window.expect("window set");
        assert_eq!(window.earliest, 1.0);
        assert_eq!(window.latest, 9.0);
        assert!(!window.is_inverted());
    }

    #[test]
    fn test_inverted_window() {
        assert!(TimeWindow::new(5.0, 2.0).is_inverted());
        assert!(!TimeWindow::new(2.0, 2.0).is_inverted());
    }
}

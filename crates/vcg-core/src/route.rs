//! Routes (columns) and the append-only pool shared across pricing calls.

use serde::{Deserialize, Serialize};

/// 1-based sequential route identifier. Identifiers are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(usize);

impl RouteId {
    #[inline]
    pub fn new(value: usize) -> Self {
        RouteId(value)
    }

    #[inline]
    pub fn value(&self) -> usize {
        self.0
    }
}

/// One traversed leg of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

/// A Source-to-Sink column produced by the pricing sub-problem.
///
/// Immutable once created; `total_cost` equals the sum of its legs' costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    /// Legs in visiting order, Source first.
    pub legs: Vec<RouteLeg>,
    pub total_cost: f64,
}

impl Route {
    pub fn new(id: RouteId, legs: Vec<RouteLeg>) -> Self {
        let total_cost = legs.iter().map(|l| l.cost).sum();
        Self {
            id,
            legs,
            total_cost,
        }
    }

    /// Stop names in visiting order, Source first.
    pub fn stops(&self) -> Vec<&str> {
        let mut stops: Vec<&str> = self.legs.iter().map(|l| l.from.as_str()).collect();
        if let Some(last) = self.legs.last() {
            stops.push(last.to.as_str());
        }
        stops
    }

    pub fn num_legs(&self) -> usize {
        self.legs.len()
    }
}

/// Append-only collection of generated columns.
///
/// The pool only grows: routes are never mutated or removed, so identifiers
/// stay stable for the lifetime of the column-generation loop. One pricing
/// call appends at most one route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutePool {
    routes: Vec<Route>,
}

impl RoutePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Identifier the next appended route will receive.
    pub fn next_id(&self) -> RouteId {
        RouteId::new(self.routes.len() + 1)
    }

    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.value().checked_sub(1)?)
    }

    pub fn last(&self) -> Option<&Route> {
        self.routes.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

//! Pricing MILP assembly and solve.
//!
//! Builds the minimum-reduced-cost elementary path program described in the
//! module docs and drives it through the `good_lp` backend.

use super::{PricingLimits, PricingOptions, PricingOutcome, PricingStatus};
use good_lp::solvers::microlp::microlp;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel, Variable,
};
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};
use vcg_core::{DualValues, Network, Route, RouteLeg, RoutePool, TimeWindow};

/// Pricing input contract violations and solver failures.
///
/// Infeasibility of the assembled program is deliberately *not* represented
/// here; it folds into [`PricingStatus::Infeasible`] on the outcome.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("network has no Source stop")]
    MissingSource,
    #[error("network has no Sink stop")]
    MissingSink,
    #[error("no dual value supplied for stop '{0}'")]
    MissingDual(String),
    #[error("leg {from} -> {to} has no travel time but a time constraint is active")]
    MissingLegTime { from: String, to: String },
    #[error("stop '{0}' has no time window but time windows are active")]
    MissingWindow(String),
    #[error("solver failed: {0}")]
    Solver(String),
}

/// Solve the pricing sub-problem once.
///
/// Assembles the minimum-reduced-cost path MILP over `network` under the
/// constraint families activated by `options`, solves it, and appends a new
/// route to `routes` when the optimal reduced cost is strictly below
/// `-limits.reduced_cost_tolerance`. The pool grows by at most one entry per
/// call; an infeasible program is reported as "no improving column", not as
/// an error.
pub fn solve_pricing(
    network: &Network,
    duals: &DualValues,
    routes: &mut RoutePool,
    options: &PricingOptions,
    limits: &PricingLimits,
) -> Result<PricingOutcome, PricingError> {
    let start = Instant::now();
    let graph = &network.graph;

    let source = network.source().ok_or(PricingError::MissingSource)?;
    let sink = network.sink().ok_or(PricingError::MissingSink)?;

    // Every stop except Source must carry a dual from the master.
    let mut dual_of: HashMap<NodeIndex, f64> = HashMap::new();
    for ix in graph.node_indices() {
        if ix == source {
            continue;
        }
        let name = &graph[ix].name;
        let value = duals
            .get(name)
            .ok_or_else(|| PricingError::MissingDual(name.clone()))?;
        dual_of.insert(ix, value);
    }

    let leg_times: HashMap<EdgeIndex, f64> = if options.needs_times() {
        collect_leg_times(network)?
    } else {
        HashMap::new()
    };

    let windows: HashMap<NodeIndex, TimeWindow> = if options.time_windows {
        collect_windows(network)?
    } else {
        HashMap::new()
    };

    // An inverted window admits no visit time at any stop, so the whole
    // program is infeasible before the solver ever runs.
    for (ix, window) in &windows {
        if window.is_inverted() {
            debug!(
                stop = %graph[*ix].name,
                "inverted time window leaves no feasible schedule"
            );
            return Ok(PricingOutcome::no_column(
                PricingStatus::Infeasible,
                None,
                start.elapsed(),
            ));
        }
    }

    // === Variables ===
    // x[e]: binary leg selection; t[v]: visit time, bounded by the window.
    let mut vars = variables!();

    let mut x: HashMap<EdgeIndex, Variable> = HashMap::new();
    for edge in graph.edge_references() {
        x.insert(edge.id(), vars.add(variable().binary()));
    }

    let mut t: HashMap<NodeIndex, Variable> = HashMap::new();
    if options.time_windows {
        for (ix, window) in &windows {
            let lower = window.earliest.max(0.0);
            t.insert(*ix, vars.add(variable().min(lower).max(window.latest)));
        }
    }

    // === Objective: reduced cost under the current duals ===
    // Each leg carries its raw cost minus the dual credit earned at its
    // tail; Source's dual is absorbed into the master's flow constraints.
    let mut coeff: HashMap<EdgeIndex, f64> = HashMap::new();
    let mut objective = Expression::from(0.0);
    for edge in graph.edge_references() {
        let tail_dual = if edge.source() == source {
            0.0
        } else {
            dual_of[&edge.source()]
        };
        let c = edge.weight().cost - tail_dual;
        coeff.insert(edge.id(), c);
        objective += c * x[&edge.id()];
    }

    let mut model = vars.minimise(objective).using(microlp);

    // === Flow balance (mandatory) ===
    // Selected inflow equals selected outflow at every non-terminal stop, so
    // a feasible selection decomposes into Source-to-Sink paths.
    for ix in graph.node_indices() {
        if ix == source || ix == sink {
            continue;
        }
        let mut in_flow = Expression::from(0.0);
        for edge in graph.edges_directed(ix, Direction::Incoming) {
            in_flow += x[&edge.id()];
        }
        let mut out_flow = Expression::from(0.0);
        for edge in graph.edges_directed(ix, Direction::Outgoing) {
            out_flow += x[&edge.id()];
        }
        model = model.with(constraint!(in_flow - out_flow == 0.0));
    }

    // === Stop cap ===
    if options.max_stop {
        let mut total_legs = Expression::from(0.0);
        for var in x.values() {
            total_legs += *var;
        }
        model = model.with(constraint!(total_legs <= limits.stop_limit as f64));
    }

    // === Load cap ===
    // Demand is collected at the head of each selected leg.
    if options.max_load {
        let mut load = Expression::from(0.0);
        for edge in graph.edge_references() {
            load += graph[edge.target()].demand * x[&edge.id()];
        }
        model = model.with(constraint!(load <= limits.capacity));
    }

    // === Time budget ===
    if options.max_time {
        let mut duration = Expression::from(0.0);
        for edge in graph.edge_references() {
            duration += leg_times[&edge.id()] * x[&edge.id()];
        }
        model = model.with(constraint!(duration <= limits.duration_limit));
    }

    // === Time-window ordering (Big-M) ===
    // When x=1: t(j) >= t(i) + time(i,j) (ordering enforced)
    // When x=0: the constraint is slack for any schedule in the windows
    if options.time_windows {
        let big_m = limits
            .big_m
            .unwrap_or_else(|| derived_big_m(network, &windows, &leg_times));
        debug!(big_m, "time-window ordering constant");
        for edge in graph.edge_references() {
            let travel = leg_times[&edge.id()];
            let ordering = t[&edge.source()] - t[&edge.target()] + travel;
            model = model.with(constraint!(ordering <= big_m - big_m * x[&edge.id()]));
        }
    }

    // === Solve ===
    debug!(
        stops = graph.node_count(),
        legs = graph.edge_count(),
        ?options,
        "solving pricing sub-problem"
    );
    let solution = match model.solve() {
        Ok(solution) => solution,
        Err(ResolutionError::Infeasible) => {
            debug!("pricing sub-problem infeasible, no improving column");
            return Ok(PricingOutcome::no_column(
                PricingStatus::Infeasible,
                None,
                start.elapsed(),
            ));
        }
        Err(err) => return Err(PricingError::Solver(format!("{err:?}"))),
    };

    let reduced_cost: f64 = coeff
        .iter()
        .map(|(edge, c)| c * solution.value(x[edge]))
        .sum();
    debug!(reduced_cost, "pricing solve optimal");

    if reduced_cost >= -limits.reduced_cost_tolerance {
        return Ok(PricingOutcome::no_column(
            PricingStatus::Optimal,
            Some(reduced_cost),
            start.elapsed(),
        ));
    }

    // === Path reconstruction ===
    // Selected legs keyed by tail; solvers may report near-0/1 floats.
    let mut selected: HashMap<NodeIndex, Vec<EdgeIndex>> = HashMap::new();
    let mut n_selected = 0usize;
    for edge in graph.edge_references() {
        if solution.value(x[&edge.id()]) > 0.5 {
            selected.entry(edge.source()).or_default().push(edge.id());
            n_selected += 1;
        }
    }

    let mut legs: Vec<RouteLeg> = Vec::new();
    let mut current = source;
    while current != sink {
        let Some(edge) = selected.get_mut(&current).and_then(|out| out.pop()) else {
            break;
        };
        let Some((from, to)) = graph.edge_endpoints(edge) else {
            break;
        };
        legs.push(RouteLeg {
            from: graph[from].name.clone(),
            to: graph[to].name.clone(),
            cost: graph[edge].cost,
        });
        current = to;
    }

    if current != sink || legs.is_empty() {
        // Flow balance does not forbid selections made purely of cycles
        // disjoint from the terminals; such a selection is not a column.
        warn!(
            n_selected,
            "optimal selection does not form a Source-to-Sink chain, discarding"
        );
        return Ok(PricingOutcome::no_column(
            PricingStatus::Optimal,
            Some(reduced_cost),
            start.elapsed(),
        ));
    }
    if legs.len() != n_selected {
        warn!(
            leftover = n_selected - legs.len(),
            "selection contains legs outside the Source-to-Sink chain"
        );
    }

    let route = Route::new(routes.next_id(), legs);
    let route_id = route.id;
    info!(
        route = route_id.value(),
        total_cost = route.total_cost,
        reduced_cost,
        "admitting improving column"
    );
    routes.push(route);

    Ok(PricingOutcome {
        column_found: true,
        reduced_cost: Some(reduced_cost),
        route_id: Some(route_id),
        status: PricingStatus::Optimal,
        solve_time: start.elapsed(),
    })
}

/// Travel time per leg; every leg must carry one when a time-based
/// constraint family is active.
fn collect_leg_times(network: &Network) -> Result<HashMap<EdgeIndex, f64>, PricingError> {
    let graph = &network.graph;
    let mut times = HashMap::new();
    for edge in graph.edge_references() {
        let time = edge
            .weight()
            .time
            .ok_or_else(|| PricingError::MissingLegTime {
                from: graph[edge.source()].name.clone(),
                to: graph[edge.target()].name.clone(),
            })?;
        times.insert(edge.id(), time);
    }
    Ok(times)
}

/// Visit window per stop; every stop (terminals included) must carry one
/// when time windows are active.
fn collect_windows(network: &Network) -> Result<HashMap<NodeIndex, TimeWindow>, PricingError> {
    let graph = &network.graph;
    let mut windows = HashMap::new();
    for ix in graph.node_indices() {
        let stop = &graph[ix];
        let window = stop
            .window
            .ok_or_else(|| PricingError::MissingWindow(stop.name.clone()))?;
        windows.insert(ix, window);
    }
    Ok(windows)
}

/// Tightest Big-M that can never bind on an unselected leg: the worst case
/// of `upper(i) + time(i,j) - lower(j)` over all legs.
fn derived_big_m(
    network: &Network,
    windows: &HashMap<NodeIndex, TimeWindow>,
    leg_times: &HashMap<EdgeIndex, f64>,
) -> f64 {
    let mut big_m = 0.0f64;
    for edge in network.graph.edge_references() {
        let upper_i = windows[&edge.source()].latest;
        let lower_j = windows[&edge.target()].earliest.max(0.0);
        big_m = big_m.max(upper_i + leg_times[&edge.id()] - lower_j);
    }
    big_m
}

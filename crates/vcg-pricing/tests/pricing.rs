//! Pricing sub-problem integration tests
//!
//! Exercises the full column-generation contract: repeated pricing calls
//! against a shared route pool, identifier monotonicity, route integrity,
//! and toggle composition.

use std::collections::HashSet;

use vcg_core::{DualValues, Leg, Network, RoutePool, Stop};
use vcg_pricing::{solve_pricing, Pricer, PricingLimits, PricingOptions, PricingStatus};

/// Source -> A (cost 5, demand 2) -> Sink (cost 5); a second, pricier
/// corridor Source -> B (cost 8, demand 3) -> Sink (cost 8).
fn two_corridor_network() -> Network {
    let mut network = Network::new();
    let source = network.add_stop(Stop::source().with_window(0.0, 100.0));
    let a = network.add_stop(Stop::customer("A", 2.0).with_window(0.0, 50.0));
    let b = network.add_stop(Stop::customer("B", 3.0).with_window(0.0, 50.0));
    let sink = network.add_stop(Stop::sink().with_window(0.0, 100.0));
    network.add_leg(source, a, Leg::new(5.0).with_time(5.0));
    network.add_leg(a, sink, Leg::new(5.0).with_time(5.0));
    network.add_leg(source, b, Leg::new(8.0).with_time(8.0));
    network.add_leg(b, sink, Leg::new(8.0).with_time(8.0));
    network
}

fn duals(pairs: &[(&str, f64)]) -> DualValues {
    pairs.iter().map(|&(s, v)| (s, v)).collect()
}

#[test]
fn test_non_improvement_is_idempotent() {
    let network = two_corridor_network();
    let duals = duals(&[("A", 3.0), ("B", 1.0), ("Sink", 0.0)]);
    let pricer = Pricer::new();
    let mut routes = RoutePool::new();

    let first = pricer
        .price(&network, &duals, &mut routes)
        .expect("pricing solve");
    assert!(!first.column_found);
    assert!(routes.is_empty());

    let second = pricer
        .price(&network, &duals, &mut routes)
        .expect("pricing solve");
    assert!(!second.column_found);
    assert!(routes.is_empty());
    assert_eq!(first.reduced_cost, second.reduced_cost);
}

#[test]
fn test_route_ids_grow_with_the_pool() {
    let network = two_corridor_network();
    let duals = duals(&[("A", 11.0), ("B", 1.0), ("Sink", 0.0)]);
    let pricer = Pricer::new();
    let mut routes = RoutePool::new();

    // The pricing step does not know which columns the master already has,
    // so the same improving column is found on every call; each append gets
    // the next sequential identifier.
    for expected_id in 1..=3 {
        let len_before = routes.len();
        let outcome = pricer
            .price(&network, &duals, &mut routes)
            .expect("pricing solve");
        assert!(outcome.column_found);
        let id = outcome.route_id.expect("route id");
        assert_eq!(id.value(), len_before + 1);
        assert_eq!(id.value(), expected_id);
    }
    assert_eq!(routes.len(), 3);
}

#[test]
fn test_appended_route_is_a_simple_chain() {
    let network = two_corridor_network();
    let duals = duals(&[("A", 11.0), ("B", 1.0), ("Sink", 0.0)]);
    let mut routes = RoutePool::new();

    let outcome = solve_pricing(
        &network,
        &duals,
        &mut routes,
        &PricingOptions::default(),
        &PricingLimits::default(),
    )
    .expect("pricing solve");
    assert!(outcome.column_found);

    let route = routes.last().expect("appended route");
    let stops = route.stops();
    assert_eq!(stops.first(), Some(&"Source"));
    assert_eq!(stops.last(), Some(&"Sink"));

    // No stop is visited twice.
    let unique: HashSet<&str> = stops.iter().copied().collect();
    assert_eq!(unique.len(), stops.len());

    // Consecutive legs chain head-to-tail.
    for pair in route.legs.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }

    // Total cost is the sum of the traversed legs.
    let leg_sum: f64 = route.legs.iter().map(|l| l.cost).sum();
    assert!((route.total_cost - leg_sum).abs() < 1e-12);
}

#[test]
fn test_only_profitable_corridor_is_selected() {
    // A prices out (10 - 12 = -2) while B does not (16 - 15 = +1), so the
    // optimal selection is exactly the A corridor.
    let network = two_corridor_network();
    let duals = duals(&[("A", 12.0), ("B", 15.0), ("Sink", 0.0)]);
    let mut routes = RoutePool::new();

    let outcome = solve_pricing(
        &network,
        &duals,
        &mut routes,
        &PricingOptions::default(),
        &PricingLimits::default(),
    )
    .expect("pricing solve");
    assert!(outcome.column_found);
    let reduced_cost = outcome.reduced_cost.expect("optimal");
    assert!((reduced_cost + 2.0).abs() < 1e-6, "got {}", reduced_cost);
    assert_eq!(
        routes.last().expect("route").stops(),
        vec!["Source", "A", "Sink"]
    );
}

#[test]
fn test_all_toggles_compose() {
    let network = two_corridor_network();
    let duals = duals(&[("A", 11.0), ("B", 1.0), ("Sink", 0.0)]);
    let mut routes = RoutePool::new();

    let pricer = Pricer::new()
        .with_max_stop(true)
        .with_max_load(true)
        .with_max_time(true)
        .with_time_windows(true);
    let outcome = pricer
        .price(&network, &duals, &mut routes)
        .expect("pricing solve");

    // The A corridor satisfies every family under default limits.
    assert!(outcome.column_found);
    assert_eq!(outcome.status, PricingStatus::Optimal);
    let route = routes.last().expect("route");
    assert_eq!(route.stops(), vec!["Source", "A", "Sink"]);
    assert_eq!(route.total_cost, 10.0);
}

#[test]
fn test_caps_never_improve_the_objective() {
    let network = two_corridor_network();
    let duals = duals(&[("A", 11.0), ("B", 1.0), ("Sink", 0.0)]);

    let mut base_routes = RoutePool::new();
    let base = solve_pricing(
        &network,
        &duals,
        &mut base_routes,
        &PricingOptions::default(),
        &PricingLimits::default(),
    )
    .expect("pricing solve");
    let base_cost = base.reduced_cost.expect("optimal");

    let toggles = [
        PricingOptions::default().with_max_stop(true),
        PricingOptions::default().with_max_load(true),
        PricingOptions::default().with_max_time(true),
        PricingOptions::default().with_time_windows(true),
    ];
    for options in toggles {
        let mut routes = RoutePool::new();
        let outcome = solve_pricing(
            &network,
            &duals,
            &mut routes,
            &options,
            &PricingLimits::default(),
        )
        .expect("pricing solve");
        if let Some(reduced_cost) = outcome.reduced_cost {
            assert!(
                reduced_cost >= base_cost - 1e-9,
                "{:?} lowered the objective: {} < {}",
                options,
                reduced_cost,
                base_cost
            );
        }
    }
}

#[test]
fn test_pricer_accessors() {
    let limits = PricingLimits::default().with_capacity(42.0);
    let pricer = Pricer::new().with_max_load(true).with_limits(limits);
    assert!(pricer.options().max_load);
    assert!(!pricer.options().max_stop);
    assert_eq!(pricer.limits().capacity, 42.0);
}

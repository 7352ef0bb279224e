// tests/search_tests.rs
//! Integratietests voor de twee zoekalgoritmes: methodeselectie, beëindiging
//! binnen de cutoff, haalbaarheid van het eindresultaat, spoorvorm en de
//! concrete scenario's (4-cykel, ster, kantloze graaf).

extern crate mvcls;
use approx::assert_relative_eq;
use mvcls::graph::Graph;
use mvcls::params::Params;
use mvcls::search::{solve, Method, SearchResult};
use rand::{rngs::StdRng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// 4-cykel 1-2-3-4-1.
fn four_cycle() -> Graph {
    Graph::from_edge_list(4, &[(1, 2), (2, 3), (3, 4), (1, 4)])
}

/// Ster met centrum 1 en bladeren 2..=6.
fn star() -> Graph {
    Graph::from_edge_list(6, &[(1, 2), (1, 3), (1, 4), (1, 5), (1, 6)])
}

/// Controleert de dekkingseigenschap tegen de kantenlijst van de graaf.
fn is_cover(graph: &Graph, solution: &[usize]) -> bool {
    graph
        .edge_list()
        .iter()
        .all(|&(u, v)| solution.contains(&u) || solution.contains(&v))
}

/// Controleert de spoorinvarianten: eerste punt (0.0, initieel), strikt
/// dalende kwaliteit, strikt stijgende tijd.
fn assert_trace_shape(result: &SearchResult) {
    let times = result.trace.times();
    let sizes = result.trace.sizes();
    assert_eq!(times.len(), sizes.len());
    assert!(!times.is_empty());
    assert_relative_eq!(times[0], 0.0);
    assert!(times.windows(2).all(|w| w[0] < w[1]));
    assert!(sizes.windows(2).all(|w| w[0] > w[1]));
    // Het laatste spoorpunt is de teruggegeven kwaliteit.
    assert_eq!(*sizes.last().unwrap(), result.quality());
}

fn short_params(seconds: f64) -> Params {
    Params {
        max_time_seconds: seconds,
        ..Params::default()
    }
}

#[test]
fn test_method_from_str() {
    assert_eq!("LS1".parse::<Method>().unwrap(), Method::HillClimbing);
    assert_eq!("LS2".parse::<Method>().unwrap(), Method::SimulatedAnnealing);
    // Onbekende selector is een fatale configuratiefout.
    assert!("BnB".parse::<Method>().is_err());
    assert!("ls1".parse::<Method>().is_err());
}

#[test]
fn test_ls1_four_cycle_finds_minimum() {
    let g = four_cycle();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let result = solve(&g, Method::HillClimbing, &short_params(1.0), &mut rng);
    // De 4-cykel heeft een minimale dekking van grootte 2 ({1,3} of {2,4}).
    assert_eq!(result.quality(), 2);
    assert!(is_cover(&g, &result.solution));
    assert_trace_shape(&result);
}

#[test]
fn test_ls2_four_cycle_finds_minimum() {
    let g = four_cycle();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let result = solve(&g, Method::SimulatedAnnealing, &short_params(1.5), &mut rng);
    assert_eq!(result.quality(), 2);
    assert!(is_cover(&g, &result.solution));
    assert_trace_shape(&result);
}

#[test]
fn test_star_yields_center_regardless_of_method() {
    let g = star();
    for method in [Method::HillClimbing, Method::SimulatedAnnealing] {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = solve(&g, method, &short_params(0.5), &mut rng);
        assert_eq!(result.quality(), 1);
        assert_eq!(result.solution, vec![1]);
    }
}

#[test]
fn test_edgeless_graph_yields_empty_cover() {
    let g = Graph::with_vertices(4);
    for method in [Method::HillClimbing, Method::SimulatedAnnealing] {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let result = solve(&g, method, &short_params(0.2), &mut rng);
        assert_eq!(result.quality(), 0);
        assert!(result.solution.is_empty());
        // Spoor is precies [(0.0, 0)].
        assert_eq!(result.trace.sizes(), &[0]);
        assert_relative_eq!(result.trace.times()[0], 0.0);
    }
}

#[test]
fn test_solution_is_sorted_ascending() {
    let g = four_cycle();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let result = solve(&g, Method::HillClimbing, &short_params(0.3), &mut rng);
    assert!(result.solution.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_termination_within_cutoff_plus_overhead() {
    // Een wat grotere graaf zodat de lus daadwerkelijk moet werken.
    let edges: Vec<(usize, usize)> = (1..=11).map(|v| (v, v + 1)).chain([(12, 1)]).collect();
    let g = Graph::from_edge_list(12, &edges);

    for method in [Method::HillClimbing, Method::SimulatedAnnealing] {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let begin = Instant::now();
        let result = solve(&g, method, &short_params(1.0), &mut rng);
        // Binnen cutoff plus een kleine overhead, en altijd haalbaar.
        assert!(begin.elapsed().as_secs_f64() < 1.5);
        assert!(is_cover(&g, &result.solution));
        assert_trace_shape(&result);
    }
}

#[test]
fn test_search_accepts_any_rng() {
    // De zoekfuncties accepteren elke `Rng`, ook een `StdRng`.
    let g = star();
    let mut rng = StdRng::seed_from_u64(5);
    let result = solve(&g, Method::HillClimbing, &short_params(0.2), &mut rng);
    assert_eq!(result.quality(), 1);
}

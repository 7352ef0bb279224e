// tests/cover_tests.rs
//! Unit tests voor de kandidaat-dekking en de evaluatorlogica:
//! haalbaarheidscontrole, kosten/winst met sentinels, onbedekte kanten en
//! de greedy kant-deletie-constructie.

extern crate mvcls;
use mvcls::construct::edge_deletion;
use mvcls::cover::Cover;
use mvcls::graph::Graph;

/// 4-cykel 1-2-3-4-1.
fn four_cycle() -> Graph {
    Graph::from_edge_list(4, &[(1, 2), (2, 3), (3, 4), (1, 4)])
}

/// Ster met centrum 1 en bladeren 2..=6.
fn star() -> Graph {
    Graph::from_edge_list(6, &[(1, 2), (1, 3), (1, 4), (1, 5), (1, 6)])
}

#[test]
fn test_empty_cover_on_edgeless_graph_is_feasible() {
    let g = Graph::with_vertices(5);
    let cover = Cover::new(&g);
    assert!(cover.is_vertex_cover());
    assert_eq!(cover.cost(), 0);
    assert!(cover.uncovered_edges().is_empty());
}

#[test]
fn test_cover_membership_and_size() {
    let g = four_cycle();
    let mut cover = Cover::new(&g);
    cover.add(2);
    cover.add(4);
    // Idempotent toevoegen.
    cover.add(2);
    assert_eq!(cover.size(), 2);
    assert!(cover.contains(2));
    assert!(!cover.contains(1));
    assert_eq!(cover.members(), vec![2, 4]);

    cover.remove(2);
    // Idempotent verwijderen.
    cover.remove(2);
    assert_eq!(cover.size(), 1);
}

#[test]
fn test_is_vertex_cover() {
    let g = four_cycle();
    let mut cover = Cover::new(&g);
    assert!(!cover.is_vertex_cover());
    cover.add(1);
    cover.add(3);
    // {1, 3} dekt alle vier de kanten van de cykel.
    assert!(cover.is_vertex_cover());
    cover.remove(3);
    assert!(!cover.is_vertex_cover());
}

#[test]
fn test_vertex_cost_sentinel_for_non_member() {
    let g = four_cycle();
    let mut cover = Cover::new(&g);
    cover.add(1);
    assert_eq!(cover.vertex_cost(2), usize::MAX);
    // Buren 2 en 4 zitten buiten de dekking: kosten 2.
    assert_eq!(cover.vertex_cost(1), 2);
}

#[test]
fn test_vertex_gain_zero_for_member() {
    let g = star();
    let mut cover = Cover::new(&g);
    assert_eq!(cover.vertex_gain(1), 5);
    cover.add(1);
    assert_eq!(cover.vertex_gain(1), 0);
    // Bladkant al bedekt door het centrum: winst 0.
    assert_eq!(cover.vertex_gain(2), 0);
}

#[test]
fn test_cost_gain_symmetry_under_remove() {
    let g = four_cycle();
    let mut cover = Cover::new(&g);
    cover.add(1);
    cover.add(2);
    // Kosten vóór verwijdering == winst ná verwijdering, zonder andere
    // mutaties ertussen.
    for v in [1, 2] {
        let cost_before = cover.vertex_cost(v);
        cover.remove(v);
        assert_eq!(cover.vertex_gain(v), cost_before);
        cover.add(v);
    }
}

#[test]
fn test_uncovered_edges_and_cost() {
    let g = four_cycle();
    let mut cover = Cover::new(&g);
    assert_eq!(cover.cost(), 4);
    cover.add(1);
    // (2,3) en (3,4) blijven onbedekt.
    assert_eq!(cover.uncovered_edges(), vec![(2, 3), (3, 4)]);
    assert_eq!(cover.cost(), 2);
}

#[test]
fn test_edge_deletion_is_feasible() {
    // Haalbaarheid van de initiële oplossing op uiteenlopende grafen.
    for g in [
        four_cycle(),
        star(),
        Graph::with_vertices(3),
        Graph::from_edge_list(
            5,
            &[
                (1, 2),
                (1, 3),
                (1, 4),
                (1, 5),
                (2, 3),
                (2, 4),
                (2, 5),
                (3, 4),
                (3, 5),
                (4, 5),
            ],
        ),
    ] {
        let cover = edge_deletion(&g);
        assert!(cover.is_vertex_cover());
    }
}

#[test]
fn test_edge_deletion_picks_high_degree_endpoint() {
    // Op de ster wint het centrum (graad 5) elke vergelijking: dekking {1}.
    let g = star();
    let cover = edge_deletion(&g);
    assert_eq!(cover.members(), vec![1]);
}

#[test]
fn test_edge_deletion_tie_breaks_toward_lower_endpoint() {
    // Eén kant tussen gelijke graden: het laagste eindpunt wordt gekozen.
    let g = Graph::from_edge_list(2, &[(1, 2)]);
    let cover = edge_deletion(&g);
    assert_eq!(cover.members(), vec![1]);
}

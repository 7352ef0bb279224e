//! src/anneal.rs
//!
//! Lokale zoektocht 2: simulated annealing. Gerandomiseerde perturbatie met
//! een uitgegloeide acceptatieregel (Metropolis-criterium over het aantal
//! onbedekte kanten) en heropwarming bij stagnatie, onder hetzelfde
//! wall-clock-tijdsbudget als hill climbing.

use crate::{
    construct::edge_deletion,
    graph::Graph,
    params::Params,
    search::SearchResult,
    trace::Trace,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Instant;

/// Voert simulated annealing uit tot het tijdsbudget `p.max_time_seconds`
/// op is.
///
/// Per iteratie:
/// 1. Is de huidige dekking haalbaar, leg dan een verbeterpunt vast en laat
///    één uniform willekeurig lid vallen (opent bewust kanten).
/// 2. Bouw een kandidaat: kopieer de dekking, verwijder één uniform
///    willekeurig lid, en voeg — als er onbedekte kanten zijn — een
///    willekeurig eindpunt van een uniform willekeurige onbedekte kant toe.
/// 3. `delta = cost(huidig) − cost(kandidaat)`; bij `delta > 0` wordt de
///    kandidaat onvoorwaardelijk geaccepteerd en de stagnatieteller gereset,
///    anders telt de stagnatie op en accepteren we met kans `exp(delta/T)`.
/// 4. Koel elke iteratie af: `T *= p.cooling`.
/// 5. Overschrijdt de stagnatieteller `p.restart_threshold`, reset hem dan
///    en warm `T` weer op tot `p.init_temp`.
pub fn simulated_annealing<R>(graph: &Graph, p: &Params, rng: &mut R) -> SearchResult
where
    R: Rng + ?Sized,
{
    let mut cover = edge_deletion(graph);
    let mut trace = Trace::new();
    trace.record(0.0, cover.size());

    let mut best = cover.clone();

    let mut t = p.init_temp;
    let mut no_improvement = 0usize;

    let cutoff = p.max_time_seconds;
    let start = Instant::now();

    while start.elapsed().as_secs_f64() < cutoff {
        if cover.is_vertex_cover() {
            if cover.size() < best.size() {
                best = cover.clone();
                trace.record(start.elapsed().as_secs_f64(), best.size());
            }
            // Laat een willekeurig lid vallen om kanten te heropenen.
            if let Some(&v) = cover.members().choose(rng) {
                cover.remove(v);
            }
        }

        // Perturbatie: verwijder willekeurig lid, repareer langs een
        // willekeurige onbedekte kant.
        let mut candidate = cover.clone();
        if let Some(&v) = candidate.members().choose(rng) {
            candidate.remove(v);
        }
        let uncovered = candidate.uncovered_edges();
        if let Some(&(u, v)) = uncovered.choose(rng) {
            if rng.gen_bool(0.5) {
                candidate.add(u);
            } else {
                candidate.add(v);
            }
        }

        // Metropolis-acceptatie op het aantal onbedekte kanten.
        let delta = cover.cost() as i64 - candidate.cost() as i64;
        if delta > 0 {
            cover = candidate;
            no_improvement = 0;
        } else {
            no_improvement += 1;
            if rng.gen::<f64>() < (delta as f64 / t).exp() {
                cover = candidate;
            }
        }

        t *= p.cooling;

        // Heropwarming bij langdurige stagnatie.
        if no_improvement > p.restart_threshold {
            no_improvement = 0;
            t = p.init_temp;
        }
    }

    SearchResult::from_cover(&best, trace)
}

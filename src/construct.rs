//! src/construct.rs
//!
//! Heuristiek voor het construeren van een initiële dekking via greedy
//! kant-deletie. Eén enkele pass over de kantenlijst levert de startdekking
//! voor beide zoekvarianten.

use crate::{cover::Cover, graph::Graph};

/// Creëert een initiële dekking met de kant-deletie-heuristiek:
/// scan alle kanten in canonieke volgorde; voor een kant waarvan beide
/// eindpunten onbedekt zijn, voeg het eindpunt met de hoogste graad toe.
/// Bij een gelijke stand wint het eerste (laagste) eindpunt. Kanten die al
/// bedekt zijn, worden overgeslagen.
///
/// Het resultaat is per constructie een haalbare dekking: elke kant is bij
/// het passeren bedekt of wordt dat ter plekke.
pub fn edge_deletion(graph: &Graph) -> Cover<'_> {
    let mut cover = Cover::new(graph);
    for (u, v) in graph.edge_list() {
        if cover.contains(u) || cover.contains(v) {
            continue;
        }
        if graph.degree(v) > graph.degree(u) {
            cover.add(v);
        } else {
            cover.add(u);
        }
    }
    cover
}

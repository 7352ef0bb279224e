//! src/cover.rs
//!
//! Representeert een kandidaat-dekking: een subset van knopen `C` met een
//! `BitVec`-lidmaatschapsset geïndexeerd op knoop-id en een gecachte grootte
//! `|C|`. Dit biedt O(1) lidmaatschapstests en toevoeg-/verwijderoperaties;
//! `iter_ones` levert de leden in oplopende id-volgorde, zodat selecties
//! nooit van ongeordende set-iteratie afhangen. Bevat tevens de
//! evaluatorlogica (kosten, winst, dekkingscontrole) die beide
//! zoekalgoritmes delen.

use crate::graph::Graph;
use bitvec::prelude::*;

/// Een veranderlijke kandidaat-dekking, gebonden aan een specifieke `Graph`.
///
/// De dekking mag tussen accept/reject-beslissingen tijdelijk ongeldig zijn;
/// `is_vertex_cover` bepaalt de haalbaarheid op elk gewenst moment.
#[derive(Clone, Debug)]
pub struct Cover<'g> {
    graph: &'g Graph,
    members: BitVec,
    size: usize,
}

impl<'g> Cover<'g> {
    /*────────── Constructors ──────────*/

    /// Creëert een nieuwe, lege dekking voor de gegeven graaf.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            members: bitvec![0; graph.id_bound()],
            size: 0,
        }
    }

    /*────────── Queries ──────────*/

    /// Geeft de grootte van de dekking `|C|` terug.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Controleert of knoop `v` in de dekking zit.
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        v < self.members.len() && self.members[v]
    }

    /// Geeft een referentie naar de onderliggende graaf.
    #[inline]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Geeft alle leden in oplopende id-volgorde terug.
    pub fn members(&self) -> Vec<usize> {
        self.members.iter_ones().collect()
    }

    /*────────── Evaluator ──────────*/

    /// Controleert of elke kant van de graaf minstens één eindpunt in de
    /// dekking heeft. O(E) over de volledige kantenlijst; dit is de
    /// dominante kostenpost per zoekiteratie.
    pub fn is_vertex_cover(&self) -> bool {
        self.graph
            .edge_list()
            .iter()
            .all(|&(u, v)| self.contains(u) || self.contains(v))
    }

    /// Het aantal kanten dat onbedekt raakt als `v` uit de dekking wordt
    /// verwijderd: het aantal buren van `v` buiten de dekking. Geeft de
    /// sentinel `usize::MAX` terug als `v` geen lid is.
    pub fn vertex_cost(&self, v: usize) -> usize {
        if !self.contains(v) {
            return usize::MAX;
        }
        self.uncovered_neighbour_count(v)
    }

    /// Het aantal nu-onbedekte kanten dat bedekt raakt als `v` aan de
    /// dekking wordt toegevoegd, geëvalueerd tegen de huidige `C`. Geeft 0
    /// terug als `v` al lid is.
    pub fn vertex_gain(&self, v: usize) -> usize {
        if self.contains(v) {
            return 0;
        }
        self.uncovered_neighbour_count(v)
    }

    /// Geeft alle kanten terug waarvan geen van beide eindpunten in de
    /// dekking zit, in canonieke volgorde.
    pub fn uncovered_edges(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_list()
            .into_iter()
            .filter(|&(u, v)| !self.contains(u) && !self.contains(v))
            .collect()
    }

    /// Het aantal onbedekte kanten: de doelfunctie van simulated annealing
    /// (0 is optimaal, d.w.z. een haalbare dekking).
    pub fn cost(&self) -> usize {
        self.graph
            .edge_list()
            .iter()
            .filter(|&&(u, v)| !self.contains(u) && !self.contains(v))
            .count()
    }

    /// Telt de buren van `v` die buiten de dekking vallen.
    fn uncovered_neighbour_count(&self, v: usize) -> usize {
        self.graph
            .neighbour_set(v)
            .map_or(0, |ns| ns.iter().filter(|&&u| !self.contains(u)).count())
    }

    /*────────── Mutators ──────────*/

    /// Voegt knoop `v` toe aan de dekking. Negeert de operatie als `v` al
    /// aanwezig is.
    pub fn add(&mut self, v: usize) {
        if self.contains(v) {
            return;
        }
        self.members.set(v, true);
        self.size += 1;
    }

    /// Verwijdert knoop `v` uit de dekking. Negeert de operatie als `v`
    /// niet aanwezig is.
    pub fn remove(&mut self, v: usize) {
        if !self.contains(v) {
            return;
        }
        self.members.set(v, false);
        self.size -= 1;
    }
}

//! src/search.rs
//!
//! Het zoekcontract: de methodeselector, de dispatch naar de twee
//! lokale-zoekalgoritmes en het resultaattype dat de beste haalbare dekking
//! met het bijbehorende verbeteringsspoor bundelt.

use crate::{anneal, climb, cover::Cover, graph::Graph, params::Params, trace::Trace};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// De twee herkende lokale-zoekmethodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// LS1 — heuristisch hill climbing.
    HillClimbing,
    /// LS2 — simulated annealing.
    SimulatedAnnealing,
}

/// Fatale configuratiefout: een onbekende methodeselector. Er wordt geen
/// zoektocht uitgevoerd.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMethodError(String);

impl fmt::Display for ParseMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown method '{}': must be one of LS1, LS2", self.0)
    }
}

impl std::error::Error for ParseMethodError {}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LS1" => Ok(Method::HillClimbing),
            "LS2" => Ok(Method::SimulatedAnnealing),
            other => Err(ParseMethodError(other.to_owned())),
        }
    }
}

/// Het resultaat van één zoekaanroep: de beste gevonden haalbare dekking
/// (oplopend gesorteerde knoop-ids) en het (tijd, kwaliteit)-spoor.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// De beste haalbare dekking, oplopend gesorteerd.
    pub solution: Vec<usize>,
    /// Het verbeteringsspoor; het eerste punt is `(0.0, |initieel|)`.
    pub trace: Trace,
}

impl SearchResult {
    /// Bundelt de beste dekking en het spoor. De initiële oplossing is per
    /// constructie haalbaar, dus een onhaalbaar eindresultaat kan alleen uit
    /// een programmeerfout voortkomen.
    pub(crate) fn from_cover(best: &Cover<'_>, trace: Trace) -> Self {
        debug_assert!(best.is_vertex_cover(), "best-known dekking moet haalbaar zijn");
        Self {
            solution: best.members(),
            trace,
        }
    }

    /// De kwaliteit van de oplossing: de dekkingsgrootte.
    #[inline]
    pub fn quality(&self) -> usize {
        self.solution.len()
    }
}

/// Voert de gekozen zoekmethode uit tegen de graaf, met de meegegeven
/// parameters en geseede RNG. Single-threaded en synchroon; het enige
/// stoppunt is de wall-clock-cutoff in de zoeklus zelf.
pub fn solve<R>(graph: &Graph, method: Method, p: &Params, rng: &mut R) -> SearchResult
where
    R: Rng + ?Sized,
{
    match method {
        Method::HillClimbing => climb::hill_climbing(graph, p, rng),
        Method::SimulatedAnnealing => anneal::simulated_annealing(graph, p, rng),
    }
}

//! src/graph.rs
//!
//! Representeert een simpele, ongerichte graaf als een mapping van knoop-id
//! naar de verzameling buur-ids. Dit biedt snelle buur-, graad- en
//! kantenlijst-queries onder mutatie van knopen en kanten, wat cruciaal is
//! voor de lokale-zoekalgoritmes. Ondersteunt het parsen van het
//! METIS-achtige `.graph`-formaat (header "n m", daarna één buurregel per
//! knoop).

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::{self, BufRead, Read};

/// Fout voor lookups tegen een niet-bestaande knoop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// De opgevraagde knoop bestaat niet in de graaf.
    VertexNotFound(usize),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexNotFound(v) => write!(f, "vertex {} not in graph", v),
        }
    }
}

impl std::error::Error for GraphError {}

/// Een ongerichte graaf met set-semantiek per adjacency-lijst: geen dubbele
/// kanten, geen zelf-lussen. Knoop-ids zijn positieve gehele getallen en
/// hoeven na verwijdering niet aaneengesloten te zijn.
///
/// Invariant: symmetrie (`v ∈ N(u)` ⇔ `u ∈ N(v)`) en `num_edges` is gelijk
/// aan de helft van de som van alle adjacency-groottes. `BTreeMap`/`BTreeSet`
/// geven deterministische iteratievolgorde, zodat de kantenlijst over
/// aanroepen heen stabiel is.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// Mapping van knoop-id naar de verzameling buur-ids.
    adj: BTreeMap<usize, BTreeSet<usize>>,
    /// Lopende kantenteller (elke kant eenmaal geteld).
    num_edges: usize,
}

impl Graph {
    /*────────── Constructors ──────────*/

    /// Creëert een lege graaf zonder knopen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creëert een lege graaf met geïsoleerde knopen `1..=n`.
    pub fn with_vertices(n: usize) -> Self {
        let mut g = Self::new();
        for id in 1..=n {
            g.add_vertex(id);
        }
        g
    }

    /// Bouwt een graaf met knopen `1..=n` en de gegeven kantenlijst.
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::with_vertices(n);
        for &(u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    /// Parset het `.graph`-formaat vanuit een gebufferde reader.
    ///
    /// Regel 1 is de header `<numVertices> <numEdges>`; regel `i+1` somt de
    /// buur-ids van knoop `i` op (spatie-gescheiden, mogelijk leeg). Een kant
    /// wordt alleen ingevoegd wanneer het buur-id groter is dan het huidige
    /// knoop-id, wat dubbele invoeging voorkomt zolang het bestand elke kant
    /// symmetrisch in beide buurregels vermeldt. Inconsistente input levert
    /// een fatale `InvalidData`-fout op; er ontsnapt geen partiële graaf.
    pub fn parse_metis<R: Read>(reader: R) -> io::Result<Self> {
        let mut lines = io::BufReader::new(reader).lines();

        let header = lines
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "Missing header line"))??;
        let mut parts = header.split_whitespace();
        let n: usize = parts
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "Empty header line"))?
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let m_expected: usize = parts
            .next()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidData, "Header must be '<n> <m>'")
            })?
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut g = Self::with_vertices(n);

        // Eén buurregel per knoop 1..=n; ontbrekende regels zijn fataal.
        for i in 1..=n {
            let line = lines.next().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Missing adjacency line for vertex {} (n={})", i, n),
                )
            })??;

            for token in line.split_whitespace() {
                let v: usize = token
                    .parse()
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                if v == 0 || v > n {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("Neighbour {} of vertex {} out of bounds for n={}", v, i, n),
                    ));
                }
                // Alleen invoegen bij v > i; de symmetrische vermelding staat
                // in regel v.
                if v > i {
                    g.add_edge(i, v);
                }
            }
        }

        if g.m() != m_expected {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Header claims {} edges, file contains {}", m_expected, g.m()),
            ));
        }
        Ok(g)
    }

    /*────────── Queries ──────────*/

    /// Geeft het aantal knopen in de graaf terug.
    #[inline]
    pub fn n(&self) -> usize {
        self.adj.len()
    }

    /// Geeft het aantal kanten in de graaf terug (elke kant eenmaal geteld).
    #[inline]
    pub fn m(&self) -> usize {
        self.num_edges
    }

    /// Eén voorbij het hoogste knoop-id; bedoeld om bitsets over de knopen
    /// te dimensioneren. 0 voor een lege graaf.
    #[inline]
    pub fn id_bound(&self) -> usize {
        self.adj.keys().next_back().map_or(0, |&v| v + 1)
    }

    /// Controleert of knoop `v` in de graaf zit.
    #[inline]
    pub fn has_vertex(&self, v: usize) -> bool {
        self.adj.contains_key(&v)
    }

    /// Controleert of er een kant tussen `u` en `v` bestaat.
    /// Faalt expliciet met `VertexNotFound` als `u` niet bestaat.
    pub fn is_connected(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.adj
            .get(&u)
            .map(|ns| ns.contains(&v))
            .ok_or(GraphError::VertexNotFound(u))
    }

    /// Geeft een verse, oplopend gesorteerde kopie van de buren van `i`.
    /// Mutatie door de aanroeper raakt de graaf niet.
    pub fn neighbours(&self, i: usize) -> Result<Vec<usize>, GraphError> {
        self.adj
            .get(&i)
            .map(|ns| ns.iter().copied().collect())
            .ok_or(GraphError::VertexNotFound(i))
    }

    /// Interne referentie naar de buurverzameling van `v`, als die bestaat.
    #[inline]
    pub(crate) fn neighbour_set(&self, v: usize) -> Option<&BTreeSet<usize>> {
        self.adj.get(&v)
    }

    /// Geeft de graad van knoop `i` terug, of 0 als `i` niet bestaat.
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.adj.get(&i).map_or(0, |ns| ns.len())
    }

    /// Geeft alle knoop-ids in oplopende volgorde terug.
    pub fn vertex_list(&self) -> Vec<usize> {
        self.adj.keys().copied().collect()
    }

    /// Geeft elke ongerichte kant precies eenmaal terug als canoniek paar
    /// `(u, v)` met `u < v`, oplopend gesorteerd.
    pub fn edge_list(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.num_edges);
        for (&u, ns) in &self.adj {
            for &v in ns.range((u + 1)..) {
                edges.push((u, v));
            }
        }
        edges
    }

    /*────────── Mutators ──────────*/

    /// Voegt een geïsoleerde knoop toe. Geeft `false` terug als het id al
    /// bestaat; de kantenteller blijft ongemoeid.
    pub fn add_vertex(&mut self, id: usize) -> bool {
        if self.adj.contains_key(&id) {
            return false;
        }
        self.adj.insert(id, BTreeSet::new());
        true
    }

    /// Verwijdert knoop `id` en al zijn incidente kanten. Geeft `false`
    /// terug als de knoop niet bestaat.
    pub fn remove_vertex(&mut self, id: usize) -> bool {
        let Some(neighbours) = self.adj.remove(&id) else {
            return false;
        };
        // Ruim de symmetrische vermeldingen op; één kant per buur.
        for v in neighbours {
            if let Some(ns) = self.adj.get_mut(&v) {
                ns.remove(&id);
                self.num_edges -= 1;
            }
        }
        true
    }

    /// Voegt een ongerichte kant tussen `u` en `v` toe. Geeft `false` terug
    /// als een eindpunt ontbreekt, `u == v`, of de kant al bestaat; de
    /// teller wordt alleen bij een echte invoeging opgehoogd.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if u == v || !self.adj.contains_key(&u) || !self.adj.contains_key(&v) {
            return false;
        }
        if let Some(ns) = self.adj.get_mut(&u) {
            if !ns.insert(v) {
                return false;
            }
        }
        if let Some(ns) = self.adj.get_mut(&v) {
            ns.insert(u);
        }
        self.num_edges += 1;
        true
    }

    /// Verwijdert de kant tussen `u` en `v`. Spiegelbeeld van `add_edge`:
    /// faalt onder dezelfde precondities of als de kant niet bestaat.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        if u == v || !self.adj.contains_key(&u) || !self.adj.contains_key(&v) {
            return false;
        }
        if let Some(ns) = self.adj.get_mut(&u) {
            if !ns.remove(&v) {
                return false;
            }
        }
        if let Some(ns) = self.adj.get_mut(&v) {
            ns.remove(&u);
        }
        self.num_edges -= 1;
        true
    }
}

//! src/trace.rs
//! Het verbeteringsspoor van een zoektocht: parallelle, append-only reeksen
//! van (verstreken seconden, dekkingsgrootte), één punt per verbetering van
//! de beste bekende oplossing. Het eerste punt is altijd `(0.0, |initieel|)`;
//! de groottes dalen strikt, de tijden stijgen strikt.

/// Geordend spoor van (tijd, kwaliteit)-paren.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    times: Vec<f64>,
    sizes: Vec<usize>,
}

impl Trace {
    /// Creëert een leeg spoor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Voegt een verbeterpunt toe.
    pub fn record(&mut self, elapsed_seconds: f64, cover_size: usize) {
        self.times.push(elapsed_seconds);
        self.sizes.push(cover_size);
    }

    /// De verstreken-tijdreeks, in opnamevolgorde.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// De kwaliteitsreeks (dekkingsgroottes), in opnamevolgorde.
    #[inline]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Het aantal opgenomen verbeterpunten.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Controleert of het spoor leeg is.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

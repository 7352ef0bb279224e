// src/params.rs
//! src/params.rs
//!
//! Bundelt alle afstembare parameters voor de MVC-oplosser.

use pyo3::prelude::*;

/// Alle afstembare besturingselementen voor de twee lokale-zoekmethodes.
#[pyclass]
#[derive(Clone, Debug)]
pub struct Params {
    /// Steekproefgrootte voor de tweede verwijdering in hill climbing.
    #[pyo3(get, set)]
    pub sample_size: usize,
    /// Starttemperatuur; 8.96 geeft een acceptatiekans van ≈0.8 voor een
    /// verslechtering van één onbedekte kant.
    #[pyo3(get, set)]
    pub init_temp: f64,
    /// Afkoelfactor per iteratie.
    #[pyo3(get, set)]
    pub cooling: f64,
    /// Heropwarmingsdrempel: aantal niet-verbeterende iteraties.
    #[pyo3(get, set)]
    pub restart_threshold: usize,
    /// Wall-clock-tijdsbudget in seconden.
    #[pyo3(get, set)]
    pub max_time_seconds: f64,
    /// Random seed voor de ChaCha8-generator.
    #[pyo3(get, set)]
    pub seed: u64,
}

#[pymethods]
impl Params {
    #[new]
    #[pyo3(signature = (
        sample_size = 50,
        init_temp = 8.96,
        cooling = 0.95,
        restart_threshold = 1_000,
        max_time_seconds = 10.0,
        seed = 42,
    ))]
    pub fn new(
        sample_size: usize,
        init_temp: f64,
        cooling: f64,
        restart_threshold: usize,
        max_time_seconds: f64,
        seed: u64,
    ) -> Self {
        Self {
            sample_size,
            init_temp,
            cooling,
            restart_threshold,
            max_time_seconds,
            seed,
        }
    }

    /// Maakt een kopie, blootgesteld aan Python.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            sample_size: 50,
            init_temp: 8.96,
            cooling: 0.95,
            restart_threshold: 1_000,
            max_time_seconds: 10.0,
            seed: 42,
        }
    }
}

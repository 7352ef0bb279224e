// src/lib.rs

// Publieke modules voor gebruik binnen de Rust-crate
pub mod anneal;
pub mod climb;
pub mod construct;
pub mod cover;
pub mod graph;
pub mod params;
pub mod search;
pub mod trace;

// Her-exporteer de belangrijkste types voor Rust-gebruikers
pub use cover::Cover;
pub use graph::{Graph, GraphError};
pub use params::Params;
pub use search::{solve, Method, SearchResult};
pub use trace::Trace;

use pyo3::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::BufReader;

/// Python-binding voor de lokale-zoekoplosser.
///
/// Geeft `(grootte, oplossing, tijdspoor, kwaliteitsspoor)` terug: alles wat
/// een driver nodig heeft om de `.sol`- en `.trace`-bestanden te schrijven.
#[pyfunction]
#[pyo3(signature = (instance_path, method, py_params))]
fn solve_py(
    instance_path: String,
    method: String,
    py_params: Py<Params>,
) -> PyResult<(usize, Vec<usize>, Vec<f64>, Vec<usize>)> {
    let file = File::open(&instance_path)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()))?;
    let graph = Graph::parse_metis(BufReader::new(file))
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

    let method: Method = method
        .parse()
        .map_err(|e: search::ParseMethodError| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
        })?;

    let p = Python::with_gil(|py| py_params.borrow(py).clone());

    let mut rng = ChaCha8Rng::seed_from_u64(p.seed);
    let SearchResult { solution, trace } = solve(&graph, method, &p, &mut rng);

    Ok((
        solution.len(),
        solution,
        trace.times().to_vec(),
        trace.sizes().to_vec(),
    ))
}

/// Helperfunctie om een graafbestand te parsen en (n, m) terug te geven.
#[pyfunction]
fn parse_metis_py(instance_path: String) -> PyResult<(usize, usize)> {
    let file = File::open(&instance_path)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()))?;
    let graph = Graph::parse_metis(BufReader::new(file))
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
    Ok((graph.n(), graph.m()))
}

/// Definieert de Python-module `_native`.
#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Params>()?;
    m.add_function(wrap_pyfunction!(solve_py, m)?)?;
    m.add_function(wrap_pyfunction!(parse_metis_py, m)?)?;
    Ok(())
}

/// Transformations spatiales pures pour l'analyse visuelle de flux d'octets.
///
/// This crate contains the transform core of the byteview workspace: each
/// function takes an ordered sequence of real-valued samples (decoded file
/// bytes) and produces a fresh grid, with no shared state and no I/O. The
/// consuming layer loads bytes, selects sub-ranges, and renders the
/// results; none of that lives here.

pub mod digraph;
pub mod error;
pub mod grid;
pub mod hilbert;
pub mod reshape;

pub use digraph::{Digraph, digraph};
pub use error::CoreError;
pub use grid::{Grid2, Grid3};
pub use hilbert::{hilbert_2d, hilbert_3d};
pub use reshape::reshape;

/// Re-exports pour accès par chemin sémantique.
pub mod transforms {
    pub use crate::digraph::digraph;
    pub use crate::hilbert::{hilbert_2d, hilbert_3d};
    pub use crate::reshape::reshape;
}

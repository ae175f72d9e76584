use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Côté de la matrice digraphe (une entrée par valeur d'octet).
pub const DIGRAPH_SIDE: usize = 256;

/// Matrice 256×256 des fréquences de paires d'octets adjacents.
///
/// La cellule `(a, b)` compte les occurrences de la paire ordonnée
/// `(a, b)` dans la séquence, fenêtre glissante de longueur 2, pas de 1.
///
/// # Example
/// ```
/// use bv_core::digraph::digraph;
/// let m = digraph(&[0.0, 0.0, 1.0, 0.0]).unwrap();
/// assert_eq!(m.count(0, 0), 1);
/// assert_eq!(m.count(0, 1), 1);
/// assert_eq!(m.count(1, 0), 1);
/// assert_eq!(m.total(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digraph {
    counts: Vec<u64>,
}

impl Digraph {
    fn new() -> Self {
        Self {
            counts: vec![0; DIGRAPH_SIDE * DIGRAPH_SIDE],
        }
    }

    /// Nombre d'occurrences de la paire `(first, second)`.
    #[inline(always)]
    #[must_use]
    pub fn count(&self, first: u8, second: u8) -> u64 {
        self.counts[first as usize * DIGRAPH_SIDE + second as usize]
    }

    /// Somme de toutes les cellules. Vaut `max(0, L - 1)` pour une entrée
    /// de longueur `L` entièrement dans `[0, 255]`.
    ///
    /// # Example
    /// ```
    /// use bv_core::digraph::digraph;
    /// let m = digraph(&[5.0, 5.0, 5.0]).unwrap();
    /// assert_eq!(m.total(), 2);
    /// ```
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Accès plat aux compteurs, row-major (`first × 256 + second`).
    /// Pour les renderers heatmap.
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    #[inline(always)]
    fn bump(&mut self, first: usize, second: usize) {
        self.counts[first * DIGRAPH_SIDE + second] += 1;
    }
}

/// Calcule la matrice des fréquences de paires adjacentes d'une séquence.
///
/// Chaque échantillon est tronqué vers zéro pour obtenir son index
/// d'octet. Un échantillon non fini, ou dont la troncature sort de
/// `[0, 255]`, est rejeté avec [`CoreError::SampleOutOfRange`] — jamais
/// clampé, jamais ignoré silencieusement. Une séquence de longueur ≤ 1
/// produit une matrice entièrement nulle.
///
/// # Errors
/// [`CoreError::SampleOutOfRange`] si un échantillon ne se décode pas en
/// index d'octet.
///
/// # Example
/// ```
/// use bv_core::digraph::digraph;
/// let m = digraph(&[65.0, 66.9, 65.2]).unwrap();
/// assert_eq!(m.count(65, 66), 1);
/// assert_eq!(m.count(66, 65), 1);
/// assert!(digraph(&[1.0, 256.0]).is_err());
/// ```
pub fn digraph(samples: &[f64]) -> Result<Digraph, CoreError> {
    let mut matrix = Digraph::new();
    let Some((&head, rest)) = samples.split_first() else {
        return Ok(matrix);
    };
    if rest.is_empty() {
        return Ok(matrix);
    }

    let mut prev = decode_index(0, head)?;
    for (i, &value) in rest.iter().enumerate() {
        let current = decode_index(i + 1, value)?;
        matrix.bump(prev, current);
        prev = current;
    }
    Ok(matrix)
}

/// Troncature vers zéro, bornée à `[0, 255]`.
fn decode_index(index: usize, value: f64) -> Result<usize, CoreError> {
    let truncated = value.trunc();
    if (0.0..=255.0).contains(&truncated) {
        Ok(truncated as usize)
    } else {
        Err(CoreError::SampleOutOfRange { index, value })
    }
}

use serde::{Deserialize, Serialize};

/// Grille 2D de valeurs réelles. Stockage plat row-major, allouée une fois
/// par transformation, jamais redimensionnée.
///
/// Chaque cellule contient soit un échantillon d'entrée, soit la valeur de
/// padding du transform qui l'a produite.
///
/// # Example
/// ```
/// use bv_core::grid::Grid2;
/// let g = Grid2::new(4, 3);
/// assert_eq!(g.cells.len(), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid2 {
    /// Cellules row-major, `height × width`.
    pub cells: Vec<f64>,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl Grid2 {
    /// Crée une grille pré-allouée, remplie de 0.0.
    ///
    /// # Example
    /// ```
    /// use bv_core::grid::Grid2;
    /// let g = Grid2::new(16, 9);
    /// assert_eq!((g.width, g.height), (16, 9));
    /// assert!(g.cells.iter().all(|&v| v == 0.0));
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![0.0; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Set the cell at `(x, y)`.
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        debug_assert!(x < self.width && y < self.height, "cell out of bounds");
        self.cells[y as usize * self.width as usize + x as usize] = value;
    }

    /// Valeur de la cellule `(x, y)`.
    ///
    /// # Example
    /// ```
    /// use bv_core::grid::Grid2;
    /// let mut g = Grid2::new(2, 2);
    /// g.set(1, 0, 42.0);
    /// assert_eq!(g.get(1, 0), 42.0);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        debug_assert!(x < self.width && y < self.height, "cell out of bounds");
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Itère les lignes, du haut vers le bas.
    ///
    /// # Example
    /// ```
    /// use bv_core::grid::Grid2;
    /// let g = Grid2::new(4, 3);
    /// assert_eq!(g.rows().count(), 3);
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks_exact(self.width.max(1) as usize)
    }
}

/// Grille 3D cubique de valeurs réelles, côté puissance de deux.
///
/// Stockage plat, indexé `(x, y, z)` avec `x` l'axe le plus rapide.
///
/// # Example
/// ```
/// use bv_core::grid::Grid3;
/// let g = Grid3::new(4);
/// assert_eq!(g.cells.len(), 64);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid3 {
    /// Cellules aplaties, `side³` éléments.
    pub cells: Vec<f64>,
    /// Longueur d'arête du cube.
    pub side: u32,
}

impl Grid3 {
    /// Crée un cube pré-alloué, rempli de 0.0.
    #[must_use]
    pub fn new(side: u32) -> Self {
        let s = side as usize;
        Self {
            cells: vec![0.0; s * s * s],
            side,
        }
    }

    /// Set the cell at `(x, y, z)`.
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, z: u32, value: f64) {
        debug_assert!(
            x < self.side && y < self.side && z < self.side,
            "cell out of bounds"
        );
        let s = self.side as usize;
        self.cells[(z as usize * s + y as usize) * s + x as usize] = value;
    }

    /// Valeur de la cellule `(x, y, z)`.
    ///
    /// # Example
    /// ```
    /// use bv_core::grid::Grid3;
    /// let mut g = Grid3::new(2);
    /// g.set(1, 1, 1, 7.0);
    /// assert_eq!(g.get(1, 1, 1), 7.0);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32, z: u32) -> f64 {
        debug_assert!(
            x < self.side && y < self.side && z < self.side,
            "cell out of bounds"
        );
        let s = self.side as usize;
        self.cells[(z as usize * s + y as usize) * s + x as usize]
    }
}

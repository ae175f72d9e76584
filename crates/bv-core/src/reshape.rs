use crate::error::CoreError;
use crate::grid::Grid2;

/// Replie une séquence 1D en grille 2D au ratio d'aspect demandé.
///
/// Le ratio cible `(target_w, target_h)` — typiquement les dimensions
/// pixel du viewport — est réduit par son PGCD, puis la grille est le plus
/// petit multiple `rx·k × ry·k` de tuiles dont la capacité couvre la
/// séquence. Le remplissage est row-major ; les cellules restantes valent
/// 0.0 (pas de paramètre de padding ici, contrairement à
/// [`crate::hilbert`]).
///
/// Une séquence vide produit une grille 0×0.
///
/// # Errors
/// [`CoreError::InvalidRatio`] si une composante du ratio est nulle.
///
/// # Example
/// ```
/// use bv_core::reshape::reshape;
/// let samples: Vec<f64> = (1..=10).map(f64::from).collect();
/// let g = reshape(&samples, 4, 3).unwrap();
/// assert_eq!((g.width, g.height), (4, 3));
/// assert_eq!(g.get(0, 0), 1.0);
/// assert_eq!(g.get(1, 2), 10.0);
/// assert_eq!(g.get(2, 2), 0.0);
/// ```
pub fn reshape(samples: &[f64], target_w: u32, target_h: u32) -> Result<Grid2, CoreError> {
    if target_w == 0 || target_h == 0 {
        return Err(CoreError::InvalidRatio {
            width: target_w,
            height: target_h,
        });
    }

    let g = gcd(target_w, target_h);
    let rx = (target_w / g) as usize;
    let ry = (target_h / g) as usize;

    let len = samples.len();
    // nombre de tuiles rx × ry nécessaires, puis k tuiles par axe pour
    // une grille de tuiles aussi carrée que possible
    let blocks = len.div_ceil(rx * ry);
    let k = ceil_sqrt(blocks);

    let width = rx * k;
    let height = ry * k;
    log::debug!(
        "reshape: {len} échantillons, ratio {rx}:{ry}, grille {width}×{height}"
    );

    let mut grid = Grid2::new(width as u32, height as u32);
    grid.cells[..len].copy_from_slice(samples);
    Ok(grid)
}

/// PGCD, Euclide itératif.
fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Plus petit `k` tel que `k² ≥ v`.
fn ceil_sqrt(v: usize) -> usize {
    let mut k = (v as f64).sqrt().floor() as usize;
    while k * k < v {
        k += 1;
    }
    while k > 0 && (k - 1) * (k - 1) >= v {
        k -= 1;
    }
    k
}

use crate::grid::{Grid2, Grid3};

/// Place une séquence d'échantillons sur une courbe de Hilbert 2D.
///
/// L'ordre de la séquence correspond à l'ordre de parcours de la courbe :
/// deux échantillons voisins dans le flux restent voisins dans la grille.
/// La grille est la plus petite `n × n` avec `n` puissance de deux telle
/// que `n² ≥ samples.len()` ; les cellules au-delà de la séquence reçoivent
/// `pad`.
///
/// # Example
/// ```
/// use bv_core::hilbert::hilbert_2d;
/// let g = hilbert_2d(&[1.0, 2.0, 3.0], 0.0);
/// assert_eq!((g.width, g.height), (2, 2));
/// let mut values: Vec<f64> = g.cells.clone();
/// values.sort_by(f64::total_cmp);
/// assert_eq!(values, [0.0, 1.0, 2.0, 3.0]);
/// ```
#[must_use]
pub fn hilbert_2d(samples: &[f64], pad: f64) -> Grid2 {
    let len = samples.len();
    let r = order_2d(len);
    let n = 1u32 << r;
    let total = (n as usize) * (n as usize);
    log::debug!("hilbert_2d: {len} échantillons, ordre {r}, grille {n}×{n}");

    let mut grid = Grid2::new(n, n);
    for d in 0..total {
        let (x, y) = d_to_xy(n, d);
        grid.set(x, y, if d < len { samples[d] } else { pad });
    }
    grid
}

/// Place une séquence d'échantillons sur une courbe de Hilbert 3D.
///
/// Même politique que [`hilbert_2d`] avec un cube : plus petit côté `n`
/// puissance de deux tel que `n³ ≥ samples.len()`, padding au-delà.
///
/// # Example
/// ```
/// use bv_core::hilbert::hilbert_3d;
/// let g = hilbert_3d(&[1.0; 9], 0.0);
/// assert_eq!(g.side, 4);
/// ```
#[must_use]
pub fn hilbert_3d(samples: &[f64], pad: f64) -> Grid3 {
    let len = samples.len();
    let r = order_3d(len);
    let n = 1u32 << r;
    let total = (n as usize) * (n as usize) * (n as usize);
    log::debug!("hilbert_3d: {len} échantillons, ordre {r}, cube {n}³");

    let mut grid = Grid3::new(n);
    for d in 0..total {
        let (x, y, z) = d_to_xyz(n, d);
        grid.set(x, y, z, if d < len { samples[d] } else { pad });
    }
    grid
}

/// Plus petit ordre `r` tel que `(2^r)² ≥ len`.
fn order_2d(len: usize) -> u32 {
    let mut r = 0u32;
    while (1usize << (2 * r)) < len {
        r += 1;
    }
    r
}

/// Plus petit ordre `r` tel que `(2^r)³ ≥ len`.
fn order_3d(len: usize) -> u32 {
    let mut r = 0u32;
    while (1usize << (3 * r)) < len {
        r += 1;
    }
    r
}

/// Distance `d` le long de la courbe → coordonnées `(x, y)`.
///
/// Algorithme itératif classique : à chaque échelle `s`, deux bits de `d`
/// choisissent le quadrant, le quadrant choisit la réflexion/transposition
/// du motif accumulé.
fn d_to_xy(n: u32, d: usize) -> (u32, u32) {
    let mut x = 0u32;
    let mut y = 0u32;
    let mut t = d;
    let mut s = 1u32;
    while s < n {
        let rx = ((t >> 1) & 1) as u32;
        let ry = ((t ^ (t >> 1)) & 1) as u32;
        rotate_2d(s, &mut x, &mut y, rx, ry);
        x += s * rx;
        y += s * ry;
        t >>= 2;
        s <<= 1;
    }
    (x, y)
}

/// Réflexion/transposition du quadrant inférieur, selon les bits extraits.
fn rotate_2d(s: u32, x: &mut u32, y: &mut u32, rx: u32, ry: u32) {
    if ry == 0 {
        if rx == 1 {
            *x = s - 1 - *x;
            *y = s - 1 - *y;
        }
        std::mem::swap(x, y);
    }
}

/// Distance `d` le long de la courbe → coordonnées `(x, y, z)`.
///
/// Trois bits de `d` par échelle, un par axe ; la rotation réfléchit puis
/// échange les paires d'axes x/z et y/z pour garder la courbe continue
/// d'un octant au suivant.
fn d_to_xyz(n: u32, d: usize) -> (u32, u32, u32) {
    let mut x = 0u32;
    let mut y = 0u32;
    let mut z = 0u32;
    let mut t = d;
    let mut s = 1u32;
    while s < n {
        let rx = ((t >> 2) & 1) as u32;
        let ry = ((t >> 1) & 1) as u32;
        let rz = (t & 1) as u32;
        rotate_3d(s, &mut x, &mut y, &mut z, rx, ry, rz);
        x += s * rx;
        y += s * ry;
        z += s * rz;
        t >>= 3;
        s <<= 1;
    }
    (x, y, z)
}

fn rotate_3d(s: u32, x: &mut u32, y: &mut u32, z: &mut u32, rx: u32, ry: u32, rz: u32) {
    if rz == 0 {
        if ry == 1 {
            *x = s - 1 - *x;
            *z = s - 1 - *z;
        }
        std::mem::swap(x, z);
    }
    if ry == 0 {
        if rx == 1 {
            *y = s - 1 - *y;
            *z = s - 1 - *z;
        }
        std::mem::swap(y, z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_single_pad_cell_2d() {
        let g = hilbert_2d(&[], 7.0);
        assert_eq!((g.width, g.height), (1, 1));
        assert_eq!(g.get(0, 0), 7.0);
    }

    #[test]
    fn empty_input_is_single_pad_cell_3d() {
        let g = hilbert_3d(&[], 7.0);
        assert_eq!(g.side, 1);
        assert_eq!(g.get(0, 0, 0), 7.0);
    }

    #[test]
    fn three_samples_pad_to_2x2() {
        let g = hilbert_2d(&[1.0, 2.0, 3.0], 0.0);
        assert_eq!((g.width, g.height), (2, 2));
        let mut values = g.cells.clone();
        values.sort_by(f64::total_cmp);
        assert_eq!(values, [0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn sizing_is_smallest_power_of_two() {
        assert_eq!(hilbert_2d(&[0.0; 4], 0.0).width, 2);
        assert_eq!(hilbert_2d(&[0.0; 5], 0.0).width, 4);
        assert_eq!(hilbert_2d(&[0.0; 17], 0.0).width, 8);
        assert_eq!(hilbert_3d(&[0.0; 8], 0.0).side, 2);
        assert_eq!(hilbert_3d(&[0.0; 9], 0.0).side, 4);
        assert_eq!(hilbert_3d(&[0.0; 65], 0.0).side, 8);
    }

    #[test]
    fn distance_to_xy_is_a_bijection() {
        for r in 0..=5u32 {
            let n = 1u32 << r;
            let total = (n as usize) * (n as usize);
            let mut visited = vec![false; total];
            for d in 0..total {
                let (x, y) = d_to_xy(n, d);
                assert!(x < n && y < n, "hors grille: r={r} d={d}");
                let idx = y as usize * n as usize + x as usize;
                assert!(!visited[idx], "cellule visitée deux fois: r={r} d={d}");
                visited[idx] = true;
            }
            assert!(visited.iter().all(|&v| v), "couverture incomplète: r={r}");
        }
    }

    #[test]
    fn distance_to_xyz_is_a_bijection() {
        for r in 0..=5u32 {
            let n = 1u32 << r;
            let total = (n as usize).pow(3);
            let mut visited = vec![false; total];
            for d in 0..total {
                let (x, y, z) = d_to_xyz(n, d);
                assert!(x < n && y < n && z < n, "hors cube: r={r} d={d}");
                let s = n as usize;
                let idx = (z as usize * s + y as usize) * s + x as usize;
                assert!(!visited[idx], "cellule visitée deux fois: r={r} d={d}");
                visited[idx] = true;
            }
            assert!(visited.iter().all(|&v| v), "couverture incomplète: r={r}");
        }
    }

    #[test]
    fn consecutive_distances_are_axis_adjacent_2d() {
        for r in 1..=5u32 {
            let n = 1u32 << r;
            let total = (n as usize) * (n as usize);
            let (mut px, mut py) = d_to_xy(n, 0);
            for d in 1..total {
                let (x, y) = d_to_xy(n, d);
                let dist = x.abs_diff(px) + y.abs_diff(py);
                assert_eq!(dist, 1, "saut non adjacent: r={r} d={d}");
                (px, py) = (x, y);
            }
        }
    }

    #[test]
    fn non_finite_samples_pass_through() {
        let g = hilbert_2d(&[f64::NAN, f64::INFINITY, -3.5], 0.0);
        assert_eq!(g.cells.iter().filter(|v| v.is_nan()).count(), 1);
        assert_eq!(g.cells.iter().filter(|&&v| v == f64::INFINITY).count(), 1);
    }

    #[test]
    fn identical_inputs_give_identical_grids() {
        let samples: Vec<f64> = (0..100).map(|i| f64::from(i % 7)).collect();
        assert_eq!(hilbert_2d(&samples, 0.5), hilbert_2d(&samples, 0.5));
        assert_eq!(hilbert_3d(&samples, 0.5), hilbert_3d(&samples, 0.5));
    }
}

//! Staggered index mapping
//!
//! A u unknown and a v unknown share the linear id of their row-major
//! storage, but v carries one more entry per row than u
//! (`vnx = unx + 1`). Going from u-space to v-space adds the row
//! number, going from v-space to u-space subtracts it.
//!
//! Ids are kept signed until they are fetched, so that neighbors
//! below the first row are reported instead of wrapping.
use crate::error::{AssemblyError, Result};
use ndarray::ArrayView1;

/// Neighbor ids of a u unknown
///
/// ```text
///     vp -- ve
///  uw    up    ue
///     vs -- vse
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XNeighbors {
    /// u: west
    pub uw: isize,
    /// u: centre
    pub up: isize,
    /// u: east
    pub ue: isize,
    /// v: north face, west half
    pub vp: isize,
    /// v: north face, east half
    pub ve: isize,
    /// v: south face, west half
    pub vs: isize,
    /// v: south face, east half
    pub vse: isize,
}

impl XNeighbors {
    /// Map u id to its u and v neighbors
    pub fn new(id: usize, unx: usize, vnx: usize) -> Self {
        let id = id as isize;
        let line = id / unx as isize;
        let vp = id + line;
        let vs = vp - vnx as isize;
        Self {
            uw: id - 1,
            up: id,
            ue: id + 1,
            vp,
            ve: vp + 1,
            vs,
            vse: vs + 1,
        }
    }
}

/// Neighbor ids of a v unknown
///
/// ```text
///         vn
///   unw        un
///         vp
///   uw         up
///         vs
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YNeighbors {
    /// v: south
    pub vs: isize,
    /// v: centre
    pub vp: isize,
    /// v: north
    pub vn: isize,
    /// u: east face, lower half
    pub up: isize,
    /// u: west face, lower half
    pub uw: isize,
    /// u: east face, upper half
    pub un: isize,
    /// u: west face, upper half
    pub unw: isize,
}

impl YNeighbors {
    /// Map v id to its v and u neighbors
    pub fn new(id: usize, vnx: usize, unx: usize) -> Self {
        let id = id as isize;
        let line = id / vnx as isize;
        let up = id - line;
        let un = up + unx as isize;
        Self {
            vs: id - vnx as isize,
            vp: id,
            vn: id + vnx as isize,
            up,
            uw: up - 1,
            un,
            unw: un - 1,
        }
    }
}

/// Return `field[index]`
///
/// # Errors
/// `IndexOutOfRange` if index is negative or past the end.
pub fn fetch(field: &ArrayView1<f64>, name: &'static str, index: isize) -> Result<f64> {
    if index >= 0 {
        if let Some(value) = field.get(index as usize) {
            return Ok(*value);
        }
    }
    log::trace!("{} index {} out of range ({})", name, index, field.len());
    Err(AssemblyError::IndexOutOfRange {
        field: name,
        index,
        len: field.len(),
    })
}

/// Interior unknowns must have a neighbor on either side
/// within their own row.
///
/// # Errors
/// `NotInterior` for the first and the last column.
pub fn check_interior(id: usize, stride: usize) -> Result<()> {
    let column = id % stride;
    if column == 0 || column + 1 >= stride {
        log::trace!("id {} in column {} is no interior unknown", id, column);
        return Err(AssemblyError::NotInterior { id, column });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_x_neighbors() {
        // unx = 5, vnx = 6; u at column 2, row 1
        let n = XNeighbors::new(7, 5, 6);
        assert_eq!((n.uw, n.up, n.ue), (6, 7, 8));
        assert_eq!((n.vp, n.ve), (8, 9));
        assert_eq!((n.vs, n.vse), (2, 3));
    }

    #[test]
    fn test_y_neighbors() {
        // vnx = 6, unx = 5; v at column 2, row 1
        let n = YNeighbors::new(8, 6, 5);
        assert_eq!((n.vs, n.vp, n.vn), (2, 8, 14));
        assert_eq!((n.uw, n.up), (6, 7));
        assert_eq!((n.unw, n.un), (11, 12));
    }

    #[test]
    fn test_mapping_is_inverse() {
        // u -> v -> u returns the centre id
        let (unx, vnx) = (9, 10);
        for id in 0..90 {
            let x = XNeighbors::new(id, unx, vnx);
            let y = YNeighbors::new(x.vp as usize, vnx, unx);
            assert_eq!(y.up, id as isize);
        }
    }

    #[test]
    fn test_fetch() {
        let field = Array1::from(vec![1., 2., 3.]);
        assert_eq!(fetch(&field.view(), "u", 2).unwrap(), 3.);
        assert!(matches!(
            fetch(&field.view(), "u", 3),
            Err(AssemblyError::IndexOutOfRange { index: 3, len: 3, .. })
        ));
        assert!(matches!(
            fetch(&field.view(), "v", -4),
            Err(AssemblyError::IndexOutOfRange { field: "v", index: -4, .. })
        ));
    }

    #[test]
    fn test_check_interior() {
        assert!(check_interior(10, 5).is_err());
        assert!(check_interior(14, 5).is_err());
        assert!(check_interior(11, 5).is_ok());
        assert!(check_interior(13, 5).is_ok());
    }
}

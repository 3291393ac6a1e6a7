//! # Momentum equation coefficients
//!
//! Discrete x- and y-momentum equations on a staggered grid,
//! one unknown at a time:
//! $$
//! A_p u_P = A_w u_W + A_e u_E + A_s u_S + A_n u_N + L_p + B
//! $$
//! Convection and diffusion are blended by the WUDS scheme,
//! see [`crate::scheme`].
//!
//! # Example
//! Equation of an interior u unknown in a cavity at rest
//! ```
//! use rustcavity::layout::StaggeredLayout;
//! use rustcavity::momentum::{Assemble, XMomentum};
//! use rustcavity::params::DiscretizationParams;
//! use std::sync::Arc;
//!
//! let params = Arc::new(DiscretizationParams::lid_driven_cavity(8, 8, 100.).unwrap());
//! let layout = StaggeredLayout::new(8, 8);
//! let (u, v, p) = (layout.zeros_u(), layout.zeros_v(), layout.zeros_p());
//! let x = XMomentum::new(params.clone());
//! let a = x.internal(layout.u_id(4, 4), &u.view(), &v.view(), &p.view()).unwrap();
//! assert!((a.ap - 2. * (params.dx() + params.dy())).abs() < 1e-12);
//! ```
pub mod index;
pub mod x_momentum;
pub mod y_momentum;
pub use x_momentum::XMomentum;
pub use y_momentum::YMomentum;

use crate::error::{AssemblyError, Result};
use crate::scheme::Wuds;
use ndarray::{Array1, Array2, ArrayView1};
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Boundary faces of the domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// West
    W,
    /// East
    E,
    /// South
    S,
    /// North
    N,
}

impl FromStr for Face {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "W" => Ok(Self::W),
            "E" => Ok(Self::E),
            "S" => Ok(Self::S),
            "N" => Ok(Self::N),
            _ => Err(AssemblyError::UnknownFace(s.to_owned())),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::W => "W",
            Self::E => "E",
            Self::S => "S",
            Self::N => "N",
        };
        write!(f, "{}", tag)
    }
}

/// Kind of unknown: interior or on a boundary face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Full five point stencil
    Interior,
    /// Boundary stencil of the given face
    Boundary(Face),
}

/// Prescribed values on the four walls
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WallValues {
    /// West wall
    pub w: f64,
    /// East wall
    pub e: f64,
    /// South wall
    pub s: f64,
    /// North wall
    pub n: f64,
}

impl WallValues {
    /// Moving lid on the north wall, all other walls at rest
    pub fn lid(velocity: f64) -> Self {
        Self {
            n: velocity,
            ..Self::default()
        }
    }

    /// Value on `face`
    pub fn value(&self, face: Face) -> f64 {
        match face {
            Face::W => self.w,
            Face::E => self.e,
            Face::S => self.s,
            Face::N => self.n,
        }
    }
}

/// One row of the discrete momentum equation
///
/// Ordering of [`Coefficients::to_array`]:
/// \[Ap, Aw, Ae, As, An, Lp, B\]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coefficients {
    /// Centre
    pub ap: f64,
    /// West
    pub aw: f64,
    /// East
    pub ae: f64,
    /// South
    pub as_: f64,
    /// North
    pub an: f64,
    /// Pressure source
    pub lp: f64,
    /// Source
    pub b: f64,
}

impl Coefficients {
    /// Dirichlet row: Ap = 1, B = value
    pub fn dirichlet(value: f64) -> Self {
        Self {
            ap: 1.,
            b: value,
            ..Self::default()
        }
    }

    /// Interior row from face fluxes, blending factors and
    /// diffusive conductances. Faces are ordered \[w, e, s, n\].
    ///
    /// Ap is the sum of the neighbor coefficients.
    pub fn from_faces(flux: [f64; 4], blend: [Wuds<f64>; 4], dx: f64, dy: f64) -> Self {
        let [fw, fe, fs, fn_] = flux;
        let [w, e, s, n] = blend;
        let aw = (0.5 + w.alfa) * fw + w.beta * dx;
        let ae = -(0.5 - e.alfa) * fe + e.beta * dx;
        let as_ = (0.5 + s.alfa) * fs + s.beta * dy;
        let an = -(0.5 - n.alfa) * fn_ + n.beta * dy;
        Self {
            ap: aw + ae + as_ + an,
            aw,
            ae,
            as_,
            an,
            lp: 0.,
            b: 0.,
        }
    }

    /// Sum of the neighbor coefficients
    pub fn neighbor_sum(&self) -> f64 {
        self.aw + self.ae + self.as_ + self.an
    }

    /// \[Ap, Aw, Ae, As, An, Lp, B\]
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.ap, self.aw, self.ae, self.as_, self.an, self.lp, self.b,
        ]
    }
}

impl From<Coefficients> for [f64; 7] {
    fn from(c: Coefficients) -> Self {
        c.to_array()
    }
}

impl From<Coefficients> for Array1<f64> {
    fn from(c: Coefficients) -> Self {
        Array1::from(c.to_array().to_vec())
    }
}

/// Assemble rows of a momentum equation
///
/// Implementations are pure, every call only reads the
/// (immutable) parameters and the given fields.
#[enum_dispatch]
pub trait Assemble {
    /// Equation of interior unknown `id`
    ///
    /// # Errors
    /// `NotInterior` if `id` is a wall or ghost unknown,
    /// `IndexOutOfRange` if `id` or a neighbor lies outside of its field,
    /// `InvalidParameter` if the parameter strides are inconsistent,
    /// numerical errors of [`crate::scheme::wuds`].
    fn internal(
        &self,
        id: usize,
        u: &ArrayView1<f64>,
        v: &ArrayView1<f64>,
        p: &ArrayView1<f64>,
    ) -> Result<Coefficients>;

    /// Equation of unknown `id` on boundary `face` with prescribed value `tf`
    ///
    /// # Errors
    /// `IndexOutOfRange` if `id` or a neighbor lies outside of its field,
    /// `InvalidParameter` if the parameter strides are inconsistent,
    /// numerical errors of [`crate::scheme::wuds`].
    fn boundary(
        &self,
        id: usize,
        face: Face,
        tf: f64,
        u: &ArrayView1<f64>,
        v: &ArrayView1<f64>,
        p: &ArrayView1<f64>,
    ) -> Result<Coefficients>;

    /// Equation of unknown `id` of kind `cell`, boundary values are
    /// taken from `walls`
    ///
    /// # Errors
    /// See [`Assemble::internal`] and [`Assemble::boundary`]
    fn assemble(
        &self,
        id: usize,
        cell: Cell,
        walls: &WallValues,
        u: &ArrayView1<f64>,
        v: &ArrayView1<f64>,
        p: &ArrayView1<f64>,
    ) -> Result<Coefficients> {
        match cell {
            Cell::Interior => self.internal(id, u, v, p),
            Cell::Boundary(face) => self.boundary(id, face, walls.value(face), u, v, p),
        }
    }
}

/// Collection of momentum assemblers
#[enum_dispatch(Assemble)]
#[derive(Debug, Clone)]
pub enum Momentum {
    /// Horizontal momentum (u unknowns)
    XMomentum,
    /// Vertical momentum (v unknowns)
    YMomentum,
}

/// Assemble all `cells` one after another.
///
/// Returns array of shape (cells.len(), 7), see [`Coefficients::to_array`].
///
/// # Errors
/// First error in order of `cells`.
pub fn assemble_all<T: Assemble>(
    assembler: &T,
    cells: &[(usize, Cell)],
    walls: &WallValues,
    u: &ArrayView1<f64>,
    v: &ArrayView1<f64>,
    p: &ArrayView1<f64>,
) -> Result<Array2<f64>> {
    let mut rows = Array2::zeros((cells.len(), 7));
    for (mut row, &(id, cell)) in rows.outer_iter_mut().zip(cells.iter()) {
        let a = assembler.assemble(id, cell, walls, u, v, p)?;
        row.assign(&ArrayView1::from(&a.to_array()[..]));
    }
    Ok(rows)
}

/// Assemble all `cells` in parallel.
///
/// Same output as [`assemble_all`]. The fields are borrowed for
/// the whole pass, so every row sees the same snapshot.
///
/// # Errors
/// First error in order of `cells`.
pub fn assemble_par<T: Assemble + Sync>(
    assembler: &T,
    cells: &[(usize, Cell)],
    walls: &WallValues,
    u: &ArrayView1<f64>,
    v: &ArrayView1<f64>,
    p: &ArrayView1<f64>,
) -> Result<Array2<f64>> {
    let coeffs: Vec<Result<Coefficients>> = cells
        .par_iter()
        .with_min_len(64)
        .map(|&(id, cell)| assembler.assemble(id, cell, walls, u, v, p))
        .collect();
    let mut rows = Array2::zeros((cells.len(), 7));
    for (mut row, a) in rows.outer_iter_mut().zip(coeffs) {
        row.assign(&ArrayView1::from(&a?.to_array()[..]));
    }
    log::debug!("assembled {} rows", cells.len());
    Ok(rows)
}

//! # Staggered cavity layout
//!
//! Storage of a rectangular cavity with `nx` x `ny` pressure cells.
//!
//! u: `nx + 1` columns (west and east wall faces included)
//!    and `ny + 2` rows (ghost row below and above the cavity)
//!
//! v: `nx + 2` columns (ghost column left and right of the cavity)
//!    and `ny + 1` rows (bottom wall and lid included)
//!
//! All fields are flattened row by row, starting at the bottom left.
//! ```text
//!   v-row j   --v--v--v--    (horizontal faces)
//!   u-row j   u  u  u  u     (vertical faces, one row above v-row j-1)
//! ```
use crate::error::{AssemblyError, Result};
use crate::momentum::{Cell, Face};
use crate::params::DiscretizationParams;
use ndarray::Array1;

/// Index bookkeeping of a staggered cavity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggeredLayout {
    /// Pressure cells in x direction
    pub nx: usize,
    /// Pressure cells in y direction
    pub ny: usize,
}

impl StaggeredLayout {
    /// Return layout of `nx` x `ny` pressure cells
    pub fn new(nx: usize, ny: usize) -> Self {
        Self { nx, ny }
    }

    /// Return layout which matches the strides of `params`
    /// and has `ny` rows of pressure cells.
    ///
    /// # Errors
    /// `InvalidParameter` see [`DiscretizationParams::check_strides`].
    pub fn from_params(params: &DiscretizationParams, ny: usize) -> Result<Self> {
        params.check_strides()?;
        Ok(Self::new(params.unx - 1, ny))
    }

    /// Number of u unknowns per row
    pub fn unx(&self) -> usize {
        self.nx + 1
    }

    /// Number of v unknowns per row
    pub fn vnx(&self) -> usize {
        self.nx + 2
    }

    /// Length of the u field
    pub fn u_len(&self) -> usize {
        self.unx() * (self.ny + 2)
    }

    /// Length of the v field
    pub fn v_len(&self) -> usize {
        self.vnx() * (self.ny + 1)
    }

    /// Length of the p field
    pub fn p_len(&self) -> usize {
        self.nx * self.ny
    }

    /// Zero u field
    pub fn zeros_u(&self) -> Array1<f64> {
        Array1::zeros(self.u_len())
    }

    /// Zero v field
    pub fn zeros_v(&self) -> Array1<f64> {
        Array1::zeros(self.v_len())
    }

    /// Zero p field
    pub fn zeros_p(&self) -> Array1<f64> {
        Array1::zeros(self.p_len())
    }

    /// Linear u id of (column, row)
    pub fn u_id(&self, column: usize, row: usize) -> usize {
        row * self.unx() + column
    }

    /// Linear v id of (column, row)
    pub fn v_id(&self, column: usize, row: usize) -> usize {
        row * self.vnx() + column
    }

    /// Classify u unknown. Wall columns are Dirichlet
    /// and take precedence over the ghost rows.
    ///
    /// # Errors
    /// `IndexOutOfRange` if id is outside of u.
    pub fn classify_u(&self, id: usize) -> Result<Cell> {
        check(id, self.u_len(), "u")?;
        let (column, row) = (id % self.unx(), id / self.unx());
        let cell = if column == 0 {
            Cell::Boundary(Face::W)
        } else if column == self.nx {
            Cell::Boundary(Face::E)
        } else if row == 0 {
            Cell::Boundary(Face::S)
        } else if row == self.ny + 1 {
            Cell::Boundary(Face::N)
        } else {
            Cell::Interior
        };
        Ok(cell)
    }

    /// Classify v unknown. Wall rows are Dirichlet
    /// and take precedence over the ghost columns.
    ///
    /// # Errors
    /// `IndexOutOfRange` if id is outside of v.
    pub fn classify_v(&self, id: usize) -> Result<Cell> {
        check(id, self.v_len(), "v")?;
        let (column, row) = (id % self.vnx(), id / self.vnx());
        let cell = if row == 0 {
            Cell::Boundary(Face::S)
        } else if row == self.ny {
            Cell::Boundary(Face::N)
        } else if column == 0 {
            Cell::Boundary(Face::W)
        } else if column == self.nx + 1 {
            Cell::Boundary(Face::E)
        } else {
            Cell::Interior
        };
        Ok(cell)
    }

    /// All u unknowns with their classification
    pub fn cells_u(&self) -> Vec<(usize, Cell)> {
        (0..self.u_len())
            .filter_map(|id| self.classify_u(id).ok().map(|c| (id, c)))
            .collect()
    }

    /// All v unknowns with their classification
    pub fn cells_v(&self) -> Vec<(usize, Cell)> {
        (0..self.v_len())
            .filter_map(|id| self.classify_v(id).ok().map(|c| (id, c)))
            .collect()
    }
}

fn check(id: usize, len: usize, field: &'static str) -> Result<()> {
    if id < len {
        Ok(())
    } else {
        Err(AssemblyError::IndexOutOfRange {
            field,
            index: id as isize,
            len,
        })
    }
}

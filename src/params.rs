//! # Discretization parameters
//!
//! Read-only record shared by the momentum assemblers during one solve.
//!
//! # Example
//! Parameters of a lid driven cavity with 80 x 80 cells at Re = 100
//! ```
//! use rustcavity::params::DiscretizationParams;
//! let params = DiscretizationParams::lid_driven_cavity(80, 80, 100.).unwrap();
//! assert_eq!(params.unx, 81);
//! assert_eq!(params.vnx, 82);
//! ```
use crate::error::{AssemblyError, Result};
use serde::{Deserialize, Serialize};

/// Physical and grid parameters of the staggered discretization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscretizationParams {
    /// Density
    pub rho: f64,
    /// Diffusivity (dynamic viscosity)
    pub gamma: f64,
    /// Cell width
    pub deltax: f64,
    /// Cell height
    pub deltay: f64,
    /// Number of u unknowns per row
    pub unx: usize,
    /// Number of v unknowns per row
    pub vnx: usize,
}

impl DiscretizationParams {
    /// Return validated parameters
    ///
    /// # Errors
    /// `InvalidParameter` if rho is not finite, if gamma, deltax or
    /// deltay are not finite and positive, or if the strides do not
    /// satisfy [`DiscretizationParams::check_strides`].
    pub fn new(
        rho: f64,
        gamma: f64,
        deltax: f64,
        deltay: f64,
        unx: usize,
        vnx: usize,
    ) -> Result<Self> {
        let params = Self {
            rho,
            gamma,
            deltax,
            deltay,
            unx,
            vnx,
        };
        params.validate()?;
        log::debug!("{:?}", params);
        Ok(params)
    }

    /// Return parameters of a unit lid driven cavity with `nx` x `ny`
    /// pressure cells, unit lid velocity and density.
    /// Then gamma = 1 / Re.
    ///
    /// u carries `nx + 1` faces per row, v carries `nx` faces plus
    /// one ghost column on each side.
    ///
    /// # Errors
    /// `InvalidParameter` if a size is zero or reynolds is not positive.
    pub fn lid_driven_cavity(nx: usize, ny: usize, reynolds: f64) -> Result<Self> {
        if nx == 0 || ny == 0 {
            return Err(AssemblyError::InvalidParameter {
                name: "mesh size",
                value: nx.min(ny) as f64,
            });
        }
        if !(reynolds > 0.) {
            return Err(AssemblyError::InvalidParameter {
                name: "reynolds",
                value: reynolds,
            });
        }
        Self::new(
            1.,
            1. / reynolds,
            1. / nx as f64,
            1. / ny as f64,
            nx + 1,
            nx + 2,
        )
    }

    /// Read parameters from json and validate them
    ///
    /// # Errors
    /// `Config` if the string is no valid parameter record,
    /// `InvalidParameter` see [`DiscretizationParams::new`].
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        log::debug!("{:?}", params);
        Ok(params)
    }

    /// Serialize parameters to json
    ///
    /// # Errors
    /// `Config` if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check parameter ranges
    ///
    /// # Errors
    /// `InvalidParameter` on the first parameter which is out of range.
    pub fn validate(&self) -> Result<()> {
        if !self.rho.is_finite() {
            return Err(invalid("rho", self.rho));
        }
        for (name, value) in [
            ("gamma", self.gamma),
            ("deltax", self.deltax),
            ("deltay", self.deltay),
        ] {
            if !(value.is_finite() && value > 0.) {
                return Err(invalid(name, value));
            }
        }
        self.check_strides()
    }

    /// Check the staggered strides: at least one cell per row
    /// and one ghost column more in v than in u (`vnx = unx + 1`).
    ///
    /// # Errors
    /// `InvalidParameter` naming `unx` or `vnx`.
    pub fn check_strides(&self) -> Result<()> {
        if self.unx < 2 {
            return Err(invalid("unx", self.unx as f64));
        }
        if self.vnx != self.unx + 1 {
            return Err(invalid("vnx", self.vnx as f64));
        }
        Ok(())
    }

    /// Diffusive conductance of the west and east faces
    pub fn dx(&self) -> f64 {
        self.gamma * self.deltay / self.deltax
    }

    /// Diffusive conductance of the south and north faces
    pub fn dy(&self) -> f64 {
        self.gamma * self.deltax / self.deltay
    }
}

fn invalid(name: &'static str, value: f64) -> AssemblyError {
    AssemblyError::InvalidParameter { name, value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cavity_params() {
        let params = DiscretizationParams::lid_driven_cavity(80, 40, 100.).unwrap();
        assert_eq!(params.rho, 1.);
        assert!((params.gamma - 0.01).abs() < 1e-15);
        assert!((params.deltax - 1. / 80.).abs() < 1e-15);
        assert!((params.deltay - 1. / 40.).abs() < 1e-15);
        assert_eq!(params.unx, 81);
        assert_eq!(params.vnx, 82);
        assert!((params.dx() - 0.02).abs() < 1e-15);
        assert!((params.dy() - 0.005).abs() < 1e-15);
    }

    #[test]
    fn test_invalid_params() {
        assert!(matches!(
            DiscretizationParams::new(1., 0., 0.1, 0.1, 11, 12),
            Err(AssemblyError::InvalidParameter { name: "gamma", .. })
        ));
        assert!(matches!(
            DiscretizationParams::new(f64::NAN, 0.1, 0.1, 0.1, 11, 12),
            Err(AssemblyError::InvalidParameter { name: "rho", .. })
        ));
        assert!(matches!(
            DiscretizationParams::new(1., 0.1, -0.1, 0.1, 11, 12),
            Err(AssemblyError::InvalidParameter { name: "deltax", .. })
        ));
        assert!(matches!(
            DiscretizationParams::new(1., 0.1, 0.1, 0.1, 11, 0),
            Err(AssemblyError::InvalidParameter { name: "vnx", .. })
        ));
        assert!(matches!(
            DiscretizationParams::new(1., 0.1, 0.1, 0.1, 1, 2),
            Err(AssemblyError::InvalidParameter { name: "unx", .. })
        ));
        assert!(DiscretizationParams::lid_driven_cavity(0, 10, 100.).is_err());
        assert!(DiscretizationParams::lid_driven_cavity(10, 10, 0.).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let params = DiscretizationParams::lid_driven_cavity(20, 20, 400.).unwrap();
        let json = params.to_json().unwrap();
        let read = DiscretizationParams::from_json(&json).unwrap();
        assert_eq!(params, read);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            DiscretizationParams::from_json("{\"rho\": 1.0}"),
            Err(AssemblyError::Config(_))
        ));
        let json = r#"{"rho": 1.0, "gamma": 0.0, "deltax": 0.1,
            "deltay": 0.1, "unx": 11, "vnx": 12}"#;
        assert!(matches!(
            DiscretizationParams::from_json(json),
            Err(AssemblyError::InvalidParameter { name: "gamma", .. })
        ));
    }

    #[test]
    fn test_strides_must_match() {
        // v has exactly one ghost column more than u
        assert!(matches!(
            DiscretizationParams::new(1., 0.01, 0.25, 0.25, 5, 5),
            Err(AssemblyError::InvalidParameter { name: "vnx", .. })
        ));
        let json = r#"{"rho": 1.0, "gamma": 0.01, "deltax": 0.25,
            "deltay": 0.25, "unx": 5, "vnx": 9}"#;
        assert!(matches!(
            DiscretizationParams::from_json(json),
            Err(AssemblyError::InvalidParameter { name: "vnx", value }) if value == 9.
        ));
        assert!(DiscretizationParams::new(1., 0.01, 0.25, 0.25, 5, 6).is_ok());
    }
}

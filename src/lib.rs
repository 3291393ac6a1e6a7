//! # `rustcavity`: Momentum equation coefficients on staggered grids
//!
//! # Details
//!
//! This library is the inner kernel of SIMPLE type pressure-velocity
//! coupling solvers for incompressible flow (e.g. the lid driven cavity).
//! For every unknown of a two dimensional staggered finite volume
//! grid it returns one row of the discrete steady momentum equation
//! $$
//! A_p u_P = A_w u_W + A_e u_E + A_s u_S + A_n u_N + L_p + B
//! $$
//! as \[Ap, Aw, Ae, As, An, Lp, B\].
//!
//! Convection and diffusion are blended by the weighted upstream
//! differencing scheme (WUDS), see [`scheme`].
//!
//! ## Implemented assembler
//!
//! - `x-momentum` (u unknowns on vertical faces), see [`momentum::XMomentum`]
//! - `y-momentum` (v unknowns on horizontal faces), see [`momentum::YMomentum`]
//!
//! Outer iterations, pressure correction and the solution of the
//! linear systems are left to the caller.
//!
//! # Example
//! Assemble all rows of the x-momentum equation of a 16 x 16 cavity
//! ```
//! use rustcavity::layout::StaggeredLayout;
//! use rustcavity::momentum::{assemble_par, WallValues, XMomentum};
//! use rustcavity::params::DiscretizationParams;
//! use std::sync::Arc;
//!
//! let (nx, ny) = (16, 16);
//! let params = Arc::new(DiscretizationParams::lid_driven_cavity(nx, ny, 100.).unwrap());
//! let layout = StaggeredLayout::new(nx, ny);
//! let (u, v, p) = (layout.zeros_u(), layout.zeros_v(), layout.zeros_p());
//! let x = XMomentum::new(params);
//! let rows = assemble_par(
//!     &x,
//!     &layout.cells_u(),
//!     &WallValues::lid(1.),
//!     &u.view(),
//!     &v.view(),
//!     &p.view(),
//! )
//! .unwrap();
//! assert_eq!(rows.shape(), &[layout.u_len(), 7]);
//! ```
//!
//! ## Logging
//!
//! `rustcavity` logs through the `log` facade, the binary
//! initializes `env_logger` (set `RUST_LOG=debug`).
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#[macro_use]
extern crate enum_dispatch;
pub mod error;
pub mod functions;
pub mod layout;
pub mod momentum;
pub mod params;
pub mod scheme;
pub mod types;

pub use error::{AssemblyError, Result};

//! Horizontal momentum equation (u unknowns)
//!
//! u lives on the vertical faces, its control volume is centred
//! on a west/east face of the pressure grid. The convecting velocities
//! through the south and north faces are averages of the
//! surrounding v unknowns.
use super::index::{check_interior, fetch, XNeighbors};
use super::{Assemble, Coefficients, Face};
use crate::error::Result;
use crate::params::DiscretizationParams;
use crate::scheme::wuds;
use ndarray::ArrayView1;
use std::sync::Arc;

/// Coefficients of the discrete x-momentum equation
#[derive(Debug, Clone)]
pub struct XMomentum {
    params: Arc<DiscretizationParams>,
}

impl XMomentum {
    /// Return assembler, parameters are shared with other assemblers
    pub fn new(params: Arc<DiscretizationParams>) -> Self {
        Self { params }
    }

    /// Discretization parameters
    pub fn params(&self) -> &DiscretizationParams {
        &self.params
    }
}

impl Assemble for XMomentum {
    /// Five point stencil:
    ///
    /// w/e faces are convected by the mean of two u's (length deltax),
    /// s/n faces by the mean of two v's (length deltay).
    fn internal(
        &self,
        id: usize,
        u: &ArrayView1<f64>,
        v: &ArrayView1<f64>,
        _p: &ArrayView1<f64>,
    ) -> Result<Coefficients> {
        let DiscretizationParams {
            rho,
            gamma,
            deltax,
            deltay,
            unx,
            vnx,
        } = *self.params;
        self.params.check_strides()?;
        let n = XNeighbors::new(id, unx, vnx);
        let up = fetch(u, "u", n.up)?;
        check_interior(id, unx)?;
        let uw = fetch(u, "u", n.uw)?;
        let ue = fetch(u, "u", n.ue)?;
        let vp = fetch(v, "v", n.vp)?;
        let ve = fetch(v, "v", n.ve)?;
        let vs = fetch(v, "v", n.vs)?;
        let vse = fetch(v, "v", n.vse)?;

        // face velocities
        let (uwf, uef) = ((uw + up) / 2., (ue + up) / 2.);
        let (vsf, vnf) = ((vs + vse) / 2., (ve + vp) / 2.);

        let flux = [
            rho * deltay * uwf,
            rho * deltay * uef,
            rho * deltax * vsf,
            rho * deltax * vnf,
        ];
        let blend = [
            wuds(uwf, rho, gamma, deltax)?,
            wuds(uef, rho, gamma, deltax)?,
            wuds(vsf, rho, gamma, deltay)?,
            wuds(vnf, rho, gamma, deltay)?,
        ];
        Ok(Coefficients::from_faces(
            flux,
            blend,
            self.params.dx(),
            self.params.dy(),
        ))
    }

    /// W/E: u is normal to the wall, Dirichlet.
    ///
    /// S/N: u is stored in a ghost row outside of the wall.
    /// The wall value `tf` is the WUDS weighted mean of the ghost
    /// and its interior neighbor.
    fn boundary(
        &self,
        id: usize,
        face: Face,
        tf: f64,
        u: &ArrayView1<f64>,
        v: &ArrayView1<f64>,
        _p: &ArrayView1<f64>,
    ) -> Result<Coefficients> {
        let params = &*self.params;
        params.check_strides()?;
        let n = XNeighbors::new(id, params.unx, params.vnx);
        fetch(u, "u", n.up)?;
        let mut a = Coefficients {
            b: tf,
            ..Coefficients::default()
        };
        match face {
            Face::W | Face::E => a.ap = 1.,
            Face::S => {
                let vp = fetch(v, "v", n.vp)?;
                let ve = fetch(v, "v", n.ve)?;
                let w = wuds((ve + vp) / 2., params.rho, params.gamma, params.deltay)?;
                a.ap = 0.5 + w.alfa;
                a.an = -0.5 + w.alfa;
            }
            Face::N => {
                let vs = fetch(v, "v", n.vs)?;
                let vse = fetch(v, "v", n.vse)?;
                let w = wuds((vs + vse) / 2., params.rho, params.gamma, params.deltay)?;
                a.ap = 0.5 + w.alfa;
                a.as_ = -0.5 + w.alfa;
            }
        }
        Ok(a)
    }
}

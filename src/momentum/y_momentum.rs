//! Vertical momentum equation (v unknowns)
//!
//! Mirror of [`super::x_momentum`]: u and v swap roles, the
//! control volume is centred on a south/north face of the pressure grid
//! and is convected through its west and east faces by averages of the
//! surrounding u unknowns.
use super::index::{check_interior, fetch, YNeighbors};
use super::{Assemble, Coefficients, Face};
use crate::error::Result;
use crate::params::DiscretizationParams;
use crate::scheme::wuds;
use ndarray::ArrayView1;
use std::sync::Arc;

/// Coefficients of the discrete y-momentum equation
#[derive(Debug, Clone)]
pub struct YMomentum {
    params: Arc<DiscretizationParams>,
}

impl YMomentum {
    /// Return assembler, parameters are shared with other assemblers
    pub fn new(params: Arc<DiscretizationParams>) -> Self {
        Self { params }
    }

    /// Discretization parameters
    pub fn params(&self) -> &DiscretizationParams {
        &self.params
    }
}

impl Assemble for YMomentum {
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
        let n = YNeighbors::new(id, vnx, unx);
        let vp = fetch(v, "v", n.vp)?;
        check_interior(id, vnx)?;
        let vs = fetch(v, "v", n.vs)?;
        let vn = fetch(v, "v", n.vn)?;
        let up = fetch(u, "u", n.up)?;
        let uw = fetch(u, "u", n.uw)?;
        let un = fetch(u, "u", n.un)?;
        let unw = fetch(u, "u", n.unw)?;

        // face velocities
        let (uwf, uef) = ((uw + unw) / 2., (up + un) / 2.);
        let (vsf, vnf) = ((vp + vs) / 2., (vp + vn) / 2.);

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

    /// S/N: v is normal to the wall, Dirichlet.
    ///
    /// W/E: v is stored in a ghost column outside of the wall.
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
        let n = YNeighbors::new(id, params.vnx, params.unx);
        fetch(v, "v", n.vp)?;
        let mut a = Coefficients {
            b: tf,
            ..Coefficients::default()
        };
        match face {
            Face::S | Face::N => a.ap = 1.,
            Face::W => {
                let up = fetch(u, "u", n.up)?;
                let un = fetch(u, "u", n.un)?;
                let w = wuds((up + un) / 2., params.rho, params.gamma, params.deltax)?;
                a.ap = 0.5 + w.alfa;
                a.ae = -0.5 + w.alfa;
            }
            Face::E => {
                let uw = fetch(u, "u", n.uw)?;
                let unw = fetch(u, "u", n.unw)?;
                let w = wuds((uw + unw) / 2., params.rho, params.gamma, params.deltax)?;
                a.ap = 0.5 + w.alfa;
                a.aw = -0.5 + w.alfa;
            }
        }
        Ok(a)
    }
}

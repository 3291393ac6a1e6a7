//! # Weighted upstream differencing scheme (WUDS)
//!
//! Blends central differences and upwinding by the local
//! cell Péclet number
//! $$
//! Pe = \rho u \delta / \Gamma
//! $$
//! The two blending factors are
//! $$
//! \alpha = \frac{Pe |Pe|}{10 + 2 Pe^2}, \quad
//! \beta = \frac{1 + 0.005 Pe^2}{1 + 0.05 Pe^2}
//! $$
//! `alfa` weights the upstream value (0 is central, ±0.5 is full upwind),
//! `beta` scales the diffusive conductance (1 at rest, 0.1 for strong convection).
use crate::error::{AssemblyError, Result};
use crate::types::Real;

/// Blending factors of the WUDS scheme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wuds<A> {
    /// Upwind weight, in (-0.5, 0.5)
    pub alfa: A,
    /// Diffusive weight, in (0.1, 1]
    pub beta: A,
}

/// Return local Péclet number
///
/// # Errors
/// `ZeroDiffusivity` if gamma is zero, `NonFinite` if the
/// result is NaN or infinite.
pub fn peclet<A: Real>(u: A, rho: A, gamma: A, delta: A) -> Result<A> {
    if gamma.is_zero() {
        return Err(AssemblyError::ZeroDiffusivity);
    }
    let pe = rho * u * delta / gamma;
    if !pe.is_finite() {
        return Err(AssemblyError::NonFinite {
            what: "peclet number",
            value: pe.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(pe)
}

fn lit<A: Real>(x: f64) -> A {
    <A as From<f64>>::from(x)
}

/// Return WUDS blending factors from a local Péclet number
pub fn blend<A: Real>(pe: A) -> Wuds<A> {
    let one = A::one();
    let c10 = lit::<A>(10.);
    let c2 = lit::<A>(2.);
    let c005 = lit::<A>(0.005);
    let c05 = lit::<A>(0.05);
    let abs = pe.abs();
    if abs <= one {
        let pe2 = pe * pe;
        Wuds {
            alfa: pe * abs / (c10 + c2 * pe2),
            beta: (one + c005 * pe2) / (one + c05 * pe2),
        }
    } else {
        // divided by pe^2, no overflow for large |pe|
        let r = one / abs;
        let r2 = r * r;
        Wuds {
            alfa: pe.signum() / (c10 * r2 + c2),
            beta: (r2 + c005) / (r2 + c05),
        }
    }
}

/// Return WUDS blending factors (alfa, beta) for a
/// convecting velocity `u` across a cell of size `delta`.
///
/// # Errors
/// See [`peclet`].
///
/// # Example
///```
/// use rustcavity::scheme::wuds;
/// let w = wuds(0.0_f64, 1., 0.01, 1. / 80.).unwrap();
/// assert!(w.alfa.abs() < 1e-12);
/// assert!((w.beta - 1.).abs() < 1e-12);
///```
pub fn wuds<A: Real>(u: A, rho: A, gamma: A, delta: A) -> Result<Wuds<A>> {
    Ok(blend(peclet(u, rho, gamma, delta)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(result: f64, expected: f64) {
        let dif = 1e-10;
        if (result - expected).abs() > dif {
            panic!("Large difference of values, got {} expected {}.", result, expected)
        }
    }

    #[test]
    fn test_wuds_central_limit() {
        let w = blend(0.0_f64);
        approx_eq(w.alfa, 0.);
        approx_eq(w.beta, 1.);
        let w = blend(1e-8_f64);
        approx_eq(w.alfa, 0.);
        approx_eq(w.beta, 1.);
    }

    #[test]
    fn test_wuds_symmetry() {
        for pe in [0.1_f64, 0.5, 1., 2., 7.5, 50., 1e3, 1e6] {
            let pos = blend(pe);
            let neg = blend(-pe);
            assert_eq!(pos.alfa, -neg.alfa);
            assert_eq!(pos.beta, neg.beta);
            assert!(pos.alfa.abs() < 0.5);
            assert!(pos.beta > 0.1 && pos.beta <= 1.);
        }
    }

    #[test]
    fn test_wuds_branches_agree() {
        // both forms at |pe| = 1
        let direct = 1. / 12.;
        approx_eq(blend(1.0_f64).alfa, direct);
        let w = blend(1.0_f64 + 1e-12);
        approx_eq(w.alfa, direct);
        approx_eq(w.beta, 1.005 / 1.05);
    }

    #[test]
    fn test_wuds_known_value() {
        // pe = 2: alfa = 4 / 18, beta = 1.02 / 1.2
        let w = wuds(2.0_f64, 1., 1., 1.).unwrap();
        approx_eq(w.alfa, 4. / 18.);
        approx_eq(w.beta, 1.02 / 1.2);
    }

    #[test]
    fn test_wuds_large_peclet() {
        let w = blend(1e200_f64);
        approx_eq(w.alfa, 0.5);
        approx_eq(w.beta, 0.1);
        assert!(w.alfa.is_finite() && w.beta.is_finite());
        let w = blend(-1e200_f64);
        approx_eq(w.alfa, -0.5);
    }

    #[test]
    fn test_peclet_zero_gamma() {
        assert!(matches!(
            wuds(1.0_f64, 1., 0., 0.1),
            Err(AssemblyError::ZeroDiffusivity)
        ));
    }

    #[test]
    fn test_peclet_nan() {
        assert!(matches!(
            wuds(f64::NAN, 1., 0.01, 0.1),
            Err(AssemblyError::NonFinite { .. })
        ));
    }
}

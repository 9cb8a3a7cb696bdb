use crate::SolverError;
use std::collections::HashMap;

/// Holds the parameters of the population growth model
///
/// ```text
/// dP
/// ── = f(t, P) = β₀ exp(-α t) P
/// dt
/// ```
///
/// where:
///
/// * t is time
/// * P is the population
/// * β₀ exp(-α t) is the (decaying) relative growth rate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelParameters {
    p0: f64,    // initial population (P₀)
    beta0: f64, // initial growth coefficient (β₀)
    alpha: f64, // decay rate of the growth coefficient (α)
}

impl ModelParameters {
    /// Allocates a new instance
    ///
    /// # Parameters
    ///
    /// * `p0` - initial population (P₀); must be positive
    /// * `beta0` - initial growth coefficient (β₀)
    /// * `alpha` - decay rate of the growth coefficient (α); must be nonzero
    pub fn new(p0: f64, beta0: f64, alpha: f64) -> Result<Self, SolverError> {
        if !p0.is_finite() || !beta0.is_finite() || !alpha.is_finite() {
            return Err(SolverError::Domain("parameters must be finite"));
        }
        if alpha == 0.0 {
            return Err(SolverError::Domain("alpha must be nonzero"));
        }
        if p0 <= 0.0 {
            return Err(SolverError::InvalidParameter("p0 must be positive"));
        }
        Ok(ModelParameters { p0, beta0, alpha })
    }

    /// Allocates a new instance from a map with the keys `p0`, `beta0`, and `alpha`
    pub fn from_map(params: &HashMap<&str, f64>) -> Result<Self, SolverError> {
        let p0 = *params
            .get("p0")
            .ok_or(SolverError::InvalidParameter("Parameter 'p0' not found"))?;
        let beta0 = *params
            .get("beta0")
            .ok_or(SolverError::InvalidParameter("Parameter 'beta0' not found"))?;
        let alpha = *params
            .get("alpha")
            .ok_or(SolverError::InvalidParameter("Parameter 'alpha' not found"))?;
        ModelParameters::new(p0, beta0, alpha)
    }

    /// Returns the initial population P₀
    pub fn p0(&self) -> f64 {
        self.p0
    }

    /// Returns the initial growth coefficient β₀
    pub fn beta0(&self) -> f64 {
        self.beta0
    }

    /// Returns the decay rate α
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Calculates dP/dt = f(t,P)
    pub fn derivative(&self, t: f64, p: f64) -> f64 {
        if p == 0.0 {
            return 0.0;
        }
        self.growth_rate(t) * p
    }

    /// Calculates the relative growth rate r(t) = β₀ exp(-α t)
    pub fn growth_rate(&self, t: f64) -> f64 {
        self.beta0 * f64::exp(-self.alpha * t)
    }

    /// Calculates the total growth factor exp(β₀/α)
    pub fn growth_factor(&self) -> f64 {
        f64::exp(self.beta0 / self.alpha)
    }

    /// Calculates the asymptotic population P∞ = P₀ exp(β₀/α)
    ///
    /// For α > 0, this is the limit of P(t) as t → ∞. For α < 0, the value is just
    /// P₀ exp(β₀/α) and not a limit: the growth rate increases without bound.
    pub fn asymptotic_limit(&self) -> f64 {
        self.p0 * self.growth_factor()
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use russell_lab::approx_eq;

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            ModelParameters::new(100.0, 2.0, 0.0).err(),
            Some(SolverError::Domain("alpha must be nonzero"))
        );
        assert_eq!(
            ModelParameters::new(100.0, f64::NAN, 0.5).err(),
            Some(SolverError::Domain("parameters must be finite"))
        );
        assert_eq!(
            ModelParameters::new(f64::INFINITY, 2.0, 0.5).err(),
            Some(SolverError::Domain("parameters must be finite"))
        );
        assert_eq!(
            ModelParameters::new(0.0, 2.0, 0.5).err(),
            Some(SolverError::InvalidParameter("p0 must be positive"))
        );
    }

    #[test]
    fn from_map_works() {
        let map = HashMap::from([("p0", 100.0), ("beta0", 2.0), ("alpha", 0.5)]);
        let params = ModelParameters::from_map(&map).unwrap();
        assert_eq!(params.p0(), 100.0);
        assert_eq!(params.beta0(), 2.0);
        assert_eq!(params.alpha(), 0.5);

        let res = ModelParameters::from_map(&HashMap::from([("p0", 100.0), ("alpha", 0.5)]));
        assert_eq!(res.err(), Some(SolverError::InvalidParameter("Parameter 'beta0' not found")));

        let res = ModelParameters::from_map(&HashMap::from([("p0", 100.0), ("beta0", 2.0), ("alpha", 0.0)]));
        assert_eq!(res.err(), Some(SolverError::Domain("alpha must be nonzero")));
    }

    #[test]
    fn derivative_works() {
        let params = ModelParameters::new(100.0, 2.0, 0.5).unwrap();
        assert_eq!(params.derivative(0.0, 100.0), 200.0);
        assert_eq!(params.derivative(3.0, 0.0), 0.0);
        assert_eq!(params.derivative(-1e5, 0.0), 0.0); // no 0·∞
        assert!(params.derivative(1.0, -10.0) < 0.0);
        approx_eq(params.derivative(2.0, 50.0), 2.0 * f64::exp(-1.0) * 50.0, 1e-14);
        approx_eq(params.growth_rate(2.0), 2.0 * f64::exp(-1.0), 1e-15);
    }

    #[test]
    fn asymptotic_limit_works() {
        let params = ModelParameters::new(100.0, 2.0, 0.5).unwrap();
        approx_eq(params.growth_factor(), f64::exp(4.0), 1e-13);
        approx_eq(params.asymptotic_limit(), 5459.815003314423, 1e-9);

        // same formula with α < 0
        let params = ModelParameters::new(100.0, 2.0, -0.5).unwrap();
        approx_eq(params.asymptotic_limit(), 100.0 * f64::exp(-4.0), 1e-12);
    }
}

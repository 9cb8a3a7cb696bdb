use crate::{ModelParameters, PopulationSolver, SolverError};
use std::fmt;

/// Implements the closed-form solution of the population growth model
///
/// ```text
/// P(t) = P₀ exp(β₀/α (1 - exp(-α t)))
/// ```
///
/// The solution is valid for any real t, including t < 0.
pub struct AnalyticalSolver {
    params: ModelParameters,
}

impl AnalyticalSolver {
    /// Allocates a new instance
    ///
    /// # Parameters
    ///
    /// * `p0` - initial population (P₀)
    /// * `beta0` - initial growth coefficient (β₀)
    /// * `alpha` - decay rate of the growth coefficient (α); must be nonzero
    pub fn new(p0: f64, beta0: f64, alpha: f64) -> Result<Self, SolverError> {
        Ok(Self::with_parameters(ModelParameters::new(p0, beta0, alpha)?))
    }

    /// Allocates a new instance from validated parameters
    pub fn with_parameters(params: ModelParameters) -> Self {
        AnalyticalSolver { params }
    }
}

impl PopulationSolver for AnalyticalSolver {
    fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    fn label(&self) -> String {
        "Analytical solution".to_string()
    }

    /// Calculates P(t) with the closed-form expression
    fn resolve(&self, t: f64) -> f64 {
        let (p0, beta0, alpha) = (self.params.p0(), self.params.beta0(), self.params.alpha());
        p0 * f64::exp((beta0 / alpha) * (1.0 - f64::exp(-alpha * t)))
    }
}

impl fmt::Display for AnalyticalSolver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.label())?;
        writeln!(
            f,
            "  P0={}, beta0={}, alpha={}",
            self.params.p0(),
            self.params.beta0(),
            self.params.alpha()
        )?;
        writeln!(f, "  asymptotic limit: {:.4}", self.asymptotic_limit())?;
        write!(f, "  growth factor: {:.4}", self.growth_factor())
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

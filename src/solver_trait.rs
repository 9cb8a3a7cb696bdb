use crate::{Isocline, ModelParameters, SolverError, Trajectory, direction_field, isocline_family};
use russell_lab::Matrix;
use std::fmt;

/// Defines the common interface of the solving strategies
///
/// All strategies solve the same ODE, dP/dt = β₀ exp(-α t) P; they differ only in
/// how `resolve` computes P(t). The other methods depend on the parameters alone.
pub trait PopulationSolver: fmt::Display + Send + Sync {
    /// Returns the model parameters
    fn parameters(&self) -> &ModelParameters;

    /// Returns a descriptive label (e.g., for plot legends)
    fn label(&self) -> String;

    /// Calculates P(t)
    fn resolve(&self, t: f64) -> f64;

    /// Returns the precomputed trajectory, if the strategy has one
    fn trajectory(&self) -> Option<&Trajectory> {
        None
    }

    /// Calculates P(t) for each t in `tt`
    fn resolve_all(&self, tt: &[f64]) -> Vec<f64> {
        tt.iter().map(|&t| self.resolve(t)).collect()
    }

    /// Calculates dP/dt = f(t,P)
    fn derivative(&self, t: f64, p: f64) -> f64 {
        self.parameters().derivative(t, p)
    }

    /// Calculates the asymptotic population P∞ = P₀ exp(β₀/α) (a limit only for α > 0)
    fn asymptotic_limit(&self) -> f64 {
        self.parameters().asymptotic_limit()
    }

    /// Calculates the growth factor exp(β₀/α)
    fn growth_factor(&self) -> f64 {
        self.parameters().growth_factor()
    }

    /// Calculates the relative growth rate r(t) = β₀ exp(-α t)
    fn growth_rate(&self, t: f64) -> f64 {
        self.parameters().growth_rate(t)
    }

    /// Generates `count` isoclines evaluated at the times `tt`
    fn isoclines(&self, tt: &[f64], count: usize) -> Result<Vec<Isocline>, SolverError> {
        isocline_family(self.parameters(), tt, count)
    }

    /// Calculates the normalized direction field on a meshgrid (T, P)
    fn direction_field(&self, tt: &Matrix, pp: &Matrix) -> Result<(Matrix, Matrix), SolverError> {
        direction_field(self.parameters(), tt, pp)
    }
}

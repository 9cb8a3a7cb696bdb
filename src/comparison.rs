//! Error measurements between solving strategies

use crate::{AnalyticalSolver, ModelParameters, NumericalMethod, PopulationSolver, Solver, SolverError};

/// Calculates the relative error (in percent) of `candidate` with respect to `reference`
///
/// ```text
/// err(t) = |P_ref(t) - P_cand(t)| / |P_ref(t)| × 100
/// ```
pub fn relative_errors(reference: &dyn PopulationSolver, candidate: &dyn PopulationSolver, tt: &[f64]) -> Vec<f64> {
    tt.iter()
        .map(|&t| {
            let p_ref = reference.resolve(t);
            f64::abs(p_ref - candidate.resolve(t)) / f64::abs(p_ref) * 100.0
        })
        .collect()
}

/// Returns the maximum relative error (in percent) over the times `tt`; zero if `tt` is empty
pub fn max_relative_error(reference: &dyn PopulationSolver, candidate: &dyn PopulationSolver, tt: &[f64]) -> f64 {
    relative_errors(reference, candidate, tt)
        .into_iter()
        .fold(0.0, f64::max)
}

/// Holds the errors of a numerical method for a sequence of halved step sizes
#[derive(Clone, Debug)]
pub struct ConvergenceStudy {
    /// The integration method
    pub method: NumericalMethod,

    /// The step sizes h₀, h₀/2, h₀/4, ...
    pub steps: Vec<f64>,

    /// The absolute errors |P_num(t_eval) - P(t_eval)| for each step size
    pub errors: Vec<f64>,
}

impl ConvergenceStudy {
    /// Returns the ratios between consecutive errors
    ///
    /// The ratios approach 2ᵖ where p is the order of the method.
    pub fn ratios(&self) -> Vec<f64> {
        self.errors.windows(2).map(|w| w[0] / w[1]).collect()
    }

    /// Returns the observed orders log₂(ratio)
    pub fn observed_orders(&self) -> Vec<f64> {
        self.ratios().into_iter().map(f64::log2).collect()
    }
}

/// Measures the error of a numerical method at `t_eval` while halving the step size
///
/// # Parameters
///
/// * `params` - the model parameters
/// * `method` - the integration method
/// * `h0` - the initial (largest) step size
/// * `nhalving` - the number of times the step size is halved
/// * `t_max` - the integration horizon
/// * `t_eval` - the time at which the error is measured
pub fn convergence_study(
    params: &ModelParameters,
    method: NumericalMethod,
    h0: f64,
    nhalving: usize,
    t_max: f64,
    t_eval: f64,
) -> Result<ConvergenceStudy, SolverError> {
    let exact = AnalyticalSolver::with_parameters(*params);
    let p_ref = exact.resolve(t_eval);
    let mut steps = Vec::with_capacity(nhalving + 1);
    let mut errors = Vec::with_capacity(nhalving + 1);
    let mut h = h0;
    for _ in 0..=nhalving {
        let solver = Solver::with_parameters(method.kind(h, t_max), *params)?;
        steps.push(h);
        errors.push(f64::abs(solver.resolve(t_eval) - p_ref));
        h /= 2.0;
    }
    Ok(ConvergenceStudy { method, steps, errors })
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

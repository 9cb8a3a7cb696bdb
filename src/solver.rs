use crate::{AnalyticalSolver, EulerSolver, ModelParameters, PopulationSolver, Rk4Solver, SolverError, SolverKind};
use crate::Trajectory;
use russell_lab::Vector;
use std::collections::HashMap;
use std::fmt;

/// Represents a population model solved by one of the available strategies
pub struct Solver {
    kind: SolverKind,
    actual: Box<dyn PopulationSolver>,
}

impl Solver {
    /// Allocates a new instance
    ///
    /// The map must contain the keys `p0`, `beta0`, and `alpha`.
    pub fn new(kind: SolverKind, params: HashMap<&str, f64>) -> Result<Self, SolverError> {
        Solver::with_parameters(kind, ModelParameters::from_map(&params)?)
    }

    /// Allocates a new instance from validated parameters
    pub fn with_parameters(kind: SolverKind, params: ModelParameters) -> Result<Self, SolverError> {
        let actual: Box<dyn PopulationSolver> = match kind {
            SolverKind::Analytical => Box::new(AnalyticalSolver::with_parameters(params)),
            SolverKind::Euler { step, horizon } => Box::new(EulerSolver::with_parameters(params, step, horizon)?),
            SolverKind::Rk4 { step, horizon } => Box::new(Rk4Solver::with_parameters(params, step, horizon)?),
        };
        Ok(Solver { kind, actual })
    }

    /// Returns the solving strategy
    pub fn kind(&self) -> SolverKind {
        self.kind
    }

    /// Samples the solution at `npoint` evenly spaced times in [t_ini, t_fin]
    ///
    /// Returns `(tt, pp, dpdt)` where:
    ///
    /// - `tt` is the vector of times
    /// - `pp` is the vector of populations P(t)
    /// - `dpdt` is the vector of rates dP/dt = f(t, P(t))
    pub fn simulate(
        &self,
        t_ini: f64,
        t_fin: f64,
        npoint: usize,
    ) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>), SolverError> {
        let tt = Vector::linspace(t_ini, t_fin, npoint).map_err(SolverError::InvalidParameter)?;
        let tt = tt.as_data().clone();
        let pp = self.actual.resolve_all(&tt);
        let dpdt = tt.iter().zip(&pp).map(|(&t, &p)| self.actual.derivative(t, p)).collect();
        Ok((tt, pp, dpdt))
    }
}

impl PopulationSolver for Solver {
    fn parameters(&self) -> &ModelParameters {
        self.actual.parameters()
    }

    fn label(&self) -> String {
        self.actual.label()
    }

    fn resolve(&self, t: f64) -> f64 {
        self.actual.resolve(t)
    }

    fn trajectory(&self) -> Option<&Trajectory> {
        self.actual.trajectory()
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.actual)
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use crate::{ModelParameters, PopulationSolver, SolverError, Trajectory};
use std::fmt;

/// Implements the (forward) Euler method with a fixed step size
///
/// ```text
/// P_{n+1} = P_n + h f(t_n, P_n)
/// ```
///
/// The local truncation error is O(h²) and the global error is O(h).
///
/// The trajectory is computed once, from t = 0 to t_max, when the solver is
/// allocated; `resolve` then interpolates linearly between the grid samples and
/// clamps times outside the grid to the boundary samples.
pub struct EulerSolver {
    params: ModelParameters,
    trajectory: Trajectory,
}

impl EulerSolver {
    /// Allocates a new instance and computes the trajectory
    ///
    /// # Parameters
    ///
    /// * `p0` - initial population (P₀)
    /// * `beta0` - initial growth coefficient (β₀)
    /// * `alpha` - decay rate of the growth coefficient (α); must be nonzero
    /// * `h` - step size; must be positive
    /// * `t_max` - final time; must be positive
    pub fn new(p0: f64, beta0: f64, alpha: f64, h: f64, t_max: f64) -> Result<Self, SolverError> {
        Self::with_parameters(ModelParameters::new(p0, beta0, alpha)?, h, t_max)
    }

    /// Allocates a new instance from validated parameters and computes the trajectory
    pub fn with_parameters(params: ModelParameters, h: f64, t_max: f64) -> Result<Self, SolverError> {
        let trajectory = Trajectory::integrate(&params, h, t_max, EulerSolver::update)?;
        Ok(EulerSolver { params, trajectory })
    }

    /// Performs one Euler step from (t, P)
    pub fn update(params: &ModelParameters, t: f64, p: f64, h: f64) -> f64 {
        p + h * params.derivative(t, p)
    }

    /// Returns the step size h
    pub fn step(&self) -> f64 {
        self.trajectory.step()
    }

    /// Returns the final time t_max
    pub fn horizon(&self) -> f64 {
        self.trajectory.horizon()
    }
}

impl PopulationSolver for EulerSolver {
    fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    fn label(&self) -> String {
        format!("Euler (h={})", self.step())
    }

    fn resolve(&self, t: f64) -> f64 {
        self.trajectory.interpolate(t)
    }

    fn trajectory(&self) -> Option<&Trajectory> {
        Some(&self.trajectory)
    }
}

impl fmt::Display for EulerSolver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.label())?;
        writeln!(
            f,
            "  P0={}, beta0={}, alpha={}",
            self.params.p0(),
            self.params.beta0(),
            self.params.alpha()
        )?;
        writeln!(f, "  h={}, t_max={}", self.step(), self.horizon())?;
        writeln!(f, "  computed points: {}", self.trajectory.len())?;
        write!(f, "  asymptotic limit: {:.4}", self.asymptotic_limit())
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

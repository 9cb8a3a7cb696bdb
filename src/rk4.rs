use crate::{ModelParameters, PopulationSolver, SolverError, Trajectory};
use std::fmt;

/// Implements the classical fourth-order Runge-Kutta method with a fixed step size
///
/// ```text
/// k1 = h f(t_n,       P_n)
/// k2 = h f(t_n + h/2, P_n + k1/2)
/// k3 = h f(t_n + h/2, P_n + k2/2)
/// k4 = h f(t_n + h,   P_n + k3)
///
/// P_{n+1} = P_n + (k1 + 2 k2 + 2 k3 + k4) / 6
/// ```
///
/// The local truncation error is O(h⁵) and the global error is O(h⁴).
///
/// As with [crate::EulerSolver], the trajectory is computed at allocation and
/// `resolve` interpolates linearly, clamping outside [0, t_last].
pub struct Rk4Solver {
    params: ModelParameters,
    trajectory: Trajectory,
}

impl Rk4Solver {
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
        let trajectory = Trajectory::integrate(&params, h, t_max, Rk4Solver::update)?;
        Ok(Rk4Solver { params, trajectory })
    }

    /// Performs one RK4 step from (t, P)
    pub fn update(params: &ModelParameters, t: f64, p: f64, h: f64) -> f64 {
        let k1 = h * params.derivative(t, p);
        let k2 = h * params.derivative(t + h / 2.0, p + k1 / 2.0);
        let k3 = h * params.derivative(t + h / 2.0, p + k2 / 2.0);
        let k4 = h * params.derivative(t + h, p + k3);
        p + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
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

impl PopulationSolver for Rk4Solver {
    fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    fn label(&self) -> String {
        format!("RK4 (h={})", self.step())
    }

    fn resolve(&self, t: f64) -> f64 {
        self.trajectory.interpolate(t)
    }

    fn trajectory(&self) -> Option<&Trajectory> {
        Some(&self.trajectory)
    }
}

impl fmt::Display for Rk4Solver {
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

/// Specifies the solving strategy
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolverKind {
    /// Closed-form solution
    Analytical,

    /// Forward Euler method with step size `step` up to time `horizon`
    Euler { step: f64, horizon: f64 },

    /// Classical Runge-Kutta method with step size `step` up to time `horizon`
    Rk4 { step: f64, horizon: f64 },
}

/// Specifies a fixed-step integration method
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumericalMethod {
    /// Forward Euler (first order)
    Euler,

    /// Classical Runge-Kutta (fourth order)
    Rk4,
}

impl NumericalMethod {
    /// Returns the order of the global truncation error
    pub fn order(&self) -> i32 {
        match self {
            NumericalMethod::Euler => 1,
            NumericalMethod::Rk4 => 4,
        }
    }

    /// Returns the solver kind using this method with step `h` up to time `t_max`
    pub fn kind(&self, h: f64, t_max: f64) -> SolverKind {
        match self {
            NumericalMethod::Euler => SolverKind::Euler { step: h, horizon: t_max },
            NumericalMethod::Rk4 => SolverKind::Rk4 { step: h, horizon: t_max },
        }
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

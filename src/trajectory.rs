use crate::{ModelParameters, SolverError};

/// Maximum number of steps of a precomputed trajectory
pub const N_STEPS_MAX: usize = 50_000_000;

/// Relative tolerance to accept t_max/h as an integer number of steps
const GRID_SNAP_TOLERANCE: f64 = 1e-9;

/// Holds the samples (tᵢ, Pᵢ) of a fixed-step integration on a uniform grid
///
/// The grid starts at t₀ = 0 and uses the nodes tᵢ = i h. The number of steps is
/// N = ⌊t_max/h⌋, unless t_max/h is an integer (up to round-off), in which case the
/// last node is exactly t_max. Thus, the last node never exceeds t_max. If h > t_max,
/// the trajectory holds the single sample (0, P₀).
#[derive(Clone, Debug)]
pub struct Trajectory {
    step: f64,    // step size (h)
    horizon: f64, // requested final time (t_max)
    tt: Vec<f64>, // times
    pp: Vec<f64>, // populations
}

impl Trajectory {
    /// Integrates the model from t = 0 to t_max with a fixed-step update rule
    ///
    /// # Parameters
    ///
    /// * `params` - the model parameters; P(0) = P₀
    /// * `h` - step size
    /// * `t_max` - final time (horizon)
    /// * `update` - calculates P_{n+1} from `(params, t_n, P_n, h)`
    pub fn integrate<F>(params: &ModelParameters, h: f64, t_max: f64, mut update: F) -> Result<Self, SolverError>
    where
        F: FnMut(&ModelParameters, f64, f64, f64) -> f64,
    {
        let (nd, exact) = number_of_steps(h, t_max)?;
        let mut tt = vec![0.0; nd + 1];
        let mut pp = vec![0.0; nd + 1];
        for k in 1..=nd {
            tt[k] = (k as f64) * h;
        }
        if exact {
            tt[nd] = t_max;
        }
        pp[0] = params.p0();
        for k in 0..nd {
            pp[k + 1] = update(params, tt[k], pp[k], h);
        }
        Ok(Trajectory {
            step: h,
            horizon: t_max,
            tt,
            pp,
        })
    }

    /// Returns the step size h
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the requested final time t_max
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Returns the number of samples
    pub fn len(&self) -> usize {
        self.tt.len()
    }

    /// Returns true if there are no samples (never the case after `integrate`)
    pub fn is_empty(&self) -> bool {
        self.tt.is_empty()
    }

    /// Returns the grid times
    pub fn times(&self) -> &[f64] {
        &self.tt
    }

    /// Returns the populations at the grid times
    pub fn values(&self) -> &[f64] {
        &self.pp
    }

    /// Returns an iterator over the (t, P) samples
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.tt.iter().copied().zip(self.pp.iter().copied())
    }

    /// Returns the last sample (t, P)
    pub fn last(&self) -> (f64, f64) {
        let n = self.tt.len();
        (self.tt[n - 1], self.pp[n - 1])
    }

    /// Interpolates P(t) linearly between the grid samples
    ///
    /// Times before the first node or after the last node are clamped to the
    /// boundary samples (no extrapolation). At a grid node, the stored sample is
    /// returned exactly. Returns NaN if t is NaN.
    pub fn interpolate(&self, t: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        let n = self.tt.len();
        if t <= self.tt[0] {
            return self.pp[0];
        }
        if t >= self.tt[n - 1] {
            return self.pp[n - 1];
        }
        // here, tt[k] <= t < tt[k+1]
        let k = self.tt.partition_point(|&x| x <= t) - 1;
        let (ta, tb) = (self.tt[k], self.tt[k + 1]);
        let (pa, pb) = (self.pp[k], self.pp[k + 1]);
        pa + (pb - pa) * (t - ta) / (tb - ta)
    }
}

/// Computes the number of steps of the uniform grid and whether it ends exactly at t_max
pub(crate) fn number_of_steps(h: f64, t_max: f64) -> Result<(usize, bool), SolverError> {
    if !h.is_finite() || h <= 0.0 {
        return Err(SolverError::InvalidParameter("step size must be positive and finite"));
    }
    if !t_max.is_finite() || t_max <= 0.0 {
        return Err(SolverError::InvalidParameter("horizon must be positive and finite"));
    }
    let ratio = t_max / h;
    if ratio > N_STEPS_MAX as f64 {
        return Err(SolverError::InvalidParameter("too many steps; increase the step size"));
    }
    let nearest = f64::round(ratio);
    if f64::abs(ratio - nearest) <= GRID_SNAP_TOLERANCE * nearest {
        Ok((nearest as usize, true))
    } else {
        Ok((f64::floor(ratio) as usize, false))
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

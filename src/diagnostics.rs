use crate::{ModelParameters, SolverError};
use russell_lab::{Matrix, Vector};

/// Holds an isocline: a member of the curve family with constant C
///
/// ```text
/// P(t) = C exp(-β₀/α exp(-α t))
/// ```
///
/// The solution of the ODE is the member with C = P∞ = P₀ exp(β₀/α).
#[derive(Clone, Debug, PartialEq)]
pub struct Isocline {
    /// The constant C
    pub c: f64,

    /// The values P(t) at the requested times
    pub pp: Vec<f64>,
}

/// Evaluates the isocline with constant `c` at time `t`
pub fn isocline(params: &ModelParameters, c: f64, t: f64) -> f64 {
    let (beta0, alpha) = (params.beta0(), params.alpha());
    c * f64::exp(-beta0 / alpha * f64::exp(-alpha * t))
}

/// Generates a family of `count` isoclines evaluated at the times `tt`
///
/// The constants C are evenly spaced between 0.2 P₀ and 2.5 P∞ and returned in
/// increasing order (the bounds are swapped when 2.5 P∞ < 0.2 P₀).
pub fn isocline_family(params: &ModelParameters, tt: &[f64], count: usize) -> Result<Vec<Isocline>, SolverError> {
    let a = 0.2 * params.p0();
    let b = 2.5 * params.asymptotic_limit();
    let (c_min, c_max) = if a <= b { (a, b) } else { (b, a) };
    if count == 0 {
        return Ok(Vec::new());
    }
    let cc = Vector::linspace(c_min, c_max, count).map_err(SolverError::InvalidParameter)?;
    Ok(cc
        .as_data()
        .iter()
        .map(|&c| Isocline {
            c,
            pp: tt.iter().map(|&t| isocline(params, c, t)).collect(),
        })
        .collect())
}

/// Calculates the normalized direction field on a meshgrid (T, P)
///
/// Each vector (1, f(t,P)) is divided by its norm. The norm is never smaller than
/// one; an infinite slope results in (0, ±1).
///
/// Returns `(uu, vv)`: the t-components and the P-components.
pub fn direction_field(params: &ModelParameters, tt: &Matrix, pp: &Matrix) -> Result<(Matrix, Matrix), SolverError> {
    if tt.dims() != pp.dims() {
        return Err(SolverError::InvalidParameter(
            "time and population grids must have the same dimensions",
        ));
    }
    let (nrow, ncol) = tt.dims();
    let mut uu = Matrix::new(nrow, ncol);
    let mut vv = Matrix::new(nrow, ncol);
    for i in 0..nrow {
        for j in 0..ncol {
            let slope = params.derivative(tt.get(i, j), pp.get(i, j));
            if slope.is_infinite() {
                uu.set(i, j, 0.0);
                vv.set(i, j, f64::signum(slope));
            } else {
                let norm = f64::hypot(1.0, slope);
                uu.set(i, j, 1.0 / norm);
                vv.set(i, j, slope / norm);
            }
        }
    }
    Ok((uu, vv))
}

/// Generates the meshgrid (T, P) used to draw the direction field
///
/// The grid covers [0, t_max] × [0, 1.6 P∞] with `nt` times and `np` populations.
/// As with numpy's meshgrid, `T[i][j] = t[j]` and `P[i][j] = p[i]`.
pub fn direction_field_grid(
    params: &ModelParameters,
    t_max: f64,
    nt: usize,
    np: usize,
) -> Result<(Matrix, Matrix), SolverError> {
    let t_values = Vector::linspace(0.0, t_max, nt).map_err(SolverError::InvalidParameter)?;
    let p_max = 1.6 * params.asymptotic_limit();
    let p_values = Vector::linspace(0.0, p_max, np).map_err(SolverError::InvalidParameter)?;
    let mut tt = Matrix::new(np, nt);
    let mut pp = Matrix::new(np, nt);
    for i in 0..np {
        for j in 0..nt {
            tt.set(i, j, t_values[j]);
            pp.set(i, j, p_values[i]);
        }
    }
    Ok((tt, pp))
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use thiserror::Error;

/// Defines the errors raised when allocating a solver
///
/// Errors are always raised at construction time; a successfully allocated
/// solver can be queried for its whole lifetime.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    /// The parameter combination is mathematically undefined (e.g., α = 0)
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// A step size, horizon, or other input is out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

//! Analytical, Euler, and Runge-Kutta solutions of a Gompertz-type population growth model
//!
//! ```text
//! dP
//! ── = β₀ exp(-α t) P
//! dt
//! ```

mod analytical;
pub mod comparison;
mod diagnostics;
mod enums;
mod error;
mod euler;
mod parameters;
mod rk4;
mod solver;
mod solver_trait;
mod trajectory;

pub use analytical::*;
pub use diagnostics::*;
pub use enums::*;
pub use error::*;
pub use euler::*;
pub use parameters::*;
pub use rk4::*;
pub use solver::*;
pub use solver_trait::*;
pub use trajectory::*;

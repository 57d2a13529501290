//! # Numerical Methods
//!
//! The two iterative procedures the assessment needs, each with a hard cap
//! on work done:
//!
//! - [`roots`] - Bracketed root finding (critical crack size, crack size at
//!   design life)
//! - [`quadrature`] - Adaptive Simpson integration (Paris-law life integral)
//!
//! Both take the function as a closure returning `CalcResult<f64>`, so a
//! geometry-factor validity error inside the function propagates out
//! unchanged.

pub mod quadrature;
pub mod roots;

pub use quadrature::{AdaptiveSimpson, Integral};
pub use roots::{Root, RootFinder};

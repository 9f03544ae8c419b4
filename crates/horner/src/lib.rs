//! # Horner
//!
//! Single-variable polynomial arithmetic, calculus and composition.
//!
//! ## Features
//!
//! - **Growable Store**: index-addressed coefficients with doubling growth
//! - **Arithmetic**: addition, subtraction, convolution, long division
//! - **Calculus**: power-rule derivative and Horner evaluation
//! - **Composition**: substitute one polynomial into another
//! - **Presentation**: `x² + 2x + 1` rendering with configurable notation
//!
//! ## Quick Start
//!
//! ```rust
//! use horner::prelude::*;
//!
//! let p = Polynomial::from([1, 1]); // 1 + x
//! let square = &p * &p;
//! assert_eq!(square.to_string(), "x² + 2x + 1");
//! assert_eq!(square.derivative().coeffs(), &[2, 2]);
//! assert_eq!(square.compose(&Polynomial::from([0, 2])).solve(&1), 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use horner_poly as poly;
pub use horner_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use horner_poly::{ErrorKind, FormatOptions, PolyError, Polynomial, PowerStyle};
    pub use horner_rings::Coefficient;
}

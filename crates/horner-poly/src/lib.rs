//! # horner-poly
//!
//! Single-variable polynomials over a growable coefficient store.
//!
//! This crate provides:
//! - `Polynomial<T>`: dense coefficients, lowest power first, with a nominal
//!   degree and an explicit capacity that grows by doubling
//! - Arithmetic: `+`, `-`, `*` (convolution) and quotient-only long division
//! - Calculus: power-rule derivative and Horner evaluation
//! - Composition: Horner's recurrence over polynomial arithmetic
//! - Presentation: `x² + 2x + 1`-style rendering, configurable via
//!   `FormatOptions`
//!
//! ## Nominal Degree
//!
//! Results keep the degree their algorithm implies rather than trimming
//! trailing zeros: `[1, 2, 3] - [1, 2, 3]` has degree 2. Use `true_degree`
//! for the highest non-zero term; `==` ignores trailing zeros.
//!
//! ## Example
//!
//! ```
//! use horner_poly::Polynomial;
//!
//! let p = Polynomial::from([1, 1]); // 1 + x
//! let square = &p * &p;
//! assert_eq!(square.coeffs(), &[1, 2, 1]);
//! assert_eq!(square.solve(&2), 9);
//! assert_eq!(square.to_string(), "x² + 2x + 1");
//! assert_eq!(&square / &p, p);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod calculus;
pub mod display;
pub mod error;
pub mod polynomial;
mod store;

#[cfg(test)]
mod proptests;

pub use display::{FormatOptions, PowerStyle};
pub use error::{ErrorKind, PolyError, Result};
pub use polynomial::Polynomial;

//! # horner-rings
//!
//! Coefficient traits for horner polynomials.
//!
//! This crate provides:
//! - The `Coefficient` trait: everything a polynomial needs from its scalars
//! - A blanket implementation for every `num_traits::Num` type that is
//!   ordered, cloneable and printable (`i32`, `i64`, `f64`, `Ratio<i64>`, ...)
//! - Tolerance-based scalar comparison for floating coefficients
//!
//! ## Trait Hierarchy
//!
//! ```text
//! num_traits::Num
//!  └── Coefficient
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod traits;

#[cfg(test)]
mod proptests;

pub use traits::{approx_eq, Coefficient};

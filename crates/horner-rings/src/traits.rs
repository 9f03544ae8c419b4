//! Coefficient traits.
//!
//! This module defines the numeric contract that polynomial coefficients
//! must satisfy. Any ordered, printable `num_traits::Num` type qualifies.

use std::fmt::{Debug, Display};

use num_traits::{Float, Num};

/// A scalar usable as a polynomial coefficient.
///
/// # Laws
///
/// - `zero()` is the additive identity and `one()` the multiplicative one
/// - Addition and multiplication behave like the underlying numeric type;
///   integer division truncates, exactly as the type's own `/` does
/// - The ordering is only consulted to decide the printed sign of a term
pub trait Coefficient: Num + Clone + PartialOrd + Debug + Display {
    /// Computes self + self + ... (n times).
    ///
    /// Uses double-and-add, so the cost is logarithmic in `n` and no
    /// conversion from `usize` into the coefficient type is needed.
    #[must_use]
    fn mul_by_scalar(&self, n: usize) -> Self {
        let mut result = Self::zero();
        let mut addend = self.clone();
        let mut k = n;

        loop {
            if k & 1 == 1 {
                result = result + addend.clone();
            }
            k >>= 1;
            if k == 0 {
                break;
            }
            addend = addend.clone() + addend;
        }

        result
    }

    /// Returns true if this value orders strictly below zero.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl<T> Coefficient for T where T: Num + Clone + PartialOrd + Debug + Display {}

/// Returns true if `a` and `b` differ by at most `tolerance`.
///
/// NaN never compares as approximately equal to anything.
pub fn approx_eq<F: Float>(a: F, b: F, tolerance: F) -> bool {
    (a - b).abs() <= tolerance
}

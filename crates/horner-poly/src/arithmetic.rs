//! Polynomial arithmetic: addition, subtraction, multiplication and long
//! division.
//!
//! Operators are implemented for both owned and borrowed operands. Each one
//! reads its inputs and allocates a fresh result.

use std::ops::{Add, Div, Mul, Neg, Sub};

use horner_rings::Coefficient;
use tracing::debug;

use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;
use crate::store::CoeffStore;

impl<T: Coefficient> Polynomial<T> {
    /// Adds two polynomials.
    ///
    /// The result has nominal degree `max(deg(self), deg(other))`.
    fn add_impl(&self, other: &Self) -> Self {
        let len = self.degree().max(other.degree()) + 1;
        let mut store = CoeffStore::<T>::zeroed(len);

        for (i, slot) in store.as_mut_slice().iter_mut().enumerate() {
            *slot = self.coeff_or_zero(i) + other.coeff_or_zero(i);
        }

        Self { store }
    }

    /// Subtracts two polynomials.
    ///
    /// The result is built term by term, appending explicit zeros for
    /// cancelled powers, so its nominal degree is always
    /// `max(deg(self), deg(other))`.
    fn sub_impl(&self, other: &Self) -> Self {
        let max_deg = self.degree().max(other.degree());
        let mut store = CoeffStore::<T>::with_capacity(1);

        for i in 0..=max_deg {
            store.push(self.coeff_or_zero(i) - other.coeff_or_zero(i));
        }

        Self { store }
    }

    /// Multiplies two polynomials by discrete convolution.
    ///
    /// A zero right operand short-circuits to the zero polynomial.
    fn mul_impl(&self, other: &Self) -> Self {
        if other.is_zero() {
            return Self::zero();
        }

        let a = self.coeffs();
        let b = other.coeffs();
        let mut store = CoeffStore::<T>::zeroed(a.len() + b.len() - 1);
        let result = store.as_mut_slice();

        for (i, ai) in a.iter().enumerate() {
            for (j, bj) in b.iter().enumerate() {
                result[i + j] = result[i + j].clone() + ai.clone() * bj.clone();
            }
        }

        Self { store }
    }

    /// Long division returning both quotient and remainder.
    ///
    /// If `deg(self) < deg(divisor)` the quotient is zero and the remainder is
    /// a copy of `self`. Otherwise the remainder keeps the dividend's nominal
    /// degree; over a field every term at or above `deg(divisor)` is zero.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroLeadingCoefficient`] if the divisor's
    /// coefficient at its nominal degree is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let n = self.degree();
        let m = divisor.degree();

        if n < m {
            return Ok((Self::zero(), self.clone()));
        }

        let lead = divisor.leading_coeff();
        if lead.is_zero() {
            debug!(dividend_degree = n, divisor_degree = m, "division by zero leading coefficient");
            return Err(PolyError::ZeroLeadingCoefficient);
        }

        let q_deg = n - m;
        let mut quotient = CoeffStore::<T>::zeroed(q_deg + 1);
        let mut remainder = self.clone();
        let d = divisor.coeffs();

        {
            let q = quotient.as_mut_slice();
            let r = remainder.store.as_mut_slice();

            for i in (0..=q_deg).rev() {
                let factor = r[i + m].clone() / lead.clone();

                for (j, dj) in d.iter().enumerate() {
                    r[i + j] = r[i + j].clone() - factor.clone() * dj.clone();
                }

                q[i] = factor;
            }
        }

        Ok((Self { store: quotient }, remainder))
    }

    /// Quotient-only long division.
    ///
    /// Returns the zero polynomial when `deg(self) < deg(divisor)`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroLeadingCoefficient`] if the divisor's
    /// coefficient at its nominal degree is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }
}

macro_rules! forward_binop {
    ($Trait:ident, $method:ident, $imp:ident) => {
        impl<T: Coefficient> $Trait<&Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: &Polynomial<T>) -> Polynomial<T> {
                self.$imp(rhs)
            }
        }

        impl<T: Coefficient> $Trait for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: Polynomial<T>) -> Polynomial<T> {
                self.$imp(&rhs)
            }
        }

        impl<T: Coefficient> $Trait<&Polynomial<T>> for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: &Polynomial<T>) -> Polynomial<T> {
                self.$imp(rhs)
            }
        }

        impl<T: Coefficient> $Trait<Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: Polynomial<T>) -> Polynomial<T> {
                self.$imp(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, add_impl);
forward_binop!(Sub, sub, sub_impl);
forward_binop!(Mul, mul, mul_impl);
forward_binop!(Div, div, div_or_panic);

impl<T: Coefficient> Polynomial<T> {
    fn div_or_panic(&self, divisor: &Self) -> Self {
        match self.checked_div(divisor) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Coefficient + Neg<Output = T>> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial {
            store: CoeffStore::from_vec(self.coeffs().iter().map(|c| -c.clone()).collect()),
        }
    }
}

impl<T: Coefficient + Neg<Output = T>> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

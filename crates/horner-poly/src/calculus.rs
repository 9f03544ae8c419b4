//! Differentiation, evaluation and composition.

use horner_rings::Coefficient;

use crate::polynomial::Polynomial;
use crate::store::CoeffStore;

impl<T: Coefficient> Polynomial<T> {
    /// Computes the formal derivative by the power rule.
    ///
    /// The result has nominal degree `degree - 1`; a degree-0 polynomial
    /// differentiates to the zero polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let mut store = CoeffStore::<T>::zeroed(self.degree());
        for (slot, (i, c)) in store
            .as_mut_slice()
            .iter_mut()
            .zip(self.coeffs().iter().enumerate().skip(1))
        {
            *slot = c.mul_by_scalar(i);
        }

        Self { store }
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    ///
    /// Uses `degree` multiply-adds and never computes a power of `x`.
    #[must_use]
    pub fn solve(&self, x: &T) -> T {
        if self.is_zero() {
            return T::zero();
        }

        let degree = self.degree();
        let coeffs = self.coeffs();

        let mut result = coeffs[degree].clone();
        for c in coeffs[..degree].iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Substitutes `q` for the variable: returns `self(q(x))`.
    ///
    /// Horner's recurrence with polynomial arithmetic: starting from the
    /// leading coefficient, the accumulator is repeatedly multiplied by `q`
    /// and the next coefficient added into its constant term.
    #[must_use]
    pub fn compose(&self, q: &Self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let degree = self.degree();
        let coeffs = self.coeffs();
        let mut acc = Self::constant(coeffs[degree].clone());

        for c in coeffs[..degree].iter().rev() {
            acc = &acc * q;
            let constant = &mut acc.store.as_mut_slice()[0];
            *constant = constant.clone() + c.clone();
        }

        acc
    }
}

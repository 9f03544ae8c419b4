//! Dense univariate polynomials.
//!
//! A [`Polynomial`] owns a growable coefficient store and tracks a *nominal*
//! degree: the highest index it treats as in use. Trailing coefficients at or
//! below that degree may be zero; [`Polynomial::true_degree`] is the separate
//! query for the highest non-zero term.

use std::ops::{Index, IndexMut};

use horner_rings::Coefficient;
use num_traits::Float;

use crate::error::{PolyError, Result};
use crate::store::CoeffStore;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order: index `i` holds the
/// coefficient of `x^i`. Every arithmetic, calculus and composition operation
/// returns a freshly allocated polynomial and leaves its operands untouched.
#[derive(Clone, Debug)]
pub struct Polynomial<T: Coefficient> {
    /// Terms `0..=degree` are in use; the store never holds fewer than one.
    pub(crate) store: CoeffStore<T>,
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates a polynomial from coefficients, lowest power first.
    ///
    /// The degree is `coeffs.len() - 1`; trailing zeros are kept. An empty
    /// list yields the zero polynomial.
    #[must_use]
    pub fn new(coeffs: Vec<T>) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        Self {
            store: CoeffStore::from_vec(coeffs),
        }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            store: CoeffStore::zeroed(1),
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// Creates the monic monomial `x^degree`, or the zero polynomial for
    /// degree 0.
    #[must_use]
    pub fn monomial(degree: usize) -> Self {
        if degree == 0 {
            return Self::zero();
        }
        let mut store = CoeffStore::zeroed(degree + 1);
        store.as_mut_slice()[degree] = T::one();
        Self { store }
    }

    /// Creates a polynomial from a requested degree.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NegativeDegree`] if `degree < 0`.
    pub fn with_degree(degree: i64) -> Result<Self> {
        let Ok(degree) = usize::try_from(degree) else {
            return Err(PolyError::NegativeDegree(degree));
        };
        Ok(Self::monomial(degree))
    }

    /// Returns the nominal degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.store.len() - 1
    }

    /// Returns the number of allocated coefficient slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns the in-use coefficients, lowest power first.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Returns the coefficient at the nominal degree.
    #[must_use]
    pub fn leading_coeff(&self) -> &T {
        &self.coeffs()[self.degree()]
    }

    /// Returns a reference to the coefficient of `x^index`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IndexOutOfRange`] if `index > degree`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let degree = self.degree();
        self.store
            .get(index)
            .ok_or(PolyError::IndexOutOfRange { index, degree })
    }

    /// Returns a mutable reference to the coefficient of `x^index`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IndexOutOfRange`] if `index > degree`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let degree = self.degree();
        self.store
            .get_mut(index)
            .ok_or(PolyError::IndexOutOfRange { index, degree })
    }

    /// Returns the coefficient of `x^index`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IndexOutOfRange`] if `index > degree`.
    pub fn coefficient(&self, index: usize) -> Result<T> {
        self.get(index).cloned()
    }

    /// Overwrites the coefficient of `x^index`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IndexOutOfRange`] if `index > degree`.
    pub fn set_coefficient(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Appends `value` as the new leading term, at `degree + 1`.
    ///
    /// The capacity doubles whenever the store is full, so appends are
    /// amortized O(1).
    pub fn add_new_term(&mut self, value: T) {
        self.store.push(value);
    }

    /// Drops the leading term, zeroing its slot.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NoTermToRemove`] when only the constant term is
    /// left.
    pub fn remove_last_term(&mut self) -> Result<()> {
        if self.degree() == 0 {
            return Err(PolyError::NoTermToRemove);
        }
        self.store.pop();
        Ok(())
    }

    /// Zeroes the coefficient of `x^index` and shrinks the nominal degree by
    /// one, discarding the leading slot.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NoTermToRemove`] when only the constant term is
    /// left, and [`PolyError::IndexOutOfRange`] if `index > degree`. Nothing
    /// is modified on error.
    pub fn remove_any_term(&mut self, index: usize) -> Result<()> {
        if self.degree() == 0 {
            return Err(PolyError::NoTermToRemove);
        }
        *self.get_mut(index)? = T::zero();
        self.store.pop();
        Ok(())
    }

    /// Returns true if every coefficient above the constant term is zero.
    ///
    /// This holds for every constant polynomial, not only the zero one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs()[1..].iter().all(T::is_zero)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.is_empty() && self.coeffs()[0].is_zero()
    }

    /// Returns the nominal degree, collapsed to 0 for the zero constant.
    ///
    /// Does not scan for a lower true degree: `[1, 0, 0]` reports 2.
    #[must_use]
    pub fn highdegree(&self) -> usize {
        if self.degree() == 0 && self.coeffs()[0].is_zero() {
            return 0;
        }
        self.degree()
    }

    /// Returns the highest power with a non-zero coefficient (0 for constants).
    #[must_use]
    pub fn true_degree(&self) -> usize {
        self.coeffs()
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or(0)
    }

    /// Moves the coefficients out, leaving the zero polynomial behind.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::zero())
    }

    /// Coefficient of `x^i`, or zero past the nominal degree.
    pub(crate) fn coeff_or_zero(&self, i: usize) -> T {
        self.store.get(i).cloned().unwrap_or_else(T::zero)
    }
}

impl<T: Coefficient + Float> Polynomial<T> {
    /// Compares coefficients with an absolute tolerance.
    ///
    /// Terms past either operand's nominal degree count as zero. This is
    /// separate from `==`, which is always exact.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        let len = self.store.len().max(other.store.len());
        (0..len).all(|i| {
            horner_rings::approx_eq(self.coeff_or_zero(i), other.coeff_or_zero(i), tolerance)
        })
    }
}

impl<T: Coefficient> PartialEq for Polynomial<T> {
    /// Exact comparison; terms past either nominal degree count as zero.
    /// Unlike a comparison bounded by the shorter operand, every term up to
    /// the larger nominal degree is checked, so `[1, 2] != [1]`.
    fn eq(&self, other: &Self) -> bool {
        let len = self.store.len().max(other.store.len());
        (0..len).all(|i| self.coeff_or_zero(i) == other.coeff_or_zero(i))
    }
}

impl<T: Coefficient + Eq> Eq for Polynomial<T> {}

impl<T: Coefficient> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Coefficient> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Coefficient, const N: usize> From<[T; N]> for Polynomial<T> {
    fn from(coeffs: [T; N]) -> Self {
        Self::new(coeffs.into())
    }
}

impl<T: Coefficient> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Coefficient> Index<usize> for Polynomial<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index > degree`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Coefficient> IndexMut<usize> for Polynomial<T> {
    /// # Panics
    ///
    /// Panics if `index > degree`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        }
    }
}

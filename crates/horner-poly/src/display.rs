//! Textual rendering of polynomials.
//!
//! Terms are printed from the highest power down as a signed sum. Zero terms
//! are skipped, a unit coefficient is elided (and `-1` becomes a bare sign)
//! except on the constant term, and the all-zero polynomial prints as `0`.
//!
//! The default rendering uses superscript powers (`x² + 2x + 1`);
//! [`FormatOptions`] selects the variable symbol and caret powers instead.

use std::fmt;

use horner_rings::Coefficient;

use crate::polynomial::Polynomial;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// How powers of two or more are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerStyle {
    /// Unicode superscript digits: `x²`, `x¹⁰`.
    #[default]
    Superscript,
    /// ASCII caret notation: `x^2`, `x^10`.
    Caret,
}

/// Rendering configuration for [`Polynomial::display_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Symbol printed for the variable.
    pub variable: String,
    /// Notation for powers of two or more.
    pub powers: PowerStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            variable: "x".to_string(),
            powers: PowerStyle::Superscript,
        }
    }
}

impl FormatOptions {
    /// Sets the variable symbol.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Sets the power notation.
    #[must_use]
    pub fn with_powers(mut self, powers: PowerStyle) -> Self {
        self.powers = powers;
        self
    }
}

/// Renders `n` with superscript digit glyphs.
#[must_use]
pub fn superscript(n: usize) -> String {
    n.to_string()
        .chars()
        .filter_map(|d| d.to_digit(10))
        .map(|d| SUPERSCRIPT_DIGITS[d as usize])
        .collect()
}

/// A [`Polynomial`] paired with the options used to print it.
pub struct DisplayWith<'a, T: Coefficient> {
    poly: &'a Polynomial<T>,
    options: &'a FormatOptions,
}

impl<T: Coefficient> Polynomial<T> {
    /// Returns a `Display` adapter using the given options.
    #[must_use]
    pub fn display_with<'a>(&'a self, options: &'a FormatOptions) -> DisplayWith<'a, T> {
        DisplayWith {
            poly: self,
            options,
        }
    }
}

/// True for `1` and `-1`. Never negates, so the most negative integer is safe.
fn is_unit<T: Coefficient>(c: &T) -> bool {
    c.is_one() || (c.is_negative() && (c.clone() + T::one()).is_zero())
}

fn write_poly<T: Coefficient>(
    f: &mut fmt::Formatter<'_>,
    poly: &Polynomial<T>,
    options: &FormatOptions,
) -> fmt::Result {
    let mut first = true;

    for (i, c) in poly.coeffs().iter().enumerate().rev() {
        if c.is_zero() {
            continue;
        }

        let negative = c.is_negative();
        match (first, negative) {
            (true, true) => f.write_str("-")?,
            (true, false) => {}
            (false, true) => f.write_str(" - ")?,
            (false, false) => f.write_str(" + ")?,
        }

        if i == 0 || !is_unit(c) {
            let text = c.to_string();
            f.write_str(text.strip_prefix('-').unwrap_or(&text))?;
        }

        if i > 0 {
            f.write_str(&options.variable)?;
        }
        if i > 1 {
            match options.powers {
                PowerStyle::Superscript => f.write_str(&superscript(i))?,
                PowerStyle::Caret => write!(f, "^{i}")?,
            }
        }

        first = false;
    }

    if first {
        f.write_str("0")?;
    }
    Ok(())
}

impl<T: Coefficient> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_poly(f, self, &FormatOptions::default())
    }
}

impl<T: Coefficient> fmt::Display for DisplayWith<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_poly(f, self.poly, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superscript() {
        assert_eq!(superscript(2), "²");
        assert_eq!(superscript(10), "¹⁰");
        assert_eq!(superscript(349), "³⁴⁹");
    }

    #[test]
    fn test_display_square() {
        let p = Polynomial::from([1, 2, 1]);
        assert_eq!(p.to_string(), "x² + 2x + 1");
    }

    #[test]
    fn test_display_unit_coefficients() {
        assert_eq!(Polynomial::from([1, 1]).to_string(), "x + 1");
        assert_eq!(Polynomial::from([1, -1]).to_string(), "-x + 1");
        assert_eq!(Polynomial::from([0, 0, -1]).to_string(), "-x²");
        assert_eq!(Polynomial::from([-1, 0, 1]).to_string(), "x² - 1");
        assert_eq!(Polynomial::from([1]).to_string(), "1");
        assert_eq!(Polynomial::from([-1]).to_string(), "-1");
    }

    #[test]
    fn test_display_negative_terms() {
        let p = Polynomial::from([5, -3, 0, 2]);
        assert_eq!(p.to_string(), "2x³ - 3x + 5");
        let q = Polynomial::from([-4, 0, -2]);
        assert_eq!(q.to_string(), "-2x² - 4");
    }

    #[test]
    fn test_display_most_negative_coefficient() {
        let p = Polynomial::from([i64::MIN, 1]);
        assert_eq!(p.to_string(), "x - 9223372036854775808");
        let q = Polynomial::from([0, i64::MIN]);
        assert_eq!(q.to_string(), "-9223372036854775808x");
        let r = Polynomial::from([i8::MIN, -1, i8::MIN]);
        assert_eq!(r.to_string(), "-128x² - x - 128");
    }

    #[test]
    fn test_display_unsigned_max() {
        let p = Polynomial::from([u32::MAX, 1]);
        assert_eq!(p.to_string(), "x + 4294967295");
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(Polynomial::<i64>::zero().to_string(), "0");
        assert_eq!(Polynomial::from([0, 0, 0]).to_string(), "0");
    }

    #[test]
    fn test_display_float() {
        let p = Polynomial::from([2.5, 0.0, 0.5]);
        assert_eq!(p.to_string(), "0.5x² + 2.5");
    }

    #[test]
    fn test_display_high_power() {
        let p = Polynomial::<i64>::with_degree(12).unwrap();
        assert_eq!(p.to_string(), "x¹²");
    }

    #[test]
    fn test_display_with_caret_and_variable() {
        let p = Polynomial::from([1, 2, 1]);
        let options = FormatOptions::default()
            .with_variable("t")
            .with_powers(PowerStyle::Caret);
        assert_eq!(p.display_with(&options).to_string(), "t^2 + 2t + 1");
    }

    #[test]
    fn test_display_with_default_matches_display() {
        let p = Polynomial::from([3, 0, -1, 7]);
        let options = FormatOptions::default();
        assert_eq!(p.display_with(&options).to_string(), p.to_string());
    }
}

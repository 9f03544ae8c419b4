//! Property-based tests for the coefficient contract.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Coefficient;
    use num_rational::Rational64;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    proptest! {
        #[test]
        fn mul_by_scalar_matches_multiplication(a in small_int(), n in 0usize..200) {
            prop_assert_eq!(a.mul_by_scalar(n), a * n as i64);
        }

        #[test]
        fn mul_by_scalar_rational(num in small_int(), den in 1i64..50, n in 0usize..64) {
            let r = Rational64::new(num, den);
            prop_assert_eq!(r.mul_by_scalar(n), r * Rational64::from_integer(n as i64));
        }

        #[test]
        fn sign_matches_ordering(a in small_int()) {
            prop_assert_eq!(Coefficient::is_negative(&a), a < 0);
        }
    }
}

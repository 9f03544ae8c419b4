//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Polynomial;
    use num_rational::Rational64;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = i64> {
        -20i64..20i64
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::new)
    }

    // Tighter bounds for composition, whose degrees multiply
    fn tiny_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::vec(-5i64..5i64, 1..=4).prop_map(Polynomial::new)
    }

    fn rational_poly() -> impl Strategy<Value = Polynomial<Rational64>> {
        proptest::collection::vec(-10i64..10i64, 1..=5)
            .prop_map(|cs| cs.into_iter().map(Rational64::from_integer).collect::<Polynomial<_>>())
    }

    // Divisor with a non-zero leading coefficient
    fn rational_divisor() -> impl Strategy<Value = Polynomial<Rational64>> {
        (
            proptest::collection::vec(-5i64..5i64, 0..=2),
            prop_oneof![-3i64..=-1i64, 1i64..=3i64],
        )
            .prop_map(|(mut cs, lead)| {
                cs.push(lead);
                cs.into_iter().map(Rational64::from_integer).collect::<Polynomial<_>>()
            })
    }

    proptest! {
        // Construction

        #[test]
        fn with_degree_is_monic_monomial(d in 0i64..20) {
            let p = Polynomial::<i64>::with_degree(d).unwrap();
            prop_assert_eq!(p.highdegree() as i64, d);
            if d > 0 {
                prop_assert_eq!(p.solve(&1), 1);
                prop_assert_eq!(p.true_degree() as i64, d);
            } else {
                prop_assert!(p.is_zero());
            }
        }

        #[test]
        fn negative_degree_rejected(d in i64::MIN..0) {
            prop_assert!(Polynomial::<i64>::with_degree(d).is_err());
        }

        // Ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_sub_inverse(a in small_poly(), b in small_poly()) {
            let diff = &a - &b;
            prop_assert_eq!(diff.degree(), a.degree().max(b.degree()));
            prop_assert_eq!(&diff + &b, a.clone());
            prop_assert!((&a - &a).is_zero());
        }

        // Evaluation homomorphism

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in -10i64..10) {
            prop_assert_eq!((&a + &b).solve(&x), a.solve(&x) + b.solve(&x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -10i64..10) {
            prop_assert_eq!((&a * &b).solve(&x), a.solve(&x) * b.solve(&x));
        }

        // Calculus

        #[test]
        fn derivative_linear(a in small_poly(), b in small_poly()) {
            prop_assert_eq!((&a + &b).derivative(), &a.derivative() + &b.derivative());
        }

        #[test]
        fn derivative_product_rule(a in small_poly(), b in small_poly()) {
            let left = (&a * &b).derivative();
            let right = &(&a.derivative() * &b) + &(&a * &b.derivative());
            prop_assert_eq!(left, right);
        }

        // Division

        #[test]
        fn division_remainder_degree(a in rational_poly(), d in rational_divisor()) {
            let q = a.checked_div(&d).unwrap();
            let r = &a - &(&q * &d);
            prop_assert!(r.is_zero() || r.true_degree() < d.degree());
        }

        #[test]
        fn div_rem_reconstructs(a in rational_poly(), d in rational_divisor()) {
            let (q, r) = a.div_rem(&d).unwrap();
            prop_assert_eq!(&(&q * &d) + &r, a);
        }

        // Composition

        #[test]
        fn compose_agrees_with_eval(p in tiny_poly(), q in tiny_poly(), x in -3i64..3) {
            prop_assert_eq!(p.compose(&q).solve(&x), p.solve(&q.solve(&x)));
        }

        #[test]
        fn compose_with_x_is_identity(p in small_poly()) {
            let x = Polynomial::from([0, 1]);
            prop_assert_eq!(p.compose(&x), p);
        }
    }
}

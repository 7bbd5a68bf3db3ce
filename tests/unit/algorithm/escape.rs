//! Tests for escape-time evaluation, input validation and the interior shortcut

#[cfg(test)]
mod tests {
    use mandelgrid::RenderError;
    use mandelgrid::algorithm::escape::{EscapeTime, escape_time, in_main_interior};
    use num_complex::Complex64;
    use proptest::prelude::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    // Tests origin never escapes
    // Verified by returning max_iter for bounded points
    #[test]
    fn test_origin_is_bounded_for_any_budget() {
        for max_iter in [1, 2, 10, 500, 10_000] {
            assert_eq!(escape_time(c(0.0, 0.0), max_iter).unwrap(), 0);
        }
    }

    // Tests period-2 cycle at -1 never escapes
    // Verified by using a strict greater-than on the loop bound
    #[test]
    fn test_minus_one_is_bounded_for_any_budget() {
        for max_iter in 1..=64 {
            assert_eq!(escape_time(c(-1.0, 0.0), max_iter).unwrap(), 0);
        }
        assert_eq!(escape_time(c(-1.0, 0.0), 5_000).unwrap(), 0);
    }

    // Tests points outside radius 2 escape on the first iteration
    // Verified by starting the count at zero
    #[test]
    fn test_points_outside_radius_escape_immediately() {
        for point in [c(3.0, 0.0), c(0.0, 2.5), c(-2.1, 0.0), c(1.5, 1.5), c(-2.0, -1.0)] {
            let count = escape_time(point, 50).unwrap();
            assert!(count >= 1 && count <= 2, "{point} escaped after {count}");
            assert_eq!(count, 1);
        }
    }

    // Tests threshold comparison includes equality
    // Verified by switching to a strict comparison
    #[test]
    fn test_reaching_threshold_counts_as_escape() {
        assert_eq!(escape_time(c(2.0, 0.0), 10).unwrap(), 1);
        assert_eq!(escape_time(c(-2.0, 0.0), 10).unwrap(), 1);
        assert_eq!(escape_time(c(0.0, 2.0), 10).unwrap(), 1);
    }

    // Tests known escape counts for points near the set
    // Verified by iterating z = z^2 instead of z^2 + c
    #[test]
    fn test_known_escape_counts() {
        assert_eq!(escape_time(c(1.0, 0.0), 50).unwrap(), 2);
        assert_eq!(escape_time(c(0.5, 0.0), 50).unwrap(), 5);
        assert_eq!(escape_time(c(0.3, 0.0), 50).unwrap(), 12);
        assert_eq!(escape_time(c(-0.5, 1.0), 50).unwrap(), 4);
        assert_eq!(escape_time(c(1.0, 1.0), 50).unwrap(), 2);
        assert_eq!(escape_time(c(0.0, 1.0), 500).unwrap(), 0);
    }

    // Tests escape on the last budgeted iteration is reported
    // Verified by using an exclusive iteration range
    #[test]
    fn test_escape_on_final_iteration() {
        assert_eq!(escape_time(c(0.5, 0.0), 5).unwrap(), 5);
        assert_eq!(escape_time(c(0.5, 0.0), 4).unwrap(), 0);
    }

    // Tests raising the budget preserves escape counts
    // Verified by scaling the count by the budget
    #[test]
    fn test_larger_budget_keeps_escape_count() {
        let point = c(0.26, 0.0);
        let full = escape_time(point, 10_000).unwrap();
        assert!(full > 0, "0.26 lies outside the set");

        assert_eq!(escape_time(point, full).unwrap(), full);
        assert_eq!(escape_time(point, full * 3).unwrap(), full);
        assert_eq!(escape_time(point, full - 1).unwrap(), 0);
    }

    // Tests zero budget is rejected
    // Verified by removing the max_iter guard
    #[test]
    fn test_zero_budget_is_invalid() {
        let error = escape_time(c(0.0, 0.0), 0).unwrap_err();
        assert!(matches!(
            error,
            RenderError::InvalidArgument {
                parameter: "max_iter",
                ..
            }
        ));
        assert!(EscapeTime::new(0, true).is_err());
    }

    // Tests non-finite coordinates are rejected
    // Verified by removing the finiteness check
    #[test]
    fn test_non_finite_coordinates_are_invalid() {
        for point in [
            c(f64::NAN, 0.0),
            c(0.0, f64::NAN),
            c(f64::INFINITY, 0.0),
            c(0.0, f64::NEG_INFINITY),
        ] {
            let error = escape_time(point, 10).unwrap_err();
            assert!(
                matches!(error, RenderError::InvalidArgument { parameter: "c", .. }),
                "{point} should be rejected, got {error}"
            );
        }
    }

    // Tests very large finite coordinates still escape
    // Verified by checking the modulus before the first step
    #[test]
    fn test_huge_coordinates_escape() {
        assert_eq!(escape_time(c(1e300, -1e300), 10).unwrap(), 1);
    }

    // Tests interior regions contain expected points
    // Verified by swapping the bulb center sign
    #[test]
    fn test_interior_membership() {
        assert!(in_main_interior(c(0.0, 0.0)));
        assert!(in_main_interior(c(-0.5, 0.3)));
        assert!(in_main_interior(c(-1.0, 0.0)));
        assert!(in_main_interior(c(-1.1, 0.1)));

        assert!(!in_main_interior(c(0.3, 0.0)));
        assert!(!in_main_interior(c(-0.75, 0.1)));
        assert!(!in_main_interior(c(-2.0, 0.0)));
        assert!(!in_main_interior(c(1.0, 1.0)));
    }

    // Tests interior shortcut leaves results unchanged
    // Verified by returning max_iter from the shortcut
    #[test]
    fn test_interior_check_matches_full_iteration() {
        let fast = EscapeTime::new(300, true).unwrap();
        let full = EscapeTime::new(300, false).unwrap();

        for i in 0..60 {
            for j in 0..40 {
                let point = c(
                    -2.0 + 3.0 * f64::from(i) / 59.0,
                    -1.0 + 2.0 * f64::from(j) / 39.0,
                );
                assert_eq!(fast.evaluate(point), full.evaluate(point), "at {point}");
            }
        }
    }

    // Tests evaluator accessors
    // Verified by swapping stored fields
    #[test]
    fn test_evaluator_accessors() {
        let evaluator = EscapeTime::new(42, false).unwrap();
        assert_eq!(evaluator.max_iter(), 42);
        assert!(!evaluator.interior_check());
    }

    proptest! {
        // Tests every point beyond radius 2 escapes within two iterations
        #[test]
        fn prop_outside_radius_escapes_fast(
            radius in 2.000_001_f64..1.0e6,
            angle in 0.0_f64..std::f64::consts::TAU,
            max_iter in 1_u32..1_000,
        ) {
            let point = Complex64::from_polar(radius, angle);
            let count = escape_time(point, max_iter).unwrap();
            prop_assert!(count >= 1 && count <= 2);
        }

        // Tests raising the budget never changes an escape count
        #[test]
        fn prop_budget_monotonicity(
            re in -2.0_f64..1.0,
            im in -1.5_f64..1.5,
            budget in 1_u32..200,
            extra in 0_u32..200,
        ) {
            let point = Complex64::new(re, im);
            let small = escape_time(point, budget).unwrap();
            let large = escape_time(point, budget + extra).unwrap();

            if small > 0 {
                prop_assert_eq!(large, small);
            } else {
                prop_assert!(large == 0 || large > budget);
            }
        }

        // Tests results never exceed the budget
        #[test]
        fn prop_count_within_budget(
            re in -3.0_f64..3.0,
            im in -3.0_f64..3.0,
            max_iter in 1_u32..300,
        ) {
            let count = escape_time(Complex64::new(re, im), max_iter).unwrap();
            prop_assert!(count <= max_iter);
        }
    }
}

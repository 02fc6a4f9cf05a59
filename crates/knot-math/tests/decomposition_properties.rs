//! Property tests for decompositions, bracket search and interpolation.
//!
//! These tests verify properties that must hold for any input:
//! - LU and QR solves recover the solution of a well-conditioned system
//! - L * U reproduces the pivoted rows of the input
//! - Q has orthonormal columns and Q * R reproduces the input
//! - Brackets surround the query
//! - Every method returns the stored value at a knot
//! - Akima keeps constant samples constant everywhere

use approx::assert_relative_eq;
use knot_math::prelude::*;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Square matrix made diagonally dominant so it is safely non-singular.
fn dominant_matrix(n: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-1.0f64..1.0, n * n).prop_map(move |entries| {
        let mut a = Matrix::from_row_slice(n, n, &entries);
        for i in 0..n {
            a[(i, i)] += n as f64 + 1.0;
        }
        a
    })
}

/// Tall matrix whose top square block is diagonally dominant.
fn tall_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-1.0f64..1.0, rows * cols).prop_map(move |entries| {
        let mut a = Matrix::from_row_slice(rows, cols, &entries);
        for i in 0..cols {
            a[(i, i)] += rows as f64 + 1.0;
        }
        a
    })
}

/// Strictly increasing knots with gaps of at least 0.01.
fn knots(min: usize, max: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.01f64..2.0, -1.0f64..1.0), min..max).prop_map(|pairs| {
        let mut x = 0.0;
        let knots: (Vec<f64>, Vec<f64>) = pairs
            .into_iter()
            .map(|(gap, y)| {
                x += gap;
                (x, y)
            })
            .unzip();
        knots
    })
}

fn methods() -> Vec<InterpolationMethod> {
    vec![
        InterpolationMethod::Flat,
        InterpolationMethod::Linear,
        InterpolationMethod::NaturalSpline,
        InterpolationMethod::FirstDerivativeSpline {
            left: 0.0,
            right: 0.0,
        },
        InterpolationMethod::SecondDerivativeSpline {
            left: 0.1,
            right: -0.1,
        },
        InterpolationMethod::ParabolicSpline,
        InterpolationMethod::Akima,
    ]
}

fn rate_methods() -> Vec<InterpolationMethod> {
    vec![
        InterpolationMethod::LogLinear,
        InterpolationMethod::LinearRate,
        InterpolationMethod::PiecewiseConstantRate,
        InterpolationMethod::LogRateCubicSpline,
    ]
}

// =============================================================================
// DECOMPOSITIONS
// =============================================================================

proptest! {
    #[test]
    fn lu_solve_round_trips(
        (a, x) in (2usize..7).prop_flat_map(|n| {
            (dominant_matrix(n), prop::collection::vec(-10.0f64..10.0, n))
        })
    ) {
        let n = a.nrows();
        let x_true = Matrix::from_column_slice(n, 1, &x);
        let b = &a * &x_true;

        let lu = LuDecomposition::new(&a).unwrap();
        prop_assert!(lu.is_non_singular());

        let rebuilt = lu.l() * lu.u();
        let pivot = lu.pivot();
        for i in 0..n {
            for j in 0..n {
                assert_relative_eq!(rebuilt[(i, j)], a[(pivot[i], j)], epsilon = 1e-9);
            }
        }

        let solved = lu.solve(&b).unwrap();
        for i in 0..n {
            assert_relative_eq!(solved[(i, 0)], x[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn lu_determinant_matches_qr(a in (2usize..6).prop_flat_map(dominant_matrix)) {
        let lu_det = LuDecomposition::new(&a).unwrap().determinant();
        let qr_det = QrDecomposition::new(&a).unwrap().determinant().unwrap();
        assert_relative_eq!(lu_det, qr_det, max_relative = 1e-9);
    }

    #[test]
    fn qr_factors_are_consistent(
        a in (2usize..5).prop_flat_map(|cols| (cols..cols + 4).prop_flat_map(move |rows| tall_matrix(rows, cols)))
    ) {
        let qr = QrDecomposition::new(&a).unwrap();
        prop_assert!(qr.is_full_rank());

        let qtq = qr.q().transpose() * qr.q();
        let cols = a.ncols();
        for i in 0..cols {
            for j in 0..cols {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(qtq[(i, j)], expected, epsilon = 1e-12);
            }
        }

        let rebuilt = qr.q() * qr.r();
        for i in 0..a.nrows() {
            for j in 0..cols {
                assert_relative_eq!(rebuilt[(i, j)], a[(i, j)], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn qr_solve_round_trips_consistent_systems(
        (a, x) in (2usize..5).prop_flat_map(|cols| {
            (tall_matrix(cols + 2, cols), prop::collection::vec(-10.0f64..10.0, cols))
        })
    ) {
        let x_true = Matrix::from_column_slice(x.len(), 1, &x);
        let b = &a * &x_true;

        let solved = QrDecomposition::new(&a).unwrap().solve(&b).unwrap();
        for (i, expected) in x.iter().enumerate() {
            assert_relative_eq!(solved[(i, 0)], *expected, epsilon = 1e-9);
        }
    }
}

// =============================================================================
// BRACKETS AND INTERPOLATION
// =============================================================================

proptest! {
    #[test]
    fn bracket_surrounds_query((xs, ys) in knots(1, 20), t in -1.0f64..45.0) {
        let space = CurveSpace::from_arrays(xs.clone(), ys).unwrap();
        let b = space.bracket(t);
        prop_assert!(b.lower <= b.upper);
        prop_assert!(b.upper - b.lower <= 1);

        if space.contains(t) {
            prop_assert!(xs[b.lower] <= t && t <= xs[b.upper]);
        } else if t < xs[0] {
            prop_assert_eq!(b, Bracket::new(0, 0));
        } else {
            prop_assert_eq!(b, Bracket::new(xs.len() - 1, xs.len() - 1));
        }
    }

    #[test]
    fn every_method_is_exact_at_knots((xs, ys) in knots(5, 15)) {
        for method in methods() {
            for policy in [ExtrapolationPolicy::Clamp, ExtrapolationPolicy::Continue] {
                let curve = InterpolatedCurve::from_arrays(xs.clone(), ys.clone(), method, policy).unwrap();
                for (x, y) in xs.iter().zip(&ys) {
                    prop_assert_eq!(curve.value_at(*x).unwrap(), *y);
                }
            }
        }
    }

    #[test]
    fn clamp_returns_boundary_samples((xs, ys) in knots(5, 15), beyond in 0.001f64..100.0) {
        let first = xs[0];
        let last = xs[xs.len() - 1];
        for method in methods() {
            let curve = InterpolatedCurve::from_arrays(xs.clone(), ys.clone(), method, ExtrapolationPolicy::Clamp).unwrap();
            prop_assert_eq!(curve.value_at(first - beyond).unwrap(), ys[0]);
            prop_assert_eq!(curve.value_at(last + beyond).unwrap(), ys[ys.len() - 1]);
        }
    }

    #[test]
    fn linear_stays_within_bracket((xs, ys) in knots(2, 20), u in 0.0f64..1.0) {
        let curve = InterpolatedCurve::from_arrays(xs.clone(), ys.clone(), InterpolationMethod::Linear, ExtrapolationPolicy::Clamp).unwrap();
        let t = xs[0] + u * (xs[xs.len() - 1] - xs[0]);
        let [lo, hi] = curve.closest_values(t);
        let v = curve.value_at(t).unwrap();
        prop_assert!(v >= lo.value().min(hi.value()) - 1e-15);
        prop_assert!(v <= lo.value().max(hi.value()) + 1e-15);
    }

    #[test]
    fn rate_methods_are_exact_at_knots((xs, ys) in knots(2, 15)) {
        let dfs: Vec<f64> = ys.iter().map(|y| (-y.abs()).exp()).collect();
        for method in rate_methods() {
            for policy in [ExtrapolationPolicy::Clamp, ExtrapolationPolicy::Continue] {
                let curve = InterpolatedCurve::from_arrays(xs.clone(), dfs.clone(), method, policy).unwrap();
                for (x, df) in xs.iter().zip(&dfs) {
                    prop_assert_eq!(curve.value_at(*x).unwrap(), *df);
                }
            }
        }
    }

    #[test]
    fn akima_constant_samples_stay_constant(
        (xs, _) in knots(5, 15),
        c in -10.0f64..10.0,
        u in -0.5f64..1.5,
    ) {
        let ys = vec![c; xs.len()];
        let spline = CubicSpline::akima(xs.clone(), ys.clone()).unwrap();
        let t = xs[0] + u * (xs[xs.len() - 1] - xs[0]);
        assert_relative_eq!(spline.evaluate(t), c, epsilon = 1e-12);
        assert_relative_eq!(spline.derivative(t), 0.0, epsilon = 1e-12);

        for policy in [ExtrapolationPolicy::Clamp, ExtrapolationPolicy::Continue] {
            let curve = InterpolatedCurve::from_arrays(xs.clone(), ys.clone(), InterpolationMethod::Akima, policy).unwrap();
            assert_relative_eq!(curve.value_at(t).unwrap(), c, epsilon = 1e-12);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// SDC Core — Legendre
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Legendre polynomials and the roots the Gauss families are built from.
//!
//! Values come from the three-term recurrence
//!   k P_k = (2k-1) x P_{k-1} - (k-1) P_{k-2}
//! rather than monomial coefficients, which grow quickly with the order.
//! Roots are refined by Newton iteration from Chebyshev-type guesses;
//! symmetric root sets are mirrored so that x and -x match exactly.

use std::f64::consts::PI;

use sdc_types::constants::{ROOT_MAX_ITERATIONS, ROOT_TOLERANCE};

/// P_n(x) and P_n'(x).
pub fn legendre(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    let (mut p0, mut p1) = (1.0, x);
    let (mut dp0, mut dp1) = (0.0, 1.0);
    for k in 2..=n {
        let kf = k as f64;
        let p2 = ((2.0 * kf - 1.0) * x * p1 - (kf - 1.0) * p0) / kf;
        let dp2 = ((2.0 * kf - 1.0) * (p1 + x * dp1) - (kf - 1.0) * dp0) / kf;
        p0 = p1;
        p1 = p2;
        dp0 = dp1;
        dp1 = dp2;
    }
    (p1, dp1)
}

/// P_n'(x) and P_n''(x) for |x| < 1. The second derivative comes from
/// Legendre's equation: (1 - x^2) P'' = 2x P' - n(n+1) P.
pub fn legendre_derivatives(n: usize, x: f64) -> (f64, f64) {
    let (p, dp) = legendre(n, x);
    let nf = n as f64;
    (dp, (2.0 * x * dp - nf * (nf + 1.0) * p) / (1.0 - x * x))
}

/// Newton iteration from `guess`; `f` returns (value, slope).
pub fn newton_root(guess: f64, f: impl Fn(f64) -> (f64, f64)) -> f64 {
    let mut x = guess;
    for _ in 0..ROOT_MAX_ITERATIONS {
        let (fx, dfx) = f(x);
        if fx == 0.0 || dfx == 0.0 {
            break;
        }
        let step = fx / dfx;
        x -= step;
        if step.abs() <= ROOT_TOLERANCE {
            break;
        }
    }
    x
}

/// The n roots of P_n, ascending.
pub fn legendre_roots(n: usize) -> Vec<f64> {
    let mut roots = vec![0.0; n];
    for k in 0..n / 2 {
        let guess = (PI * (k as f64 + 0.75) / (n as f64 + 0.5)).cos();
        let x = newton_root(guess, |x| legendre(n, x));
        roots[k] = -x;
        roots[n - 1 - k] = x;
    }
    roots
}

/// The n - 1 roots of P_n', ascending.
pub fn legendre_derivative_roots(n: usize) -> Vec<f64> {
    let count = n.saturating_sub(1);
    let mut roots = vec![0.0; count];
    for k in 0..count / 2 {
        let guess = (PI * (k as f64 + 1.0) / n as f64).cos();
        let x = newton_root(guess, |x| legendre_derivatives(n, x));
        roots[k] = -x;
        roots[count - 1 - k] = x;
    }
    roots
}

/// Roots of P_n + P_{n-1} other than x = -1, ascending.
pub fn radau_roots(n: usize) -> Vec<f64> {
    let denom = (2 * n - 1) as f64;
    let mut roots: Vec<f64> = (1..n)
        .map(|k| {
            let guess = -(2.0 * PI * k as f64 / denom).cos();
            newton_root(guess, |x| {
                let (a, da) = legendre(n, x);
                let (b, db) = legendre(n - 1, x);
                (a + b, da + db)
            })
        })
        .collect();
    roots.sort_by(|a, b| a.total_cmp(b));
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_orders_match_closed_form() {
        for &x in &[-0.9, -0.3, 0.0, 0.4, 1.0] {
            let (p2, dp2) = legendre(2, x);
            assert!((p2 - (1.5 * x * x - 0.5)).abs() < 1e-15);
            assert!((dp2 - 3.0 * x).abs() < 1e-15);
            let (p3, dp3) = legendre(3, x);
            assert!((p3 - (2.5 * x * x * x - 1.5 * x)).abs() < 1e-15);
            assert!((dp3 - (7.5 * x * x - 1.5)).abs() < 1e-14);
        }
        assert_eq!(legendre(0, 0.3), (1.0, 0.0));
        assert_eq!(legendre(1, 0.3), (0.3, 1.0));
    }

    #[test]
    fn test_value_at_one() {
        for n in 0..60 {
            let (p, dp) = legendre(n, 1.0);
            assert!((p - 1.0).abs() < 1e-12, "P_{n}(1) = {p}");
            let expected = (n * (n + 1)) as f64 / 2.0;
            assert!((dp - expected).abs() < 1e-9 * expected.max(1.0));
        }
    }

    #[test]
    fn test_roots_are_roots_at_high_order() {
        for n in [1, 2, 7, 20, 40, 64] {
            let roots = legendre_roots(n);
            assert_eq!(roots.len(), n);
            for &x in &roots {
                assert!(legendre(n, x).0.abs() < 1e-12, "P_{n}({x})");
            }
            for w in roots.windows(2) {
                assert!(w[1] > w[0]);
            }
            for i in 0..n {
                assert_eq!(roots[i], -roots[n - 1 - i]);
            }
        }
    }

    #[test]
    fn test_derivative_roots() {
        assert!(legendre_derivative_roots(1).is_empty());
        assert_eq!(legendre_derivative_roots(2), vec![0.0]);
        let r = legendre_derivative_roots(3);
        assert!((r[1] - 0.2_f64.sqrt()).abs() < 1e-15);
        for n in [5, 12, 39] {
            let roots = legendre_derivative_roots(n);
            assert_eq!(roots.len(), n - 1);
            for &x in &roots {
                assert!(legendre(n, x).1.abs() < 1e-10, "P'_{n}({x})");
            }
            for w in roots.windows(2) {
                assert!(w[1] > w[0]);
            }
        }
    }

    #[test]
    fn test_radau_roots() {
        let r = radau_roots(2);
        assert_eq!(r.len(), 1);
        assert!((r[0] - 1.0 / 3.0).abs() < 1e-15);
        for n in [3, 10, 40] {
            let roots = radau_roots(n);
            assert_eq!(roots.len(), n - 1);
            for &x in &roots {
                let v = legendre(n, x).0 + legendre(n - 1, x).0;
                assert!(v.abs() < 1e-12, "n={n} x={x} residual {v}");
                assert!(x > -1.0 && x < 1.0);
            }
            for w in roots.windows(2) {
                assert!(w[1] > w[0], "n={n}: roots collapsed: {roots:?}");
            }
        }
    }

    #[test]
    fn test_newton_stops_on_exact_root() {
        assert_eq!(newton_root(0.0, |x| (x, 1.0)), 0.0);
    }
}

// ─────────────────────────────────────────────────────────────────────
// SDC Core — Property-Based Tests (proptest) for sdc-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for sdc-math using proptest.
//!
//! Covers: quadrature node/weight invariants for every family, determinism,
//! interpolation matrices, and the state algebra (zero, copy, saxpy,
//! mat_apply, norm0).

use ndarray::Array2;
use proptest::prelude::*;
use sdc_math::encap::{DenseVector, EncapFactory, EncapState, Encapsulation, StateFactory};
use sdc_math::interp::compute_interp;
use sdc_math::quadrature::{quadrature_factory, QuadratureRule};
use sdc_types::error::SdcError;
use sdc_types::tags::{EncapType, Precision, QuadratureType};

fn any_family() -> impl Strategy<Value = QuadratureType> {
    prop::sample::select(QuadratureType::ALL.to_vec())
}

/// A family with a node count from its minimum up to 40. Equispaced rules
/// stop at 20: their Newton-Cotes weights alternate in sign and grow like
/// 2^m, so cancellation in the weight sums exceeds 1e-12 beyond that.
fn family_and_count() -> impl Strategy<Value = (QuadratureType, usize)> {
    any_family().prop_flat_map(|family| {
        let max = match family {
            QuadratureType::Uniform => 20,
            _ => 40,
        };
        (Just(family), family.min_nodes()..=max)
    })
}

fn values(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e3f64..1e3, len)
}

// ── Quadrature Properties ────────────────────────────────────────────

proptest! {
    /// Nodes strictly increase inside [0, 1] and weights sum to one.
    #[test]
    fn nodes_sorted_in_unit_interval((family, m) in family_and_count()) {
        let q = quadrature_factory(m, family).unwrap();
        let nodes = q.nodes();

        prop_assert_eq!(nodes.len(), m);
        prop_assert!(nodes[0] >= 0.0 && nodes[m - 1] <= 1.0);
        for w in nodes.windows(2) {
            prop_assert!(w[1] > w[0], "nodes not increasing: {:?}", nodes);
        }
        let total: f64 = q.weights().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-12, "{} m={}: weight sum {}", family, m, total);
    }

    /// Same family and node count give identical rules.
    #[test]
    fn construction_is_deterministic((family, m) in family_and_count()) {
        let a = quadrature_factory(m, family).unwrap();
        let b = quadrature_factory(m, family).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Endpoint flags agree with the node set.
    #[test]
    fn endpoint_flags_match_nodes((family, m) in family_and_count()) {
        let q = quadrature_factory(m, family).unwrap();
        prop_assert_eq!(q.left_is_node(), q.nodes()[0] == 0.0);
        prop_assert_eq!(q.right_is_node(), q.nodes()[m - 1] == 1.0);
    }

    /// Summing S-matrix rows against f = 1 recovers the node spacings.
    #[test]
    fn s_mat_integrates_constants((family, m) in family_and_count()) {
        let q = quadrature_factory(m, family).unwrap();
        for i in 0..m {
            let row_sum: f64 = q.s_mat().row(i).sum();
            prop_assert!((row_sum - q.delta_nodes()[i]).abs() < 1e-12);
        }
    }

    /// Every family rejects node counts below its minimum.
    #[test]
    fn below_minimum_rejected(family in any_family()) {
        for m in 0..family.min_nodes() {
            let result = quadrature_factory(m, family);
            prop_assert!(matches!(result, Err(SdcError::InvalidConfiguration(_))));
        }
    }
}

// ── Interpolation Properties ─────────────────────────────────────────

proptest! {
    /// Interpolating a node set onto itself gives the identity.
    #[test]
    fn interp_onto_self_is_identity((family, m) in family_and_count()) {
        let nodes = quadrature_factory(m, family).unwrap().nodes().to_vec();
        let mat = compute_interp(&nodes, &nodes);
        for i in 0..m {
            for j in 0..m {
                let expected = if i == j { 1.0 } else { 0.0 };
                prop_assert!((mat[[i, j]] - expected).abs() < 1e-12);
            }
        }
    }

    /// Coarse-to-fine transfer reproduces polynomials of the coarse degree.
    #[test]
    fn interp_exact_for_low_degree(c0 in -5.0f64..5.0, c1 in -5.0f64..5.0, c2 in -5.0f64..5.0) {
        let f = |t: f64| c0 + c1 * t + c2 * t * t;
        let coarse = quadrature_factory(3, QuadratureType::GaussLobatto).unwrap();
        let fine = quadrature_factory(5, QuadratureType::GaussLobatto).unwrap();
        let mat = compute_interp(fine.nodes(), coarse.nodes());
        for (i, &t) in fine.nodes().iter().enumerate() {
            let v: f64 = coarse.nodes().iter().enumerate().map(|(j, &s)| mat[[i, j]] * f(s)).sum();
            prop_assert!((v - f(t)).abs() < 1e-11);
        }
    }
}

// ── State Properties ─────────────────────────────────────────────────

proptest! {
    /// zero() then norm0() is always zero.
    #[test]
    fn zero_then_norm_is_zero(data in prop::collection::vec(-1e6f64..1e6, 1..64)) {
        let mut v = DenseVector::from_vec(data);
        v.zero();
        prop_assert_eq!(v.norm0(), 0.0);
    }

    /// copy(x) then saxpy(-1, x) cancels exactly.
    #[test]
    fn copy_saxpy_cancels(n in 1usize..64, seed in values(64)) {
        let factory = StateFactory::new(n, Precision::Double).unwrap();
        let x: EncapState = DenseVector::from_vec(seed[..n].to_vec()).into();
        let mut y = factory.create(EncapType::Solution).unwrap();
        y.copy(&x).unwrap();
        y.saxpy(-1.0, &x).unwrap();
        prop_assert_eq!(y.norm0(), 0.0);
    }

    /// norm0 is the largest absolute element.
    #[test]
    fn norm0_is_max_abs(data in prop::collection::vec(-1e6f64..1e6, 1..64)) {
        let expected = data.iter().fold(0.0f64, |a, v| a.max(v.abs()));
        prop_assert_eq!(DenseVector::from_vec(data).norm0(), expected);
    }

    /// A NaN anywhere makes norm0 NaN.
    #[test]
    fn norm0_propagates_nan(mut data in prop::collection::vec(-1e6f64..1e6, 1..64), at in any::<prop::sample::Index>()) {
        let i = at.index(data.len());
        data[i] = f64::NAN;
        prop_assert!(DenseVector::from_vec(data).norm0().is_nan());
    }

    /// Identity mat_apply reproduces the sources in the destinations.
    #[test]
    fn mat_apply_identity_copies(nodes in 1usize..6, n in 1usize..32, seed in values(6 * 32)) {
        let src: Vec<DenseVector<f64>> = (0..nodes)
            .map(|k| DenseVector::from_vec(seed[k * n..(k + 1) * n].to_vec()))
            .collect();
        let mut dst: Vec<DenseVector<f64>> = (0..nodes)
            .map(|_| DenseVector::from_vec(vec![42.0; n]))
            .collect();
        DenseVector::mat_apply(&mut dst, 1.0, &Array2::eye(nodes), &src, true).unwrap();
        prop_assert_eq!(dst, src);
    }

    /// mat_apply agrees with per-row saxpy accumulation.
    #[test]
    fn mat_apply_matches_saxpy(a in -2.0f64..2.0, n in 1usize..16, seed in values(3 * 16), coeffs in values(6)) {
        let src: Vec<DenseVector<f64>> = (0..3)
            .map(|k| DenseVector::from_vec(seed[k * n..(k + 1) * n].to_vec()))
            .collect();
        let mat = Array2::from_shape_vec((2, 3), coeffs).unwrap();

        let mut dst = vec![DenseVector::zeros(n).unwrap(), DenseVector::zeros(n).unwrap()];
        DenseVector::mat_apply(&mut dst, a, &mat, &src, true).unwrap();

        for (row, d) in dst.iter().enumerate() {
            let mut expected = DenseVector::zeros(n).unwrap();
            for (col, s) in src.iter().enumerate() {
                expected.saxpy(a * mat[[row, col]], s).unwrap();
            }
            for i in 0..n {
                let scale = 1.0 + expected[i].abs();
                prop_assert!((d[i] - expected[i]).abs() <= 1e-9 * scale);
            }
        }
    }

    /// saxpy against a differently sized state fails and leaves the target alone.
    #[test]
    fn saxpy_size_mismatch_rejected(n in 1usize..32, m in 1usize..32) {
        prop_assume!(n != m);
        let mut y = DenseVector::from_vec(vec![1.0; n]);
        let x = DenseVector::from_vec(vec![1.0; m]);
        let is_size_mismatch = matches!(y.saxpy(1.0, &x), Err(SdcError::SizeMismatch { .. }));
        prop_assert!(is_size_mismatch);
        let expected = vec![1.0; n];
        prop_assert_eq!(y.as_slice(), expected.as_slice());
    }
}

// ─────────────────────────────────────────────────────────────────────
// SDC Core — Lagrange Interpolation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Lagrange interpolation matrices between two node sets.
//!
//! Used to transfer per-node values between collocation sets of different
//! size or family, and as the coefficient matrix for `mat_apply`.

use ndarray::Array2;
use sdc_types::constants::INTERP_ZERO_THRESHOLD;

/// Interpolation matrix mapping values at `src` onto `dst`.
///
/// Entry `(i, j)` is the Lagrange basis polynomial of source node `j`
/// evaluated at destination node `i`:
///   L_j(dst_i) = prod_{k != j} (dst_i - src_k) / (src_j - src_k)
///
/// Entries below [`INTERP_ZERO_THRESHOLD`] in magnitude are set to zero.
/// Source nodes must be pairwise distinct.
pub fn compute_interp(dst: &[f64], src: &[f64]) -> Array2<f64> {
    let ndst = dst.len();
    let nsrc = src.len();
    let mut mat = Array2::zeros((ndst, nsrc));

    for (i, &x) in dst.iter().enumerate() {
        for (j, &xj) in src.iter().enumerate() {
            let mut num = 1.0;
            let mut den = 1.0;
            for (k, &xk) in src.iter().enumerate() {
                if k == j {
                    continue;
                }
                num *= x - xk;
                den *= xj - xk;
            }
            let value = num / den;
            if value.abs() > INTERP_ZERO_THRESHOLD {
                mat[[i, j]] = value;
            }
        }
    }

    mat
}

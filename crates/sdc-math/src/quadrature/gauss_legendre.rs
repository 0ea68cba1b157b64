// ─────────────────────────────────────────────────────────────────────
// SDC Core — Gauss-Legendre Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gauss-Legendre nodes: roots of P_m mapped to (0, 1). Neither endpoint
//! is a node.

use sdc_types::error::SdcResult;
use sdc_types::tags::QuadratureType;

use super::{check_num_nodes, QuadratureMatrices, QuadratureRule};
use crate::legendre::{legendre, legendre_roots};

#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendre {
    matrices: QuadratureMatrices,
}

impl GaussLegendre {
    pub fn new(num_nodes: usize) -> SdcResult<Self> {
        check_num_nodes(QuadratureType::GaussLegendre, num_nodes)?;
        tracing::debug!(num_nodes, "building Gauss-Legendre quadrature");
        let (points, _) = reference_rule(num_nodes);
        let nodes = points.into_iter().map(|r| 0.5 * (r + 1.0)).collect();
        Ok(GaussLegendre {
            matrices: QuadratureMatrices::from_nodes(nodes),
        })
    }
}

impl QuadratureRule for GaussLegendre {
    fn quadrature_type(&self) -> QuadratureType {
        QuadratureType::GaussLegendre
    }

    fn matrices(&self) -> &QuadratureMatrices {
        &self.matrices
    }

    fn left_is_node(&self) -> bool {
        false
    }

    fn right_is_node(&self) -> bool {
        false
    }
}

/// Gauss-Legendre points and weights on the reference interval [-1, 1]:
///   w_k = 2 / ((1 - x_k^2) P_n'(x_k)^2)
pub(super) fn reference_rule(n: usize) -> (Vec<f64>, Vec<f64>) {
    let points = legendre_roots(n);
    let weights = points
        .iter()
        .map(|&x| {
            let (_, d) = legendre(n, x);
            2.0 / ((1.0 - x * x) * d * d)
        })
        .collect();
    (points, weights)
}

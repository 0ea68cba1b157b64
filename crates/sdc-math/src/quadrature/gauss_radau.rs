// ─────────────────────────────────────────────────────────────────────
// SDC Core — Gauss-Radau Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Right Gauss-Radau nodes: the roots of P_m + P_{m-1} reflected onto
//! (0, 1], so t = 1 is a node and t = 0 is not.

use sdc_types::error::SdcResult;
use sdc_types::tags::QuadratureType;

use super::{check_num_nodes, QuadratureMatrices, QuadratureRule};
use crate::legendre::radau_roots;

#[derive(Debug, Clone, PartialEq)]
pub struct GaussRadau {
    matrices: QuadratureMatrices,
}

impl GaussRadau {
    pub fn new(num_nodes: usize) -> SdcResult<Self> {
        check_num_nodes(QuadratureType::GaussRadau, num_nodes)?;
        tracing::debug!(num_nodes, "building Gauss-Radau quadrature");

        // The remaining root, x = -1, maps onto the right endpoint.
        let roots = radau_roots(num_nodes);
        let mut nodes: Vec<f64> = roots
            .iter()
            .rev()
            .map(|r| 1.0 - 0.5 * (1.0 + r))
            .collect();
        nodes.push(1.0);

        Ok(GaussRadau {
            matrices: QuadratureMatrices::from_nodes(nodes),
        })
    }
}

impl QuadratureRule for GaussRadau {
    fn quadrature_type(&self) -> QuadratureType {
        QuadratureType::GaussRadau
    }

    fn matrices(&self) -> &QuadratureMatrices {
        &self.matrices
    }

    fn left_is_node(&self) -> bool {
        false
    }

    fn right_is_node(&self) -> bool {
        true
    }
}

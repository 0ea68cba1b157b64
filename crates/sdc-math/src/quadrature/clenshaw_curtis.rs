// ─────────────────────────────────────────────────────────────────────
// SDC Core — Clenshaw-Curtis Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Clenshaw-Curtis nodes: Chebyshev extrema mapped to [0, 1],
//!   t_j = (1 - cos(j pi / (m - 1))) / 2.

use std::f64::consts::PI;

use sdc_types::error::SdcResult;
use sdc_types::tags::QuadratureType;

use super::{check_num_nodes, QuadratureMatrices, QuadratureRule};

#[derive(Debug, Clone, PartialEq)]
pub struct ClenshawCurtis {
    matrices: QuadratureMatrices,
}

impl ClenshawCurtis {
    pub fn new(num_nodes: usize) -> SdcResult<Self> {
        check_num_nodes(QuadratureType::ClenshawCurtis, num_nodes)?;
        tracing::debug!(num_nodes, "building Clenshaw-Curtis quadrature");

        let last = (num_nodes - 1) as f64;
        let mut nodes: Vec<f64> = (0..num_nodes)
            .map(|j| 0.5 * (1.0 - (j as f64 * PI / last).cos()))
            .collect();
        // Pin the endpoints; cos(pi) rounding must not move them.
        nodes[0] = 0.0;
        nodes[num_nodes - 1] = 1.0;

        Ok(ClenshawCurtis {
            matrices: QuadratureMatrices::from_nodes(nodes),
        })
    }
}

impl QuadratureRule for ClenshawCurtis {
    fn quadrature_type(&self) -> QuadratureType {
        QuadratureType::ClenshawCurtis
    }

    fn matrices(&self) -> &QuadratureMatrices {
        &self.matrices
    }

    fn left_is_node(&self) -> bool {
        true
    }

    fn right_is_node(&self) -> bool {
        true
    }
}

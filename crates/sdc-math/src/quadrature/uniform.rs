// ─────────────────────────────────────────────────────────────────────
// SDC Core — Uniform Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Equidistant nodes including both endpoints, t_j = j / (m - 1).

use sdc_types::error::SdcResult;
use sdc_types::tags::QuadratureType;

use super::{check_num_nodes, QuadratureMatrices, QuadratureRule};

#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    matrices: QuadratureMatrices,
}

impl Uniform {
    pub fn new(num_nodes: usize) -> SdcResult<Self> {
        check_num_nodes(QuadratureType::Uniform, num_nodes)?;
        tracing::debug!(num_nodes, "building uniform quadrature");

        let last = (num_nodes - 1) as f64;
        let nodes = (0..num_nodes).map(|j| j as f64 / last).collect();

        Ok(Uniform {
            matrices: QuadratureMatrices::from_nodes(nodes),
        })
    }
}

impl QuadratureRule for Uniform {
    fn quadrature_type(&self) -> QuadratureType {
        QuadratureType::Uniform
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

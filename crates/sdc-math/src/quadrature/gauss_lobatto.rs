// ─────────────────────────────────────────────────────────────────────
// SDC Core — Gauss-Lobatto Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gauss-Lobatto nodes: both endpoints plus the roots of P'_{m-1}.

use sdc_types::error::SdcResult;
use sdc_types::tags::QuadratureType;

use super::{check_num_nodes, QuadratureMatrices, QuadratureRule};
use crate::legendre::legendre_derivative_roots;

#[derive(Debug, Clone, PartialEq)]
pub struct GaussLobatto {
    matrices: QuadratureMatrices,
}

impl GaussLobatto {
    pub fn new(num_nodes: usize) -> SdcResult<Self> {
        check_num_nodes(QuadratureType::GaussLobatto, num_nodes)?;
        tracing::debug!(num_nodes, "building Gauss-Lobatto quadrature");

        let interior = legendre_derivative_roots(num_nodes - 1);
        let mut nodes = Vec::with_capacity(num_nodes);
        nodes.push(0.0);
        nodes.extend(interior.into_iter().map(|r| 0.5 * (r + 1.0)));
        nodes.push(1.0);

        Ok(GaussLobatto {
            matrices: QuadratureMatrices::from_nodes(nodes),
        })
    }
}

impl QuadratureRule for GaussLobatto {
    fn quadrature_type(&self) -> QuadratureType {
        QuadratureType::GaussLobatto
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

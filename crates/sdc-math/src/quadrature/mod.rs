// ─────────────────────────────────────────────────────────────────────
// SDC Core — Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Quadrature nodes, weights and integration matrices on [0, 1].
//!
//! Every family produces its node set and then shares the same
//! construction of the integration matrices from the Lagrange basis:
//! - `q_mat[i, j]`: integral from 0 to node i of basis polynomial j
//! - `s_mat[i, j]`: integral from node i-1 to node i (from 0 for i = 0)
//! - `q_vec[j]`:    integral from 0 to 1 of basis polynomial j (weights)
//!
//! Rules are immutable after construction and deterministic in the node
//! count, so a single rule can be shared across all time steps.

mod clenshaw_curtis;
mod gauss_legendre;
mod gauss_lobatto;
mod gauss_radau;
mod uniform;

pub use clenshaw_curtis::ClenshawCurtis;
pub use gauss_legendre::GaussLegendre;
pub use gauss_lobatto::GaussLobatto;
pub use gauss_radau::GaussRadau;
pub use uniform::Uniform;

use ndarray::Array2;
use sdc_types::config::SdcConfig;
use sdc_types::error::{SdcError, SdcResult};
use sdc_types::tags::QuadratureType;

use crate::interp::compute_interp;
use gauss_legendre::reference_rule;

/// Node set and the matrices derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureMatrices {
    nodes: Vec<f64>,
    q_mat: Array2<f64>,
    s_mat: Array2<f64>,
    q_vec: Vec<f64>,
    b_mat: Array2<f64>,
    delta_nodes: Vec<f64>,
}

impl QuadratureMatrices {
    /// Build all matrices for a strictly increasing node set in [0, 1].
    ///
    /// Basis polynomials are evaluated in product form and integrated with
    /// a Gauss-Legendre rule that is exact for their degree.
    pub fn from_nodes(nodes: Vec<f64>) -> Self {
        let m = nodes.len();
        let (ref_points, ref_weights) = reference_rule(m / 2 + 1);

        let mut q_mat = Array2::zeros((m, m));
        for (i, &upper) in nodes.iter().enumerate() {
            let row = integrate_basis(&nodes, upper, &ref_points, &ref_weights);
            for (j, v) in row.into_iter().enumerate() {
                q_mat[[i, j]] = v;
            }
        }
        let q_vec = integrate_basis(&nodes, 1.0, &ref_points, &ref_weights);

        let mut s_mat = q_mat.clone();
        for i in (1..m).rev() {
            for j in 0..m {
                s_mat[[i, j]] -= q_mat[[i - 1, j]];
            }
        }

        let mut b_mat = Array2::zeros((1, m));
        for (j, &w) in q_vec.iter().enumerate() {
            b_mat[[0, j]] = w;
        }

        let mut delta_nodes = vec![0.0; m];
        for i in 0..m {
            delta_nodes[i] = if i == 0 {
                nodes[0]
            } else {
                nodes[i] - nodes[i - 1]
            };
        }

        QuadratureMatrices {
            nodes,
            q_mat,
            s_mat,
            q_vec,
            b_mat,
            delta_nodes,
        }
    }
}

/// Integral from 0 to `upper` of every Lagrange basis polynomial of `nodes`.
fn integrate_basis(nodes: &[f64], upper: f64, ref_points: &[f64], ref_weights: &[f64]) -> Vec<f64> {
    let half = 0.5 * upper;
    let points: Vec<f64> = ref_points.iter().map(|&x| half * (x + 1.0)).collect();
    let basis = compute_interp(&points, nodes);
    (0..nodes.len())
        .map(|j| {
            half * ref_weights
                .iter()
                .enumerate()
                .map(|(k, &w)| w * basis[[k, j]])
                .sum::<f64>()
        })
        .collect()
}

/// Shared read-only interface over every quadrature family.
pub trait QuadratureRule {
    fn quadrature_type(&self) -> QuadratureType;

    fn matrices(&self) -> &QuadratureMatrices;

    /// Whether t = 0 is one of the nodes.
    fn left_is_node(&self) -> bool;

    /// Whether t = 1 is one of the nodes.
    fn right_is_node(&self) -> bool;

    fn num_nodes(&self) -> usize {
        self.matrices().nodes.len()
    }

    fn nodes(&self) -> &[f64] {
        &self.matrices().nodes
    }

    /// Full-interval weights; sum to one.
    fn weights(&self) -> &[f64] {
        &self.matrices().q_vec
    }

    fn q_mat(&self) -> &Array2<f64> {
        &self.matrices().q_mat
    }

    fn s_mat(&self) -> &Array2<f64> {
        &self.matrices().s_mat
    }

    /// Weights as a 1 x m matrix, for use with `mat_apply`.
    fn b_mat(&self) -> &Array2<f64> {
        &self.matrices().b_mat
    }

    fn delta_nodes(&self) -> &[f64] {
        &self.matrices().delta_nodes
    }
}

/// Reject node counts below the family minimum.
fn check_num_nodes(qtype: QuadratureType, num_nodes: usize) -> SdcResult<()> {
    let min = qtype.min_nodes();
    if num_nodes < min {
        tracing::warn!(family = %qtype, num_nodes, "node count below family minimum");
        return Err(SdcError::InvalidConfiguration(format!(
            "{qtype} quadrature requires at least {min} nodes, got {num_nodes}"
        )));
    }
    Ok(())
}

/// Rule handle returned by [`quadrature_factory`].
#[derive(Debug, Clone, PartialEq)]
pub enum Quadrature {
    GaussLegendre(GaussLegendre),
    GaussLobatto(GaussLobatto),
    GaussRadau(GaussRadau),
    ClenshawCurtis(ClenshawCurtis),
    Uniform(Uniform),
}

impl Quadrature {
    pub fn from_config(config: &SdcConfig) -> SdcResult<Self> {
        quadrature_factory(config.num_nodes, config.quadrature_type)
    }

    fn rule(&self) -> &dyn QuadratureRule {
        match self {
            Quadrature::GaussLegendre(q) => q,
            Quadrature::GaussLobatto(q) => q,
            Quadrature::GaussRadau(q) => q,
            Quadrature::ClenshawCurtis(q) => q,
            Quadrature::Uniform(q) => q,
        }
    }
}

impl QuadratureRule for Quadrature {
    fn quadrature_type(&self) -> QuadratureType {
        self.rule().quadrature_type()
    }

    fn matrices(&self) -> &QuadratureMatrices {
        self.rule().matrices()
    }

    fn left_is_node(&self) -> bool {
        self.rule().left_is_node()
    }

    fn right_is_node(&self) -> bool {
        self.rule().right_is_node()
    }
}

/// Construct the rule of family `qtype` with `num_nodes` nodes.
pub fn quadrature_factory(num_nodes: usize, qtype: QuadratureType) -> SdcResult<Quadrature> {
    tracing::trace!(family = %qtype, num_nodes, "quadrature factory dispatch");
    let rule = match qtype {
        QuadratureType::GaussLegendre => Quadrature::GaussLegendre(GaussLegendre::new(num_nodes)?),
        QuadratureType::GaussLobatto => Quadrature::GaussLobatto(GaussLobatto::new(num_nodes)?),
        QuadratureType::GaussRadau => Quadrature::GaussRadau(GaussRadau::new(num_nodes)?),
        QuadratureType::ClenshawCurtis => {
            Quadrature::ClenshawCurtis(ClenshawCurtis::new(num_nodes)?)
        }
        QuadratureType::Uniform => Quadrature::Uniform(Uniform::new(num_nodes)?),
    };
    Ok(rule)
}

/// Nodes of family `qtype` with `num_nodes` nodes.
pub fn compute_nodes(num_nodes: usize, qtype: QuadratureType) -> SdcResult<Vec<f64>> {
    Ok(quadrature_factory(num_nodes, qtype)?.nodes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_dispatches_every_family() {
        for qtype in QuadratureType::ALL {
            let q = quadrature_factory(4, qtype).unwrap();
            assert_eq!(q.quadrature_type(), qtype);
            assert_eq!(q.num_nodes(), 4);
        }
    }

    #[test]
    fn test_zero_nodes_rejected_for_every_family() {
        for qtype in QuadratureType::ALL {
            match quadrature_factory(0, qtype) {
                Err(SdcError::InvalidConfiguration(msg)) => assert!(msg.contains(qtype.as_str())),
                other => panic!("{qtype}: expected InvalidConfiguration, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_s_mat_rows_accumulate_to_q_mat() {
        let q = quadrature_factory(5, QuadratureType::GaussRadau).unwrap();
        let (s, qm) = (q.s_mat(), q.q_mat());
        for j in 0..5 {
            let mut acc = 0.0;
            for i in 0..5 {
                acc += s[[i, j]];
                assert!((acc - qm[[i, j]]).abs() < 1e-13);
            }
        }
    }

    #[test]
    fn test_q_mat_integrates_polynomials() {
        // Row i of q_mat applied to t^2 gives nodes[i]^3 / 3.
        let q = quadrature_factory(4, QuadratureType::GaussLobatto).unwrap();
        let nodes = q.nodes();
        for i in 0..4 {
            let integral: f64 = (0..4).map(|j| q.q_mat()[[i, j]] * nodes[j] * nodes[j]).sum();
            assert!((integral - nodes[i].powi(3) / 3.0).abs() < 1e-13);
        }
    }

    #[test]
    fn test_last_q_row_matches_weights_when_right_is_node() {
        for qtype in [QuadratureType::GaussLobatto, QuadratureType::GaussRadau] {
            let q = quadrature_factory(4, qtype).unwrap();
            assert!(q.right_is_node());
            for j in 0..4 {
                assert!((q.q_mat()[[3, j]] - q.weights()[j]).abs() < 1e-13);
                assert_eq!(q.b_mat()[[0, j]], q.weights()[j]);
            }
        }
    }

    #[test]
    fn test_delta_nodes_sum_to_last_node() {
        let q = quadrature_factory(5, QuadratureType::ClenshawCurtis).unwrap();
        let total: f64 = q.delta_nodes().iter().sum();
        assert!((total - q.nodes()[4]).abs() < 1e-15);
        assert_eq!(q.delta_nodes()[0], q.nodes()[0]);
    }

    #[test]
    fn test_from_config() {
        let cfg = SdcConfig::new(3, QuadratureType::GaussLegendre, 8);
        let q = Quadrature::from_config(&cfg).unwrap();
        assert_eq!(q.quadrature_type(), QuadratureType::GaussLegendre);
        assert_eq!(compute_nodes(3, QuadratureType::GaussLegendre).unwrap(), q.nodes());
    }
}

// ─────────────────────────────────────────────────────────────────────
// SDC Core — Tags
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed tag sets used for dispatch: quadrature families, state kinds and
//! state precision.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SdcError, SdcResult};

/// Quadrature node family. The set is closed: every tag maps to exactly one
/// node-generation strategy in `sdc-math`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuadratureType {
    GaussLegendre,
    GaussLobatto,
    GaussRadau,
    ClenshawCurtis,
    Uniform,
}

impl QuadratureType {
    pub const ALL: [QuadratureType; 5] = [
        QuadratureType::GaussLegendre,
        QuadratureType::GaussLobatto,
        QuadratureType::GaussRadau,
        QuadratureType::ClenshawCurtis,
        QuadratureType::Uniform,
    ];

    /// String identifier used by the option surface.
    pub fn as_str(self) -> &'static str {
        match self {
            QuadratureType::GaussLegendre => "gauss-legendre",
            QuadratureType::GaussLobatto => "gauss-lobatto",
            QuadratureType::GaussRadau => "gauss-radau",
            QuadratureType::ClenshawCurtis => "clenshaw-curtis",
            QuadratureType::Uniform => "uniform",
        }
    }

    /// Smallest node count for which the family is defined.
    pub fn min_nodes(self) -> usize {
        match self {
            QuadratureType::GaussLegendre => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for QuadratureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuadratureType {
    type Err = SdcError;

    fn from_str(s: &str) -> SdcResult<Self> {
        QuadratureType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SdcError::InvalidConfiguration(format!("Quadrature type '{s}' not known")))
    }
}

/// Role of a state within the sweeper. Opaque to the numerical core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncapType {
    #[default]
    Solution,
    Function,
}

/// Scalar precision of a dense state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Precision {
    #[default]
    #[serde(rename = "f64")]
    Double,
    #[serde(rename = "f32")]
    Single,
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Double => f.write_str("f64"),
            Precision::Single => f.write_str("f32"),
        }
    }
}

impl FromStr for Precision {
    type Err = SdcError;

    fn from_str(s: &str) -> SdcResult<Self> {
        match s {
            "f64" | "double" => Ok(Precision::Double),
            "f32" | "single" => Ok(Precision::Single),
            other => Err(SdcError::InvalidConfiguration(format!(
                "Precision '{other}' not known"
            ))),
        }
    }
}

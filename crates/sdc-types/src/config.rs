// ─────────────────────────────────────────────────────────────────────
// SDC Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_NUM_NODES;
use crate::error::{SdcError, SdcResult};
use crate::tags::{Precision, QuadratureType};

/// Option name holding the number of collocation nodes.
pub const OPT_NUM_NODES: &str = "num_nodes";
/// Option name holding the quadrature family identifier.
pub const OPT_NODES_TYPE: &str = "nodes_type";
/// Option name holding the number of degrees of freedom per state.
pub const OPT_NUM_DOFS: &str = "num_dofs";
/// Option name holding the state precision.
pub const OPT_PRECISION: &str = "precision";

/// Already-resolved option lookup (name → raw string value).
///
/// Command-line and file parsing happen upstream; this only turns the
/// resolved strings into typed values.
#[derive(Debug, Clone, Default)]
pub struct OptionMap {
    values: HashMap<String, String>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Quadrature family stored under `name`. Missing or unknown values fail.
    pub fn get_quadrature_type(&self, name: &str) -> SdcResult<QuadratureType> {
        self.require(name)?.parse()
    }

    /// Like [`Self::get_quadrature_type`], but an absent option yields
    /// `default`. A present but unknown value is still an error.
    pub fn get_quadrature_type_or(
        &self,
        name: &str,
        default: QuadratureType,
    ) -> SdcResult<QuadratureType> {
        match self.get(name) {
            Some(raw) => raw.parse(),
            None => Ok(default),
        }
    }

    pub fn get_usize(&self, name: &str) -> SdcResult<usize> {
        parse_usize(name, self.require(name)?)
    }

    pub fn get_usize_or(&self, name: &str, default: usize) -> SdcResult<usize> {
        match self.get(name) {
            Some(raw) => parse_usize(name, raw),
            None => Ok(default),
        }
    }

    fn require(&self, name: &str) -> SdcResult<&str> {
        self.get(name)
            .ok_or_else(|| SdcError::InvalidConfiguration(format!("Option '{name}' not set")))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OptionMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

fn parse_usize(name: &str, raw: &str) -> SdcResult<usize> {
    raw.trim().parse().map_err(|e| {
        SdcError::InvalidConfiguration(format!("Option '{name}' = '{raw}' is not a count: {e}"))
    })
}

/// Collocation setup for one time level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdcConfig {
    #[serde(default = "default_num_nodes")]
    pub num_nodes: usize,
    #[serde(default = "default_quadrature_type")]
    pub quadrature_type: QuadratureType,
    pub degrees_of_freedom: usize,
    #[serde(default)]
    pub precision: Precision,
}

fn default_num_nodes() -> usize {
    DEFAULT_NUM_NODES
}
fn default_quadrature_type() -> QuadratureType {
    QuadratureType::GaussLobatto
}

impl SdcConfig {
    pub fn new(num_nodes: usize, quadrature_type: QuadratureType, degrees_of_freedom: usize) -> Self {
        SdcConfig {
            num_nodes,
            quadrature_type,
            degrees_of_freedom,
            precision: Precision::default(),
        }
    }

    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> SdcResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::debug!(path, ?config, "loaded SDC configuration");
        Ok(config)
    }

    /// Build from resolved options. `num_dofs` is required, the rest default.
    pub fn from_options(options: &OptionMap) -> SdcResult<Self> {
        let precision = match options.get(OPT_PRECISION) {
            Some(raw) => raw.parse()?,
            None => Precision::default(),
        };
        let config = SdcConfig {
            num_nodes: options.get_usize_or(OPT_NUM_NODES, default_num_nodes())?,
            quadrature_type: options
                .get_quadrature_type_or(OPT_NODES_TYPE, default_quadrature_type())?,
            degrees_of_freedom: options.get_usize(OPT_NUM_DOFS)?,
            precision,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SdcResult<()> {
        let min = self.quadrature_type.min_nodes();
        if self.num_nodes < min {
            tracing::warn!(
                num_nodes = self.num_nodes,
                family = %self.quadrature_type,
                "rejecting configuration below family minimum"
            );
            return Err(SdcError::InvalidConfiguration(format!(
                "{} quadrature requires at least {min} nodes, got {}",
                self.quadrature_type, self.num_nodes
            )));
        }
        if self.degrees_of_freedom == 0 {
            return Err(SdcError::InvalidConfiguration(
                "degrees_of_freedom must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

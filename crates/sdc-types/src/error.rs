// ─────────────────────────────────────────────────────────────────────
// SDC Core — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdcError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("State variant mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("State size mismatch: expected {expected} degrees of freedom, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("Failed to allocate state with {requested} degrees of freedom")]
    ResourceExhaustion { requested: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SdcResult<T> = Result<T, SdcError>;

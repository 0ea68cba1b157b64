// ─────────────────────────────────────────────────────────────────────
// SDC Core — SDC Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared types for the SDC numerical core: errors, tags, constants and
//! the configuration surface consumed by the quadrature and state layers.

pub mod config;
pub mod constants;
pub mod error;
pub mod tags;

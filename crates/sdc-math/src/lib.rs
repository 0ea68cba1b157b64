// ─────────────────────────────────────────────────────────────────────
// SDC Core — SDC Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Numerical primitives for spectral deferred correction: quadrature
//! rules on [0, 1], Lagrange interpolation matrices and the solver state
//! containers that integration matrices are applied to.

pub mod encap;
pub mod interp;
pub mod legendre;
pub mod quadrature;

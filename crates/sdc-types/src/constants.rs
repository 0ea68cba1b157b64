// ─────────────────────────────────────────────────────────────────────
// SDC Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Lagrange basis values below this magnitude are clamped to exactly zero
/// when building interpolation matrices.
pub const INTERP_ZERO_THRESHOLD: f64 = 1e-32;

/// Newton iteration on Legendre roots stops once a step is this small.
pub const ROOT_TOLERANCE: f64 = 1e-15;

/// Iteration cap of the Newton root refinement.
pub const ROOT_MAX_ITERATIONS: usize = 100;

/// Default number of collocation nodes per time step.
pub const DEFAULT_NUM_NODES: usize = 3;

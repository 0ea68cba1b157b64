// ─────────────────────────────────────────────────────────────────────
// SDC Core — Encapsulation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Solver state containers ("encapsulations").
//!
//! A sweeper keeps one state per collocation node and only talks to them
//! through [`Encapsulation`]: zero, copy, saxpy, the batched `mat_apply`
//! and the max norm. Two layers implement it:
//! - [`DenseVector<T>`]: a fixed-length vector, statically typed, so
//!   variant mismatches cannot compile;
//! - [`EncapState`]: a closed set of dense variants chosen at run time,
//!   where mixing variants fails with `SdcError::TypeMismatch`.

mod state;
mod vector;

pub use state::{EncapState, StateFactory, StateScalar};
pub use vector::{DenseVector, VectorFactory};

use std::fmt::Debug;

use ndarray::Array2;
use num_traits::{Float, NumAssign};
use sdc_types::error::{SdcError, SdcResult};
use sdc_types::tags::EncapType;

/// Scalar type stored in a dense state. Time-level quantities (`a`,
/// matrix entries, norms) stay in `f64`.
pub trait Scalar: Float + NumAssign + Debug + Send + Sync + 'static {
    /// Name of the dense variant holding this scalar, for error messages.
    const DENSE_NAME: &'static str;

    fn from_time(t: f64) -> Self;

    fn to_time(self) -> f64;
}

impl Scalar for f64 {
    const DENSE_NAME: &'static str = "DenseVector<f64>";

    #[inline]
    fn from_time(t: f64) -> Self {
        t
    }

    #[inline]
    fn to_time(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    const DENSE_NAME: &'static str = "DenseVector<f32>";

    #[inline]
    fn from_time(t: f64) -> Self {
        t as f32
    }

    #[inline]
    fn to_time(self) -> f64 {
        f64::from(self)
    }
}

/// In-place numeric operations a sweeper needs from a state.
pub trait Encapsulation: Sized {
    /// Degrees of freedom; fixed at construction.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the concrete variant, used in mismatch errors.
    fn variant_name(&self) -> &'static str;

    /// Set every element to zero.
    fn zero(&mut self);

    /// Overwrite with the elements of `src`.
    fn copy(&mut self, src: &Self) -> SdcResult<()>;

    /// `self[i] += a * x[i]` for every i.
    fn saxpy(&mut self, a: f64, x: &Self) -> SdcResult<()>;

    /// Maximum absolute element; zero for an empty state.
    fn norm0(&self) -> f64;

    /// Batched matrix application over node collections:
    ///   dst[n][i] += a * sum_m mat[n, m] * src[m][i]
    /// with every `dst` zeroed first when `zero_first` is set.
    ///
    /// `mat` must be `dst.len() x src.len()` and every state must have the
    /// same length.
    fn mat_apply(
        dst: &mut [Self],
        a: f64,
        mat: &Array2<f64>,
        src: &[Self],
        zero_first: bool,
    ) -> SdcResult<()>;
}

/// Allocates states of a fixed size.
pub trait EncapFactory {
    type State: Encapsulation;

    /// New zero-initialised state.
    fn create(&self, kind: EncapType) -> SdcResult<Self::State>;

    /// Degrees of freedom of every state this factory creates.
    fn dofs(&self) -> usize;

    /// One state per collocation node.
    fn create_many(&self, kind: EncapType, count: usize) -> SdcResult<Vec<Self::State>> {
        (0..count).map(|_| self.create(kind)).collect()
    }
}

pub(crate) fn check_size(expected: usize, found: usize) -> SdcResult<()> {
    if expected != found {
        return Err(SdcError::SizeMismatch { expected, found });
    }
    Ok(())
}

pub(crate) fn check_mat_shape(mat: &Array2<f64>, ndst: usize, nsrc: usize) -> SdcResult<()> {
    if mat.dim() != (ndst, nsrc) {
        let (rows, cols) = mat.dim();
        return Err(SdcError::InvalidConfiguration(format!(
            "mat_apply matrix is {rows}x{cols}, expected {ndst}x{nsrc} for {ndst} destination and {nsrc} source states"
        )));
    }
    Ok(())
}

/// Kernel shared by every dense variant. Loops over degrees of freedom
/// outermost so each dof is visited once for all destination states.
pub(crate) fn mat_apply_dense<T: Scalar>(
    dst: &mut [&mut [T]],
    a: f64,
    mat: &Array2<f64>,
    src: &[&[T]],
    zero_first: bool,
) -> SdcResult<()> {
    check_mat_shape(mat, dst.len(), src.len())?;
    let Some(ndofs) = dst.first().map(|d| d.len()) else {
        return Ok(());
    };
    for d in dst.iter() {
        check_size(ndofs, d.len())?;
    }
    for s in src {
        check_size(ndofs, s.len())?;
    }

    if zero_first {
        for d in dst.iter_mut() {
            d.fill(T::zero());
        }
    }

    let coeffs = mat.mapv(|v| T::from_time(a * v));
    for i in 0..ndofs {
        for (n, d) in dst.iter_mut().enumerate() {
            let mut acc = T::zero();
            for (m, s) in src.iter().enumerate() {
                acc += coeffs[[n, m]] * s[i];
            }
            d[i] += acc;
        }
    }
    Ok(())
}

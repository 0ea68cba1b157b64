// ─────────────────────────────────────────────────────────────────────
// SDC Core — Encapsulated State Variants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Run-time selected dense state variants.

use ndarray::Array2;
use sdc_types::config::SdcConfig;
use sdc_types::error::{SdcError, SdcResult};
use sdc_types::tags::{EncapType, Precision};

use super::{mat_apply_dense, DenseVector, EncapFactory, Encapsulation, Scalar};

/// Closed set of concrete state variants.
#[derive(Debug, Clone, PartialEq)]
pub enum EncapState {
    Double(DenseVector<f64>),
    Single(DenseVector<f32>),
}

/// Scalars that have a matching [`EncapState`] variant.
pub trait StateScalar: Scalar {
    fn view(state: &EncapState) -> Option<&DenseVector<Self>>;

    fn view_mut(state: &mut EncapState) -> Option<&mut DenseVector<Self>>;

    fn wrap(vector: DenseVector<Self>) -> EncapState;
}

impl StateScalar for f64 {
    fn view(state: &EncapState) -> Option<&DenseVector<f64>> {
        match state {
            EncapState::Double(v) => Some(v),
            _ => None,
        }
    }

    fn view_mut(state: &mut EncapState) -> Option<&mut DenseVector<f64>> {
        match state {
            EncapState::Double(v) => Some(v),
            _ => None,
        }
    }

    fn wrap(vector: DenseVector<f64>) -> EncapState {
        EncapState::Double(vector)
    }
}

impl StateScalar for f32 {
    fn view(state: &EncapState) -> Option<&DenseVector<f32>> {
        match state {
            EncapState::Single(v) => Some(v),
            _ => None,
        }
    }

    fn view_mut(state: &mut EncapState) -> Option<&mut DenseVector<f32>> {
        match state {
            EncapState::Single(v) => Some(v),
            _ => None,
        }
    }

    fn wrap(vector: DenseVector<f32>) -> EncapState {
        EncapState::Single(vector)
    }
}

impl From<DenseVector<f64>> for EncapState {
    fn from(v: DenseVector<f64>) -> Self {
        EncapState::Double(v)
    }
}

impl From<DenseVector<f32>> for EncapState {
    fn from(v: DenseVector<f32>) -> Self {
        EncapState::Single(v)
    }
}

impl EncapState {
    pub fn precision(&self) -> Precision {
        match self {
            EncapState::Double(_) => Precision::Double,
            EncapState::Single(_) => Precision::Single,
        }
    }

    /// Borrow as the dense variant over `T`.
    pub fn as_dense<T: StateScalar>(&self) -> SdcResult<&DenseVector<T>> {
        T::view(self).ok_or(SdcError::TypeMismatch {
            expected: T::DENSE_NAME,
            found: self.variant_name(),
        })
    }

    pub fn as_dense_mut<T: StateScalar>(&mut self) -> SdcResult<&mut DenseVector<T>> {
        let found = self.variant_name();
        T::view_mut(self).ok_or(SdcError::TypeMismatch {
            expected: T::DENSE_NAME,
            found,
        })
    }
}

fn mat_apply_as<T: StateScalar>(
    dst: &mut [EncapState],
    a: f64,
    mat: &Array2<f64>,
    src: &[EncapState],
    zero_first: bool,
) -> SdcResult<()> {
    let mut dst_views = dst
        .iter_mut()
        .map(|d| d.as_dense_mut::<T>().map(DenseVector::as_mut_slice))
        .collect::<SdcResult<Vec<_>>>()?;
    let src_views = src
        .iter()
        .map(|s| s.as_dense::<T>().map(DenseVector::as_slice))
        .collect::<SdcResult<Vec<_>>>()?;
    mat_apply_dense(&mut dst_views, a, mat, &src_views, zero_first)
}

impl Encapsulation for EncapState {
    fn len(&self) -> usize {
        match self {
            EncapState::Double(v) => v.len(),
            EncapState::Single(v) => v.len(),
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            EncapState::Double(v) => v.variant_name(),
            EncapState::Single(v) => v.variant_name(),
        }
    }

    fn zero(&mut self) {
        match self {
            EncapState::Double(v) => v.zero(),
            EncapState::Single(v) => v.zero(),
        }
    }

    fn copy(&mut self, src: &Self) -> SdcResult<()> {
        match self {
            EncapState::Double(v) => v.copy(src.as_dense()?),
            EncapState::Single(v) => v.copy(src.as_dense()?),
        }
    }

    fn saxpy(&mut self, a: f64, x: &Self) -> SdcResult<()> {
        match self {
            EncapState::Double(v) => v.saxpy(a, x.as_dense()?),
            EncapState::Single(v) => v.saxpy(a, x.as_dense()?),
        }
    }

    fn norm0(&self) -> f64 {
        match self {
            EncapState::Double(v) => v.norm0(),
            EncapState::Single(v) => v.norm0(),
        }
    }

    /// The variant of the first destination (or source, if there are no
    /// destinations) fixes the variant every other state must match.
    fn mat_apply(
        dst: &mut [Self],
        a: f64,
        mat: &Array2<f64>,
        src: &[Self],
        zero_first: bool,
    ) -> SdcResult<()> {
        let leading = dst.first().or(src.first()).map(EncapState::precision);
        match leading {
            Some(Precision::Single) => mat_apply_as::<f32>(dst, a, mat, src, zero_first),
            Some(Precision::Double) | None => mat_apply_as::<f64>(dst, a, mat, src, zero_first),
        }
    }
}

/// Factory producing [`EncapState`] values of one precision and size.
#[derive(Debug, Clone, Copy)]
pub struct StateFactory {
    size: usize,
    precision: Precision,
}

impl StateFactory {
    pub fn new(size: usize, precision: Precision) -> SdcResult<Self> {
        if size == 0 {
            return Err(SdcError::InvalidConfiguration(
                "states need at least one degree of freedom".to_string(),
            ));
        }
        Ok(StateFactory { size, precision })
    }

    pub fn from_config(config: &SdcConfig) -> SdcResult<Self> {
        Self::new(config.degrees_of_freedom, config.precision)
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }
}

impl EncapFactory for StateFactory {
    type State = EncapState;

    fn create(&self, kind: EncapType) -> SdcResult<EncapState> {
        tracing::trace!(size = self.size, ?kind, precision = %self.precision, "allocating state");
        let state = match self.precision {
            Precision::Double => f64::wrap(DenseVector::zeros(self.size)?),
            Precision::Single => f32::wrap(DenseVector::zeros(self.size)?),
        };
        Ok(state)
    }

    fn dofs(&self) -> usize {
        self.size
    }
}

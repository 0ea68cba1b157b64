// ─────────────────────────────────────────────────────────────────────
// SDC Core — Dense Vector State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Contiguous fixed-length vector state.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use ndarray::Array2;
use sdc_types::error::{SdcError, SdcResult};
use sdc_types::tags::EncapType;

use super::{check_size, mat_apply_dense, EncapFactory, Encapsulation, Scalar};

#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector<T> {
    data: Vec<T>,
}

impl<T: Scalar> DenseVector<T> {
    /// Zero-initialised vector of `size` elements.
    ///
    /// Allocation failure is reported instead of aborting.
    pub fn zeros(size: usize) -> SdcResult<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| SdcError::ResourceExhaustion { requested: size })?;
        data.resize(size, T::zero());
        Ok(DenseVector { data })
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        DenseVector { data }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<usize> for DenseVector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for DenseVector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar> Encapsulation for DenseVector<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn variant_name(&self) -> &'static str {
        T::DENSE_NAME
    }

    fn zero(&mut self) {
        self.data.fill(T::zero());
    }

    fn copy(&mut self, src: &Self) -> SdcResult<()> {
        check_size(self.len(), src.len())?;
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    fn saxpy(&mut self, a: f64, x: &Self) -> SdcResult<()> {
        check_size(self.len(), x.len())?;
        let a = T::from_time(a);
        for (y, &xi) in self.data.iter_mut().zip(&x.data) {
            *y += a * xi;
        }
        Ok(())
    }

    /// Largest absolute element; NaN if any element is NaN.
    fn norm0(&self) -> f64 {
        let mut max = T::zero();
        for v in &self.data {
            if v.is_nan() {
                return f64::NAN;
            }
            max = max.max(v.abs());
        }
        max.to_time()
    }

    fn mat_apply(
        dst: &mut [Self],
        a: f64,
        mat: &Array2<f64>,
        src: &[Self],
        zero_first: bool,
    ) -> SdcResult<()> {
        let mut dst_views: Vec<&mut [T]> = dst.iter_mut().map(|d| d.as_mut_slice()).collect();
        let src_views: Vec<&[T]> = src.iter().map(|s| s.as_slice()).collect();
        mat_apply_dense(&mut dst_views, a, mat, &src_views, zero_first)
    }
}

/// Factory for [`DenseVector<T>`] states of a fixed size.
#[derive(Debug, Clone, Copy)]
pub struct VectorFactory<T> {
    size: usize,
    _scalar: PhantomData<T>,
}

impl<T: Scalar> VectorFactory<T> {
    pub fn new(size: usize) -> SdcResult<Self> {
        if size == 0 {
            return Err(SdcError::InvalidConfiguration(
                "vector states need at least one degree of freedom".to_string(),
            ));
        }
        Ok(VectorFactory {
            size,
            _scalar: PhantomData,
        })
    }
}

impl<T: Scalar> EncapFactory for VectorFactory<T> {
    type State = DenseVector<T>;

    fn create(&self, kind: EncapType) -> SdcResult<DenseVector<T>> {
        tracing::trace!(size = self.size, ?kind, variant = T::DENSE_NAME, "allocating state");
        DenseVector::zeros(self.size)
    }

    fn dofs(&self) -> usize {
        self.size
    }
}

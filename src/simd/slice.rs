//! Slice drivers over the vector primitives.
//!
//! Each operation comes in the same set of strategies:
//!
//! | Method | Strategy |
//! |--------|----------|
//! | `scalar_*` | Plain element loop, the reference result |
//! | `simd_*` | One vector of [`VECTLENSP`](crate::config::VECTLENSP) / [`VECTLENDP`](crate::config::VECTLENDP) lanes at a time, partial vector for the tail |
//! | `par_simd_*` | `simd_*` over [`PARALLEL_CHUNK_SIZE`] chunks on the rayon pool |
//! | `fast_*` | Picks one of the above from the input length |
//!
//! Full vectors move through `from_slice`/`write_to_slice`; the tail goes
//! through `load_partial`/`store_partial`, which zero-fill the unused lanes
//! instead of reading past the end of the slice.
//!
//! # Example
//!
//! ```rust
//! use rvv_hal::simd::{SimdAdd, SimdRint};
//!
//! let a: Vec<f32> = (0..100).map(|i| i as f32 + 0.5).collect();
//! let b = vec![1.0f32; 100];
//!
//! let sum = a.as_slice().fast_add(b.as_slice());
//! assert_eq!(sum[0], 1.5);
//!
//! let rounded = a.as_slice().simd_rint();
//! assert_eq!(rounded[2], 3.0);
//! ```

use crate::error::{index_out_of_bounds, length_mismatch, validation_error, Result};
use crate::simd::lanes::{self, FloatLane};
use crate::simd::{dp, sp};
use crate::{PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD, SIMD_THRESHOLD};
use rayon::prelude::*;

pub trait SimdAdd<Rhs = Self> {
    type Output;

    fn simd_add(self, rhs: Rhs) -> Self::Output;
    fn par_simd_add(self, rhs: Rhs) -> Self::Output;
    fn scalar_add(self, rhs: Rhs) -> Self::Output;

    /// Size-dispatched addition: scalar below [`SIMD_THRESHOLD`], parallel
    /// above [`PARALLEL_SIMD_THRESHOLD`], vectorised in between.
    fn fast_add(self, rhs: Rhs) -> Self::Output;

    /// [`SimdAdd::fast_add`] that reports a length mismatch instead of panicking.
    fn try_simd_add(self, rhs: Rhs) -> Result<Self::Output>;
}

/// Round-to-nearest over a slice with the vector unit's emulated rounding:
/// halfway cases go away from zero and results saturate to the `i32` range.
pub trait SimdRint {
    type Output;

    fn simd_rint(self) -> Self::Output;
    fn par_simd_rint(self) -> Self::Output;
    fn scalar_rint(self) -> Self::Output;
    fn fast_rint(self) -> Self::Output;
}

/// Indexed reads from a slice, one vector of indices at a time.
pub trait SimdGather {
    type Output;

    /// `out[i] = self[indices[i]]`.
    ///
    /// Fails with [`crate::Error::IndexOutOfBounds`] for the first index that is
    /// negative or past the end of `self`; nothing is read in that case.
    fn gather(self, indices: &[i32]) -> Result<Self::Output>;
    fn scalar_gather(self, indices: &[i32]) -> Result<Self::Output>;
}

/// Position and value of the first index outside `0..len`.
#[inline(always)]
fn first_out_of_range(indices: &[i32], len: usize) -> Option<(usize, i32)> {
    indices
        .iter()
        .enumerate()
        .find(|&(_, &index)| index < 0 || index as usize >= len)
        .map(|(lane, &index)| (lane, index))
}

#[inline(always)]
fn check_indices(indices: &[i32], len: usize, max_index: i32) -> Result<()> {
    if let Some((lane, index)) = first_out_of_range(indices, len) {
        log::warn!("gather rejected: index {index} at position {lane} outside 0..{len}");
        return Err(index_out_of_bounds(lane, index, len));
    }

    if let Some(&index) = indices.iter().find(|&&index| index > max_index) {
        log::warn!("gather rejected: index {index} above {max_index}");
        return Err(validation_error(format!(
            "gather index {index} overflows the byte offset"
        )));
    }

    Ok(())
}

#[inline(always)]
fn parallel_chunk_size(step: usize) -> usize {
    ((PARALLEL_CHUNK_SIZE / step) * step).max(step)
}

/// Generates the drivers for one precision.
macro_rules! slice_drivers {
    (
        $module:ident,
        $elem:ty,
        $vector:ty,
        $index:ty,
        add: $add:path,
        rint: $rint:path,
        gather: $gather:path,
        max_index: $max_index:expr $(,)?
    ) => {
        mod $module {
            use super::*;

            #[inline(always)]
            fn simd_add_block(a: &[$elem], b: &[$elem], c: &mut [$elem]) {
                let step = <$vector>::LANES;
                let size = c.len();
                let nb_lanes = size - (size % step);

                for i in (0..nb_lanes).step_by(step) {
                    let sum = $add(
                        <$vector>::from_slice(&a[i..]),
                        <$vector>::from_slice(&b[i..]),
                    );
                    sum.write_to_slice(&mut c[i..]);
                }

                if nb_lanes < size {
                    let sum = $add(
                        <$vector>::load_partial(&a[nb_lanes..]),
                        <$vector>::load_partial(&b[nb_lanes..]),
                    );
                    sum.store_partial(&mut c[nb_lanes..]);
                }
            }

            #[inline(always)]
            fn simd_rint_block(a: &[$elem], c: &mut [$elem]) {
                let step = <$vector>::LANES;
                let size = c.len();
                let nb_lanes = size - (size % step);

                for i in (0..nb_lanes).step_by(step) {
                    $rint(<$vector>::from_slice(&a[i..])).write_to_slice(&mut c[i..]);
                }

                if nb_lanes < size {
                    $rint(<$vector>::load_partial(&a[nb_lanes..])).store_partial(&mut c[nb_lanes..]);
                }
            }

            pub(super) fn scalar_add(a: &[$elem], b: &[$elem]) -> Vec<$elem> {
                assert_eq!(a.len(), b.len(), "Vectors must be the same length");

                a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
            }

            pub(super) fn simd_add(a: &[$elem], b: &[$elem]) -> Vec<$elem> {
                assert_eq!(a.len(), b.len(), "Vectors must be the same length");

                let mut c = vec![<$elem>::default(); a.len()];
                simd_add_block(a, b, &mut c);
                c
            }

            pub(super) fn parallel_simd_add(a: &[$elem], b: &[$elem]) -> Vec<$elem> {
                assert_eq!(a.len(), b.len(), "Vectors must be the same length");

                // Below the threshold, thread dispatch costs more than it saves
                if a.len() <= PARALLEL_SIMD_THRESHOLD {
                    return simd_add(a, b);
                }

                let chunk_size = parallel_chunk_size(<$vector>::LANES);
                let mut c = vec![<$elem>::default(); a.len()];

                c.par_chunks_mut(chunk_size)
                    .zip(a.par_chunks(chunk_size))
                    .zip(b.par_chunks(chunk_size))
                    .for_each(|((c_chunk, a_chunk), b_chunk)| {
                        simd_add_block(a_chunk, b_chunk, c_chunk);
                    });

                c
            }

            pub(super) fn fast_add(a: &[$elem], b: &[$elem]) -> Vec<$elem> {
                assert_eq!(a.len(), b.len(), "Vectors must be the same length");

                let size = a.len();

                match size {
                    0..SIMD_THRESHOLD => {
                        log::debug!("add: {size} elements, scalar");
                        scalar_add(a, b)
                    }
                    SIMD_THRESHOLD..PARALLEL_SIMD_THRESHOLD => {
                        log::debug!("add: {size} elements, simd");
                        simd_add(a, b)
                    }
                    _ => {
                        log::debug!("add: {size} elements, parallel simd");
                        parallel_simd_add(a, b)
                    }
                }
            }

            pub(super) fn try_add(a: &[$elem], b: &[$elem]) -> Result<Vec<$elem>> {
                if a.len() != b.len() {
                    log::warn!("add rejected: lengths {} and {} differ", a.len(), b.len());
                    return Err(length_mismatch(a.len(), b.len()));
                }

                Ok(fast_add(a, b))
            }

            pub(super) fn scalar_rint(a: &[$elem]) -> Vec<$elem> {
                a.iter()
                    .map(|&x| <$elem>::from_lane_i32(lanes::rint_i32(x)))
                    .collect()
            }

            pub(super) fn simd_rint(a: &[$elem]) -> Vec<$elem> {
                let mut c = vec![<$elem>::default(); a.len()];
                simd_rint_block(a, &mut c);
                c
            }

            pub(super) fn parallel_simd_rint(a: &[$elem]) -> Vec<$elem> {
                if a.len() <= PARALLEL_SIMD_THRESHOLD {
                    return simd_rint(a);
                }

                let chunk_size = parallel_chunk_size(<$vector>::LANES);
                let mut c = vec![<$elem>::default(); a.len()];

                c.par_chunks_mut(chunk_size)
                    .zip(a.par_chunks(chunk_size))
                    .for_each(|(c_chunk, a_chunk)| simd_rint_block(a_chunk, c_chunk));

                c
            }

            pub(super) fn fast_rint(a: &[$elem]) -> Vec<$elem> {
                let size = a.len();

                match size {
                    0..PARALLEL_SIMD_THRESHOLD => {
                        log::debug!("rint: {size} elements, simd");
                        simd_rint(a)
                    }
                    _ => {
                        log::debug!("rint: {size} elements, parallel simd");
                        parallel_simd_rint(a)
                    }
                }
            }

            pub(super) fn scalar_gather(src: &[$elem], indices: &[i32]) -> Result<Vec<$elem>> {
                check_indices(indices, src.len(), $max_index)?;

                Ok(indices.iter().map(|&index| src[index as usize]).collect())
            }

            pub(super) fn simd_gather(src: &[$elem], indices: &[i32]) -> Result<Vec<$elem>> {
                check_indices(indices, src.len(), $max_index)?;

                let step = <$index>::LANES;
                let size = indices.len();
                let nb_lanes = size - (size % step);
                let mut c = vec![<$elem>::default(); size];

                // SAFETY: every index was checked against `src.len()`, and the
                // zero-filled tail lanes read `src[0]`, which exists whenever
                // there is at least one index.
                for i in (0..nb_lanes).step_by(step) {
                    let vi = <$index>::from_slice(&indices[i..]);
                    unsafe { $gather(src.as_ptr(), vi) }.write_to_slice(&mut c[i..]);
                }

                if nb_lanes < size {
                    let vi = <$index>::load_partial(&indices[nb_lanes..]);
                    unsafe { $gather(src.as_ptr(), vi) }.store_partial(&mut c[nb_lanes..]);
                }

                Ok(c)
            }
        }

        impl<'b> SimdAdd<&'b [$elem]> for &[$elem] {
            type Output = Vec<$elem>;

            #[inline(always)]
            fn simd_add(self, rhs: &'b [$elem]) -> Self::Output {
                $module::simd_add(self, rhs)
            }

            #[inline(always)]
            fn par_simd_add(self, rhs: &'b [$elem]) -> Self::Output {
                $module::parallel_simd_add(self, rhs)
            }

            #[inline(always)]
            fn scalar_add(self, rhs: &'b [$elem]) -> Self::Output {
                $module::scalar_add(self, rhs)
            }

            #[inline(always)]
            fn fast_add(self, rhs: &'b [$elem]) -> Self::Output {
                $module::fast_add(self, rhs)
            }

            #[inline(always)]
            fn try_simd_add(self, rhs: &'b [$elem]) -> Result<Self::Output> {
                $module::try_add(self, rhs)
            }
        }

        impl SimdRint for &[$elem] {
            type Output = Vec<$elem>;

            #[inline(always)]
            fn simd_rint(self) -> Self::Output {
                $module::simd_rint(self)
            }

            #[inline(always)]
            fn par_simd_rint(self) -> Self::Output {
                $module::parallel_simd_rint(self)
            }

            #[inline(always)]
            fn scalar_rint(self) -> Self::Output {
                $module::scalar_rint(self)
            }

            #[inline(always)]
            fn fast_rint(self) -> Self::Output {
                $module::fast_rint(self)
            }
        }

        impl SimdGather for &[$elem] {
            type Output = Vec<$elem>;

            #[inline(always)]
            fn gather(self, indices: &[i32]) -> Result<Self::Output> {
                $module::simd_gather(self, indices)
            }

            #[inline(always)]
            fn scalar_gather(self, indices: &[i32]) -> Result<Self::Output> {
                $module::scalar_gather(self, indices)
            }
        }
    };
}

slice_drivers!(
    single,
    f32,
    sp::VFloat,
    sp::VInt2,
    add: sp::vadd_vf_vf_vf,
    rint: sp::vrint_vf_vf,
    gather: sp::vgather_vf_p_vi2,
    max_index: sp::MAX_GATHER_INDEX,
);

slice_drivers!(
    double,
    f64,
    dp::VDouble,
    dp::VInt,
    add: dp::vadd_vd_vd_vd,
    rint: dp::vrint_vd_vd,
    gather: dp::vgather_vd_p_vi,
    max_index: i32::MAX,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{VECTLENDP, VECTLENSP};
    use crate::Error;

    #[test]
    fn test_add_with_tail() {
        // one full vector plus a partial one
        let n = VECTLENSP + VECTLENSP / 2 + 1;
        let a: Vec<f32> = (0..n).map(|i| i as f32).collect();
        let b: Vec<f32> = (0..n).map(|i| 0.5 * i as f32).collect();

        let expected = a.as_slice().scalar_add(b.as_slice());
        assert_eq!(a.as_slice().simd_add(b.as_slice()), expected);
        assert_eq!(a.as_slice().par_simd_add(b.as_slice()), expected);
        assert_eq!(a.as_slice().fast_add(b.as_slice()), expected);
    }

    #[test]
    fn test_add_empty() {
        let empty: &[f64] = &[];
        assert!(empty.simd_add(empty).is_empty());
        assert!(empty.fast_add(empty).is_empty());
    }

    #[test]
    #[should_panic(expected = "Vectors must be the same length")]
    fn test_add_length_mismatch_panics() {
        let a = [1.0f64; 3];
        let b = [1.0f64; 4];
        let _ = a.as_slice().simd_add(b.as_slice());
    }

    #[test]
    fn test_try_add_reports_mismatch() {
        let a = [1.0f32; 5];
        let b = [2.0f32; 7];
        assert_eq!(
            a.as_slice().try_simd_add(b.as_slice()),
            Err(Error::LengthMismatch { left: 5, right: 7 })
        );
        assert_eq!(
            a.as_slice().try_simd_add(&b[..5]),
            Ok(vec![3.0f32; 5])
        );
    }

    #[test]
    fn test_rint_matches_scalar() {
        let a: Vec<f64> = (0..(3 * VECTLENDP + 1).max(8)).map(|i| i as f64 * 0.5 - 2.0).collect();
        let expected = a.as_slice().scalar_rint();

        assert_eq!(a.as_slice().simd_rint(), expected);
        assert_eq!(a.as_slice().fast_rint(), expected);
        // -2.0, -1.5, -1.0, -0.5, 0.0, 0.5 ...
        assert_eq!(&expected[..6], &[-2.0, -2.0, -1.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_gather_tail_and_errors() {
        let src: Vec<f32> = (0..10).map(|i| i as f32 * 10.0).collect();
        let indices: Vec<i32> = (0..VECTLENSP as i32 + 3).map(|i| (i * 3) % 10).collect();

        let gathered = src.as_slice().gather(&indices).unwrap();
        assert_eq!(gathered, src.as_slice().scalar_gather(&indices).unwrap());
        assert_eq!(gathered.len(), indices.len());

        let err = src.as_slice().gather(&[0, 1, 10]).unwrap_err();
        assert_eq!(
            err,
            Error::IndexOutOfBounds {
                lane: 2,
                index: 10,
                len: 10
            }
        );
        assert!(src.as_slice().gather(&[-1]).is_err());

        let empty: &[f32] = &[];
        assert_eq!(empty.gather(&[]), Ok(vec![]));
        assert!(empty.gather(&[0]).is_err());
    }
}

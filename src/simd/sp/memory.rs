//! Single-precision loads, stores and gathers.
//!
//! All pointer-based entry points move exactly [`VFloat::LANES`] elements and do
//! no bounds checking. Aligned and unaligned forms are the same operation: the
//! vector unit has no alignment requirement beyond the element size.

use super::{VFloat, VInt2};
use crate::error::{index_out_of_bounds, validation_error, Result};
use crate::simd::vector::lanewise;

/// Largest index whose byte offset fits the 32-bit offset arithmetic of
/// [`vgather_vf_p_vi2`].
pub const MAX_GATHER_INDEX: i32 = (u32::MAX / std::mem::size_of::<f32>() as u32) as i32;

/// # Safety
///
/// `ptr` must be valid for reading `VFloat::LANES` elements.
#[inline(always)]
pub unsafe fn vload_vf_p(ptr: *const f32) -> VFloat {
    unsafe { VFloat::load(ptr) }
}

/// # Safety
///
/// `ptr` must be valid for reading `VFloat::LANES` elements.
#[inline(always)]
pub unsafe fn vloadu_vf_p(ptr: *const f32) -> VFloat {
    unsafe { VFloat::load(ptr) }
}

/// # Safety
///
/// `ptr` must be valid for writing `VFloat::LANES` elements.
#[inline(always)]
pub unsafe fn vstore_v_p_vf(ptr: *mut f32, v: VFloat) {
    unsafe { v.store(ptr) }
}

/// # Safety
///
/// `ptr` must be valid for writing `VFloat::LANES` elements.
#[inline(always)]
pub unsafe fn vstoreu_v_p_vf(ptr: *mut f32, v: VFloat) {
    unsafe { v.store(ptr) }
}

/// # Safety
///
/// `ptr` must be valid for writing `VInt2::LANES` elements.
#[inline(always)]
pub unsafe fn vstoreu_v_p_vi2(ptr: *mut i32, v: VInt2) {
    unsafe { v.store(ptr) }
}

/// Indexed load: lane `i` reads `ptr[vi2[i]]`.
///
/// Byte offsets are computed as `index * 4` on the index reinterpreted as
/// unsigned, in 32-bit arithmetic (`vluxei32`).
///
/// # Safety
///
/// Every computed offset must land on an `f32` readable through `ptr`.
#[inline(always)]
pub unsafe fn vgather_vf_p_vi2(ptr: *const f32, vi2: VInt2) -> VFloat {
    let base = ptr.cast::<u8>();
    VFloat(lanewise(vi2.0, |index| {
        let offset = (index as u32).wrapping_mul(std::mem::size_of::<f32>() as u32);
        unsafe { base.add(offset as usize).cast::<f32>().read_unaligned() }
    }))
}

/// Bounds-checked gather over a slice.
///
/// Returns [`crate::Error::IndexOutOfBounds`] for the first lane whose index is
/// negative or not below `src.len()`, and [`crate::Error::Validation`] for an
/// in-bounds index above [`MAX_GATHER_INDEX`], whose offset would wrap.
pub fn checked_gather_vf(src: &[f32], vi2: VInt2) -> Result<VFloat> {
    if let Some((lane, &index)) = vi2
        .0
        .iter()
        .enumerate()
        .find(|&(_, &index)| index < 0 || index as usize >= src.len())
    {
        return Err(index_out_of_bounds(lane, index, src.len()));
    }

    if let Some(&index) = vi2.0.iter().find(|&&index| index > MAX_GATHER_INDEX) {
        return Err(validation_error(format!(
            "gather index {index} overflows the 32-bit byte offset"
        )));
    }

    // SAFETY: every index was checked to be within `src`.
    Ok(unsafe { vgather_vf_p_vi2(src.as_ptr(), vi2) })
}

//! Double-precision loads, stores and gathers.

use super::{VDouble, VInt};
use crate::error::{index_out_of_bounds, Result};
use crate::simd::vector::lanewise;

/// # Safety
///
/// `ptr` must be valid for reading `VDouble::LANES` elements.
#[inline(always)]
pub unsafe fn vload_vd_p(ptr: *const f64) -> VDouble {
    unsafe { VDouble::load(ptr) }
}

/// # Safety
///
/// `ptr` must be valid for reading `VDouble::LANES` elements.
#[inline(always)]
pub unsafe fn vloadu_vd_p(ptr: *const f64) -> VDouble {
    unsafe { VDouble::load(ptr) }
}

/// # Safety
///
/// `ptr` must be valid for reading `VInt::LANES` elements.
#[inline(always)]
pub unsafe fn vloadu_vi_p(ptr: *const i32) -> VInt {
    unsafe { VInt::load(ptr) }
}

/// # Safety
///
/// `ptr` must be valid for writing `VDouble::LANES` elements.
#[inline(always)]
pub unsafe fn vstore_v_p_vd(ptr: *mut f64, v: VDouble) {
    unsafe { v.store(ptr) }
}

/// # Safety
///
/// `ptr` must be valid for writing `VDouble::LANES` elements.
#[inline(always)]
pub unsafe fn vstoreu_v_p_vd(ptr: *mut f64, v: VDouble) {
    unsafe { v.store(ptr) }
}

/// # Safety
///
/// `ptr` must be valid for writing `VInt::LANES` elements.
#[inline(always)]
pub unsafe fn vstoreu_v_p_vi(ptr: *mut i32, v: VInt) {
    unsafe { v.store(ptr) }
}

/// Indexed load: lane `i` reads `ptr[vi[i]]`.
///
/// The index is reinterpreted as unsigned and widened to 64 bits before being
/// scaled by 8 (`vwmulu`), so the byte offset never wraps.
///
/// # Safety
///
/// Every computed offset must land on an `f64` readable through `ptr`.
#[inline(always)]
pub unsafe fn vgather_vd_p_vi(ptr: *const f64, vi: VInt) -> VDouble {
    let base = ptr.cast::<u8>();
    VDouble(lanewise(vi.0, |index| {
        let offset = u64::from(index as u32) * std::mem::size_of::<f64>() as u64;
        unsafe { base.add(offset as usize).cast::<f64>().read_unaligned() }
    }))
}

/// Bounds-checked gather over a slice.
///
/// Returns [`crate::Error::IndexOutOfBounds`] for the first lane whose index is
/// negative or not below `src.len()`.
pub fn checked_gather_vd(src: &[f64], vi: VInt) -> Result<VDouble> {
    if let Some((lane, &index)) = vi
        .0
        .iter()
        .enumerate()
        .find(|&(_, &index)| index < 0 || index as usize >= src.len())
    {
        return Err(index_out_of_bounds(lane, index, src.len()));
    }

    // SAFETY: every index was checked to be within `src`.
    Ok(unsafe { vgather_vd_p_vi(src.as_ptr(), vi) })
}

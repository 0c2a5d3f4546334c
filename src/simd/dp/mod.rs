//! Double-precision vector types and primitives.
//!
//! Register mapping (wide class / `rvvm1` narrow class):
//!
//! | Type | Lanes | RVV register group |
//! |------|-------|--------------------|
//! | [`VDouble`] | [`VECTLENDP`] | `vfloat64m2_t` / `vfloat64m1_t` |
//! | [`VInt`] | [`VECTLENDP`] | `vint32m1_t` / `vint32mf2_t` |
//! | [`VMask`] | [`VECTLENDP`] | `vuint64m2_t` / `vuint64m1_t` |
//! | [`VOpMask`] | [`VECTLENDP`] | `vbool32_t` / `vbool64_t` |
//!
//! [`VInt`] has one 32-bit lane per double lane, so it only fills half of the
//! register group the doubles occupy. Conversions between the two narrow or
//! widen (`vfncvt`, `vfwcvt`) rather than reinterpret.

use crate::config::VECTLENDP;
use crate::simd::vector::{
    contiguous_memory, impl_bitwise, impl_float_arith, impl_wrapping_arith, lane_vector,
};

mod aggregate;
mod arith;
mod convert;
mod mask;
mod memory;
mod select;

pub use aggregate::*;
pub use arith::*;
pub use convert::*;
pub use mask::*;
pub use memory::*;
pub use select::*;

lane_vector! {
    /// Double-precision float vector (`vdouble`).
    pub struct VDouble([f64; VECTLENDP]);
}
contiguous_memory!(VDouble, f64);
impl_float_arith!(VDouble);

lane_vector! {
    /// 32-bit integer vector paired lane-for-lane with [`VDouble`] (`vint`).
    pub struct VInt([i32; VECTLENDP]);
}
contiguous_memory!(VInt, i32);
impl_bitwise!(VInt);
impl_wrapping_arith!(VInt);

lane_vector! {
    /// Raw 64-bit pattern per double lane (`vmask`).
    pub struct VMask([u64; VECTLENDP]);
}
impl_bitwise!(VMask);
impl_wrapping_arith!(VMask);

lane_vector! {
    /// Per-lane predicate (`vopmask`).
    pub struct VOpMask([bool; VECTLENDP]);
}
impl_bitwise!(VOpMask);

impl Default for VDouble {
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl Default for VInt {
    fn default() -> Self {
        Self::splat(0)
    }
}

impl Default for VMask {
    fn default() -> Self {
        Self::splat(0)
    }
}

impl VOpMask {
    /// Number of set lanes (`vcpop.m`).
    #[inline(always)]
    pub fn count_ones(self) -> usize {
        self.0.iter().filter(|&&set| set).count()
    }
}

//! Single-precision vector types and primitives.
//!
//! Register mapping (wide class / `rvvm1` narrow class):
//!
//! | Type | Lanes | RVV register group |
//! |------|-------|--------------------|
//! | [`VFloat`] | [`VECTLENSP`] | `vfloat32m2_t` / `vfloat32m1_t` |
//! | [`VInt2`] | [`VECTLENSP`] | `vint32m2_t` / `vint32m1_t` |
//! | [`VMask`] | [`VECTLENSP`] | `vuint64m4_t` / `vuint64m2_t` |
//! | [`VOpMask`] | [`VECTLENSP`] | `vbool16_t` / `vbool32_t` |
//!
//! A single-precision [`VMask`] holds one 64-bit lane per float lane, carrying
//! the float's bit pattern zero-extended. It is a different type from
//! [`crate::simd::dp::VMask`]; the two precisions never share mask types.

use crate::config::VECTLENSP;
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
    /// Single-precision float vector (`vfloat`).
    pub struct VFloat([f32; VECTLENSP]);
}
contiguous_memory!(VFloat, f32);
impl_float_arith!(VFloat);

lane_vector! {
    /// 32-bit integer vector paired lane-for-lane with [`VFloat`] (`vint2`).
    pub struct VInt2([i32; VECTLENSP]);
}
contiguous_memory!(VInt2, i32);
impl_bitwise!(VInt2);
impl_wrapping_arith!(VInt2);

lane_vector! {
    /// Raw-bits mask, one zero-extended 32-bit pattern per float lane (`vmask`).
    pub struct VMask([u64; VECTLENSP]);
}
impl_bitwise!(VMask);

lane_vector! {
    /// Per-lane predicate (`vopmask`).
    pub struct VOpMask([bool; VECTLENSP]);
}
impl_bitwise!(VOpMask);

impl Default for VFloat {
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl Default for VInt2 {
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

//! Single-precision float and 32-bit integer arithmetic.

use super::{VFloat, VInt2};
use crate::simd::lanes;
use crate::simd::vector::{lanewise, lanewise2, lanewise3};

#[inline(always)]
pub fn vadd_vf_vf_vf(x: VFloat, y: VFloat) -> VFloat {
    x + y
}

#[inline(always)]
pub fn vsub_vf_vf_vf(x: VFloat, y: VFloat) -> VFloat {
    x - y
}

#[inline(always)]
pub fn vmul_vf_vf_vf(x: VFloat, y: VFloat) -> VFloat {
    x * y
}

#[inline(always)]
pub fn vdiv_vf_vf_vf(x: VFloat, y: VFloat) -> VFloat {
    x / y
}

/// Lanewise maximum; a NaN lane yields the other operand.
#[inline(always)]
pub fn vmax_vf_vf_vf(x: VFloat, y: VFloat) -> VFloat {
    VFloat(lanewise2(x.0, y.0, lanes::fmax))
}

/// Lanewise minimum; a NaN lane yields the other operand.
#[inline(always)]
pub fn vmin_vf_vf_vf(x: VFloat, y: VFloat) -> VFloat {
    VFloat(lanewise2(x.0, y.0, lanes::fmin))
}

#[inline(always)]
pub fn vrec_vf_vf(d: VFloat) -> VFloat {
    VFloat::splat(1.0) / d
}

#[inline(always)]
pub fn vsqrt_vf_vf(d: VFloat) -> VFloat {
    VFloat(lanewise(d.0, f32::sqrt))
}

/// Fused `x * y + z`.
#[inline(always)]
pub fn vmla_vf_vf_vf_vf(x: VFloat, y: VFloat, z: VFloat) -> VFloat {
    VFloat(lanewise3(x.0, y.0, z.0, f32::mul_add))
}

/// Fused `-(x * y) + z`.
#[inline(always)]
pub fn vmlanp_vf_vf_vf_vf(x: VFloat, y: VFloat, z: VFloat) -> VFloat {
    VFloat(lanewise3(x.0, y.0, z.0, |x, y, z| (-x).mul_add(y, z)))
}

/// `x` with its sign flipped where `y` is negative.
#[inline(always)]
pub fn vmulsign_vf_vf_vf(x: VFloat, y: VFloat) -> VFloat {
    VFloat(lanewise2(x.0, y.0, lanes::sgnjx))
}

#[inline(always)]
pub fn vcopysign_vf_vf_vf(x: VFloat, y: VFloat) -> VFloat {
    VFloat(lanewise2(x.0, y.0, lanes::sgnj))
}

/// `1.0` carrying the sign of `f`.
#[inline(always)]
pub fn vsign_vf_vf(f: VFloat) -> VFloat {
    vcopysign_vf_vf_vf(VFloat::splat(1.0), f)
}

/// Magnitude of `x`, negative where either `x` or `y` is.
#[inline(always)]
pub fn vorsign_vf_vf_vf(x: VFloat, y: VFloat) -> VFloat {
    VFloat(lanewise2(x.0, y.0, lanes::orsign))
}

#[inline(always)]
pub fn vabs_vf_vf(f: VFloat) -> VFloat {
    VFloat(lanewise(f.0, lanes::abs))
}

#[inline(always)]
pub fn vneg_vf_vf(f: VFloat) -> VFloat {
    -f
}

// 32-bit integer lanes paired with `VFloat`

#[inline(always)]
pub fn vadd_vi2_vi2_vi2(x: VInt2, y: VInt2) -> VInt2 {
    x + y
}

#[inline(always)]
pub fn vsub_vi2_vi2_vi2(x: VInt2, y: VInt2) -> VInt2 {
    x - y
}

#[inline(always)]
pub fn vneg_vi2_vi2(x: VInt2) -> VInt2 {
    -x
}

#[inline(always)]
pub fn vand_vi2_vi2_vi2(x: VInt2, y: VInt2) -> VInt2 {
    x & y
}

/// `!x & y`.
#[inline(always)]
pub fn vandnot_vi2_vi2_vi2(x: VInt2, y: VInt2) -> VInt2 {
    !x & y
}

#[inline(always)]
pub fn vor_vi2_vi2_vi2(x: VInt2, y: VInt2) -> VInt2 {
    x | y
}

#[inline(always)]
pub fn vxor_vi2_vi2_vi2(x: VInt2, y: VInt2) -> VInt2 {
    x ^ y
}

/// Shift left; only the low 5 bits of `c` are used.
#[inline(always)]
pub fn vsll_vi2_vi2_i(x: VInt2, c: i32) -> VInt2 {
    VInt2(lanewise(x.0, |a| a.wrapping_shl(c as u32)))
}

/// Arithmetic shift right; only the low 5 bits of `c` are used.
#[inline(always)]
pub fn vsra_vi2_vi2_i(x: VInt2, c: i32) -> VInt2 {
    VInt2(lanewise(x.0, |a| a.wrapping_shr(c as u32)))
}

/// Logical shift right; only the low 5 bits of `c` are used.
#[inline(always)]
pub fn vsrl_vi2_vi2_i(x: VInt2, c: i32) -> VInt2 {
    VInt2(lanewise(x.0, |a| (a as u32).wrapping_shr(c as u32) as i32))
}

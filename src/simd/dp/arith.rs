//! Double-precision float and 32-bit integer arithmetic.

use super::{VDouble, VInt};
use crate::simd::lanes;
use crate::simd::vector::{lanewise, lanewise2, lanewise3};

#[inline(always)]
pub fn vadd_vd_vd_vd(x: VDouble, y: VDouble) -> VDouble {
    x + y
}

#[inline(always)]
pub fn vsub_vd_vd_vd(x: VDouble, y: VDouble) -> VDouble {
    x - y
}

#[inline(always)]
pub fn vmul_vd_vd_vd(x: VDouble, y: VDouble) -> VDouble {
    x * y
}

#[inline(always)]
pub fn vdiv_vd_vd_vd(x: VDouble, y: VDouble) -> VDouble {
    x / y
}

#[inline(always)]
pub fn vrec_vd_vd(d: VDouble) -> VDouble {
    VDouble::splat(1.0) / d
}

#[inline(always)]
pub fn vabs_vd_vd(d: VDouble) -> VDouble {
    VDouble(lanewise(d.0, lanes::abs))
}

#[inline(always)]
pub fn vsqrt_vd_vd(d: VDouble) -> VDouble {
    VDouble(lanewise(d.0, f64::sqrt))
}

/// Lanewise maximum; a NaN lane yields the other operand.
#[inline(always)]
pub fn vmax_vd_vd_vd(x: VDouble, y: VDouble) -> VDouble {
    VDouble(lanewise2(x.0, y.0, lanes::fmax))
}

/// Lanewise minimum; a NaN lane yields the other operand.
#[inline(always)]
pub fn vmin_vd_vd_vd(x: VDouble, y: VDouble) -> VDouble {
    VDouble(lanewise2(x.0, y.0, lanes::fmin))
}

/// Fused `x * y + z`.
#[inline(always)]
pub fn vmla_vd_vd_vd_vd(x: VDouble, y: VDouble, z: VDouble) -> VDouble {
    VDouble(lanewise3(x.0, y.0, z.0, f64::mul_add))
}

/// Fused `x * y - z`.
#[inline(always)]
pub fn vmlapn_vd_vd_vd_vd(x: VDouble, y: VDouble, z: VDouble) -> VDouble {
    VDouble(lanewise3(x.0, y.0, z.0, |x, y, z| x.mul_add(y, -z)))
}

/// Fused `x * y + z`.
#[inline(always)]
pub fn vfma_vd_vd_vd_vd(x: VDouble, y: VDouble, z: VDouble) -> VDouble {
    vmla_vd_vd_vd_vd(x, y, z)
}

/// Fused `-(x * y) + z`.
#[inline(always)]
pub fn vfmanp_vd_vd_vd_vd(x: VDouble, y: VDouble, z: VDouble) -> VDouble {
    VDouble(lanewise3(x.0, y.0, z.0, |x, y, z| (-x).mul_add(y, z)))
}

/// Fused `x * y - z`.
#[inline(always)]
pub fn vfmapn_vd_vd_vd_vd(x: VDouble, y: VDouble, z: VDouble) -> VDouble {
    vmlapn_vd_vd_vd_vd(x, y, z)
}

#[inline(always)]
pub fn vmulsign_vd_vd_vd(x: VDouble, y: VDouble) -> VDouble {
    VDouble(lanewise2(x.0, y.0, lanes::sgnjx))
}

#[inline(always)]
pub fn vcopysign_vd_vd_vd(x: VDouble, y: VDouble) -> VDouble {
    VDouble(lanewise2(x.0, y.0, lanes::sgnj))
}

#[inline(always)]
pub fn vorsign_vd_vd_vd(x: VDouble, y: VDouble) -> VDouble {
    VDouble(lanewise2(x.0, y.0, lanes::orsign))
}

#[inline(always)]
pub fn vneg_vd_vd(d: VDouble) -> VDouble {
    -d
}

// 32-bit integer lanes paired with `VDouble`

#[inline(always)]
pub fn vadd_vi_vi_vi(x: VInt, y: VInt) -> VInt {
    x + y
}

#[inline(always)]
pub fn vsub_vi_vi_vi(x: VInt, y: VInt) -> VInt {
    x - y
}

#[inline(always)]
pub fn vneg_vi_vi(e: VInt) -> VInt {
    -e
}

#[inline(always)]
pub fn vand_vi_vi_vi(x: VInt, y: VInt) -> VInt {
    x & y
}

/// `!x & y`.
#[inline(always)]
pub fn vandnot_vi_vi_vi(x: VInt, y: VInt) -> VInt {
    !x & y
}

#[inline(always)]
pub fn vor_vi_vi_vi(x: VInt, y: VInt) -> VInt {
    x | y
}

#[inline(always)]
pub fn vxor_vi_vi_vi(x: VInt, y: VInt) -> VInt {
    x ^ y
}

#[inline(always)]
pub fn vsll_vi_vi_i(x: VInt, c: i32) -> VInt {
    VInt(lanewise(x.0, |a| a.wrapping_shl(c as u32)))
}

#[inline(always)]
pub fn vsra_vi_vi_i(x: VInt, c: i32) -> VInt {
    VInt(lanewise(x.0, |a| a.wrapping_shr(c as u32)))
}

#[inline(always)]
pub fn vsrl_vi_vi_i(x: VInt, c: i32) -> VInt {
    VInt(lanewise(x.0, |a| (a as u32).wrapping_shr(c as u32) as i32))
}

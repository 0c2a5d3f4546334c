//! Double-precision lane selection.

use super::{VDouble, VInt, VOpMask};
use crate::simd::vector::lanewise3;

/// `x` where `mask` holds, `y` elsewhere.
#[inline(always)]
pub fn vsel_vd_vo_vd_vd(mask: VOpMask, x: VDouble, y: VDouble) -> VDouble {
    VDouble(lanewise3(mask.0, x.0, y.0, |o, a, b| if o { a } else { b }))
}

/// `v0` where `mask` holds, `v1` elsewhere.
#[inline(always)]
pub fn vsel_vd_vo_d_d(mask: VOpMask, v0: f64, v1: f64) -> VDouble {
    vsel_vd_vo_vd_vd(mask, VDouble::splat(v0), VDouble::splat(v1))
}

/// First-match chain: `d0` where `o0` holds, else `d1` where `o1` holds, else `d2`.
#[inline(always)]
pub fn vsel_vd_vo_vo_d_d_d(o0: VOpMask, o1: VOpMask, d0: f64, d1: f64, d2: f64) -> VDouble {
    vsel_vd_vo_vd_vd(o0, VDouble::splat(d0), vsel_vd_vo_d_d(o1, d1, d2))
}

/// First-match chain over three predicates, falling back to `d3`.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn vsel_vd_vo_vo_vo_d_d_d_d(
    o0: VOpMask,
    o1: VOpMask,
    o2: VOpMask,
    d0: f64,
    d1: f64,
    d2: f64,
    d3: f64,
) -> VDouble {
    let rest = vsel_vd_vo_vd_vd(o1, VDouble::splat(d1), vsel_vd_vo_d_d(o2, d2, d3));
    vsel_vd_vo_vd_vd(o0, VDouble::splat(d0), rest)
}

#[inline(always)]
pub fn vsel_vi_vo_vi_vi(m: VOpMask, x: VInt, y: VInt) -> VInt {
    VInt(lanewise3(m.0, x.0, y.0, |o, a, b| if o { a } else { b }))
}

/// `y` where `x` holds, zero elsewhere.
#[inline(always)]
pub fn vand_vi_vo_vi(x: VOpMask, y: VInt) -> VInt {
    vsel_vi_vo_vi_vi(x, y, VInt::splat(0))
}

/// Zero where `mask` holds, `vi` elsewhere.
#[inline(always)]
pub fn vandnot_vi_vo_vi(mask: VOpMask, vi: VInt) -> VInt {
    vsel_vi_vo_vi_vi(mask, VInt::splat(0), vi)
}

//! Double-precision raw masks, predicates and comparisons.
//!
//! A double-precision [`VMask`] lane is the full 64-bit pattern of a double, so
//! besides the logical operations it also supports the 64-bit integer
//! arithmetic used to manipulate exponents and build `vquad` values.

use super::{VDouble, VInt, VMask, VOpMask};
use crate::config::INFINITY;
use crate::simd::lanes;
use crate::simd::vector::{lanewise, lanewise2, lanewise3};

// broadcasts and int <-> mask casts

#[inline(always)]
pub fn vcast_vm_i64(c: i64) -> VMask {
    VMask::splat(c as u64)
}

#[inline(always)]
pub fn vcast_vm_u64(c: u64) -> VMask {
    VMask::splat(c)
}

/// Every lane set to `(h << 32) | (l as u32)`.
#[inline(always)]
pub fn vcast_vm_i_i(h: i64, l: i64) -> VMask {
    VMask::splat(((h as u64) << 32) | u64::from(l as u32))
}

/// Sign-extends each 32-bit lane to 64 bits.
#[inline(always)]
pub fn vcast_vm_vi(vi: VInt) -> VMask {
    VMask(lanewise(vi.0, |i| i64::from(i) as u64))
}

/// Places each 32-bit lane in the upper half of a 64-bit lane.
#[inline(always)]
pub fn vcastu_vm_vi(vi: VInt) -> VMask {
    VMask(lanewise(vi.0, |i| (i64::from(i) as u64) << 32))
}

/// Upper 32 bits of each lane.
#[inline(always)]
pub fn vcastu_vi_vm(vm: VMask) -> VInt {
    VInt(lanewise(vm.0, |m| (m >> 32) as u32 as i32))
}

/// Lower 32 bits of each lane.
#[inline(always)]
pub fn vcast_vi_vm(vm: VMask) -> VInt {
    VInt(lanewise(vm.0, |m| m as u32 as i32))
}

#[inline(always)]
pub fn vreinterpret_vd_vm(vm: VMask) -> VDouble {
    VDouble(lanewise(vm.0, f64::from_bits))
}

#[inline(always)]
pub fn vreinterpret_vm_vd(vd: VDouble) -> VMask {
    VMask(lanewise(vd.0, f64::to_bits))
}

// raw-mask logic

#[inline(always)]
pub fn vand_vm_vm_vm(x: VMask, y: VMask) -> VMask {
    x & y
}

#[inline(always)]
pub fn vor_vm_vm_vm(x: VMask, y: VMask) -> VMask {
    x | y
}

#[inline(always)]
pub fn vxor_vm_vm_vm(x: VMask, y: VMask) -> VMask {
    x ^ y
}

/// `!x & y`.
#[inline(always)]
pub fn vandnot_vm_vm_vm(x: VMask, y: VMask) -> VMask {
    !x & y
}

/// `y` where `x` holds, zero elsewhere.
#[inline(always)]
pub fn vand_vm_vo64_vm(x: VOpMask, y: VMask) -> VMask {
    VMask(lanewise2(x.0, y.0, |o, m| if o { m } else { 0 }))
}

/// Zero where `x` holds, `y` elsewhere.
#[inline(always)]
pub fn vandnot_vm_vo64_vm(x: VOpMask, y: VMask) -> VMask {
    VMask(lanewise2(x.0, y.0, |o, m| if o { 0 } else { m }))
}

/// All bits set where `x` holds, `y` elsewhere.
#[inline(always)]
pub fn vor_vm_vo64_vm(x: VOpMask, y: VMask) -> VMask {
    VMask(lanewise2(x.0, y.0, |o, m| if o { u64::MAX } else { m }))
}

/// `x` where `mask` holds, `y` elsewhere.
#[inline(always)]
pub fn vsel_vm_vo64_vm_vm(mask: VOpMask, x: VMask, y: VMask) -> VMask {
    VMask(lanewise3(mask.0, x.0, y.0, |o, a, b| if o { a } else { b }))
}

// 64-bit integer arithmetic on raw masks

#[inline(always)]
pub fn vadd64_vm_vm_vm(x: VMask, y: VMask) -> VMask {
    x + y
}

#[inline(always)]
pub fn vsub64_vm_vm_vm(x: VMask, y: VMask) -> VMask {
    x - y
}

#[inline(always)]
pub fn vneg64_vm_vm(x: VMask) -> VMask {
    -x
}

/// Shift left; only the low 6 bits of `c` are used.
#[inline(always)]
pub fn vsll64_vm_vm_i(x: VMask, c: i64) -> VMask {
    VMask(lanewise(x.0, |m| m.wrapping_shl(c as u32)))
}

/// Logical shift right; only the low 6 bits of `c` are used.
#[inline(always)]
pub fn vsrl64_vm_vm_i(x: VMask, c: i64) -> VMask {
    VMask(lanewise(x.0, |m| m.wrapping_shr(c as u32)))
}

#[inline(always)]
pub fn veq64_vo_vm_vm(x: VMask, y: VMask) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a == b))
}

/// Signed 64-bit comparison.
#[inline(always)]
pub fn vgt64_vo_vm_vm(x: VMask, y: VMask) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| (a as i64) > (b as i64)))
}

// predicates

/// Predicates of both precisions share the double-precision lane count here.
#[inline(always)]
pub fn vcast_vo64_vo32(vo: VOpMask) -> VOpMask {
    vo
}

#[inline(always)]
pub fn vcast_vo32_vo64(vo: VOpMask) -> VOpMask {
    vo
}

#[inline(always)]
pub fn vand_vo_vo_vo(x: VOpMask, y: VOpMask) -> VOpMask {
    x & y
}

/// `!x & y`.
#[inline(always)]
pub fn vandnot_vo_vo_vo(x: VOpMask, y: VOpMask) -> VOpMask {
    !x & y
}

#[inline(always)]
pub fn vor_vo_vo_vo(x: VOpMask, y: VOpMask) -> VOpMask {
    x | y
}

#[inline(always)]
pub fn vxor_vo_vo_vo(x: VOpMask, y: VOpMask) -> VOpMask {
    x ^ y
}

/// True iff every lane of `g` is set.
#[inline(always)]
pub fn vtestallones_i_vo64(g: VOpMask) -> bool {
    g.count_ones() == VOpMask::LANES
}

// float comparisons

#[inline(always)]
pub fn veq_vo_vd_vd(x: VDouble, y: VDouble) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a == b))
}

#[inline(always)]
pub fn vneq_vo_vd_vd(x: VDouble, y: VDouble) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a != b))
}

#[inline(always)]
pub fn vlt_vo_vd_vd(x: VDouble, y: VDouble) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a < b))
}

#[inline(always)]
pub fn vle_vo_vd_vd(x: VDouble, y: VDouble) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a <= b))
}

#[inline(always)]
pub fn vgt_vo_vd_vd(x: VDouble, y: VDouble) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a > b))
}

#[inline(always)]
pub fn vge_vo_vd_vd(x: VDouble, y: VDouble) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a >= b))
}

#[inline(always)]
pub fn visnan_vo_vd(d: VDouble) -> VOpMask {
    vneq_vo_vd_vd(d, d)
}

#[inline(always)]
pub fn visinf_vo_vd(d: VDouble) -> VOpMask {
    VOpMask(lanewise(d.0, |x| lanes::abs(x) == INFINITY))
}

#[inline(always)]
pub fn vispinf_vo_vd(d: VDouble) -> VOpMask {
    VOpMask(lanewise(d.0, |x| x == INFINITY))
}

// integer comparisons

#[inline(always)]
pub fn veq_vo_vi_vi(x: VInt, y: VInt) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a == b))
}

#[inline(always)]
pub fn vgt_vo_vi_vi(x: VInt, y: VInt) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a > b))
}

/// `-1` where `x > y`, `0` elsewhere.
#[inline(always)]
pub fn vgt_vi_vi_vi(x: VInt, y: VInt) -> VInt {
    VInt(lanewise2(x.0, y.0, |a, b| if a > b { -1 } else { 0 }))
}

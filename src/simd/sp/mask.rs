//! Single-precision raw-bits masks, predicates and comparisons.

use super::{VFloat, VInt2, VMask, VOpMask};
use crate::config::INFINITYF;
use crate::simd::lanes;
use crate::simd::vector::{lanewise, lanewise2};

// raw-bits masks

/// Low 32 bits of each mask lane, as a float.
#[inline(always)]
pub fn vreinterpret_vf_vm(vm: VMask) -> VFloat {
    VFloat(lanewise(vm.0, |m| f32::from_bits(m as u32)))
}

/// Bit pattern of each float lane, zero-extended to 64 bits.
#[inline(always)]
pub fn vreinterpret_vm_vf(vf: VFloat) -> VMask {
    VMask(lanewise(vf.0, |f| u64::from(f.to_bits())))
}

/// True iff every lane of `g` is set.
#[inline(always)]
pub fn vtestallones_i_vo32(g: VOpMask) -> bool {
    g.count_ones() == VOpMask::LANES
}

/// Every lane set to `(h << 32) | (l as u32)`.
#[inline(always)]
pub fn vcast_vm_i_i(h: i64, l: i64) -> VMask {
    VMask::splat(((h as u64) << 32) | u64::from(l as u32))
}

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

/// All bits set where `x` holds, `y` elsewhere.
#[inline(always)]
pub fn vor_vm_vo32_vm(x: VOpMask, y: VMask) -> VMask {
    VMask(lanewise2(x.0, y.0, |o, m| if o { u64::MAX } else { m }))
}

/// `y` where `x` holds, zero elsewhere.
#[inline(always)]
pub fn vand_vm_vo32_vm(x: VOpMask, y: VMask) -> VMask {
    VMask(lanewise2(x.0, y.0, |o, m| if o { m } else { 0 }))
}

/// Zero where `x` holds, `y` elsewhere.
#[inline(always)]
pub fn vandnot_vm_vo32_vm(x: VOpMask, y: VMask) -> VMask {
    VMask(lanewise2(x.0, y.0, |o, m| if o { 0 } else { m }))
}

// predicates

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

// float comparisons (ordered: NaN lanes compare false, except `vneq`)

#[inline(always)]
pub fn veq_vo_vf_vf(x: VFloat, y: VFloat) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a == b))
}

#[inline(always)]
pub fn vneq_vo_vf_vf(x: VFloat, y: VFloat) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a != b))
}

#[inline(always)]
pub fn vgt_vo_vf_vf(x: VFloat, y: VFloat) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a > b))
}

#[inline(always)]
pub fn vge_vo_vf_vf(x: VFloat, y: VFloat) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a >= b))
}

#[inline(always)]
pub fn vlt_vo_vf_vf(x: VFloat, y: VFloat) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a < b))
}

#[inline(always)]
pub fn vle_vo_vf_vf(x: VFloat, y: VFloat) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a <= b))
}

#[inline(always)]
pub fn visnan_vo_vf(d: VFloat) -> VOpMask {
    vneq_vo_vf_vf(d, d)
}

#[inline(always)]
pub fn visinf_vo_vf(d: VFloat) -> VOpMask {
    VOpMask(lanewise(d.0, |f| lanes::abs(f) == INFINITYF))
}

#[inline(always)]
pub fn vispinf_vo_vf(d: VFloat) -> VOpMask {
    VOpMask(lanewise(d.0, |f| f == INFINITYF))
}

// integer comparisons

#[inline(always)]
pub fn veq_vo_vi2_vi2(x: VInt2, y: VInt2) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a == b))
}

#[inline(always)]
pub fn vgt_vo_vi2_vi2(x: VInt2, y: VInt2) -> VOpMask {
    VOpMask(lanewise2(x.0, y.0, |a, b| a > b))
}

/// `-1` where `x > y`, `0` elsewhere.
#[inline(always)]
pub fn vgt_vi2_vi2_vi2(x: VInt2, y: VInt2) -> VInt2 {
    VInt2(lanewise2(x.0, y.0, |a, b| if a > b { -1 } else { 0 }))
}

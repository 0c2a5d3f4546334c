//! Multi-component double-precision values.
//!
//! Component 0 is the primary value; an integer tag, when present, comes last.

use super::{VDouble, VInt, VMask};

/// Double-double value: `x` is the high part, `y` the low part (`vdouble2`).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct VDouble2 {
    pub x: VDouble,
    pub y: VDouble,
}

/// Triple-double value (`vdouble3`).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct VDouble3 {
    pub x: VDouble,
    pub y: VDouble,
    pub z: VDouble,
}

/// Pair of double-double values (`dd2`).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Dd2 {
    pub a: VDouble2,
    pub b: VDouble2,
}

/// Double value tagged with an integer (`di_t`).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Di {
    pub d: VDouble,
    pub i: VInt,
}

/// Double-double value tagged with an integer (`ddi_t`).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Ddi {
    pub dd: VDouble2,
    pub i: VInt,
}

/// 128-bit integer lanes split into two 64-bit halves (`vquad`).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct VQuad {
    pub x: VMask,
    pub y: VMask,
}

// vdouble2

#[inline(always)]
pub fn vd2getx_vd_vd2(v: VDouble2) -> VDouble {
    v.x
}

#[inline(always)]
pub fn vd2gety_vd_vd2(v: VDouble2) -> VDouble {
    v.y
}

#[inline(always)]
pub fn vd2setxy_vd2_vd_vd(x: VDouble, y: VDouble) -> VDouble2 {
    VDouble2 { x, y }
}

#[inline(always)]
pub fn vd2setx_vd2_vd2_vd(v: VDouble2, d: VDouble) -> VDouble2 {
    VDouble2 { x: d, ..v }
}

#[inline(always)]
pub fn vd2sety_vd2_vd2_vd(v: VDouble2, d: VDouble) -> VDouble2 {
    VDouble2 { y: d, ..v }
}

// dd2

#[inline(always)]
pub fn dd2setab_dd2_vd2_vd2(a: VDouble2, b: VDouble2) -> Dd2 {
    Dd2 { a, b }
}

#[inline(always)]
pub fn dd2geta_vd2_dd2(d: Dd2) -> VDouble2 {
    d.a
}

#[inline(always)]
pub fn dd2getb_vd2_dd2(d: Dd2) -> VDouble2 {
    d.b
}

// vdouble3

#[inline(always)]
pub fn vd3getx_vd_vd3(v: VDouble3) -> VDouble {
    v.x
}

#[inline(always)]
pub fn vd3gety_vd_vd3(v: VDouble3) -> VDouble {
    v.y
}

#[inline(always)]
pub fn vd3getz_vd_vd3(v: VDouble3) -> VDouble {
    v.z
}

#[inline(always)]
pub fn vd3setxyz_vd3_vd_vd_vd(x: VDouble, y: VDouble, z: VDouble) -> VDouble3 {
    VDouble3 { x, y, z }
}

#[inline(always)]
pub fn vd3setx_vd3_vd3_vd(v: VDouble3, d: VDouble) -> VDouble3 {
    VDouble3 { x: d, ..v }
}

#[inline(always)]
pub fn vd3sety_vd3_vd3_vd(v: VDouble3, d: VDouble) -> VDouble3 {
    VDouble3 { y: d, ..v }
}

#[inline(always)]
pub fn vd3setz_vd3_vd3_vd(v: VDouble3, d: VDouble) -> VDouble3 {
    VDouble3 { z: d, ..v }
}

// di_t

#[inline(always)]
pub fn digetd_vd_di(d: Di) -> VDouble {
    d.d
}

#[inline(always)]
pub fn digeti_vi_di(d: Di) -> VInt {
    d.i
}

#[inline(always)]
pub fn disetdi_di_vd_vi(d: VDouble, i: VInt) -> Di {
    Di { d, i }
}

// ddi_t

#[inline(always)]
pub fn ddigetdd_vd2_ddi(d: Ddi) -> VDouble2 {
    d.dd
}

#[inline(always)]
pub fn ddigeti_vi_ddi(d: Ddi) -> VInt {
    d.i
}

#[inline(always)]
pub fn ddisetddi_ddi_vd2_vi(v: VDouble2, i: VInt) -> Ddi {
    Ddi { dd: v, i }
}

/// Replaces the double-double part, keeping the tag.
#[inline(always)]
pub fn ddisetdd_ddi_ddi_vd2(ddi: Ddi, v: VDouble2) -> Ddi {
    Ddi { dd: v, ..ddi }
}

// vquad

#[inline(always)]
pub fn vqgetx_vm_vq(v: VQuad) -> VMask {
    v.x
}

#[inline(always)]
pub fn vqgety_vm_vq(v: VQuad) -> VMask {
    v.y
}

#[inline(always)]
pub fn vqsetxy_vq_vm_vm(x: VMask, y: VMask) -> VQuad {
    VQuad { x, y }
}

#[inline(always)]
pub fn vqsetx_vq_vq_vm(v: VQuad, x: VMask) -> VQuad {
    VQuad { x, ..v }
}

#[inline(always)]
pub fn vqsety_vq_vq_vm(v: VQuad, y: VMask) -> VQuad {
    VQuad { y, ..v }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(start: f64) -> VDouble {
        VDouble(std::array::from_fn(|i| start + i as f64))
    }

    #[test]
    fn test_vdouble2_accessors() {
        let v = vd2setxy_vd2_vd_vd(ramp(1.0), ramp(-1.0));
        assert_eq!(vd2getx_vd_vd2(v), ramp(1.0));
        assert_eq!(vd2gety_vd_vd2(v), ramp(-1.0));

        let v = vd2sety_vd2_vd2_vd(vd2setx_vd2_vd2_vd(v, ramp(4.0)), ramp(8.0));
        assert_eq!(v, VDouble2 { x: ramp(4.0), y: ramp(8.0) });
    }

    #[test]
    fn test_vdouble3_setters_touch_one_component() {
        let v = vd3setxyz_vd3_vd_vd_vd(ramp(0.0), ramp(10.0), ramp(20.0));
        assert_eq!(vd3getx_vd_vd3(v), ramp(0.0));
        assert_eq!(vd3gety_vd_vd3(v), ramp(10.0));
        assert_eq!(vd3getz_vd_vd3(v), ramp(20.0));

        let r = vd3sety_vd3_vd3_vd(v, ramp(-1.0));
        assert_eq!((r.x, r.y, r.z), (ramp(0.0), ramp(-1.0), ramp(20.0)));
        let r = vd3setz_vd3_vd3_vd(v, ramp(-2.0));
        assert_eq!((r.x, r.y, r.z), (ramp(0.0), ramp(10.0), ramp(-2.0)));
        let r = vd3setx_vd3_vd3_vd(v, ramp(-3.0));
        assert_eq!((r.x, r.y, r.z), (ramp(-3.0), ramp(10.0), ramp(20.0)));
    }

    #[test]
    fn test_dd2_accessors() {
        let a = vd2setxy_vd2_vd_vd(ramp(1.0), ramp(2.0));
        let b = vd2setxy_vd2_vd_vd(ramp(3.0), ramp(4.0));
        let d = dd2setab_dd2_vd2_vd2(a, b);
        assert_eq!(dd2geta_vd2_dd2(d), a);
        assert_eq!(dd2getb_vd2_dd2(d), b);
    }

    #[test]
    fn test_tagged_values() {
        let tag = VInt(std::array::from_fn(|i| 1 - i as i32));
        let di = disetdi_di_vd_vi(ramp(0.5), tag);
        assert_eq!(digetd_vd_di(di), ramp(0.5));
        assert_eq!(digeti_vi_di(di), tag);

        let ddi = ddisetddi_ddi_vd2_vi(vd2setxy_vd2_vd_vd(ramp(1.0), ramp(2.0)), tag);
        let replacement = vd2setxy_vd2_vd_vd(ramp(7.0), ramp(9.0));
        let ddi = ddisetdd_ddi_ddi_vd2(ddi, replacement);
        assert_eq!(ddigetdd_vd2_ddi(ddi), replacement);
        assert_eq!(ddigeti_vi_ddi(ddi), tag);
    }

    #[test]
    fn test_vquad_accessors() {
        let q = vqsetxy_vq_vm_vm(VMask::splat(1), VMask::splat(2));
        assert_eq!(vqgetx_vm_vq(q), VMask::splat(1));
        assert_eq!(vqgety_vm_vq(q), VMask::splat(2));

        let q = vqsetx_vq_vq_vm(q, VMask::splat(u64::MAX));
        assert_eq!(vqgetx_vm_vq(q), VMask::splat(u64::MAX));
        assert_eq!(vqgety_vm_vq(q), VMask::splat(2));

        let q = vqsety_vq_vq_vm(q, VMask::splat(0));
        assert_eq!(vqgetx_vm_vq(q), VMask::splat(u64::MAX));
        assert_eq!(vqgety_vm_vq(q), VMask::splat(0));
    }
}

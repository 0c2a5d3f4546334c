//! Multi-component single-precision values.
//!
//! On RVV these are packed into one wide register group because vector types
//! cannot live in a struct; here they are plain structs. Component 0 is the
//! primary (high) value and the integer tag, when present, comes last.

use super::{VFloat, VInt2};
use crate::simd::vector::lanewise;

/// Float-float value: `x` is the high part, `y` the low part (`vfloat2`).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct VFloat2 {
    pub x: VFloat,
    pub y: VFloat,
}

/// Pair of float-float values (`df2`).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Df2 {
    pub a: VFloat2,
    pub b: VFloat2,
}

/// Float value tagged with an integer, e.g. a reduced argument and its quadrant (`fi_t`).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Fi {
    pub d: VFloat,
    pub i: VInt2,
}

/// Float-float value tagged with an integer (`dfi_t`).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Dfi {
    pub df: VFloat2,
    pub i: VInt2,
}

// fi_t

#[inline(always)]
pub fn figetd_vf_di(d: Fi) -> VFloat {
    d.d
}

#[inline(always)]
pub fn figeti_vi2_di(d: Fi) -> VInt2 {
    d.i
}

#[inline(always)]
pub fn fisetdi_fi_vf_vi2(d: VFloat, i: VInt2) -> Fi {
    Fi { d, i }
}

// dfi_t

#[inline(always)]
pub fn dfigetdf_vf2_dfi(d: Dfi) -> VFloat2 {
    d.df
}

#[inline(always)]
pub fn dfigeti_vi2_dfi(d: Dfi) -> VInt2 {
    d.i
}

#[inline(always)]
pub fn dfisetdfi_dfi_vf2_vi2(v: VFloat2, i: VInt2) -> Dfi {
    Dfi { df: v, i }
}

/// Replaces the float-float part, keeping the tag.
#[inline(always)]
pub fn dfisetdf_dfi_dfi_vf2(dfi: Dfi, v: VFloat2) -> Dfi {
    Dfi { df: v, ..dfi }
}

// vfloat2

#[inline(always)]
pub fn vf2getx_vf_vf2(v: VFloat2) -> VFloat {
    v.x
}

#[inline(always)]
pub fn vf2gety_vf_vf2(v: VFloat2) -> VFloat {
    v.y
}

#[inline(always)]
pub fn vf2setxy_vf2_vf_vf(x: VFloat, y: VFloat) -> VFloat2 {
    VFloat2 { x, y }
}

#[inline(always)]
pub fn vf2setx_vf2_vf2_vf(v: VFloat2, d: VFloat) -> VFloat2 {
    VFloat2 { x: d, ..v }
}

#[inline(always)]
pub fn vf2sety_vf2_vf2_vf(v: VFloat2, d: VFloat) -> VFloat2 {
    VFloat2 { y: d, ..v }
}

// df2

#[inline(always)]
pub fn df2setab_df2_vf2_vf2(a: VFloat2, b: VFloat2) -> Df2 {
    Df2 { a, b }
}

#[inline(always)]
pub fn df2geta_vf2_df2(d: Df2) -> VFloat2 {
    d.a
}

#[inline(always)]
pub fn df2getb_vf2_df2(d: Df2) -> VFloat2 {
    d.b
}

// bit casts between the float and integer views of a lane

#[inline(always)]
pub fn vreinterpret_vi2_vf(vf: VFloat) -> VInt2 {
    VInt2(lanewise(vf.0, |f| f.to_bits() as i32))
}

#[inline(always)]
pub fn vreinterpret_vf_vi2(vi: VInt2) -> VFloat {
    VFloat(lanewise(vi.0, |i| f32::from_bits(i as u32)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VECTLENSP;

    fn ramp(start: f32) -> VFloat {
        VFloat(std::array::from_fn(|i| start + i as f32))
    }

    #[test]
    fn test_vfloat2_accessors() {
        let v = vf2setxy_vf2_vf_vf(ramp(1.0), ramp(-1.0));
        assert_eq!(vf2getx_vf_vf2(v), ramp(1.0));
        assert_eq!(vf2gety_vf_vf2(v), ramp(-1.0));

        let v = vf2setx_vf2_vf2_vf(v, VFloat::splat(9.0));
        assert_eq!(vf2getx_vf_vf2(v), VFloat::splat(9.0));
        assert_eq!(vf2gety_vf_vf2(v), ramp(-1.0));

        let v = vf2sety_vf2_vf2_vf(v, VFloat::splat(0.5));
        assert_eq!(vf2getx_vf_vf2(v), VFloat::splat(9.0));
        assert_eq!(vf2gety_vf_vf2(v), VFloat::splat(0.5));
    }

    #[test]
    fn test_df2_accessors() {
        let a = vf2setxy_vf2_vf_vf(ramp(0.0), ramp(10.0));
        let b = vf2setxy_vf2_vf_vf(ramp(20.0), ramp(30.0));
        let d = df2setab_df2_vf2_vf2(a, b);
        assert_eq!(df2geta_vf2_df2(d), a);
        assert_eq!(df2getb_vf2_df2(d), b);
    }

    #[test]
    fn test_fi_tag_is_independent_of_value() {
        let tag = VInt2(std::array::from_fn(|i| i as i32 - 3));
        let fi = fisetdi_fi_vf_vi2(ramp(0.25), tag);
        assert_eq!(figetd_vf_di(fi), ramp(0.25));
        assert_eq!(figeti_vi2_di(fi), tag);
    }

    #[test]
    fn test_dfi_set_df_keeps_tag() {
        let tag = VInt2::splat(3);
        let dfi = dfisetdfi_dfi_vf2_vi2(vf2setxy_vf2_vf_vf(ramp(1.0), ramp(2.0)), tag);
        let replacement = vf2setxy_vf2_vf_vf(ramp(5.0), ramp(6.0));

        let dfi = dfisetdf_dfi_dfi_vf2(dfi, replacement);
        assert_eq!(dfigetdf_vf2_dfi(dfi), replacement);
        assert_eq!(dfigeti_vi2_dfi(dfi), tag);
    }

    #[test]
    fn test_reinterpret_is_bit_exact() {
        let v = VFloat(std::array::from_fn(|i| if i % 2 == 0 { -0.0 } else { 1.0 }));
        let bits = vreinterpret_vi2_vf(v);
        for i in 0..VECTLENSP {
            let expected = if i % 2 == 0 { i32::MIN } else { 0x3f80_0000 };
            assert_eq!(bits.lane(i), expected);
        }

        let back = vreinterpret_vf_vi2(bits);
        for i in 0..VECTLENSP {
            assert_eq!(back.lane(i).to_bits(), v.lane(i).to_bits());
        }
    }
}

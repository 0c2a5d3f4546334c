//! Single-precision lane selection (`vmerge`).

use super::{VFloat, VInt2, VOpMask};
use crate::simd::vector::lanewise3;

/// `x` where `mask` holds, `y` elsewhere.
#[inline(always)]
pub fn vsel_vf_vo_vf_vf(mask: VOpMask, x: VFloat, y: VFloat) -> VFloat {
    VFloat(lanewise3(mask.0, x.0, y.0, |o, a, b| if o { a } else { b }))
}

/// `v1` where `mask` holds, `v0` elsewhere.
#[inline(always)]
pub fn vsel_vf_vo_f_f(mask: VOpMask, v1: f32, v0: f32) -> VFloat {
    vsel_vf_vo_vf_vf(mask, VFloat::splat(v1), VFloat::splat(v0))
}

/// First-match chain: `d0` where `o0` holds, else `d1` where `o1` holds, else `d2`.
#[inline(always)]
pub fn vsel_vf_vo_vo_f_f_f(o0: VOpMask, o1: VOpMask, d0: f32, d1: f32, d2: f32) -> VFloat {
    vsel_vf_vo_vf_vf(o0, VFloat::splat(d0), vsel_vf_vo_f_f(o1, d1, d2))
}

/// First-match chain over three predicates, falling back to `d3`.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn vsel_vf_vo_vo_vo_f_f_f_f(
    o0: VOpMask,
    o1: VOpMask,
    o2: VOpMask,
    d0: f32,
    d1: f32,
    d2: f32,
    d3: f32,
) -> VFloat {
    vsel_vf_vo_vf_vf(
        o0,
        VFloat::splat(d0),
        vsel_vf_vo_vf_vf(o1, VFloat::splat(d1), vsel_vf_vo_f_f(o2, d2, d3)),
    )
}

/// `x` where `m` holds, `y` elsewhere.
#[inline(always)]
pub fn vsel_vi2_vo_vi2_vi2(m: VOpMask, x: VInt2, y: VInt2) -> VInt2 {
    VInt2(lanewise3(m.0, x.0, y.0, |o, a, b| if o { a } else { b }))
}

/// `y` where `x` holds, zero elsewhere.
#[inline(always)]
pub fn vand_vi2_vo_vi2(x: VOpMask, y: VInt2) -> VInt2 {
    vsel_vi2_vo_vi2_vi2(x, y, VInt2::splat(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = VOpMask::LANES;

    fn alternating() -> VOpMask {
        VOpMask(std::array::from_fn(|i| i % 2 == 0))
    }

    #[test]
    fn test_select_picks_first_operand_where_set() {
        let x = VFloat::splat(1.0);
        let y = VFloat::splat(2.0);
        let r = vsel_vf_vo_vf_vf(alternating(), x, y);
        for i in 0..N {
            assert_eq!(r.lane(i), if i % 2 == 0 { 1.0 } else { 2.0 });
        }

        let r = vsel_vf_vo_f_f(alternating(), 5.0, -5.0);
        for i in 0..N {
            assert_eq!(r.lane(i), if i % 2 == 0 { 5.0 } else { -5.0 });
        }
    }

    #[test]
    fn test_two_way_chain_priority() {
        let t = VOpMask::splat(true);
        let f = VOpMask::splat(false);

        assert_eq!(vsel_vf_vo_vo_f_f_f(t, t, 0.0, 1.0, 2.0), VFloat::splat(0.0));
        assert_eq!(vsel_vf_vo_vo_f_f_f(f, t, 0.0, 1.0, 2.0), VFloat::splat(1.0));
        assert_eq!(vsel_vf_vo_vo_f_f_f(f, f, 0.0, 1.0, 2.0), VFloat::splat(2.0));
    }

    #[test]
    fn test_three_way_chain_priority() {
        let t = VOpMask::splat(true);
        let f = VOpMask::splat(false);
        let sel = |o0, o1, o2| vsel_vf_vo_vo_vo_f_f_f_f(o0, o1, o2, 0.0, 1.0, 2.0, 3.0);

        assert_eq!(sel(t, t, t), VFloat::splat(0.0));
        assert_eq!(sel(f, t, t), VFloat::splat(1.0));
        assert_eq!(sel(f, f, t), VFloat::splat(2.0));
        assert_eq!(sel(f, f, f), VFloat::splat(3.0));

        // per lane: lane 0 matches o0 only, every other lane falls through
        let o0 = VOpMask(std::array::from_fn(|i| i == 0));
        let r = sel(o0, f, f);
        assert_eq!(r.lane(0), 0.0);
        for i in 1..N {
            assert_eq!(r.lane(i), 3.0);
        }
    }

    #[test]
    fn test_int_select_and_mask() {
        let x = VInt2::splat(7);
        let y = VInt2::splat(-7);
        let r = vsel_vi2_vo_vi2_vi2(alternating(), x, y);
        let z = vand_vi2_vo_vi2(alternating(), x);
        for i in 0..N {
            assert_eq!(r.lane(i), if i % 2 == 0 { 7 } else { -7 });
            assert_eq!(z.lane(i), if i % 2 == 0 { 7 } else { 0 });
        }
    }
}

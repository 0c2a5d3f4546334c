//! Single-precision broadcasts and conversions.

use super::{VFloat, VInt2};
use crate::simd::lanes::{self, FloatLane};
use crate::simd::vector::lanewise;

#[inline(always)]
pub fn vcast_vf_f(f: f32) -> VFloat {
    VFloat::splat(f)
}

#[inline(always)]
pub fn vcast_vi2_i(i: i32) -> VInt2 {
    VInt2::splat(i)
}

#[inline(always)]
pub fn vcast_vf_vi2(vi: VInt2) -> VFloat {
    VFloat(lanewise(vi.0, f32::from_lane_i32))
}

/// Round to nearest integer, as a float.
///
/// The rounding mode register cannot be set safely around a single operation,
/// so this adds a 0.5 carrying the input's sign and truncates: halfway cases
/// round away from zero (`2.5 -> 3.0`, `-2.5 -> -3.0`), not to even.
#[inline(always)]
pub fn vrint_vf_vf(vd: VFloat) -> VFloat {
    vcast_vf_vi2(vrint_vi2_vf(vd))
}

/// Round to nearest integer with the same halfway behaviour as [`vrint_vf_vf`].
#[inline(always)]
pub fn vrint_vi2_vf(vf: VFloat) -> VInt2 {
    VInt2(lanewise(vf.0, lanes::rint_i32))
}

#[inline(always)]
pub fn vtruncate_vi2_vf(vf: VFloat) -> VInt2 {
    VInt2(lanewise(vf.0, lanes::cvt_rtz_i32))
}

#[inline(always)]
pub fn vtruncate_vf_vf(vf: VFloat) -> VFloat {
    vcast_vf_vi2(vtruncate_vi2_vf(vf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcasts() {
        assert_eq!(vcast_vf_f(1.5).to_array(), [1.5; VFloat::LANES]);
        assert_eq!(vcast_vi2_i(-4).to_array(), [-4; VInt2::LANES]);
    }

    #[test]
    fn test_rint_halfway_cases_round_away_from_zero() {
        let cases = [(2.5f32, 3.0f32), (-2.5, -3.0), (3.5, 4.0), (0.5, 1.0), (-0.5, -1.0)];

        for (input, expected) in cases {
            assert_eq!(vrint_vf_vf(vcast_vf_f(input)), vcast_vf_f(expected), "{input}");
            assert_eq!(
                vrint_vi2_vf(vcast_vf_f(input)),
                vcast_vi2_i(expected as i32),
                "{input}"
            );
        }
    }

    #[test]
    fn test_rint_non_halfway() {
        assert_eq!(vrint_vf_vf(vcast_vf_f(2.4)), vcast_vf_f(2.0));
        assert_eq!(vrint_vf_vf(vcast_vf_f(-2.6)), vcast_vf_f(-3.0));
        assert_eq!(vrint_vi2_vf(vcast_vf_f(1e9)), vcast_vi2_i(1_000_000_000));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(vtruncate_vf_vf(vcast_vf_f(-2.9)), vcast_vf_f(-2.0));
        assert_eq!(vtruncate_vi2_vf(vcast_vf_f(2.9)), vcast_vi2_i(2));
        assert_eq!(vtruncate_vi2_vf(vcast_vf_f(f32::NAN)), vcast_vi2_i(i32::MAX));
        assert_eq!(vtruncate_vi2_vf(vcast_vf_f(-1e10)), vcast_vi2_i(i32::MIN));
    }

    #[test]
    fn test_int_to_float() {
        let vi = VInt2(std::array::from_fn(|i| i as i32 - 2));
        let vf = vcast_vf_vi2(vi);
        for i in 0..VFloat::LANES {
            assert_eq!(vf.lane(i), i as f32 - 2.0);
        }
    }
}

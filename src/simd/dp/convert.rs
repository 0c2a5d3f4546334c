//! Double-precision broadcasts and conversions.
//!
//! Double to integer conversions narrow into 32-bit lanes (`vfncvt.rtz.x.f.w`),
//! integer to double conversions widen (`vfwcvt.f.x.v`).

use super::{VDouble, VInt};
use crate::simd::lanes::{self, FloatLane};
use crate::simd::vector::lanewise;

#[inline(always)]
pub fn vcast_vd_d(d: f64) -> VDouble {
    VDouble::splat(d)
}

#[inline(always)]
pub fn vcast_vi_i(i: i32) -> VInt {
    VInt::splat(i)
}

/// Exact: every `i32` is representable as an `f64`.
#[inline(always)]
pub fn vcast_vd_vi(vi: VInt) -> VDouble {
    VDouble(lanewise(vi.0, f64::from_lane_i32))
}

/// Round to nearest integer, halfway cases away from zero.
///
/// Emulated with a signed 0.5 addend and a truncating conversion, so the
/// result saturates to the `i32` range.
#[inline(always)]
pub fn vrint_vi_vd(vd: VDouble) -> VInt {
    VInt(lanewise(vd.0, lanes::rint_i32))
}

/// [`vrint_vi_vd`] widened back to double. Inputs outside the `i32` range
/// come back clamped, NaN comes back as `2147483647.0`.
#[inline(always)]
pub fn vrint_vd_vd(vd: VDouble) -> VDouble {
    vcast_vd_vi(vrint_vi_vd(vd))
}

#[inline(always)]
pub fn vtruncate_vi_vd(vd: VDouble) -> VInt {
    VInt(lanewise(vd.0, lanes::cvt_rtz_i32))
}

#[inline(always)]
pub fn vtruncate_vd_vd(vd: VDouble) -> VDouble {
    vcast_vd_vi(vtruncate_vi_vd(vd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rint_halfway_cases() {
        for (input, expected) in [(2.5f64, 3i32), (-2.5, -3), (3.5, 4), (-0.5, -1), (1.5, 2)] {
            assert_eq!(vrint_vi_vd(vcast_vd_d(input)), vcast_vi_i(expected), "{input}");
            assert_eq!(
                vrint_vd_vd(vcast_vd_d(input)),
                vcast_vd_d(expected as f64),
                "{input}"
            );
        }
    }

    #[test]
    fn test_rint_saturates_through_i32() {
        assert_eq!(vrint_vd_vd(vcast_vd_d(1e12)), vcast_vd_d(i32::MAX as f64));
        assert_eq!(vrint_vd_vd(vcast_vd_d(-1e12)), vcast_vd_d(i32::MIN as f64));
        assert_eq!(vrint_vi_vd(vcast_vd_d(f64::NAN)), vcast_vi_i(i32::MAX));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(vtruncate_vi_vd(vcast_vd_d(-7.99)), vcast_vi_i(-7));
        assert_eq!(vtruncate_vd_vd(vcast_vd_d(7.99)), vcast_vd_d(7.0));
        assert_eq!(vtruncate_vd_vd(vcast_vd_d(-0.5)), vcast_vd_d(0.0));
    }

    #[test]
    fn test_int_to_double_is_exact() {
        let vi = VInt(std::array::from_fn(|i| i32::MAX - i as i32));
        let vd = vcast_vd_vi(vi);
        for i in 0..VDouble::LANES {
            assert_eq!(vd.lane(i), (i32::MAX - i as i32) as f64);
        }
    }
}

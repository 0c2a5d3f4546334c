//! Per-lane semantics of the RISC-V vector instructions the HAL stands in for.
//!
//! Each vector primitive is an elementwise loop over one of these functions.
//! They reproduce what the hardware does for a single element, including the
//! cases where that differs from Rust's own operators:
//!
//! - `vfcvt.rtz.x.f` saturates, and converts NaN to `i32::MAX` (Rust's `as` gives 0)
//! - `vfmin`/`vfmax` return the non-NaN operand and order `-0.0` below `+0.0`
//! - sign injection (`vfsgnj`, `vfsgnjn`, `vfsgnjx`) only touches the sign bit,
//!   so NaN payloads survive negation and `abs`

use num::{Float, PrimInt, ToPrimitive};

/// A floating-point lane type (`f32` or `f64`) with access to its raw bits.
pub(crate) trait FloatLane: Float {
    type Bits: PrimInt;

    const SIGN_MASK: Self::Bits;
    const HALF: Self;

    fn lane_bits(self) -> Self::Bits;
    fn from_lane_bits(bits: Self::Bits) -> Self;

    /// `vfcvt.f.x` / `vfwcvt.f.x`: signed 32-bit integer to float, round to nearest.
    fn from_lane_i32(value: i32) -> Self;
}

impl FloatLane for f32 {
    type Bits = u32;

    const SIGN_MASK: u32 = 1 << 31;
    const HALF: f32 = 0.5;

    #[inline(always)]
    fn lane_bits(self) -> u32 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_lane_bits(bits: u32) -> f32 {
        f32::from_bits(bits)
    }

    #[inline(always)]
    fn from_lane_i32(value: i32) -> f32 {
        value as f32
    }
}

impl FloatLane for f64 {
    type Bits = u64;

    const SIGN_MASK: u64 = 1 << 63;
    const HALF: f64 = 0.5;

    #[inline(always)]
    fn lane_bits(self) -> u64 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_lane_bits(bits: u64) -> f64 {
        f64::from_bits(bits)
    }

    #[inline(always)]
    fn from_lane_i32(value: i32) -> f64 {
        f64::from(value)
    }
}

/// `vfsgnj`: magnitude of `x`, sign of `y`.
#[inline(always)]
pub(crate) fn sgnj<T: FloatLane>(x: T, y: T) -> T {
    T::from_lane_bits((x.lane_bits() & !T::SIGN_MASK) | (y.lane_bits() & T::SIGN_MASK))
}

/// `vfsgnjx`: magnitude of `x`, sign of `x` xor sign of `y`.
#[inline(always)]
pub(crate) fn sgnjx<T: FloatLane>(x: T, y: T) -> T {
    T::from_lane_bits(x.lane_bits() ^ (y.lane_bits() & T::SIGN_MASK))
}

/// Magnitude of `x`, sign of `x` or sign of `y`.
#[inline(always)]
pub(crate) fn orsign<T: FloatLane>(x: T, y: T) -> T {
    T::from_lane_bits(x.lane_bits() | (y.lane_bits() & T::SIGN_MASK))
}

/// `vfneg` (`vfsgnjn x, x`): flips the sign bit only.
#[inline(always)]
pub(crate) fn neg<T: FloatLane>(x: T) -> T {
    T::from_lane_bits(x.lane_bits() ^ T::SIGN_MASK)
}

/// `vfabs` (`vfsgnjx x, x`): clears the sign bit only.
#[inline(always)]
pub(crate) fn abs<T: FloatLane>(x: T) -> T {
    T::from_lane_bits(x.lane_bits() & !T::SIGN_MASK)
}

/// `vfmin`: IEEE 754-2019 `minimumNumber`.
#[inline(always)]
pub(crate) fn fmin<T: FloatLane>(a: T, b: T) -> T {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => T::nan(),
        (true, false) => b,
        (false, true) => a,
        // -0.0 == +0.0, pick the negative one
        _ if a == b => {
            if a.is_sign_negative() {
                a
            } else {
                b
            }
        }
        _ => a.min(b),
    }
}

/// `vfmax`: IEEE 754-2019 `maximumNumber`.
#[inline(always)]
pub(crate) fn fmax<T: FloatLane>(a: T, b: T) -> T {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => T::nan(),
        (true, false) => b,
        (false, true) => a,
        _ if a == b => {
            if a.is_sign_positive() {
                a
            } else {
                b
            }
        }
        _ => a.max(b),
    }
}

/// `vfcvt.rtz.x.f` / `vfncvt.rtz.x.f.w`: truncate toward zero into an `i32`.
///
/// Out-of-range inputs saturate; NaN converts to `i32::MAX`.
#[inline(always)]
pub(crate) fn cvt_rtz_i32<T: FloatLane>(x: T) -> i32 {
    x.to_i32().unwrap_or(if x.is_nan() || x.is_sign_positive() {
        i32::MAX
    } else {
        i32::MIN
    })
}

/// Round-to-nearest without touching the rounding mode: add a 0.5 carrying the
/// sign of `x`, then truncate. Halfway cases go away from zero.
#[inline(always)]
pub(crate) fn rint_i32<T: FloatLane>(x: T) -> i32 {
    cvt_rtz_i32(x + sgnj(T::HALF, x))
}

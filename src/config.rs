//! Build-time vector configuration.
//!
//! The build script resolves the VLEN configuration (`RVV_HAL_CONFIG`, or the
//! minimum VLEN of the target) and the register-group class (`rvvm1` feature),
//! and generates the constants included below. Everything here is `const`:
//! lane counts are fixed when the crate is compiled, never chosen at runtime.
//!
//! | Constant | Meaning |
//! |----------|---------|
//! | [`VLEN`] | Vector register width in bits |
//! | [`SP_LMUL`], [`DP_LMUL`] | Register-group multiplier per precision |
//! | [`VECTLENSP`] | `f32` lanes per vector: `SP_LMUL * VLEN / 32` |
//! | [`VECTLENDP`] | `f64` lanes per vector: `DP_LMUL * VLEN / 64` |

use std::fmt;

include!(concat!(env!("OUT_DIR"), "/rvv_config.rs"));

/// Number of single-precision lanes in a [`crate::simd::sp::VFloat`].
pub const VECTLENSP: usize = SP_LMUL * VLEN / 32;

/// Number of double-precision lanes in a [`crate::simd::dp::VDouble`].
pub const VECTLENDP: usize = DP_LMUL * VLEN / 64;

const _: () = assert!(VECTLENDP > 0, "configuration yields no double-precision lanes");
const _: () = assert!(VECTLENSP == 2 * VECTLENDP);

/// IEEE-754 double-precision infinity, compared against by `visinf`/`vispinf`.
pub const INFINITY: f64 = f64::INFINITY;

/// IEEE-754 single-precision infinity.
pub const INFINITYF: f32 = f32::INFINITY;

/// `CONFIG` value that selects the target's minimum VLEN.
pub const MIN_VLEN_CONFIG: u32 = 1;

/// Sentinel returned by [`vavailability_i`]: the extension cannot be probed.
pub const AVAILABILITY_UNKNOWN: i32 = -1;

/// Runtime capability probe for the dispatcher.
///
/// RVV availability is not determinable from user space here, so this always
/// reports [`AVAILABILITY_UNKNOWN`].
#[inline(always)]
pub fn vavailability_i(_name: i32) -> i32 {
    AVAILABILITY_UNKNOWN
}

/// Summary of the configuration the crate was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorConfig {
    pub config: u32,
    pub vlen: usize,
    pub sp_lmul: usize,
    pub dp_lmul: usize,
    pub sp_lanes: usize,
    pub dp_lanes: usize,
    pub isa_name: &'static str,
}

impl VectorConfig {
    /// The configuration selected at build time.
    pub const fn active() -> Self {
        Self {
            config: CONFIG,
            vlen: VLEN,
            sp_lmul: SP_LMUL,
            dp_lmul: DP_LMUL,
            sp_lanes: VECTLENSP,
            dp_lanes: VECTLENDP,
            isa_name: ISANAME,
        }
    }

    /// Whether the VLEN was taken from the target's minimum rather than set explicitly.
    pub const fn is_min_vlen(&self) -> bool {
        self.config == MIN_VLEN_CONFIG
    }
}

impl fmt::Display for VectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (VLEN={}, LMUL sp/dp={}/{}, lanes sp/dp={}/{})",
            self.isa_name, self.vlen, self.sp_lmul, self.dp_lmul, self.sp_lanes, self.dp_lanes
        )
    }
}

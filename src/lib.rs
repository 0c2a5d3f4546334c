//! Vector hardware-abstraction layer for RISC-V Vector (RVV) targets.
//!
//! Elementary-function libraries are written once against a small set of
//! named primitives (`vadd_vf_vf_vf`, `vsel_vd_vo_vd_vd`, `vgather_vf_p_vi2`, ...)
//! and retargeted by swapping the layer underneath. This crate provides that
//! layer for the RISC-V vector register model: vector types whose lane counts
//! follow the configured VLEN and register grouping, and every primitive as an
//! elementwise operation with the RVV instruction's exact lane semantics.
//!
//! # Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | Build-time VLEN / LMUL selection, lane counts, `ISANAME` |
//! | [`simd::sp`] | Single-precision types and primitives |
//! | [`simd::dp`] | Double-precision types and primitives |
//! | `simd::hal` | Flat view over one precision (`rvv-sp` or `rvv-dp` feature) |
//! | [`simd::slice`] | Scalar / SIMD / parallel slice drivers |
//! | [`error`] | Errors of the checked entry points |
//!
//! # Configuration
//!
//! - `RVV_HAL_CONFIG=1` (default): VLEN is the target's minimum (`zvl<N>b`, else 128)
//! - `RVV_HAL_CONFIG=k`, `6 <= k <= 16`: VLEN is `2^k`
//! - feature `rvvm1`: register groups of one register (LMUL=1) instead of two
//!
//! # Example
//!
//! ```rust
//! use rvv_hal::simd::sp::*;
//!
//! let o0 = vlt_vo_vf_vf(vcast_vf_f(-1.0), vcast_vf_f(0.0));
//! let o1 = vgt_vo_vf_vf(vcast_vf_f(-1.0), vcast_vf_f(0.0));
//! let r = vsel_vf_vo_vo_f_f_f(o0, o1, -1.0, 1.0, 0.0);
//! assert_eq!(r, vcast_vf_f(-1.0));
//!
//! assert_eq!(vrint_vf_vf(vcast_vf_f(2.5)), vcast_vf_f(3.0));
//! ```

#[cfg(all(feature = "rvv-sp", feature = "rvv-dp"))]
compile_error!("features `rvv-sp` and `rvv-dp` are mutually exclusive: the flat `simd::hal` view can only bind one precision");

pub mod config;
pub mod error;
pub mod simd;

pub use config::{VectorConfig, ISANAME, VECTLENDP, VECTLENSP};
pub use error::{Error, Result};

/// Below this length `fast_*` drivers use the scalar loop.
pub const SIMD_THRESHOLD: usize = 64;

/// Above this length `fast_*` and `par_simd_*` drivers split the work across threads.
pub const PARALLEL_SIMD_THRESHOLD: usize = 262_144;

/// Elements per parallel task, rounded down to a whole number of vectors.
pub const PARALLEL_CHUNK_SIZE: usize = 16_384;

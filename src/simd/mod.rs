//! Vector types and primitives.
//!
//! - [`sp`]: single-precision types (`VFloat`, `VInt2`, ...) and primitives
//! - [`dp`]: double-precision types (`VDouble`, `VInt`, ...) and primitives
//! - `hal`: flat view over one of the two, selected by cargo feature
//! - [`SimdAdd`], [`SimdRint`], [`SimdGather`]: slice drivers built on top

pub mod dp;
#[cfg(any(feature = "rvv-sp", feature = "rvv-dp"))]
pub mod hal;
pub(crate) mod lanes;
pub mod slice;
pub mod sp;
pub(crate) mod vector;

pub use slice::{SimdAdd, SimdGather, SimdRint};

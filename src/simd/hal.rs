//! Flat view over one precision.
//!
//! Algorithm code written against the HAL naming convention expects a single
//! namespace where `VMask` and `VOpMask` mean one thing. Enabling exactly one
//! of the `rvv-sp` / `rvv-dp` features re-exports that precision's module here
//! together with the configuration constants:
//!
//! ```toml
//! rvv-hal = { version = "0.1", features = ["rvv-dp"] }
//! ```
//!
//! Both precisions remain reachable through [`crate::simd::sp`] and
//! [`crate::simd::dp`] regardless of the feature choice.

pub use crate::config::{
    vavailability_i, INFINITY, INFINITYF, ISANAME, VECTLENDP, VECTLENSP,
};

#[cfg(feature = "rvv-sp")]
pub use crate::simd::sp::*;

#[cfg(feature = "rvv-dp")]
pub use crate::simd::dp::*;

//! Lane-array vector types.
//!
//! RVV registers have a length fixed by the hardware configuration rather than
//! by the instruction set, so every vector type here is a newtype over an array
//! whose length comes from [`crate::config`]. The macros below generate the
//! surface shared by all of them; the precision modules add the primitives.

/// Applies `f` to every lane.
#[inline(always)]
pub(crate) fn lanewise<A: Copy, R, const N: usize>(a: [A; N], f: impl Fn(A) -> R) -> [R; N] {
    a.map(f)
}

/// Applies `f` to every pair of lanes.
#[inline(always)]
pub(crate) fn lanewise2<A: Copy, B: Copy, R, const N: usize>(
    a: [A; N],
    b: [B; N],
    f: impl Fn(A, B) -> R,
) -> [R; N] {
    std::array::from_fn(|i| f(a[i], b[i]))
}

/// Applies `f` to every triple of lanes.
#[inline(always)]
pub(crate) fn lanewise3<A: Copy, B: Copy, C: Copy, R, const N: usize>(
    a: [A; N],
    b: [B; N],
    c: [C; N],
    f: impl Fn(A, B, C) -> R,
) -> [R; N] {
    std::array::from_fn(|i| f(a[i], b[i], c[i]))
}

/// Defines a lane-array vector newtype.
macro_rules! lane_vector {
    ($(#[$meta:meta])* $vis:vis struct $name:ident([$elem:ty; $lanes:expr]);) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq)]
        #[repr(transparent)]
        $vis struct $name(pub(crate) [$elem; $lanes]);

        impl $name {
            /// Number of lanes in the vector.
            pub const LANES: usize = $lanes;

            #[inline(always)]
            pub const fn from_array(lanes: [$elem; $lanes]) -> Self {
                Self(lanes)
            }

            #[inline(always)]
            pub const fn to_array(self) -> [$elem; $lanes] {
                self.0
            }

            #[inline(always)]
            pub const fn as_array(&self) -> &[$elem; $lanes] {
                &self.0
            }

            /// Broadcasts `value` to every lane.
            #[inline(always)]
            pub const fn splat(value: $elem) -> Self {
                Self([value; $lanes])
            }

            /// Value of lane `i`. Panics if `i >= LANES`.
            #[inline(always)]
            pub fn lane(&self, i: usize) -> $elem {
                self.0[i]
            }
        }

        impl From<[$elem; $lanes]> for $name {
            #[inline(always)]
            fn from(lanes: [$elem; $lanes]) -> Self {
                Self(lanes)
            }
        }

        impl From<$name> for [$elem; $lanes] {
            #[inline(always)]
            fn from(v: $name) -> Self {
                v.0
            }
        }
    };
}

/// Contiguous memory access for a data vector (`vle`/`vse` and their slice forms).
macro_rules! contiguous_memory {
    ($name:ident, $elem:ty) => {
        impl $name {
            /// Loads `LANES` contiguous elements.
            ///
            /// # Safety
            ///
            /// `ptr` must be valid for reading `LANES` elements. No alignment is required.
            #[inline(always)]
            pub unsafe fn load(ptr: *const $elem) -> Self {
                Self(unsafe { ptr.cast::<[$elem; Self::LANES]>().read_unaligned() })
            }

            /// Stores all lanes to `LANES` contiguous elements.
            ///
            /// # Safety
            ///
            /// `ptr` must be valid for writing `LANES` elements. No alignment is required.
            #[inline(always)]
            pub unsafe fn store(self, ptr: *mut $elem) {
                unsafe { ptr.cast::<[$elem; Self::LANES]>().write_unaligned(self.0) }
            }

            /// Loads the first `LANES` elements of `slice`.
            ///
            /// # Panics
            ///
            /// Panics if `slice` is shorter than `LANES`.
            #[inline(always)]
            pub fn from_slice(slice: &[$elem]) -> Self {
                assert!(
                    slice.len() >= Self::LANES,
                    "Slice must hold at least {} elements (got {})",
                    Self::LANES,
                    slice.len()
                );

                let mut lanes = [<$elem>::default(); Self::LANES];
                lanes.copy_from_slice(&slice[..Self::LANES]);
                Self(lanes)
            }

            /// Loads up to `LANES` elements, zero-filling the lanes past the end of `slice`.
            #[inline(always)]
            pub fn load_partial(slice: &[$elem]) -> Self {
                let n = slice.len().min(Self::LANES);

                let mut lanes = [<$elem>::default(); Self::LANES];
                lanes[..n].copy_from_slice(&slice[..n]);
                Self(lanes)
            }

            /// Writes all lanes to the front of `slice`.
            ///
            /// # Panics
            ///
            /// Panics if `slice` is shorter than `LANES`.
            #[inline(always)]
            pub fn write_to_slice(self, slice: &mut [$elem]) {
                assert!(
                    slice.len() >= Self::LANES,
                    "Slice must hold at least {} elements (got {})",
                    Self::LANES,
                    slice.len()
                );

                slice[..Self::LANES].copy_from_slice(&self.0);
            }

            /// Writes the leading lanes that fit into `slice`.
            #[inline(always)]
            pub fn store_partial(self, slice: &mut [$elem]) {
                let n = slice.len().min(Self::LANES);
                slice[..n].copy_from_slice(&self.0[..n]);
            }
        }
    };
}

/// Lanewise `&`, `|`, `^` and `!` for integer, raw-mask and predicate vectors.
macro_rules! impl_bitwise {
    ($name:ident) => {
        impl std::ops::BitAnd for $name {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                Self($crate::simd::vector::lanewise2(self.0, rhs.0, |a, b| a & b))
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                Self($crate::simd::vector::lanewise2(self.0, rhs.0, |a, b| a | b))
            }
        }

        impl std::ops::BitXor for $name {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                Self($crate::simd::vector::lanewise2(self.0, rhs.0, |a, b| a ^ b))
            }
        }

        impl std::ops::Not for $name {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self($crate::simd::vector::lanewise(self.0, |a| !a))
            }
        }
    };
}

/// Lanewise wrapping `+`, `-` and unary `-` for integer vectors.
macro_rules! impl_wrapping_arith {
    ($name:ident) => {
        impl std::ops::Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self($crate::simd::vector::lanewise2(self.0, rhs.0, |a, b| {
                    a.wrapping_add(b)
                }))
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self($crate::simd::vector::lanewise2(self.0, rhs.0, |a, b| {
                    a.wrapping_sub(b)
                }))
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self($crate::simd::vector::lanewise(self.0, |a| a.wrapping_neg()))
            }
        }
    };
}

/// Lanewise `+`, `-`, `*`, `/` and sign-flipping unary `-` for float vectors.
macro_rules! impl_float_arith {
    ($name:ident) => {
        impl std::ops::Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self($crate::simd::vector::lanewise2(self.0, rhs.0, |a, b| a + b))
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self($crate::simd::vector::lanewise2(self.0, rhs.0, |a, b| a - b))
            }
        }

        impl std::ops::Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self($crate::simd::vector::lanewise2(self.0, rhs.0, |a, b| a * b))
            }
        }

        impl std::ops::Div for $name {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                Self($crate::simd::vector::lanewise2(self.0, rhs.0, |a, b| a / b))
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self($crate::simd::vector::lanewise(self.0, $crate::simd::lanes::neg))
            }
        }
    };
}

pub(crate) use {contiguous_memory, impl_bitwise, impl_float_arith, impl_wrapping_arith, lane_vector};

#[cfg(test)]
mod tests {
    use super::*;

    lane_vector! {
        struct Probe([i32; 4]);
    }
    contiguous_memory!(Probe, i32);
    impl_bitwise!(Probe);
    impl_wrapping_arith!(Probe);

    #[test]
    fn test_lanewise_helpers() {
        assert_eq!(lanewise([1, 2, 3], |a| a * 2), [2, 4, 6]);
        assert_eq!(lanewise2([1, 2], [10, 20], |a, b| a + b), [11, 22]);
        assert_eq!(
            lanewise3([true, false], [1, 1], [2, 2], |o, a, b| if o { a } else { b }),
            [1, 2]
        );
    }

    #[test]
    fn test_load_store_round_trip() {
        let src = [1, -2, 3, -4, 5];
        let v = unsafe { Probe::load(src.as_ptr()) };
        assert_eq!(v.to_array(), [1, -2, 3, -4]);

        let mut dst = [0; 4];
        unsafe { v.store(dst.as_mut_ptr()) };
        assert_eq!(dst, [1, -2, 3, -4]);
    }

    #[test]
    fn test_unaligned_load() {
        let bytes = [0u8; 4 * 4 + 1];
        let ptr = unsafe { bytes.as_ptr().add(1) } as *const i32;
        let v = unsafe { Probe::load(ptr) };
        assert_eq!(v, Probe::splat(0));
    }

    #[test]
    fn test_partial_load_zero_fills() {
        let v = Probe::load_partial(&[7, 8]);
        assert_eq!(v.to_array(), [7, 8, 0, 0]);

        let mut out = [0; 3];
        Probe::from_array([1, 2, 3, 4]).store_partial(&mut out);
        assert_eq!(out, [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "Slice must hold at least 4 elements")]
    fn test_from_slice_too_short_panics() {
        let _ = Probe::from_slice(&[1, 2, 3]);
    }

    #[test]
    fn test_wrapping_and_bitwise_ops() {
        let a = Probe::from_array([i32::MAX, 1, -1, 0]);
        let b = Probe::splat(1);
        assert_eq!((a + b).to_array(), [i32::MIN, 2, 0, 1]);
        assert_eq!((-Probe::splat(i32::MIN)).to_array(), [i32::MIN; 4]);
        assert_eq!((a & b).to_array(), [1, 1, 1, 0]);
        assert_eq!((!Probe::splat(0)).to_array(), [-1; 4]);
    }
}

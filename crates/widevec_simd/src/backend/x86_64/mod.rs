//! x86-64 backends.
//!
//! SSE2 is part of the x86-64 baseline and always available, AVX2 is only compiled in when the target enables it.
#![allow(unused_unsafe)]

/// Unsigned compares on ISAs that only provide signed ones, by flipping the sign bit of both operands.
macro_rules! impl_unsigned_cmp {
    { $raw:ty, $xor:ident; $([$gt_u:ident, $lt_u:ident, $gt:ident, $set1:ident, $min:expr])* } => {
        $(
            #[inline]
            unsafe fn $gt_u(a: $raw, b: $raw) -> $raw {
                let bias = $set1($min);
                $gt($xor(a, bias), $xor(b, bias))
            }

            #[inline]
            unsafe fn $lt_u(a: $raw, b: $raw) -> $raw {
                $gt_u(b, a)
            }
        )*
    };
}

/// Lane-by-lane fallback for 64-bit operations without a native instruction.
macro_rules! impl_lanewise_64 {
    { $raw:ty, $lanes:literal; $(cmp [$cmp_name:ident, $cmp_ty:ty, $op:tt])* $(mul [$mul_name:ident])* } => {
        $(
            #[inline]
            unsafe fn $cmp_name(a: $raw, b: $raw) -> $raw {
                let a = core::mem::transmute::<$raw, [$cmp_ty; $lanes]>(a);
                let b = core::mem::transmute::<$raw, [$cmp_ty; $lanes]>(b);
                let res : [i64; $lanes] = core::array::from_fn(|i| -((a[i] $op b[i]) as i64));
                core::mem::transmute::<[i64; $lanes], $raw>(res)
            }
        )*
        $(
            #[inline]
            unsafe fn $mul_name(a: $raw, b: $raw) -> $raw {
                let a = core::mem::transmute::<$raw, [u64; $lanes]>(a);
                let b = core::mem::transmute::<$raw, [u64; $lanes]>(b);
                let res : [u64; $lanes] = core::array::from_fn(|i| a[i].wrapping_mul(b[i]));
                core::mem::transmute::<[u64; $lanes], $raw>(res)
            }
        )*
    };
}

mod sse;
pub use sse::*;

#[cfg(target_feature = "avx2")]
mod avx2;
#[cfg(target_feature = "avx2")]
pub use avx2::*;

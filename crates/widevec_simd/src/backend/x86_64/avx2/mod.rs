use core::{
    arch::x86_64::*,
    fmt,
    marker::PhantomData,
    mem::size_of,
};

use static_assertions::assert_eq_size;

use crate::{
    SimdElement,
    backend::*,
};

mod arith;
mod cmp;
mod mask_ops;

/// Raw 256-bit register type (`__m256i`, `__m256` or `__m256d`)
pub trait Avx2Raw : Copy + Send + Sync + 'static {
    fn zero() -> Self;
    fn ones() -> Self;

    fn and(self, other: Self) -> Self;
    fn or(self, other: Self) -> Self;
    fn xor(self, other: Self) -> Self;
    /// `self & !other`
    fn andnot(self, other: Self) -> Self;

    fn to_int(self) -> __m256i;
    fn from_int(raw: __m256i) -> Self;
}

impl Avx2Raw for __m256i {
    #[inline] fn zero() -> Self { unsafe { _mm256_setzero_si256() } }
    #[inline] fn ones() -> Self { unsafe { _mm256_set1_epi32(-1) } }

    #[inline] fn and(self, other: Self) -> Self { unsafe { _mm256_and_si256(self, other) } }
    #[inline] fn or(self, other: Self) -> Self { unsafe { _mm256_or_si256(self, other) } }
    #[inline] fn xor(self, other: Self) -> Self { unsafe { _mm256_xor_si256(self, other) } }
    #[inline] fn andnot(self, other: Self) -> Self { unsafe { _mm256_andnot_si256(other, self) } }

    #[inline] fn to_int(self) -> __m256i { self }
    #[inline] fn from_int(raw: __m256i) -> Self { raw }
}

impl Avx2Raw for __m256 {
    #[inline] fn zero() -> Self { unsafe { _mm256_setzero_ps() } }
    #[inline] fn ones() -> Self { unsafe { _mm256_castsi256_ps(_mm256_set1_epi32(-1)) } }

    #[inline] fn and(self, other: Self) -> Self { unsafe { _mm256_and_ps(self, other) } }
    #[inline] fn or(self, other: Self) -> Self { unsafe { _mm256_or_ps(self, other) } }
    #[inline] fn xor(self, other: Self) -> Self { unsafe { _mm256_xor_ps(self, other) } }
    #[inline] fn andnot(self, other: Self) -> Self { unsafe { _mm256_andnot_ps(other, self) } }

    #[inline] fn to_int(self) -> __m256i { unsafe { _mm256_castps_si256(self) } }
    #[inline] fn from_int(raw: __m256i) -> Self { unsafe { _mm256_castsi256_ps(raw) } }
}

impl Avx2Raw for __m256d {
    #[inline] fn zero() -> Self { unsafe { _mm256_setzero_pd() } }
    #[inline] fn ones() -> Self { unsafe { _mm256_castsi256_pd(_mm256_set1_epi32(-1)) } }

    #[inline] fn and(self, other: Self) -> Self { unsafe { _mm256_and_pd(self, other) } }
    #[inline] fn or(self, other: Self) -> Self { unsafe { _mm256_or_pd(self, other) } }
    #[inline] fn xor(self, other: Self) -> Self { unsafe { _mm256_xor_pd(self, other) } }
    #[inline] fn andnot(self, other: Self) -> Self { unsafe { _mm256_andnot_pd(other, self) } }

    #[inline] fn to_int(self) -> __m256i { unsafe { _mm256_castpd_si256(self) } }
    #[inline] fn from_int(raw: __m256i) -> Self { unsafe { _mm256_castsi256_pd(raw) } }
}

/// Element types that fit an AVX2 register
pub trait Avx2Lane : SimdElement {
    type Raw : Avx2Raw;
}

macro_rules! impl_lane {
    { $([$ty:ty, $raw:ty])* } => {
        $(
            impl Avx2Lane for $ty {
                type Raw = $raw;
            }
        )*
    };
}
impl_lane!{
    [i8 , __m256i]
    [u8 , __m256i]
    [i16, __m256i]
    [u16, __m256i]
    [i32, __m256i]
    [u32, __m256i]
    [i64, __m256i]
    [u64, __m256i]
    [f32, __m256 ]
    [f64, __m256d]
}

/// AVX2 data register
#[repr(transparent)]
pub struct Reg256<T: Avx2Lane>(T::Raw, PhantomData<T>);

/// AVX2 mask register, every lane is all-ones or all-zeros
#[repr(transparent)]
pub struct Mask256<T: Avx2Lane>(T::Raw, PhantomData<T>);

assert_eq_size!(Reg256<f32>, __m256i);
assert_eq_size!(Mask256<f64>, __m256i);

macro_rules! impl_register_common {
    { $($reg:ident)* } => {
        $(
            impl<T: Avx2Lane> $reg<T> {
                #[inline]
                pub(crate) fn from_raw(raw: T::Raw) -> Self {
                    Self(raw, PhantomData)
                }

                /// Get the underlying intrinsic type
                #[inline]
                pub fn into_raw(self) -> T::Raw {
                    self.0
                }
            }

            impl<T: Avx2Lane> Clone for $reg<T> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<T: Avx2Lane> Copy for $reg<T> {}

            impl<T: Avx2Lane> fmt::Debug for $reg<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($reg)).field(&self.0.to_int()).finish()
                }
            }

            impl<T: Avx2Lane> NativeBitwise for $reg<T> {
                #[inline]
                fn and(self, other: Self) -> Self {
                    Self::from_raw(self.0.and(other.0))
                }

                #[inline]
                fn or(self, other: Self) -> Self {
                    Self::from_raw(self.0.or(other.0))
                }

                #[inline]
                fn xor(self, other: Self) -> Self {
                    Self::from_raw(self.0.xor(other.0))
                }

                #[inline]
                fn andnot(self, other: Self) -> Self {
                    Self::from_raw(self.0.andnot(other.0))
                }

                #[inline]
                fn not(self) -> Self {
                    Self::from_raw(self.0.xor(T::Raw::ones()))
                }
            }

            impl<T: Avx2Lane> NativeRegister for $reg<T> {
                type Bits = __m256i;
                const LANES : usize = 32 / size_of::<T>();

                #[inline]
                fn to_bits(self) -> __m256i {
                    self.0.to_int()
                }
            }
        )*
    };
}
impl_register_common!{ Reg256 Mask256 }

/// AVX2 backend, 256-bit registers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Avx2;

impl Backend for Avx2 {
    const TYPE : BackendType = BackendType::AVX2;
    const REGISTER_BYTES : usize = 32;

    type Bits = __m256i;

    #[inline]
    fn bits_eq(a: __m256i, b: __m256i) -> bool {
        unsafe { _mm256_movemask_epi8(_mm256_cmpeq_epi8(a, b)) == -1 }
    }

    type I8Reg  = Reg256<i8 >;
    type U8Reg  = Reg256<u8 >;
    type I16Reg = Reg256<i16>;
    type U16Reg = Reg256<u16>;
    type I32Reg = Reg256<i32>;
    type U32Reg = Reg256<u32>;
    type I64Reg = Reg256<i64>;
    type U64Reg = Reg256<u64>;
    type F32Reg = Reg256<f32>;
    type F64Reg = Reg256<f64>;

    type MaskI8Reg  = Mask256<u8 >;
    type MaskI16Reg = Mask256<u16>;
    type MaskI32Reg = Mask256<u32>;
    type MaskI64Reg = Mask256<u64>;
    type MaskF32Reg = Mask256<f32>;
    type MaskF64Reg = Mask256<f64>;
}

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

/// Raw 128-bit register type (`__m128i`, `__m128` or `__m128d`)
pub trait SseRaw : Copy + Send + Sync + 'static {
    fn zero() -> Self;
    fn ones() -> Self;

    fn and(self, other: Self) -> Self;
    fn or(self, other: Self) -> Self;
    fn xor(self, other: Self) -> Self;
    /// `self & !other`
    fn andnot(self, other: Self) -> Self;

    fn to_int(self) -> __m128i;
    fn from_int(raw: __m128i) -> Self;
}

impl SseRaw for __m128i {
    #[inline] fn zero() -> Self { unsafe { _mm_setzero_si128() } }
    #[inline] fn ones() -> Self { unsafe { _mm_set1_epi32(-1) } }

    #[inline] fn and(self, other: Self) -> Self { unsafe { _mm_and_si128(self, other) } }
    #[inline] fn or(self, other: Self) -> Self { unsafe { _mm_or_si128(self, other) } }
    #[inline] fn xor(self, other: Self) -> Self { unsafe { _mm_xor_si128(self, other) } }
    #[inline] fn andnot(self, other: Self) -> Self { unsafe { _mm_andnot_si128(other, self) } }

    #[inline] fn to_int(self) -> __m128i { self }
    #[inline] fn from_int(raw: __m128i) -> Self { raw }
}

impl SseRaw for __m128 {
    #[inline] fn zero() -> Self { unsafe { _mm_setzero_ps() } }
    #[inline] fn ones() -> Self { unsafe { _mm_castsi128_ps(_mm_set1_epi32(-1)) } }

    #[inline] fn and(self, other: Self) -> Self { unsafe { _mm_and_ps(self, other) } }
    #[inline] fn or(self, other: Self) -> Self { unsafe { _mm_or_ps(self, other) } }
    #[inline] fn xor(self, other: Self) -> Self { unsafe { _mm_xor_ps(self, other) } }
    #[inline] fn andnot(self, other: Self) -> Self { unsafe { _mm_andnot_ps(other, self) } }

    #[inline] fn to_int(self) -> __m128i { unsafe { _mm_castps_si128(self) } }
    #[inline] fn from_int(raw: __m128i) -> Self { unsafe { _mm_castsi128_ps(raw) } }
}

impl SseRaw for __m128d {
    #[inline] fn zero() -> Self { unsafe { _mm_setzero_pd() } }
    #[inline] fn ones() -> Self { unsafe { _mm_castsi128_pd(_mm_set1_epi32(-1)) } }

    #[inline] fn and(self, other: Self) -> Self { unsafe { _mm_and_pd(self, other) } }
    #[inline] fn or(self, other: Self) -> Self { unsafe { _mm_or_pd(self, other) } }
    #[inline] fn xor(self, other: Self) -> Self { unsafe { _mm_xor_pd(self, other) } }
    #[inline] fn andnot(self, other: Self) -> Self { unsafe { _mm_andnot_pd(other, self) } }

    #[inline] fn to_int(self) -> __m128i { unsafe { _mm_castpd_si128(self) } }
    #[inline] fn from_int(raw: __m128i) -> Self { unsafe { _mm_castsi128_pd(raw) } }
}

/// Element types that fit an SSE register
pub trait SseLane : SimdElement {
    type Raw : SseRaw;
}

macro_rules! impl_lane {
    { $([$ty:ty, $raw:ty])* } => {
        $(
            impl SseLane for $ty {
                type Raw = $raw;
            }
        )*
    };
}
impl_lane!{
    [i8 , __m128i]
    [u8 , __m128i]
    [i16, __m128i]
    [u16, __m128i]
    [i32, __m128i]
    [u32, __m128i]
    [i64, __m128i]
    [u64, __m128i]
    [f32, __m128 ]
    [f64, __m128d]
}

/// SSE data register
#[repr(transparent)]
pub struct Reg128<T: SseLane>(T::Raw, PhantomData<T>);

/// SSE mask register, every lane is all-ones or all-zeros
#[repr(transparent)]
pub struct Mask128<T: SseLane>(T::Raw, PhantomData<T>);

assert_eq_size!(Reg128<f64>, __m128i);
assert_eq_size!(Mask128<f32>, __m128i);

macro_rules! impl_register_common {
    { $($reg:ident)* } => {
        $(
            impl<T: SseLane> $reg<T> {
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

            impl<T: SseLane> Clone for $reg<T> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<T: SseLane> Copy for $reg<T> {}

            impl<T: SseLane> fmt::Debug for $reg<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($reg)).field(&self.0.to_int()).finish()
                }
            }

            impl<T: SseLane> NativeBitwise for $reg<T> {
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

            impl<T: SseLane> NativeRegister for $reg<T> {
                type Bits = __m128i;
                const LANES : usize = 16 / size_of::<T>();

                #[inline]
                fn to_bits(self) -> __m128i {
                    self.0.to_int()
                }
            }
        )*
    };
}
impl_register_common!{ Reg128 Mask128 }

/// SSE2 backend, the x86-64 baseline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sse2;

impl Backend for Sse2 {
    const TYPE : BackendType = BackendType::SSE;
    const REGISTER_BYTES : usize = 16;

    type Bits = __m128i;

    #[inline]
    fn bits_eq(a: __m128i, b: __m128i) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpeq_epi8(a, b)) == 0xFFFF }
    }

    type I8Reg  = Reg128<i8 >;
    type U8Reg  = Reg128<u8 >;
    type I16Reg = Reg128<i16>;
    type U16Reg = Reg128<u16>;
    type I32Reg = Reg128<i32>;
    type U32Reg = Reg128<u32>;
    type I64Reg = Reg128<i64>;
    type U64Reg = Reg128<u64>;
    type F32Reg = Reg128<f32>;
    type F64Reg = Reg128<f64>;

    type MaskI8Reg  = Mask128<u8 >;
    type MaskI16Reg = Mask128<u16>;
    type MaskI32Reg = Mask128<u32>;
    type MaskI64Reg = Mask128<u64>;
    type MaskF32Reg = Mask128<f32>;
    type MaskF64Reg = Mask128<f64>;
}

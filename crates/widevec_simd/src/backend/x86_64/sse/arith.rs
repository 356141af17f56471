use core::{
    arch::x86_64::*,
    mem::transmute,
};

use super::{Reg128, SseRaw};
use crate::backend::*;

macro_rules! impl_vector {
    { $([$ty:ty, $lanes:literal, $raw:ty, $setzero:ident, $set1:ident, $set_ty:ty, $loadu:ident, $storeu:ident])* } => {
        $(
            impl NativeVector for Reg128<$ty> {
                type Element = $ty;

                #[inline]
                fn zero() -> Self {
                    Self::from_raw(unsafe { $setzero() })
                }

                #[inline]
                fn splat(val: $ty) -> Self {
                    Self::from_raw(unsafe { $set1(val as $set_ty) })
                }

                #[inline]
                fn load(src: &[$ty]) -> Self {
                    assert!(src.len() >= $lanes, "need {} elements to load a register, got {}", $lanes, src.len());
                    Self::from_raw(unsafe { $loadu(src.as_ptr().cast()) })
                }

                #[inline]
                fn store(self, dst: &mut [$ty]) {
                    assert!(dst.len() >= $lanes, "need {} elements to store a register, got {}", $lanes, dst.len());
                    unsafe { $storeu(dst.as_mut_ptr().cast(), self.0) }
                }

                #[inline]
                fn extract(self, lane: usize) -> $ty {
                    let lanes = unsafe { transmute::<$raw, [$ty; $lanes]>(self.0) };
                    lanes[lane]
                }

                #[inline]
                fn from_bits(bits: __m128i) -> Self {
                    Self::from_raw(SseRaw::from_int(bits))
                }
            }
        )*
    };
}
impl_vector!{
    [i8 , 16, __m128i, _mm_setzero_si128, _mm_set1_epi8  , i8 , _mm_loadu_si128, _mm_storeu_si128]
    [u8 , 16, __m128i, _mm_setzero_si128, _mm_set1_epi8  , i8 , _mm_loadu_si128, _mm_storeu_si128]
    [i16, 8 , __m128i, _mm_setzero_si128, _mm_set1_epi16 , i16, _mm_loadu_si128, _mm_storeu_si128]
    [u16, 8 , __m128i, _mm_setzero_si128, _mm_set1_epi16 , i16, _mm_loadu_si128, _mm_storeu_si128]
    [i32, 4 , __m128i, _mm_setzero_si128, _mm_set1_epi32 , i32, _mm_loadu_si128, _mm_storeu_si128]
    [u32, 4 , __m128i, _mm_setzero_si128, _mm_set1_epi32 , i32, _mm_loadu_si128, _mm_storeu_si128]
    [i64, 2 , __m128i, _mm_setzero_si128, _mm_set1_epi64x, i64, _mm_loadu_si128, _mm_storeu_si128]
    [u64, 2 , __m128i, _mm_setzero_si128, _mm_set1_epi64x, i64, _mm_loadu_si128, _mm_storeu_si128]
    [f32, 4 , __m128 , _mm_setzero_ps   , _mm_set1_ps    , f32, _mm_loadu_ps   , _mm_storeu_ps   ]
    [f64, 2 , __m128d, _mm_setzero_pd   , _mm_set1_pd    , f64, _mm_loadu_pd   , _mm_storeu_pd   ]
}

// SSE2 only multiplies 16-bit lanes, so 8-bit products are built from the even and odd bytes separately
#[inline]
unsafe fn mullo_epi8(a: __m128i, b: __m128i) -> __m128i {
    let even = _mm_mullo_epi16(a, b);
    let odd = _mm_mullo_epi16(_mm_srli_epi16::<8>(a), _mm_srli_epi16::<8>(b));
    _mm_or_si128(_mm_slli_epi16::<8>(odd), _mm_and_si128(even, _mm_set1_epi16(0x00FF)))
}

// `_mm_mullo_epi32` is SSE4.1
#[inline]
unsafe fn mullo_epi32(a: __m128i, b: __m128i) -> __m128i {
    let even = _mm_mul_epu32(a, b);
    let odd = _mm_mul_epu32(_mm_srli_epi64::<32>(a), _mm_srli_epi64::<32>(b));
    _mm_unpacklo_epi32(_mm_shuffle_epi32::<0b00_00_10_00>(even), _mm_shuffle_epi32::<0b00_00_10_00>(odd))
}

impl_lanewise_64!{ __m128i, 2; mul [mullo_epi64] }

macro_rules! impl_arith {
    { $([$ty:ty, $add:ident, $sub:ident, $mul:ident])* } => {
        $(
            impl NativeArith for Reg128<$ty> {
                #[inline]
                fn add(self, other: Self) -> Self {
                    Self::from_raw(unsafe { $add(self.0, other.0) })
                }

                #[inline]
                fn sub(self, other: Self) -> Self {
                    Self::from_raw(unsafe { $sub(self.0, other.0) })
                }

                #[inline]
                fn mul(self, other: Self) -> Self {
                    Self::from_raw(unsafe { $mul(self.0, other.0) })
                }
            }
        )*
    };
}
impl_arith!{
    [i8 , _mm_add_epi8 , _mm_sub_epi8 , mullo_epi8     ]
    [u8 , _mm_add_epi8 , _mm_sub_epi8 , mullo_epi8     ]
    [i16, _mm_add_epi16, _mm_sub_epi16, _mm_mullo_epi16]
    [u16, _mm_add_epi16, _mm_sub_epi16, _mm_mullo_epi16]
    [i32, _mm_add_epi32, _mm_sub_epi32, mullo_epi32    ]
    [u32, _mm_add_epi32, _mm_sub_epi32, mullo_epi32    ]
    [i64, _mm_add_epi64, _mm_sub_epi64, mullo_epi64    ]
    [u64, _mm_add_epi64, _mm_sub_epi64, mullo_epi64    ]
    [f32, _mm_add_ps   , _mm_sub_ps   , _mm_mul_ps     ]
    [f64, _mm_add_pd   , _mm_sub_pd   , _mm_mul_pd     ]
}

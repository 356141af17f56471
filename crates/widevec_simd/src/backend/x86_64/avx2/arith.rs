use core::{
    arch::x86_64::*,
    mem::transmute,
};

use super::{Avx2Raw, Reg256};
use crate::backend::*;

macro_rules! impl_vector {
    { $([$ty:ty, $lanes:literal, $raw:ty, $setzero:ident, $set1:ident, $set_ty:ty, $loadu:ident, $storeu:ident])* } => {
        $(
            impl NativeVector for Reg256<$ty> {
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
                fn from_bits(bits: __m256i) -> Self {
                    Self::from_raw(Avx2Raw::from_int(bits))
                }
            }
        )*
    };
}
impl_vector!{
    [i8 , 32, __m256i, _mm256_setzero_si256, _mm256_set1_epi8  , i8 , _mm256_loadu_si256, _mm256_storeu_si256]
    [u8 , 32, __m256i, _mm256_setzero_si256, _mm256_set1_epi8  , i8 , _mm256_loadu_si256, _mm256_storeu_si256]
    [i16, 16, __m256i, _mm256_setzero_si256, _mm256_set1_epi16 , i16, _mm256_loadu_si256, _mm256_storeu_si256]
    [u16, 16, __m256i, _mm256_setzero_si256, _mm256_set1_epi16 , i16, _mm256_loadu_si256, _mm256_storeu_si256]
    [i32, 8 , __m256i, _mm256_setzero_si256, _mm256_set1_epi32 , i32, _mm256_loadu_si256, _mm256_storeu_si256]
    [u32, 8 , __m256i, _mm256_setzero_si256, _mm256_set1_epi32 , i32, _mm256_loadu_si256, _mm256_storeu_si256]
    [i64, 4 , __m256i, _mm256_setzero_si256, _mm256_set1_epi64x, i64, _mm256_loadu_si256, _mm256_storeu_si256]
    [u64, 4 , __m256i, _mm256_setzero_si256, _mm256_set1_epi64x, i64, _mm256_loadu_si256, _mm256_storeu_si256]
    [f32, 8 , __m256 , _mm256_setzero_ps   , _mm256_set1_ps    , f32, _mm256_loadu_ps   , _mm256_storeu_ps   ]
    [f64, 4 , __m256d, _mm256_setzero_pd   , _mm256_set1_pd    , f64, _mm256_loadu_pd   , _mm256_storeu_pd   ]
}

#[inline]
unsafe fn mullo_epi8(a: __m256i, b: __m256i) -> __m256i {
    let even = _mm256_mullo_epi16(a, b);
    let odd = _mm256_mullo_epi16(_mm256_srli_epi16::<8>(a), _mm256_srli_epi16::<8>(b));
    _mm256_or_si256(_mm256_slli_epi16::<8>(odd), _mm256_and_si256(even, _mm256_set1_epi16(0x00FF)))
}

// `_mm256_mullo_epi64` is AVX-512
impl_lanewise_64!{ __m256i, 4; mul [mullo_epi64] }

macro_rules! impl_arith {
    { $([$ty:ty, $add:ident, $sub:ident, $mul:ident])* } => {
        $(
            impl NativeArith for Reg256<$ty> {
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
    [i8 , _mm256_add_epi8 , _mm256_sub_epi8 , mullo_epi8        ]
    [u8 , _mm256_add_epi8 , _mm256_sub_epi8 , mullo_epi8        ]
    [i16, _mm256_add_epi16, _mm256_sub_epi16, _mm256_mullo_epi16]
    [u16, _mm256_add_epi16, _mm256_sub_epi16, _mm256_mullo_epi16]
    [i32, _mm256_add_epi32, _mm256_sub_epi32, _mm256_mullo_epi32]
    [u32, _mm256_add_epi32, _mm256_sub_epi32, _mm256_mullo_epi32]
    [i64, _mm256_add_epi64, _mm256_sub_epi64, mullo_epi64       ]
    [u64, _mm256_add_epi64, _mm256_sub_epi64, mullo_epi64       ]
    [f32, _mm256_add_ps   , _mm256_sub_ps   , _mm256_mul_ps     ]
    [f64, _mm256_add_pd   , _mm256_sub_pd   , _mm256_mul_pd     ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_matches_wrapping() {
        let a : [u8; 32] = core::array::from_fn(|i| (i as u8).wrapping_mul(57));
        let b : [u8; 32] = core::array::from_fn(|i| 255 - i as u8 * 3);
        let mut res = [0u8; 32];
        Reg256::<u8>::load(&a).mul(Reg256::load(&b)).store(&mut res);
        for i in 0..32 {
            assert_eq!(res[i], a[i].wrapping_mul(b[i]));
        }

        let res = Reg256::<u64>::splat(u64::MAX).mul(Reg256::splat(3));
        assert_eq!(res.extract(3), u64::MAX.wrapping_mul(3));
    }

    #[test]
    fn extract_reads_every_lane() {
        let a : [u32; 8] = core::array::from_fn(|i| (i as u32).wrapping_mul(0x9E37_79B9));
        let reg = Reg256::<u32>::load(&a);
        for lane in 0..8 {
            assert_eq!(reg.extract(lane), a[lane]);
        }

        let f = [-2.5f64, f64::MIN_POSITIVE, 0.0, 1e300];
        let reg = Reg256::<f64>::load(&f);
        for lane in 0..4 {
            assert_eq!(reg.extract(lane).to_bits(), f[lane].to_bits());
        }
    }
}

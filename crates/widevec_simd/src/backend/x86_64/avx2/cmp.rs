use core::arch::x86_64::*;

use super::{Mask256, Reg256};
use crate::backend::*;

macro_rules! impl_swapped_gt {
    { $([$lt:ident, $gt:ident])* } => {
        $(
            #[inline]
            unsafe fn $lt(a: __m256i, b: __m256i) -> __m256i {
                $gt(b, a)
            }
        )*
    };
}
impl_swapped_gt!{
    [cmplt_epi8 , _mm256_cmpgt_epi8 ]
    [cmplt_epi16, _mm256_cmpgt_epi16]
    [cmplt_epi32, _mm256_cmpgt_epi32]
    [cmplt_epi64, _mm256_cmpgt_epi64]
}

impl_unsigned_cmp!{ __m256i, _mm256_xor_si256;
    [cmpgt_epu8 , cmplt_epu8 , _mm256_cmpgt_epi8 , _mm256_set1_epi8  , i8::MIN ]
    [cmpgt_epu16, cmplt_epu16, _mm256_cmpgt_epi16, _mm256_set1_epi16 , i16::MIN]
    [cmpgt_epu32, cmplt_epu32, _mm256_cmpgt_epi32, _mm256_set1_epi32 , i32::MIN]
    [cmpgt_epu64, cmplt_epu64, _mm256_cmpgt_epi64, _mm256_set1_epi64x, i64::MIN]
}

macro_rules! impl_cmp_fp_pred {
    { $([$name:ident, $raw:ty, $cmp:ident, $pred:ident])* } => {
        $(
            #[inline]
            unsafe fn $name(a: $raw, b: $raw) -> $raw {
                $cmp::<$pred>(a, b)
            }
        )*
    };
}
impl_cmp_fp_pred!{
    [cmpeq_ps , __m256 , _mm256_cmp_ps, _CMP_EQ_OQ ]
    [cmpneq_ps, __m256 , _mm256_cmp_ps, _CMP_NEQ_UQ]
    [cmplt_ps , __m256 , _mm256_cmp_ps, _CMP_LT_OQ ]
    [cmple_ps , __m256 , _mm256_cmp_ps, _CMP_LE_OQ ]
    [cmpgt_ps , __m256 , _mm256_cmp_ps, _CMP_GT_OQ ]
    [cmpge_ps , __m256 , _mm256_cmp_ps, _CMP_GE_OQ ]
    [cmpeq_pd , __m256d, _mm256_cmp_pd, _CMP_EQ_OQ ]
    [cmpneq_pd, __m256d, _mm256_cmp_pd, _CMP_NEQ_UQ]
    [cmplt_pd , __m256d, _mm256_cmp_pd, _CMP_LT_OQ ]
    [cmple_pd , __m256d, _mm256_cmp_pd, _CMP_LE_OQ ]
    [cmpgt_pd , __m256d, _mm256_cmp_pd, _CMP_GT_OQ ]
    [cmpge_pd , __m256d, _mm256_cmp_pd, _CMP_GE_OQ ]
}

/// Integer compares, `ne`, `le` and `ge` are the inverse of `eq`, `gt` and `lt`
macro_rules! impl_cmp_int {
    { $([$ty:ty, $mask_ty:ty, $eq:ident, $gt:ident, $lt:ident])* } => {
        $(
            impl NativeCmp for Reg256<$ty> {
                type Mask = Mask256<$mask_ty>;

                #[inline]
                fn cmp_eq(self, other: Self) -> Self::Mask {
                    Mask256::from_raw(unsafe { $eq(self.0, other.0) })
                }

                #[inline]
                fn cmp_ne(self, other: Self) -> Self::Mask {
                    self.cmp_eq(other).not()
                }

                #[inline]
                fn cmp_lt(self, other: Self) -> Self::Mask {
                    Mask256::from_raw(unsafe { $lt(self.0, other.0) })
                }

                #[inline]
                fn cmp_le(self, other: Self) -> Self::Mask {
                    self.cmp_gt(other).not()
                }

                #[inline]
                fn cmp_gt(self, other: Self) -> Self::Mask {
                    Mask256::from_raw(unsafe { $gt(self.0, other.0) })
                }

                #[inline]
                fn cmp_ge(self, other: Self) -> Self::Mask {
                    self.cmp_lt(other).not()
                }
            }
        )*
    };
}
impl_cmp_int!{
    [i8 , u8 , _mm256_cmpeq_epi8 , _mm256_cmpgt_epi8 , cmplt_epi8 ]
    [u8 , u8 , _mm256_cmpeq_epi8 , cmpgt_epu8        , cmplt_epu8 ]
    [i16, u16, _mm256_cmpeq_epi16, _mm256_cmpgt_epi16, cmplt_epi16]
    [u16, u16, _mm256_cmpeq_epi16, cmpgt_epu16       , cmplt_epu16]
    [i32, u32, _mm256_cmpeq_epi32, _mm256_cmpgt_epi32, cmplt_epi32]
    [u32, u32, _mm256_cmpeq_epi32, cmpgt_epu32       , cmplt_epu32]
    [i64, u64, _mm256_cmpeq_epi64, _mm256_cmpgt_epi64, cmplt_epi64]
    [u64, u64, _mm256_cmpeq_epi64, cmpgt_epu64       , cmplt_epu64]
}

macro_rules! impl_cmp_fp {
    { $([$ty:ty, $eq:ident, $ne:ident, $lt:ident, $le:ident, $gt:ident, $ge:ident])* } => {
        $(
            impl NativeCmp for Reg256<$ty> {
                type Mask = Mask256<$ty>;

                #[inline]
                fn cmp_eq(self, other: Self) -> Self::Mask {
                    Mask256::from_raw(unsafe { $eq(self.0, other.0) })
                }

                #[inline]
                fn cmp_ne(self, other: Self) -> Self::Mask {
                    Mask256::from_raw(unsafe { $ne(self.0, other.0) })
                }

                #[inline]
                fn cmp_lt(self, other: Self) -> Self::Mask {
                    Mask256::from_raw(unsafe { $lt(self.0, other.0) })
                }

                #[inline]
                fn cmp_le(self, other: Self) -> Self::Mask {
                    Mask256::from_raw(unsafe { $le(self.0, other.0) })
                }

                #[inline]
                fn cmp_gt(self, other: Self) -> Self::Mask {
                    Mask256::from_raw(unsafe { $gt(self.0, other.0) })
                }

                #[inline]
                fn cmp_ge(self, other: Self) -> Self::Mask {
                    Mask256::from_raw(unsafe { $ge(self.0, other.0) })
                }
            }
        )*
    };
}
impl_cmp_fp!{
    [f32, cmpeq_ps, cmpneq_ps, cmplt_ps, cmple_ps, cmpgt_ps, cmpge_ps]
    [f64, cmpeq_pd, cmpneq_pd, cmplt_pd, cmple_pd, cmpgt_pd, cmpge_pd]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_64_compares() {
        let a = Reg256::<u64>::load(&[u64::MAX, 1, 5, 0]);
        let b = Reg256::<u64>::load(&[1, u64::MAX, 5, 0]);
        let gt = a.cmp_gt(b);
        assert!(gt.test(0));
        assert!(!gt.test(1));
        assert!(a.cmp_le(b).test(2));
        assert!(a.cmp_eq(b).test(3));
    }

    #[test]
    fn nan_is_unordered() {
        let a = Reg256::<f32>::splat(f32::NAN);
        assert!(!a.cmp_eq(a).any());
        assert!(a.cmp_ne(a).all());
    }
}

use core::arch::x86_64::*;

use super::{Mask128, Reg128};
use crate::backend::*;

impl_unsigned_cmp!{ __m128i, _mm_xor_si128;
    [cmpgt_epu8 , cmplt_epu8 , _mm_cmpgt_epi8 , _mm_set1_epi8 , i8::MIN ]
    [cmpgt_epu16, cmplt_epu16, _mm_cmpgt_epi16, _mm_set1_epi16, i16::MIN]
    [cmpgt_epu32, cmplt_epu32, _mm_cmpgt_epi32, _mm_set1_epi32, i32::MIN]
}

// 64-bit compares need SSE4.1/SSE4.2
impl_lanewise_64!{ __m128i, 2;
    cmp [cmpeq_epi64, i64, == ]
    cmp [cmpgt_epi64, i64, >  ]
    cmp [cmplt_epi64, i64, <  ]
    cmp [cmpgt_epu64, u64, >  ]
    cmp [cmplt_epu64, u64, <  ]
}

/// Integer compares, `ne`, `le` and `ge` are the inverse of `eq`, `gt` and `lt`
macro_rules! impl_cmp_int {
    { $([$ty:ty, $mask_ty:ty, $eq:ident, $gt:ident, $lt:ident])* } => {
        $(
            impl NativeCmp for Reg128<$ty> {
                type Mask = Mask128<$mask_ty>;

                #[inline]
                fn cmp_eq(self, other: Self) -> Self::Mask {
                    Mask128::from_raw(unsafe { $eq(self.0, other.0) })
                }

                #[inline]
                fn cmp_ne(self, other: Self) -> Self::Mask {
                    self.cmp_eq(other).not()
                }

                #[inline]
                fn cmp_lt(self, other: Self) -> Self::Mask {
                    Mask128::from_raw(unsafe { $lt(self.0, other.0) })
                }

                #[inline]
                fn cmp_le(self, other: Self) -> Self::Mask {
                    self.cmp_gt(other).not()
                }

                #[inline]
                fn cmp_gt(self, other: Self) -> Self::Mask {
                    Mask128::from_raw(unsafe { $gt(self.0, other.0) })
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
    [i8 , u8 , _mm_cmpeq_epi8 , _mm_cmpgt_epi8 , _mm_cmplt_epi8 ]
    [u8 , u8 , _mm_cmpeq_epi8 , cmpgt_epu8     , cmplt_epu8     ]
    [i16, u16, _mm_cmpeq_epi16, _mm_cmpgt_epi16, _mm_cmplt_epi16]
    [u16, u16, _mm_cmpeq_epi16, cmpgt_epu16    , cmplt_epu16    ]
    [i32, u32, _mm_cmpeq_epi32, _mm_cmpgt_epi32, _mm_cmplt_epi32]
    [u32, u32, _mm_cmpeq_epi32, cmpgt_epu32    , cmplt_epu32    ]
    [i64, u64, cmpeq_epi64    , cmpgt_epi64    , cmplt_epi64    ]
    [u64, u64, cmpeq_epi64    , cmpgt_epu64    , cmplt_epu64    ]
}

macro_rules! impl_cmp_fp {
    { $([$ty:ty, $eq:ident, $ne:ident, $lt:ident, $le:ident, $gt:ident, $ge:ident])* } => {
        $(
            impl NativeCmp for Reg128<$ty> {
                type Mask = Mask128<$ty>;

                #[inline]
                fn cmp_eq(self, other: Self) -> Self::Mask {
                    Mask128::from_raw(unsafe { $eq(self.0, other.0) })
                }

                #[inline]
                fn cmp_ne(self, other: Self) -> Self::Mask {
                    Mask128::from_raw(unsafe { $ne(self.0, other.0) })
                }

                #[inline]
                fn cmp_lt(self, other: Self) -> Self::Mask {
                    Mask128::from_raw(unsafe { $lt(self.0, other.0) })
                }

                #[inline]
                fn cmp_le(self, other: Self) -> Self::Mask {
                    Mask128::from_raw(unsafe { $le(self.0, other.0) })
                }

                #[inline]
                fn cmp_gt(self, other: Self) -> Self::Mask {
                    Mask128::from_raw(unsafe { $gt(self.0, other.0) })
                }

                #[inline]
                fn cmp_ge(self, other: Self) -> Self::Mask {
                    Mask128::from_raw(unsafe { $ge(self.0, other.0) })
                }
            }
        )*
    };
}
impl_cmp_fp!{
    [f32, _mm_cmpeq_ps, _mm_cmpneq_ps, _mm_cmplt_ps, _mm_cmple_ps, _mm_cmpgt_ps, _mm_cmpge_ps]
    [f64, _mm_cmpeq_pd, _mm_cmpneq_pd, _mm_cmplt_pd, _mm_cmple_pd, _mm_cmpgt_pd, _mm_cmpge_pd]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_compares() {
        let a = Reg128::<u8>::splat(200);
        let b = Reg128::<u8>::splat(100);
        assert!(a.cmp_gt(b).all());
        assert!(b.cmp_lt(a).all());
        assert!(!a.cmp_le(b).any());

        let a = Reg128::<u64>::load(&[u64::MAX, 1]);
        let b = Reg128::<u64>::load(&[1, u64::MAX]);
        let gt = a.cmp_gt(b);
        assert!(gt.test(0));
        assert!(!gt.test(1));
        assert!(a.cmp_ne(b).all());
    }

    #[test]
    fn signed_64_compares() {
        let a = Reg128::<i64>::load(&[-5, 7]);
        let b = Reg128::<i64>::load(&[3, 7]);
        let lt = a.cmp_lt(b);
        assert!(lt.test(0));
        assert!(!lt.test(1));
        assert!(a.cmp_ge(b).test(1));
        assert!(a.cmp_eq(b).test(1));
    }
}

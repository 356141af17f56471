use super::{BitMask, Lanes};
use crate::backend::*;

macro_rules! impl_cmp {
    { $([$ty:ty, $lanes:literal, $mask_ty:ty])* } => {
        $(
            impl NativeCmp for Lanes<$ty, $lanes> {
                type Mask = BitMask<$mask_ty, $lanes>;

                #[inline]
                fn cmp_eq(self, other: Self) -> Self::Mask {
                    BitMask::from_fn(|i| self.0[i] == other.0[i])
                }

                #[inline]
                fn cmp_ne(self, other: Self) -> Self::Mask {
                    BitMask::from_fn(|i| self.0[i] != other.0[i])
                }

                #[inline]
                fn cmp_lt(self, other: Self) -> Self::Mask {
                    BitMask::from_fn(|i| self.0[i] < other.0[i])
                }

                #[inline]
                fn cmp_le(self, other: Self) -> Self::Mask {
                    BitMask::from_fn(|i| self.0[i] <= other.0[i])
                }

                #[inline]
                fn cmp_gt(self, other: Self) -> Self::Mask {
                    BitMask::from_fn(|i| self.0[i] > other.0[i])
                }

                #[inline]
                fn cmp_ge(self, other: Self) -> Self::Mask {
                    BitMask::from_fn(|i| self.0[i] >= other.0[i])
                }
            }
        )*
    };
}
impl_cmp!{
    [i8 , 16, u8 ]
    [u8 , 16, u8 ]
    [i16, 8 , u16]
    [u16, 8 , u16]
    [i32, 4 , u32]
    [u32, 4 , u32]
    [i64, 2 , u64]
    [u64, 2 , u64]
    [f32, 4 , f32]
    [f64, 2 , f64]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_unordered() {
        let a = Lanes::<f32, 4>::from_array([1.0, f32::NAN, 3.0, 4.0]);
        let b = Lanes::<f32, 4>::from_array([1.0, f32::NAN, 2.0, 5.0]);

        assert_eq!(a.cmp_eq(b).to_bitmask(), 0b0001);
        assert_eq!(a.cmp_ne(b).to_bitmask(), 0b1110);
        assert_eq!(a.cmp_lt(b).to_bitmask(), 0b1000);
        assert_eq!(a.cmp_ge(b).to_bitmask(), 0b0101);
    }

    #[test]
    fn signedness() {
        let a = Lanes::<i8, 16>::splat(-1);
        let b = Lanes::<u8, 16>::splat(0xFF);

        assert!(a.cmp_lt(Lanes::zero()).all());
        assert!(b.cmp_gt(Lanes::zero()).all());
    }
}

use core::{
    array,
    mem::transmute,
    ops::{Add, Sub, Mul},
};

use super::{Lanes, ScalarBits};
use crate::backend::*;

fn zip_bytes(a: ScalarBits, b: ScalarBits, f: impl Fn(u8, u8) -> u8) -> ScalarBits {
    Lanes(array::from_fn(|i| f(a.0[i], b.0[i])))
}

macro_rules! impl_register {
    { $([$ty:ty, $lanes:literal, $add:ident, $sub:ident, $mul:ident])* } => {
        $(
            impl NativeBitwise for Lanes<$ty, $lanes> {
                #[inline]
                fn and(self, other: Self) -> Self {
                    Self::from_bits(zip_bytes(self.to_bits(), other.to_bits(), |a, b| a & b))
                }

                #[inline]
                fn or(self, other: Self) -> Self {
                    Self::from_bits(zip_bytes(self.to_bits(), other.to_bits(), |a, b| a | b))
                }

                #[inline]
                fn xor(self, other: Self) -> Self {
                    Self::from_bits(zip_bytes(self.to_bits(), other.to_bits(), |a, b| a ^ b))
                }

                #[inline]
                fn andnot(self, other: Self) -> Self {
                    Self::from_bits(zip_bytes(self.to_bits(), other.to_bits(), |a, b| a & !b))
                }

                #[inline]
                fn not(self) -> Self {
                    let bits = self.to_bits();
                    Self::from_bits(zip_bytes(bits, bits, |a, _| !a))
                }
            }

            impl NativeRegister for Lanes<$ty, $lanes> {
                type Bits = ScalarBits;
                const LANES : usize = $lanes;

                #[inline]
                fn to_bits(self) -> ScalarBits {
                    unsafe { transmute::<Self, ScalarBits>(self) }
                }
            }

            impl NativeVector for Lanes<$ty, $lanes> {
                type Element = $ty;

                #[inline]
                fn zero() -> Self {
                    Self([<$ty>::default(); $lanes])
                }

                #[inline]
                fn splat(val: $ty) -> Self {
                    Self([val; $lanes])
                }

                fn load(src: &[$ty]) -> Self {
                    assert!(src.len() >= $lanes, "need {} elements to load a register, got {}", $lanes, src.len());
                    Self(array::from_fn(|i| src[i]))
                }

                fn store(self, dst: &mut [$ty]) {
                    assert!(dst.len() >= $lanes, "need {} elements to store a register, got {}", $lanes, dst.len());
                    dst[..$lanes].copy_from_slice(&self.0);
                }

                #[inline]
                fn extract(self, lane: usize) -> $ty {
                    self.0[lane]
                }

                #[inline]
                fn from_bits(bits: ScalarBits) -> Self {
                    unsafe { transmute::<ScalarBits, Self>(bits) }
                }
            }

            impl NativeArith for Lanes<$ty, $lanes> {
                #[inline]
                fn add(self, other: Self) -> Self {
                    Self(array::from_fn(|i| self.0[i].$add(other.0[i])))
                }

                #[inline]
                fn sub(self, other: Self) -> Self {
                    Self(array::from_fn(|i| self.0[i].$sub(other.0[i])))
                }

                #[inline]
                fn mul(self, other: Self) -> Self {
                    Self(array::from_fn(|i| self.0[i].$mul(other.0[i])))
                }
            }
        )*
    };
}
impl_register!{
    [i8 , 16, wrapping_add, wrapping_sub, wrapping_mul]
    [u8 , 16, wrapping_add, wrapping_sub, wrapping_mul]
    [i16, 8 , wrapping_add, wrapping_sub, wrapping_mul]
    [u16, 8 , wrapping_add, wrapping_sub, wrapping_mul]
    [i32, 4 , wrapping_add, wrapping_sub, wrapping_mul]
    [u32, 4 , wrapping_add, wrapping_sub, wrapping_mul]
    [i64, 2 , wrapping_add, wrapping_sub, wrapping_mul]
    [u64, 2 , wrapping_add, wrapping_sub, wrapping_mul]
    [f32, 4 , add         , sub         , mul         ]
    [f64, 2 , add         , sub         , mul         ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_arith() {
        let a = Lanes::<u8, 16>::splat(250);
        let b = Lanes::<u8, 16>::splat(10);
        assert_eq!(a.add(b), Lanes::splat(4));
        assert_eq!(b.sub(a), Lanes::splat(16));
        assert_eq!(a.mul(b), Lanes::splat(196));
    }

    #[test]
    fn float_bitwise() {
        let a = Lanes::<f32, 4>::from_array([1.0, -2.0, 3.5, -0.0]);
        let sign = Lanes::<f32, 4>::splat(-0.0);
        assert_eq!(a.andnot(sign), Lanes::from_array([1.0, 2.0, 3.5, 0.0]));
        assert_eq!(a.xor(sign).xor(sign), a);
        assert_eq!(a.not().not().to_bits(), a.to_bits());
    }

    #[test]
    #[should_panic]
    fn load_short_slice() {
        let _ = Lanes::<i32, 4>::load(&[1, 2, 3]);
    }
}

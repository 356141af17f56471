//! Reinterpreting vectors as another category.
//!
//! A cast never changes the bits of a vector, only how they are interpreted:
//! - any vector can be cast to a data vector of the same size, masks are unmasked first.
//! - a mask can only be cast to a mask with the same lane width.
//! - data can never be cast to a mask directly, use [`Vector::try_from_unmasked`] instead.
//!
//! ```compile_fail
//! use widevec_simd::*;
//!
//! let data = Uint32::<1, Scalar>::splat(u32::MAX);
//! let mask : MaskInt32<1, Scalar> = bit_cast(data);
//! ```
//!
//! ```compile_fail
//! use widevec_simd::*;
//!
//! let mask = MaskInt32::<2, Scalar>::splat_mask(true);
//! let mask : MaskInt64<2, Scalar> = bit_cast(mask);
//! ```
use crate::{
    Backend, NativeRegister,
    Category, DataCategory, MaskCategory,
    MaskI8, MaskI16, MaskI32, MaskI64, MaskF32, MaskF64,
    Vector, any::Evaluate,
};

/// Categories a register of category `S` can be reinterpreted as
pub trait CastFrom<S: Category> : Category {
    fn cast_native<B: Backend>(src: S::Native<B>) -> Self::Native<B>;
}

impl<S: Category, T: DataCategory> CastFrom<S> for T {
    #[inline]
    fn cast_native<B: Backend>(src: S::Native<B>) -> T::Native<B> {
        T::native_from_bits::<B>(src.to_bits())
    }
}

macro_rules! impl_mask_cast {
    { $([$src:ident => $($dst:ident),*])* } => {
        $($(
            impl CastFrom<$src> for $dst {
                #[inline]
                fn cast_native<B: Backend>(src: <$src as Category>::Native<B>) -> Self::Native<B> {
                    let data = <<$dst as MaskCategory>::Data as DataCategory>::native_from_bits::<B>(src.to_bits());
                    // SAFETY: `to_bits` of a mask only holds all-ones and all-zeros lanes, and both masks have the same lane width
                    unsafe { <$dst as MaskCategory>::mask_from_unmasked_unchecked::<B>(data) }
                }
            }
        )*)*
    };
}
impl_mask_cast!{
    [MaskI8  => MaskI8]
    [MaskI16 => MaskI16]
    [MaskI32 => MaskI32, MaskF32]
    [MaskF32 => MaskF32, MaskI32]
    [MaskI64 => MaskI64, MaskF64]
    [MaskF64 => MaskF64, MaskI64]
}

/// Conversion of anything that evaluates to a vector into a vector of another category, keeping the bits
pub trait BitCast<X> {
    fn bit_cast_from(src: X) -> Self;
}

impl<T, const V: usize, B, X> BitCast<X> for Vector<T, V, B>
    where T : CastFrom<X::Kind>,
          B : Backend,
          X : Evaluate<V, B>
{
    #[inline]
    fn bit_cast_from(src: X) -> Self {
        Vector::from_natives(src.evaluate().into_natives().map(<T as CastFrom<X::Kind>>::cast_native::<B>))
    }
}

/// Reinterpret the bits of a vector or expression as another vector of the same size.
///
/// Expressions are evaluated first.
///
/// ```
/// use widevec_simd::*;
///
/// let one = Float32::<1, Scalar>::splat(1.0);
/// let mask = one.cmp_eq(one);
/// let bits : Uint32<1, Scalar> = bit_cast(mask);
/// assert_eq!(bits.extract(0), u32::MAX);
/// ```
#[inline]
pub fn bit_cast<R: BitCast<X>, X>(src: X) -> R {
    R::bit_cast_from(src)
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn data_reinterprets_bytes() {
        let src = Uint32::<1, Scalar>::splat(0x0403_0201);
        let bytes : Uint8<1, Scalar> = bit_cast(src);
        assert_eq!(bytes.extract(0), 1);
        assert_eq!(bytes.extract(3), 4);
        assert_eq!(bytes.extract(15), 4);

        let back : Uint32<1, Scalar> = bit_cast(&bytes);
        assert_eq!(back, src);
    }

    #[test]
    fn mask_to_data_unmasks() {
        let mask = MaskInt64::<2, Scalar>::from_bools(&[true, false, false, true]);
        let data : Int64<2, Scalar> = bit_cast(mask);
        assert_eq!(data.extract(0), -1);
        assert_eq!(data.extract(1), 0);
        assert_eq!(data.extract(3), -1);
    }

    #[test]
    fn mask_to_mask() {
        let mask = MaskInt32::<2, Scalar>::from_bools(&[true, false, true, true, false, false, true, false]);
        let fmask : MaskFloat32<2, Scalar> = bit_cast(mask);
        for lane in 0..8 {
            assert_eq!(fmask.test(lane), mask.test(lane));
        }
        let same : MaskInt32<2, Scalar> = bit_cast(fmask);
        assert_eq!(same, mask);
    }

    #[test]
    fn expressions_are_evaluated() {
        let a = Int16::<1, Scalar>::splat(0x1234);
        let res : Uint8<1, Scalar> = bit_cast(a + a);
        assert_eq!(res.extract(0), 0x68);
        assert_eq!(res.extract(1), 0x24);
    }
}

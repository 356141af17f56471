//! Element categories.
//!
//! A category is a zero-sized marker picking the lane type of a vector, and through it the native register used by every backend.
//! Data categories hold numbers, mask categories hold one boolean per lane.
use core::{fmt, mem::size_of};

use crate::{
    SimdElement,
    backend::*,
};

pub(crate) mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// Kind of lanes a vector holds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int,
    Uint,
    Float,
    MaskInt,
    MaskFloat,
}

/// Element-wise comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Storage family, shared by all categories with the same lane width and number kind.
///
/// Signed, unsigned and mask integers of one width form a family, as do a float type and its mask.
pub trait Family : Sealed + 'static {}

macro_rules! def_family {
    { $($(#[$attr:meta])* $name:ident)* } => {
        $(
            $(#[$attr])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl Sealed for $name {}
            impl Family for $name {}
        )*
    };
}
def_family!{
    /// `i8`, `u8` and their mask
    Int8Family
    /// `i16`, `u16` and their mask
    Int16Family
    /// `i32`, `u32` and their mask
    Int32Family
    /// `i64`, `u64` and their mask
    Int64Family
    /// `f32` and its mask
    Float32Family
    /// `f64` and its mask
    Float64Family
}

/// Lane category of a vector
pub trait Category : Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static {
    const TAG : TypeTag;

    /// Width of a single lane in bits
    const ELEMENT_BITS : usize;

    type Family : Family;

    /// Native register holding this category on backend `B`
    type Native<B: Backend> : NativeRegister<Bits = B::Bits>;

    /// Register with all bits cleared
    fn native_default<B: Backend>() -> Self::Native<B>;

    /// Add the lanes of a register to a debug list
    fn fmt_native<B: Backend>(reg: Self::Native<B>, list: &mut fmt::DebugList<'_, '_>);
}

/// Category of number lanes
pub trait DataCategory : Category {
    type Element : SimdElement;

    /// Mask produced when comparing vectors of this category
    type Mask : MaskCategory<Family = Self::Family>;

    fn native_zero<B: Backend>() -> Self::Native<B>;
    fn native_splat<B: Backend>(val: Self::Element) -> Self::Native<B>;
    fn native_load<B: Backend>(src: &[Self::Element]) -> Self::Native<B>;
    fn native_store<B: Backend>(reg: Self::Native<B>, dst: &mut [Self::Element]);
    fn native_extract<B: Backend>(reg: Self::Native<B>, lane: usize) -> Self::Element;
    fn native_from_bits<B: Backend>(bits: B::Bits) -> Self::Native<B>;

    fn native_add<B: Backend>(a: Self::Native<B>, b: Self::Native<B>) -> Self::Native<B>;
    fn native_sub<B: Backend>(a: Self::Native<B>, b: Self::Native<B>) -> Self::Native<B>;
    fn native_mul<B: Backend>(a: Self::Native<B>, b: Self::Native<B>) -> Self::Native<B>;

    fn native_cmp<B: Backend>(op: CmpOp, a: Self::Native<B>, b: Self::Native<B>) -> <Self::Mask as Category>::Native<B>;
}

/// Category of boolean lanes
pub trait MaskCategory : Category {
    /// Data category the mask unmasks to
    type Data : DataCategory<Family = Self::Family>;

    fn mask_splat<B: Backend>(val: bool) -> Self::Native<B>;
    fn mask_from_bools<B: Backend>(src: &[bool]) -> Self::Native<B>;
    fn mask_unmask<B: Backend>(mask: Self::Native<B>) -> <Self::Data as Category>::Native<B>;

    /// # Safety
    ///
    /// Every lane of `data` must be all-ones or all-zeros.
    unsafe fn mask_from_unmasked_unchecked<B: Backend>(data: <Self::Data as Category>::Native<B>) -> Self::Native<B>;
    fn mask_try_from_unmasked<B: Backend>(data: <Self::Data as Category>::Native<B>) -> Option<Self::Native<B>>;

    fn mask_test<B: Backend>(mask: Self::Native<B>, lane: usize) -> bool;
    fn mask_any<B: Backend>(mask: Self::Native<B>) -> bool;
    fn mask_all<B: Backend>(mask: Self::Native<B>) -> bool;
}

macro_rules! impl_data_category {
    { $($(#[$attr:meta])* [$cat:ident, $elem:ty, $tag:ident, $family:ident, $mask:ident, $reg:ident])* } => {
        $(
            $(#[$attr])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $cat;

            impl Sealed for $cat {}

            impl Category for $cat {
                const TAG : TypeTag = TypeTag::$tag;
                const ELEMENT_BITS : usize = size_of::<$elem>() * 8;

                type Family = $family;
                type Native<B: Backend> = B::$reg;

                #[inline]
                fn native_default<B: Backend>() -> Self::Native<B> {
                    NativeVector::zero()
                }

                fn fmt_native<B: Backend>(reg: Self::Native<B>, list: &mut fmt::DebugList<'_, '_>) {
                    for lane in 0..<B::$reg as NativeRegister>::LANES {
                        list.entry(&reg.extract(lane));
                    }
                }
            }

            impl DataCategory for $cat {
                type Element = $elem;
                type Mask = $mask;

                #[inline]
                fn native_zero<B: Backend>() -> Self::Native<B> {
                    NativeVector::zero()
                }

                #[inline]
                fn native_splat<B: Backend>(val: $elem) -> Self::Native<B> {
                    NativeVector::splat(val)
                }

                #[inline]
                fn native_load<B: Backend>(src: &[$elem]) -> Self::Native<B> {
                    NativeVector::load(src)
                }

                #[inline]
                fn native_store<B: Backend>(reg: Self::Native<B>, dst: &mut [$elem]) {
                    reg.store(dst)
                }

                #[inline]
                fn native_extract<B: Backend>(reg: Self::Native<B>, lane: usize) -> $elem {
                    reg.extract(lane)
                }

                #[inline]
                fn native_from_bits<B: Backend>(bits: B::Bits) -> Self::Native<B> {
                    NativeVector::from_bits(bits)
                }

                #[inline]
                fn native_add<B: Backend>(a: Self::Native<B>, b: Self::Native<B>) -> Self::Native<B> {
                    NativeArith::add(a, b)
                }

                #[inline]
                fn native_sub<B: Backend>(a: Self::Native<B>, b: Self::Native<B>) -> Self::Native<B> {
                    NativeArith::sub(a, b)
                }

                #[inline]
                fn native_mul<B: Backend>(a: Self::Native<B>, b: Self::Native<B>) -> Self::Native<B> {
                    NativeArith::mul(a, b)
                }

                #[inline]
                fn native_cmp<B: Backend>(op: CmpOp, a: Self::Native<B>, b: Self::Native<B>) -> <$mask as Category>::Native<B> {
                    match op {
                        CmpOp::Eq => a.cmp_eq(b),
                        CmpOp::Ne => a.cmp_ne(b),
                        CmpOp::Lt => a.cmp_lt(b),
                        CmpOp::Le => a.cmp_le(b),
                        CmpOp::Gt => a.cmp_gt(b),
                        CmpOp::Ge => a.cmp_ge(b),
                    }
                }
            }
        )*
    };
}
impl_data_category!{
    /// Signed 8-bit integer lanes
    [I8 , i8 , Int  , Int8Family   , MaskI8 , I8Reg ]
    /// Unsigned 8-bit integer lanes
    [U8 , u8 , Uint , Int8Family   , MaskI8 , U8Reg ]
    /// Signed 16-bit integer lanes
    [I16, i16, Int  , Int16Family  , MaskI16, I16Reg]
    /// Unsigned 16-bit integer lanes
    [U16, u16, Uint , Int16Family  , MaskI16, U16Reg]
    /// Signed 32-bit integer lanes
    [I32, i32, Int  , Int32Family  , MaskI32, I32Reg]
    /// Unsigned 32-bit integer lanes
    [U32, u32, Uint , Int32Family  , MaskI32, U32Reg]
    /// Signed 64-bit integer lanes
    [I64, i64, Int  , Int64Family  , MaskI64, I64Reg]
    /// Unsigned 64-bit integer lanes
    [U64, u64, Uint , Int64Family  , MaskI64, U64Reg]
    /// `f32` lanes
    [F32, f32, Float, Float32Family, MaskF32, F32Reg]
    /// `f64` lanes
    [F64, f64, Float, Float64Family, MaskF64, F64Reg]
}

macro_rules! impl_mask_category {
    { $($(#[$attr:meta])* [$cat:ident, $bits:literal, $tag:ident, $family:ident, $data:ident, $reg:ident])* } => {
        $(
            $(#[$attr])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $cat;

            impl Sealed for $cat {}

            impl Category for $cat {
                const TAG : TypeTag = TypeTag::$tag;
                const ELEMENT_BITS : usize = $bits;

                type Family = $family;
                type Native<B: Backend> = B::$reg;

                #[inline]
                fn native_default<B: Backend>() -> Self::Native<B> {
                    NativeMask::splat(false)
                }

                fn fmt_native<B: Backend>(reg: Self::Native<B>, list: &mut fmt::DebugList<'_, '_>) {
                    for lane in 0..<B::$reg as NativeRegister>::LANES {
                        list.entry(&reg.test(lane));
                    }
                }
            }

            impl MaskCategory for $cat {
                type Data = $data;

                #[inline]
                fn mask_splat<B: Backend>(val: bool) -> Self::Native<B> {
                    NativeMask::splat(val)
                }

                #[inline]
                fn mask_from_bools<B: Backend>(src: &[bool]) -> Self::Native<B> {
                    NativeMask::from_bools(src)
                }

                #[inline]
                fn mask_unmask<B: Backend>(mask: Self::Native<B>) -> <$data as Category>::Native<B> {
                    mask.unmask()
                }

                #[inline]
                unsafe fn mask_from_unmasked_unchecked<B: Backend>(data: <$data as Category>::Native<B>) -> Self::Native<B> {
                    NativeMask::from_unmasked_unchecked(data)
                }

                #[inline]
                fn mask_try_from_unmasked<B: Backend>(data: <$data as Category>::Native<B>) -> Option<Self::Native<B>> {
                    NativeMask::try_from_unmasked(data)
                }

                #[inline]
                fn mask_test<B: Backend>(mask: Self::Native<B>, lane: usize) -> bool {
                    mask.test(lane)
                }

                #[inline]
                fn mask_any<B: Backend>(mask: Self::Native<B>) -> bool {
                    mask.any()
                }

                #[inline]
                fn mask_all<B: Backend>(mask: Self::Native<B>) -> bool {
                    mask.all()
                }
            }
        )*
    };
}
impl_mask_category!{
    /// Mask for 8-bit integer lanes
    [MaskI8 , 8 , MaskInt  , Int8Family   , U8 , MaskI8Reg ]
    /// Mask for 16-bit integer lanes
    [MaskI16, 16, MaskInt  , Int16Family  , U16, MaskI16Reg]
    /// Mask for 32-bit integer lanes
    [MaskI32, 32, MaskInt  , Int32Family  , U32, MaskI32Reg]
    /// Mask for 64-bit integer lanes
    [MaskI64, 64, MaskInt  , Int64Family  , U64, MaskI64Reg]
    /// Mask for `f32` lanes
    [MaskF32, 32, MaskFloat, Float32Family, F32, MaskF32Reg]
    /// Mask for `f64` lanes
    [MaskF64, 64, MaskFloat, Float64Family, F64, MaskF64Reg]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_and_widths() {
        assert_eq!(I8::TAG, TypeTag::Int);
        assert_eq!(U64::TAG, TypeTag::Uint);
        assert_eq!(F32::TAG, TypeTag::Float);
        assert_eq!(MaskI16::TAG, TypeTag::MaskInt);
        assert_eq!(MaskF64::TAG, TypeTag::MaskFloat);

        assert_eq!(U16::ELEMENT_BITS, 16);
        assert_eq!(F64::ELEMENT_BITS, 64);
        assert_eq!(MaskI32::ELEMENT_BITS, <MaskF32 as Category>::ELEMENT_BITS);
    }

    #[test]
    fn scalar_compare_through_category() {
        let a = I32::native_splat::<Scalar>(3);
        let b = I32::native_load::<Scalar>(&[1, 3, 5, 3]);
        let mask = I32::native_cmp::<Scalar>(CmpOp::Le, b, a);

        assert!(MaskI32::mask_test::<Scalar>(mask, 0));
        assert!(MaskI32::mask_test::<Scalar>(mask, 1));
        assert!(!MaskI32::mask_test::<Scalar>(mask, 2));
        assert_eq!(U32::native_extract::<Scalar>(MaskI32::mask_unmask::<Scalar>(mask), 3), u32::MAX);
    }
}

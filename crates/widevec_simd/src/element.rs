use core::fmt::Debug;

pub(crate) mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// Marker trait for types that can be stored in a SIMD lane.
///
/// # Safety
///
/// The type must be a plain value without padding, where every bit pattern of its size is valid.
pub unsafe trait SimdElement : Sealed + Copy + PartialEq + PartialOrd + Default + Debug + Send + Sync + 'static {
    /// Unsigned integer with the same width as the element
    type Bits : Copy + Eq + Debug;

    /// Lane with all bits set.
    const ALL_ONES : Self;

    /// Get the lane value a mask uses to encode `set`.
    fn mask_lane(set: bool) -> Self;

    /// Check if the lane is all-ones or all-zeros.
    fn is_mask_lane(self) -> bool;
}

macro_rules! impl_element {
    {$([$ty:ty, $bits:ty, $ones:expr, $to_bits:expr])*} => {
        $(
            impl Sealed for $ty {}

            unsafe impl SimdElement for $ty {
                type Bits = $bits;
                const ALL_ONES : Self = $ones;

                #[inline]
                fn mask_lane(set: bool) -> Self {
                    if set { Self::ALL_ONES } else { <$ty>::default() }
                }

                #[inline]
                fn is_mask_lane(self) -> bool {
                    let to_bits : fn($ty) -> $bits = $to_bits;
                    let bits = to_bits(self);
                    bits == 0 || bits == <$bits>::MAX
                }
            }
        )*
    };
}
impl_element!{
    [i8 , u8 , -1                      , |v| v as u8 ]
    [i16, u16, -1                      , |v| v as u16]
    [i32, u32, -1                      , |v| v as u32]
    [i64, u64, -1                      , |v| v as u64]
    [u8 , u8 , u8::MAX                 , |v| v       ]
    [u16, u16, u16::MAX                , |v| v       ]
    [u32, u32, u32::MAX                , |v| v       ]
    [u64, u64, u64::MAX                , |v| v       ]
    [f32, u32, f32::from_bits(u32::MAX), f32::to_bits]
    [f64, u64, f64::from_bits(u64::MAX), f64::to_bits]
}

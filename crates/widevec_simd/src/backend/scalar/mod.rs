//! Portable backend, emulating 128-bit registers with plain arrays
use core::marker::PhantomData;

use static_assertions::{assert_eq_align, assert_eq_size};

use crate::{
    SimdElement,
    backend::*,
};

mod arith;
mod cmp;
mod mask_ops;

/// Register of the scalar backend, `L` lanes filling 16 bytes.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C, align(16))]
pub struct Lanes<T: SimdElement, const L: usize>(pub(crate) [T; L]);

impl<T: SimdElement, const L: usize> Lanes<T, L> {
    /// Create a register from its lanes
    pub const fn from_array(lanes: [T; L]) -> Self {
        Self(lanes)
    }

    /// Get the lanes of the register
    pub const fn to_array(self) -> [T; L] {
        self.0
    }
}

/// Raw bits of a scalar backend register
pub type ScalarBits = Lanes<u8, 16>;

assert_eq_size!(Lanes<i16, 8>, ScalarBits);
assert_eq_size!(Lanes<i32, 4>, ScalarBits);
assert_eq_size!(Lanes<i64, 2>, ScalarBits);
assert_eq_size!(Lanes<f32, 4>, ScalarBits);
assert_eq_size!(Lanes<f64, 2>, ScalarBits);
assert_eq_align!(Lanes<f64, 2>, ScalarBits);

/// Mask register of the scalar backend, one bit per lane.
///
/// `T` is the element type of the data register the mask unmasks to.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BitMask<T, const L: usize> {
    bits: u16,
    _marker: PhantomData<T>,
}

/// Portable backend, available on every target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scalar;

impl Backend for Scalar {
    const TYPE : BackendType = BackendType::Scalar;
    const REGISTER_BYTES : usize = 16;

    type Bits = ScalarBits;

    #[inline]
    fn bits_eq(a: ScalarBits, b: ScalarBits) -> bool {
        a == b
    }

    type I8Reg  = Lanes<i8 , 16>;
    type U8Reg  = Lanes<u8 , 16>;
    type I16Reg = Lanes<i16, 8 >;
    type U16Reg = Lanes<u16, 8 >;
    type I32Reg = Lanes<i32, 4 >;
    type U32Reg = Lanes<u32, 4 >;
    type I64Reg = Lanes<i64, 2 >;
    type U64Reg = Lanes<u64, 2 >;
    type F32Reg = Lanes<f32, 4 >;
    type F64Reg = Lanes<f64, 2 >;

    type MaskI8Reg  = BitMask<u8 , 16>;
    type MaskI16Reg = BitMask<u16, 8 >;
    type MaskI32Reg = BitMask<u32, 4 >;
    type MaskI64Reg = BitMask<u64, 2 >;
    type MaskF32Reg = BitMask<f32, 4 >;
    type MaskF64Reg = BitMask<f64, 2 >;
}

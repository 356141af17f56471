use core::{fmt, str::FromStr};

use crate::{Error, SimdElement};

/// Instruction set a backend is built on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackendType {
    Scalar,

    // x86-64
    SSE,
    AVX2,
}

impl BackendType {
    /// All backend types, ordered from least to most capable
    pub const ALL : [BackendType; 3] = [BackendType::Scalar, BackendType::SSE, BackendType::AVX2];

    /// Name of the backend, as accepted by `from_str`
    pub const fn name(self) -> &'static str {
        match self {
            BackendType::Scalar => "scalar",
            BackendType::SSE => "sse",
            BackendType::AVX2 => "avx2",
        }
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BackendType::ALL.into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownBackend)
    }
}

/// Bitwise logic on a whole native register
pub trait NativeBitwise : Copy {
    /// `self & other`
    fn and(self, other: Self) -> Self;

    /// `self | other`
    fn or(self, other: Self) -> Self;

    /// `self ^ other`
    fn xor(self, other: Self) -> Self;

    /// `self & !other`
    fn andnot(self, other: Self) -> Self;

    /// `!self`
    fn not(self) -> Self;
}

/// A single hardware register of a backend
pub trait NativeRegister : NativeBitwise + Send + Sync + 'static {
    /// Raw register bits shared by all registers of the backend
    type Bits : Copy;

    /// Number of lanes in the register
    const LANES : usize;

    /// Reinterpret the register as raw bits.
    ///
    /// Masks are unmasked first, so the raw bits always hold all-ones or all-zeros lanes.
    fn to_bits(self) -> Self::Bits;
}

/// Native register holding data lanes
pub trait NativeVector : NativeRegister {
    type Element : SimdElement;

    /// Set all lanes to 0
    fn zero() -> Self;

    /// Set all lanes of the register to `val`
    fn splat(val: Self::Element) -> Self;

    /// Load `LANES` elements from the start of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src` holds less than `LANES` elements.
    fn load(src: &[Self::Element]) -> Self;

    /// Store all lanes to the start of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` holds less than `LANES` elements.
    fn store(self, dst: &mut [Self::Element]);

    /// Get the value of a single lane
    fn extract(self, lane: usize) -> Self::Element;

    /// Reinterpret raw register bits as this register.
    fn from_bits(bits: Self::Bits) -> Self;
}

/// Element-wise arithmetic, integers wrap on overflow
pub trait NativeArith : NativeVector {
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn mul(self, other: Self) -> Self;
}

/// Element-wise comparisons
pub trait NativeCmp : NativeVector {
    /// Mask produced by the comparisons
    type Mask : NativeMask<Bits = Self::Bits>;

    fn cmp_eq(self, other: Self) -> Self::Mask;
    fn cmp_ne(self, other: Self) -> Self::Mask;
    fn cmp_lt(self, other: Self) -> Self::Mask;
    fn cmp_le(self, other: Self) -> Self::Mask;
    fn cmp_gt(self, other: Self) -> Self::Mask;
    fn cmp_ge(self, other: Self) -> Self::Mask;
}

/// Native register holding a per-lane boolean
pub trait NativeMask : NativeRegister {
    /// Data register the mask unmasks to
    type Data : NativeVector<Bits = Self::Bits>;

    /// Set all lanes to `val`
    fn splat(val: bool) -> Self;

    /// Build a mask from the first `LANES` booleans of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src` holds less than `LANES` elements.
    fn from_bools(src: &[bool]) -> Self;

    /// Convert the mask to a data register, with set lanes all-ones and cleared lanes all-zeros
    fn unmask(self) -> Self::Data;

    /// Interpret a data register as a mask.
    ///
    /// # Safety
    ///
    /// Every lane of `data` must be all-ones or all-zeros.
    unsafe fn from_unmasked_unchecked(data: Self::Data) -> Self;

    /// Interpret a data register as a mask, if every lane is all-ones or all-zeros
    fn try_from_unmasked(data: Self::Data) -> Option<Self> {
        let valid = (0..<Self::Data as NativeRegister>::LANES).all(|lane| data.extract(lane).is_mask_lane());
        // SAFETY: all lanes were checked above
        valid.then(|| unsafe { Self::from_unmasked_unchecked(data) })
    }

    /// Check if a lane is set
    fn test(self, lane: usize) -> bool;

    /// Check if any lane is set
    fn any(self) -> bool;

    /// Check if all lanes are set
    fn all(self) -> bool;
}

/// A set of native registers for every element category.
///
/// Backends are zero-sized and only exist at the type level, the default one is picked at compile time (see [`DefBackend`](crate::DefBackend)).
pub trait Backend : Copy + Default + fmt::Debug + Send + Sync + 'static {
    const TYPE : BackendType;

    /// Size of a native register in bytes
    const REGISTER_BYTES : usize;

    /// Raw register bits
    type Bits : Copy;

    /// Compare the raw bits of 2 registers
    fn bits_eq(a: Self::Bits, b: Self::Bits) -> bool;

    type I8Reg  : NativeArith<Element = i8 , Bits = Self::Bits> + NativeCmp<Mask = Self::MaskI8Reg >;
    type U8Reg  : NativeArith<Element = u8 , Bits = Self::Bits> + NativeCmp<Mask = Self::MaskI8Reg >;
    type I16Reg : NativeArith<Element = i16, Bits = Self::Bits> + NativeCmp<Mask = Self::MaskI16Reg>;
    type U16Reg : NativeArith<Element = u16, Bits = Self::Bits> + NativeCmp<Mask = Self::MaskI16Reg>;
    type I32Reg : NativeArith<Element = i32, Bits = Self::Bits> + NativeCmp<Mask = Self::MaskI32Reg>;
    type U32Reg : NativeArith<Element = u32, Bits = Self::Bits> + NativeCmp<Mask = Self::MaskI32Reg>;
    type I64Reg : NativeArith<Element = i64, Bits = Self::Bits> + NativeCmp<Mask = Self::MaskI64Reg>;
    type U64Reg : NativeArith<Element = u64, Bits = Self::Bits> + NativeCmp<Mask = Self::MaskI64Reg>;
    type F32Reg : NativeArith<Element = f32, Bits = Self::Bits> + NativeCmp<Mask = Self::MaskF32Reg>;
    type F64Reg : NativeArith<Element = f64, Bits = Self::Bits> + NativeCmp<Mask = Self::MaskF64Reg>;

    type MaskI8Reg  : NativeMask<Data = Self::U8Reg , Bits = Self::Bits>;
    type MaskI16Reg : NativeMask<Data = Self::U16Reg, Bits = Self::Bits>;
    type MaskI32Reg : NativeMask<Data = Self::U32Reg, Bits = Self::Bits>;
    type MaskI64Reg : NativeMask<Data = Self::U64Reg, Bits = Self::Bits>;
    type MaskF32Reg : NativeMask<Data = Self::F32Reg, Bits = Self::Bits>;
    type MaskF64Reg : NativeMask<Data = Self::F64Reg, Bits = Self::Bits>;
}

mod scalar;
pub use scalar::*;

#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
pub use x86_64::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_type_names() {
        for ty in BackendType::ALL {
            assert_eq!(ty.name().parse::<BackendType>(), Ok(ty));
        }
        assert_eq!("AVX2".parse::<BackendType>(), Ok(BackendType::AVX2));
        assert_eq!("neon".parse::<BackendType>(), Err(Error::UnknownBackend));
    }
}

use core::{
    arch::x86_64::*,
    mem::size_of,
};

use super::{Mask128, Reg128, SseLane, SseRaw};
use crate::backend::*;

impl<T: SseLane> Mask128<T> {
    /// Top bit of every byte
    #[inline]
    fn byte_mask(self) -> u32 {
        unsafe { _mm_movemask_epi8(self.0.to_int()) as u32 }
    }
}

impl<T: SseLane> NativeMask for Mask128<T>
    where Reg128<T> : NativeVector<Element = T, Bits = __m128i>
{
    type Data = Reg128<T>;

    #[inline]
    fn splat(val: bool) -> Self {
        Self::from_raw(if val { T::Raw::ones() } else { T::Raw::zero() })
    }

    fn from_bools(src: &[bool]) -> Self {
        let lanes = <Self as NativeRegister>::LANES;
        assert!(src.len() >= lanes, "need {} booleans to build a mask, got {}", lanes, src.len());

        let mut bytes = [0u8; 16];
        for (chunk, &set) in bytes.chunks_exact_mut(size_of::<T>()).zip(src) {
            if set {
                chunk.fill(0xFF);
            }
        }
        Self::from_raw(T::Raw::from_int(unsafe { _mm_loadu_si128(bytes.as_ptr().cast()) }))
    }

    #[inline]
    fn unmask(self) -> Reg128<T> {
        Reg128::from_raw(self.0)
    }

    #[inline]
    unsafe fn from_unmasked_unchecked(data: Reg128<T>) -> Self {
        Self::from_raw(data.into_raw())
    }

    #[inline]
    fn test(self, lane: usize) -> bool {
        let lanes = <Self as NativeRegister>::LANES;
        assert!(lane < lanes, "lane {} out of range for a {} lane mask", lane, lanes);
        (self.byte_mask() >> (lane * size_of::<T>())) & 1 != 0
    }

    #[inline]
    fn any(self) -> bool {
        self.byte_mask() != 0
    }

    #[inline]
    fn all(self) -> bool {
        self.byte_mask() == 0xFFFF
    }
}

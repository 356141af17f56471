use core::{array, marker::PhantomData};

use super::{BitMask, Lanes, ScalarBits};
use crate::{
    SimdElement,
    backend::*,
};

impl<T, const L: usize> BitMask<T, L> {
    const FULL : u16 = if L >= 16 { u16::MAX } else { (1u16 << L) - 1 };

    #[inline]
    const fn from_raw(bits: u16) -> Self {
        Self { bits: bits & Self::FULL, _marker: PhantomData }
    }

    pub(crate) fn from_fn(mut f: impl FnMut(usize) -> bool) -> Self {
        let mut bits = 0;
        for lane in 0..L {
            if f(lane) {
                bits |= 1 << lane;
            }
        }
        Self::from_raw(bits)
    }

    /// Get the mask as bits, with bit `i` holding lane `i`
    pub const fn to_bitmask(self) -> u16 {
        self.bits
    }

    #[inline]
    fn lane(self, lane: usize) -> bool {
        assert!(lane < L, "lane {} out of range for a {} lane mask", lane, L);
        (self.bits >> lane) & 1 != 0
    }
}

impl<T: SimdElement, const L: usize> BitMask<T, L> {
    fn to_lanes(self) -> Lanes<T, L> {
        Lanes(array::from_fn(|i| T::mask_lane(self.lane(i))))
    }
}

impl<T: SimdElement, const L: usize> NativeBitwise for BitMask<T, L> {
    #[inline]
    fn and(self, other: Self) -> Self {
        Self::from_raw(self.bits & other.bits)
    }

    #[inline]
    fn or(self, other: Self) -> Self {
        Self::from_raw(self.bits | other.bits)
    }

    #[inline]
    fn xor(self, other: Self) -> Self {
        Self::from_raw(self.bits ^ other.bits)
    }

    #[inline]
    fn andnot(self, other: Self) -> Self {
        Self::from_raw(self.bits & !other.bits)
    }

    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl<T: SimdElement, const L: usize> NativeRegister for BitMask<T, L>
    where Lanes<T, L> : NativeVector<Element = T, Bits = ScalarBits>
{
    type Bits = ScalarBits;
    const LANES : usize = L;

    #[inline]
    fn to_bits(self) -> ScalarBits {
        self.to_lanes().to_bits()
    }
}

impl<T: SimdElement, const L: usize> NativeMask for BitMask<T, L>
    where Lanes<T, L> : NativeVector<Element = T, Bits = ScalarBits>
{
    type Data = Lanes<T, L>;

    #[inline]
    fn splat(val: bool) -> Self {
        Self::from_raw(if val { u16::MAX } else { 0 })
    }

    fn from_bools(src: &[bool]) -> Self {
        assert!(src.len() >= L, "need {} booleans to build a mask, got {}", L, src.len());
        Self::from_fn(|i| src[i])
    }

    #[inline]
    fn unmask(self) -> Lanes<T, L> {
        self.to_lanes()
    }

    #[inline]
    unsafe fn from_unmasked_unchecked(data: Lanes<T, L>) -> Self {
        Self::from_fn(|i| data.0[i] != T::default())
    }

    #[inline]
    fn test(self, lane: usize) -> bool {
        self.lane(lane)
    }

    #[inline]
    fn any(self) -> bool {
        self.bits != 0
    }

    #[inline]
    fn all(self) -> bool {
        self.bits == Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_keeps_unused_bits_clear() {
        let mask = BitMask::<u64, 2>::splat(false).not();
        assert_eq!(mask.to_bitmask(), 0b11);
        assert!(mask.all());
    }

    #[test]
    fn unmask_round_trip() {
        let mask = BitMask::<f32, 4>::from_bools(&[true, false, false, true]);
        let data = mask.unmask();

        assert_eq!(data.to_array()[1], 0.0);
        assert!(data.to_array()[0].is_nan());
        assert_eq!(BitMask::try_from_unmasked(data), Some(mask));
        assert_eq!(BitMask::<u32, 4>::try_from_unmasked(Lanes::from_array([0, 1, 0, 0])), None);
    }
}

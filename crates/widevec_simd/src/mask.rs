use core::array;

use crate::{
    Backend, MaskCategory, DataCategory,
    Error, Result, Vector,
    expr::{Expr, Operand, Select},
};

impl<M: MaskCategory, const V: usize, B: Backend> Vector<M, V, B> {
    /// Create a mask with all lanes set to `val`
    #[inline]
    pub fn splat_mask(val: bool) -> Self {
        Self::from_natives([M::mask_splat::<B>(val); V])
    }

    /// Build a mask from the first `LANES` booleans of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src` holds less than `LANES` elements.
    pub fn from_bools(src: &[bool]) -> Self {
        assert!(src.len() >= Self::LANES, "need {} booleans to build the mask, got {}", Self::LANES, src.len());
        Self::from_natives(array::from_fn(|i| M::mask_from_bools::<B>(&src[i * Self::BASE_LENGTH..])))
    }

    /// Build a mask from the first `LANES` booleans of `src`, or fail if `src` is too short.
    pub fn try_from_bools(src: &[bool]) -> Result<Self> {
        if src.len() < Self::LANES {
            log::debug!("{} booleans are not enough for a {} lane mask", src.len(), Self::LANES);
            return Err(Error::SliceTooShort { required: Self::LANES, actual: src.len() });
        }
        Ok(Self::from_bools(src))
    }

    /// Convert the mask to data lanes: set lanes become all-ones, cleared lanes all-zeros
    #[inline]
    pub fn unmask(&self) -> Vector<M::Data, V, B> {
        Vector::from_natives(self.d.map(M::mask_unmask::<B>))
    }

    /// Convert unmasked data back into a mask.
    ///
    /// Fails with [`Error::NotAMask`] if a lane of `data` is neither all-ones nor all-zeros.
    pub fn try_from_unmasked(data: &Vector<M::Data, V, B>) -> Result<Self> {
        let mut natives = [M::native_default::<B>(); V];
        for (register, (dst, src)) in natives.iter_mut().zip(data.as_natives()).enumerate() {
            match M::mask_try_from_unmasked::<B>(*src) {
                Some(mask) => *dst = mask,
                None => {
                    log::debug!("register {} holds a lane that is not all-ones or all-zeros", register);
                    return Err(Error::NotAMask { register });
                },
            }
        }
        Ok(Self::from_natives(natives))
    }

    /// Convert unmasked data back into a mask, without checking the lanes.
    ///
    /// # Safety
    ///
    /// Every lane of `data` must be all-ones or all-zeros.
    #[inline]
    pub unsafe fn from_unmasked_unchecked(data: &Vector<M::Data, V, B>) -> Self {
        // SAFETY: forwarded to the caller
        Self::from_natives(data.into_natives().map(|reg| unsafe { M::mask_from_unmasked_unchecked::<B>(reg) }))
    }

    /// Check if a lane is set.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= LANES`.
    #[inline]
    pub fn test(&self, lane: usize) -> bool {
        assert!(lane < Self::LANES, "lane {} out of range for a {} lane mask", lane, Self::LANES);
        M::mask_test::<B>(self.d[lane / Self::BASE_LENGTH], lane % Self::BASE_LENGTH)
    }

    /// Check if any lane is set
    #[inline]
    pub fn any(&self) -> bool {
        self.d.iter().any(|reg| M::mask_any::<B>(*reg))
    }

    /// Check if all lanes are set
    #[inline]
    pub fn all(&self) -> bool {
        self.d.iter().all(|reg| M::mask_all::<B>(*reg))
    }

    /// Pick lanes from `on_true` where the mask is set, and from `on_false` where it isn't.
    ///
    /// The selected values need lanes as wide as the mask's.
    #[inline]
    pub fn select<D, T, F>(self, on_true: T, on_false: F) -> Expr<D, V, B, Select<M, Self, T::Payload, F::Payload>>
        where D : DataCategory,
              T : Operand<D, V, B>,
              F : Operand<D, V, B>
    {
        Expr::new(Select::new(self, on_true.into_payload(), on_false.into_payload()))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    type Mask = MaskInt16<2, Scalar>;

    #[test]
    fn bools_round_trip() {
        let bools : [bool; 16] = core::array::from_fn(|i| i % 3 == 0);
        let mask = Mask::from_bools(&bools);
        for (lane, &set) in bools.iter().enumerate() {
            assert_eq!(mask.test(lane), set);
        }
        assert!(mask.any());
        assert!(!mask.all());

        assert_eq!(Mask::try_from_bools(&bools[..15]), Err(Error::SliceTooShort { required: 16, actual: 15 }));
    }

    #[test]
    fn splat_and_default() {
        assert!(Mask::splat_mask(true).all());
        assert!(!Mask::splat_mask(false).any());
        assert_eq!(Mask::default(), Mask::splat_mask(false));
    }

    #[test]
    fn unmask_and_back() {
        let mask = Uint16::<2, Scalar>::load(&core::array::from_fn::<u16, 16, _>(|i| i as u16)).cmp_lt(Uint16::<2, Scalar>::splat(4)).eval();
        let data = mask.unmask();
        assert_eq!(data.extract(3), u16::MAX);
        assert_eq!(data.extract(4), 0);
        assert_eq!(Mask::try_from_unmasked(&data), Ok(mask));
        assert_eq!(unsafe { Mask::from_unmasked_unchecked(&data) }, mask);
    }

    #[test]
    fn reject_partial_lanes() {
        let mut lanes = [0u16; 16];
        lanes[9] = 0x00FF;
        let data = Uint16::<2, Scalar>::load(&lanes);
        assert_eq!(Mask::try_from_unmasked(&data), Err(Error::NotAMask { register: 1 }));
    }
}

use core::{array, fmt};

use crate::{
    Backend, NativeRegister, DefBackend,
    Category, DataCategory, TypeTag,
    Error, Result,
    expr::{Expr, Payload},
};

/// Wide vector, built from `V` native registers of category `C` on backend `B`.
///
/// The vector holds `V * BASE_LENGTH` lanes, where `BASE_LENGTH` is the lane count of a single native register.
/// Operators on vectors do not compute anything, they build an [`Expr`], which is evaluated register by register when it's
/// converted back into a vector (see [`Expr::eval`]).
///
/// Vectors of different categories can only be converted into each other explicitly, with [`Vector::from_any`] or [`bit_cast`](crate::bit_cast):
///
/// ```compile_fail
/// use widevec_simd::*;
///
/// let float = Float32::<2, Scalar>::splat(1.0);
/// let bytes : Int8<2, Scalar> = float.into();
/// ```
///
/// ```
/// use widevec_simd::*;
///
/// let float = Float32::<2, Scalar>::splat(1.0);
/// let bytes = Int8::<2, Scalar>::from_any(&float);
/// assert_eq!(bytes.extract(3), 0x3F);
/// ```
pub struct Vector<C: Category, const V: usize, B: Backend = DefBackend> {
    pub(crate) d: [C::Native<B>; V],
}

impl<C: Category, const V: usize, B: Backend> Vector<C, V, B> {
    /// Number of native registers
    pub const VEC_LENGTH : usize = V;
    /// Number of lanes in a single native register
    pub const BASE_LENGTH : usize = <C::Native<B> as NativeRegister>::LANES;
    /// Number of lanes
    pub const LANES : usize = V * Self::BASE_LENGTH;
    /// Size of the vector in bytes
    pub const LENGTH_BYTES : usize = V * B::REGISTER_BYTES;
    /// Size of the vector in bits
    pub const NUM_BITS : usize = Self::LENGTH_BYTES * 8;
    pub const TYPE_TAG : TypeTag = C::TAG;

    const NOT_EMPTY : () = assert!(V > 0, "a vector needs at least 1 native register");

    /// Create a vector from its native registers
    #[inline]
    pub fn from_natives(d: [C::Native<B>; V]) -> Self {
        let () = Self::NOT_EMPTY;
        Self { d }
    }

    /// Create a vector with every register set to `native`
    #[inline]
    pub fn broadcast(native: C::Native<B>) -> Self {
        Self::from_natives([native; V])
    }

    /// Get the native registers
    #[inline]
    pub fn as_natives(&self) -> &[C::Native<B>; V] {
        &self.d
    }

    /// Get the native registers
    #[inline]
    pub fn into_natives(self) -> [C::Native<B>; V] {
        self.d
    }

    /// Get the `i`-th native register.
    ///
    /// # Panics
    ///
    /// Panics if `i >= V`.
    #[inline]
    pub fn vec(&self, i: usize) -> &C::Native<B> {
        &self.d[i]
    }

    /// Get the `i`-th native register.
    ///
    /// # Panics
    ///
    /// Panics if `i >= V`.
    #[inline]
    pub fn vec_mut(&mut self, i: usize) -> &mut C::Native<B> {
        &mut self.d[i]
    }

    /// Get the `i`-th native register, without checking `i`.
    ///
    /// # Safety
    ///
    /// `i` must be less than `V`.
    #[inline]
    pub unsafe fn vec_unchecked(&self, i: usize) -> &C::Native<B> {
        self.d.get_unchecked(i)
    }

    /// Get the `i`-th native register, without checking `i`.
    ///
    /// # Safety
    ///
    /// `i` must be less than `V`.
    #[inline]
    pub unsafe fn vec_unchecked_mut(&mut self, i: usize) -> &mut C::Native<B> {
        self.d.get_unchecked_mut(i)
    }

    /// Set every register to `native`
    #[inline]
    pub fn set_vec(&mut self, native: C::Native<B>) {
        self.d = [native; V];
    }

    /// Evaluating a vector is a copy, this allows generic code to handle vectors and expressions the same way.
    #[inline]
    pub fn eval(&self) -> Self {
        *self
    }

    /// Evaluate an expression of the same category
    #[inline]
    pub fn from_expr<E: Payload<C, V, B>>(expr: Expr<C, V, B, E>) -> Self {
        expr.eval()
    }

    /// Split the vector into a low and a high half
    pub fn split<const H: usize>(self) -> [Vector<C, H, B>; 2] {
        const { assert!(V == 2 * H, "a vector can only be split in 2 equal halves") };
        [
            Vector::from_natives(array::from_fn(|i| self.d[i])),
            Vector::from_natives(array::from_fn(|i| self.d[H + i])),
        ]
    }

    /// Combine a low and a high half into a single vector
    pub fn combine<const H: usize>(lo: Vector<C, H, B>, hi: Vector<C, H, B>) -> Self {
        const { assert!(V == 2 * H, "a vector can only be combined from 2 equal halves") };
        Self::from_natives(array::from_fn(|i| if i < H { lo.d[i] } else { hi.d[i - H] }))
    }
}

impl<C: DataCategory, const V: usize, B: Backend> Vector<C, V, B> {
    /// Create a vector with all lanes set to 0
    #[inline]
    pub fn zero() -> Self {
        Self::from_natives([C::native_zero::<B>(); V])
    }

    /// Create a vector with all lanes set to `val`
    #[inline]
    pub fn splat(val: C::Element) -> Self {
        Self::from_natives([C::native_splat::<B>(val); V])
    }

    /// Load the vector from the first `LANES` elements of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src` holds less than `LANES` elements.
    pub fn load(src: &[C::Element]) -> Self {
        assert!(src.len() >= Self::LANES, "need {} elements to load the vector, got {}", Self::LANES, src.len());
        Self::from_natives(array::from_fn(|i| C::native_load::<B>(&src[i * Self::BASE_LENGTH..])))
    }

    /// Load the vector from the first `LANES` elements of `src`, or fail if `src` is too short.
    pub fn try_load(src: &[C::Element]) -> Result<Self> {
        Self::check_len(src.len())?;
        Ok(Self::load(src))
    }

    /// Store the vector to the first `LANES` elements of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` holds less than `LANES` elements.
    pub fn store(&self, dst: &mut [C::Element]) {
        assert!(dst.len() >= Self::LANES, "need {} elements to store the vector, got {}", Self::LANES, dst.len());
        for (reg, chunk) in self.d.iter().zip(dst.chunks_mut(Self::BASE_LENGTH)) {
            C::native_store::<B>(*reg, chunk);
        }
    }

    /// Store the vector to the first `LANES` elements of `dst`, or fail if `dst` is too short.
    pub fn try_store(&self, dst: &mut [C::Element]) -> Result<()> {
        Self::check_len(dst.len())?;
        self.store(dst);
        Ok(())
    }

    /// Get the value of a single lane.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= LANES`.
    #[inline]
    pub fn extract(&self, lane: usize) -> C::Element {
        assert!(lane < Self::LANES, "lane {} out of range for a {} lane vector", lane, Self::LANES);
        C::native_extract::<B>(self.d[lane / Self::BASE_LENGTH], lane % Self::BASE_LENGTH)
    }

    fn check_len(len: usize) -> Result<()> {
        if len < Self::LANES {
            log::debug!("slice of {} elements is too short for a {} lane vector", len, Self::LANES);
            return Err(Error::SliceTooShort { required: Self::LANES, actual: len });
        }
        Ok(())
    }
}

impl<C: Category, const V: usize, B: Backend> Clone for Vector<C, V, B> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Category, const V: usize, B: Backend> Copy for Vector<C, V, B> {}

impl<C: Category, const V: usize, B: Backend> Default for Vector<C, V, B> {
    /// Vector with all bits cleared
    #[inline]
    fn default() -> Self {
        Self::from_natives([C::native_default::<B>(); V])
    }
}

/// Vectors are compared by their bits, so a NaN lane equals itself.
impl<C: Category, const V: usize, B: Backend> PartialEq for Vector<C, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.d.iter()
            .zip(&other.d)
            .all(|(a, b)| B::bits_eq(a.to_bits(), b.to_bits()))
    }
}

impl<C: Category, const V: usize, B: Backend> Eq for Vector<C, V, B> {}

impl<C: Category, const V: usize, B: Backend> fmt::Debug for Vector<C, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for reg in self.d {
            C::fmt_native::<B>(reg, &mut list);
        }
        list.finish()
    }
}

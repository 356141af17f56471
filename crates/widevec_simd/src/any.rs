//! Capability traits for generic code.
//!
//! Functions that accept "any 32-bit integer vector with `V` registers" shouldn't care whether they get a vector, a reference
//! to one, or an unevaluated expression. The `Any*` traits describe the width and family of such an argument, while
//! [`AnyVec::wrapped`] gives access to the value behind it.
//!
//! ```
//! use widevec_simd::*;
//!
//! fn low_byte<X: AnyInt32<2, Scalar>>(x: &X) -> u8 {
//!     Uint8::<2, Scalar>::from_any(x).extract(0)
//! }
//!
//! let a = Int32::<2, Scalar>::splat(0x1FF);
//! assert_eq!(low_byte(&a), 0xFF);
//! assert_eq!(low_byte(&(a + a)), 0xFE);
//! assert_eq!(low_byte(&a.cmp_eq(a)), 0xFF);
//! ```
use crate::{
    Backend, DefBackend, Category, CastFrom, TypeTag, Vector,
    Int8Family, Int16Family, Int32Family, Int64Family, Float32Family, Float64Family,
    expr::{Expr, Payload},
};

/// Anything that evaluates to a vector of `V` registers
pub trait Evaluate<const V: usize, B: Backend> {
    /// Category of the evaluated vector
    type Kind : Category;

    fn evaluate(&self) -> Vector<Self::Kind, V, B>;
}

impl<C: Category, const V: usize, B: Backend> Evaluate<V, B> for Vector<C, V, B> {
    type Kind = C;

    #[inline]
    fn evaluate(&self) -> Self {
        *self
    }
}

impl<C: Category, const V: usize, B: Backend, E: Payload<C, V, B>> Evaluate<V, B> for Expr<C, V, B, E> {
    type Kind = C;

    #[inline]
    fn evaluate(&self) -> Vector<C, V, B> {
        self.eval()
    }
}

impl<const V: usize, B: Backend, T: Evaluate<V, B> + ?Sized> Evaluate<V, B> for &T {
    type Kind = T::Kind;

    #[inline]
    fn evaluate(&self) -> Vector<T::Kind, V, B> {
        (**self).evaluate()
    }
}

/// Any vector or expression of `V` registers, regardless of its category
pub trait AnyVec<const V: usize, B: Backend = DefBackend> {
    /// Concrete vector or expression
    type Wrapped : Evaluate<V, B> + ?Sized;

    /// Number of native registers
    const VEC_LENGTH : usize = V;
    /// Size in bytes
    const LENGTH_BYTES : usize = V * B::REGISTER_BYTES;
    const TYPE_TAG : TypeTag = <<Self::Wrapped as Evaluate<V, B>>::Kind as Category>::TAG;

    /// Get the concrete value
    fn wrapped(&self) -> &Self::Wrapped;
}

impl<C: Category, const V: usize, B: Backend> AnyVec<V, B> for Vector<C, V, B> {
    type Wrapped = Self;

    #[inline]
    fn wrapped(&self) -> &Self {
        self
    }
}

impl<C: Category, const V: usize, B: Backend, E: Payload<C, V, B>> AnyVec<V, B> for Expr<C, V, B, E> {
    type Wrapped = Self;

    #[inline]
    fn wrapped(&self) -> &Self {
        self
    }
}

impl<const V: usize, B: Backend, T: AnyVec<V, B> + ?Sized> AnyVec<V, B> for &T {
    type Wrapped = T::Wrapped;

    #[inline]
    fn wrapped(&self) -> &T::Wrapped {
        (**self).wrapped()
    }
}

macro_rules! def_any_family {
    { $($(#[$attr:meta])* [$name:ident, $family:ident])* } => {
        $(
            $(#[$attr])*
            pub trait $name<const V: usize, B: Backend = DefBackend> : AnyVec<V, B> {}

            impl<const V: usize, B: Backend, T> $name<V, B> for T
                where T : AnyVec<V, B> + ?Sized,
                      <T::Wrapped as Evaluate<V, B>>::Kind : Category<Family = $family>
            {}
        )*
    };
}
def_any_family!{
    /// Any vector of 8-bit integers or their mask
    [AnyInt8   , Int8Family   ]
    /// Any vector of 16-bit integers or their mask
    [AnyInt16  , Int16Family  ]
    /// Any vector of 32-bit integers or their mask
    [AnyInt32  , Int32Family  ]
    /// Any vector of 64-bit integers or their mask
    [AnyInt64  , Int64Family  ]
    /// Any vector of `f32` or its mask
    [AnyFloat32, Float32Family]
    /// Any vector of `f64` or its mask
    [AnyFloat64, Float64Family]
}

impl<C: Category, const V: usize, B: Backend> Vector<C, V, B> {
    /// Reinterpret any vector or expression with the same number of registers as this category.
    ///
    /// Expressions are evaluated first, masks are unmasked. See [`bit_cast`](crate::bit_cast) for the allowed conversions.
    pub fn from_any<X>(src: &X) -> Self
        where X : AnyVec<V, B> + ?Sized,
              C : CastFrom<<X::Wrapped as Evaluate<V, B>>::Kind>
    {
        let natives = src.wrapped().evaluate().into_natives();
        Self::from_natives(natives.map(<C as CastFrom<<X::Wrapped as Evaluate<V, B>>::Kind>>::cast_native::<B>))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn sum_lanes<X: AnyFloat32<1, Scalar>>(x: X) -> f32 {
        let v = Float32::<1, Scalar>::from_any(&x);
        (0..Float32::<1, Scalar>::LANES).map(|i| v.extract(i)).sum()
    }

    fn width_of<X: AnyVec<3, Scalar>>(_: &X) -> (usize, usize, TypeTag) {
        (X::VEC_LENGTH, X::LENGTH_BYTES, X::TYPE_TAG)
    }

    #[test]
    fn family_tags_accept_vectors_and_expressions() {
        let a = Float32::<1, Scalar>::splat(1.5);
        assert_eq!(sum_lanes(a), 6.0);
        assert_eq!(sum_lanes(&a), 6.0);
        assert_eq!(sum_lanes(a * a), 9.0);
    }

    #[test]
    fn any_vec_reports_width() {
        let a = Int16::<3, Scalar>::zero();
        assert_eq!(width_of(&a), (3, 48, TypeTag::Int));
        assert_eq!(width_of(&(a + a)), (3, 48, TypeTag::Int));
        assert_eq!(width_of(&a.cmp_eq(a)), (3, 48, TypeTag::MaskInt));
    }

    #[test]
    fn from_any_keeps_bits() {
        let ints = Uint64::<2, Scalar>::splat(f64::to_bits(-2.0));
        let floats = Float64::<2, Scalar>::from_any(&ints);
        assert_eq!(floats, Float64::<2, Scalar>::splat(-2.0));
        assert_eq!(Uint64::<2, Scalar>::from_any(&floats), ints);
    }
}

//! Lazy vector expressions.
//!
//! Operators on vectors build a tree of nodes instead of computing a result. The tree is only walked when the expression is
//! evaluated, once per native register, so a whole expression is applied to a register before moving to the next one.
use core::{
    array,
    marker::PhantomData,
    ops::{Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul, MulAssign, Not, Sub, SubAssign},
};

use crate::{
    Backend, NativeBitwise, NativeRegister,
    Category, DataCategory, MaskCategory, CmpOp, CastFrom,
    Vector,
};

/// Anything that can produce the `i`-th native register of a vector
pub trait Payload<C: Category, const V: usize, B: Backend> {
    /// Compute register `i`, with `i < V`
    fn eval_slice(&self, i: usize) -> C::Native<B>;
}

/// Right hand side of a vector operation: a vector, a reference to one, or an expression
pub trait Operand<C: Category, const V: usize, B: Backend> {
    type Payload : Payload<C, V, B>;

    fn into_payload(self) -> Self::Payload;
}

/// Unevaluated vector of category `C`, produced by the payload `E`
#[derive(Clone, Copy, Debug)]
pub struct Expr<C: Category, const V: usize, B: Backend, E> {
    e: E,
    _marker: PhantomData<(C, B)>,
}

impl<C: Category, const V: usize, B: Backend, E: Payload<C, V, B>> Expr<C, V, B, E> {
    #[inline]
    pub fn new(e: E) -> Self {
        Self { e, _marker: PhantomData }
    }

    /// Get the root node of the expression
    #[inline]
    pub fn payload(&self) -> &E {
        &self.e
    }

    /// Evaluate the expression into a vector.
    ///
    /// Nothing is cached, so evaluating the same expression twice computes it twice.
    #[inline]
    pub fn eval(&self) -> Vector<C, V, B> {
        Vector::from_natives(array::from_fn(|i| self.e.eval_slice(i)))
    }

    /// Evaluate a single native register of the expression.
    ///
    /// # Panics
    ///
    /// Panics if `i >= V`.
    #[inline]
    pub fn eval_slice(&self, i: usize) -> C::Native<B> {
        assert!(i < V, "register {} out of range for a vector of {} registers", i, V);
        self.e.eval_slice(i)
    }

    /// Reinterpret the bits of the expression as another category, once evaluated
    #[inline]
    pub fn bit_cast<T: CastFrom<C>>(self) -> Expr<T, V, B, Cast<C, E>> {
        Expr::new(Cast { a: self.e, _src: PhantomData })
    }
}

impl<M: MaskCategory, const V: usize, B: Backend, E: Payload<M, V, B>> Expr<M, V, B, E> {
    /// Convert the mask to data lanes, with set lanes all-ones and cleared lanes all-zeros
    #[inline]
    pub fn unmask(self) -> Expr<M::Data, V, B, Unmask<M, E>> {
        Expr::new(Unmask { a: self.e, _mask: PhantomData })
    }

    /// Pick lanes from `on_true` where the mask is set, and from `on_false` where it isn't
    #[inline]
    pub fn select<D, T, F>(self, on_true: T, on_false: F) -> Expr<D, V, B, Select<M, E, T::Payload, F::Payload>>
        where D : DataCategory,
              T : Operand<D, V, B>,
              F : Operand<D, V, B>
    {
        Expr::new(Select::new(self.e, on_true.into_payload(), on_false.into_payload()))
    }
}

impl<C: Category, const V: usize, B: Backend, E: Payload<C, V, B>> From<Expr<C, V, B, E>> for Vector<C, V, B> {
    #[inline]
    fn from(expr: Expr<C, V, B, E>) -> Self {
        expr.eval()
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<C: Category, const V: usize, B: Backend> Payload<C, V, B> for Vector<C, V, B> {
    #[inline]
    fn eval_slice(&self, i: usize) -> C::Native<B> {
        self.d[i]
    }
}

impl<C: Category, const V: usize, B: Backend, P: Payload<C, V, B> + ?Sized> Payload<C, V, B> for &P {
    #[inline]
    fn eval_slice(&self, i: usize) -> C::Native<B> {
        (**self).eval_slice(i)
    }
}

impl<C: Category, const V: usize, B: Backend> Operand<C, V, B> for Vector<C, V, B> {
    type Payload = Self;

    #[inline]
    fn into_payload(self) -> Self {
        self
    }
}

impl<'a, C: Category, const V: usize, B: Backend> Operand<C, V, B> for &'a Vector<C, V, B> {
    type Payload = Self;

    #[inline]
    fn into_payload(self) -> Self {
        self
    }
}

impl<C: Category, const V: usize, B: Backend, E: Payload<C, V, B>> Operand<C, V, B> for Expr<C, V, B, E> {
    type Payload = E;

    #[inline]
    fn into_payload(self) -> E {
        self.e
    }
}

impl<'a, C: Category, const V: usize, B: Backend, E: Payload<C, V, B>> Operand<C, V, B> for &'a Expr<C, V, B, E> {
    type Payload = &'a E;

    #[inline]
    fn into_payload(self) -> &'a E {
        &self.e
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// Operation combining 2 registers
pub trait BinaryOp<C: Category> {
    fn apply<B: Backend>(a: C::Native<B>, b: C::Native<B>) -> C::Native<B>;
}

/// Operation on a single register
pub trait UnaryOp<C: Category> {
    fn apply<B: Backend>(a: C::Native<B>) -> C::Native<B>;
}

macro_rules! def_ops {
    { $bound:ident: $([$name:ident, |$a:ident, $b:ident| $body:expr])* } => {
        $(
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            impl<C: $bound> BinaryOp<C> for $name {
                #[inline]
                fn apply<B: Backend>($a: C::Native<B>, $b: C::Native<B>) -> C::Native<B> {
                    $body
                }
            }
        )*
    };
}
def_ops!{ DataCategory:
    [AddOp, |a, b| C::native_add::<B>(a, b)]
    [SubOp, |a, b| C::native_sub::<B>(a, b)]
    [MulOp, |a, b| C::native_mul::<B>(a, b)]
}
def_ops!{ Category:
    [AndOp, |a, b| NativeBitwise::and(a, b)]
    [OrOp , |a, b| NativeBitwise::or(a, b) ]
    [XorOp, |a, b| NativeBitwise::xor(a, b)]
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NotOp;

impl<C: Category> UnaryOp<C> for NotOp {
    #[inline]
    fn apply<B: Backend>(a: C::Native<B>) -> C::Native<B> {
        NativeBitwise::not(a)
    }
}

/// Node applying a [`BinaryOp`] to 2 payloads
#[derive(Clone, Copy, Debug)]
pub struct Binary<O, L, R> {
    l: L,
    r: R,
    _op: PhantomData<O>,
}

impl<O, L, R> Binary<O, L, R> {
    #[inline]
    pub(crate) fn new(l: L, r: R) -> Self {
        Self { l, r, _op: PhantomData }
    }
}

impl<C, const V: usize, B, O, L, R> Payload<C, V, B> for Binary<O, L, R>
    where C : Category,
          B : Backend,
          O : BinaryOp<C>,
          L : Payload<C, V, B>,
          R : Payload<C, V, B>
{
    #[inline]
    fn eval_slice(&self, i: usize) -> C::Native<B> {
        O::apply::<B>(self.l.eval_slice(i), self.r.eval_slice(i))
    }
}

/// Node applying a [`UnaryOp`] to a payload
#[derive(Clone, Copy, Debug)]
pub struct Unary<O, A> {
    a: A,
    _op: PhantomData<O>,
}

impl<C, const V: usize, B, O, A> Payload<C, V, B> for Unary<O, A>
    where C : Category,
          B : Backend,
          O : UnaryOp<C>,
          A : Payload<C, V, B>
{
    #[inline]
    fn eval_slice(&self, i: usize) -> C::Native<B> {
        O::apply::<B>(self.a.eval_slice(i))
    }
}

/// Node comparing 2 payloads of category `S`, producing `S::Mask`
#[derive(Clone, Copy, Debug)]
pub struct Compare<S, L, R> {
    op: CmpOp,
    l: L,
    r: R,
    _src: PhantomData<S>,
}

impl<S, L, R> Compare<S, L, R> {
    /// Comparison done by the node
    pub fn op(&self) -> CmpOp {
        self.op
    }
}

impl<S, const V: usize, B, L, R> Payload<S::Mask, V, B> for Compare<S, L, R>
    where S : DataCategory,
          B : Backend,
          L : Payload<S, V, B>,
          R : Payload<S, V, B>
{
    #[inline]
    fn eval_slice(&self, i: usize) -> <S::Mask as Category>::Native<B> {
        S::native_cmp::<B>(self.op, self.l.eval_slice(i), self.r.eval_slice(i))
    }
}

/// Node blending 2 payloads with a mask of category `M`
#[derive(Clone, Copy, Debug)]
pub struct Select<M, K, T, F> {
    mask: K,
    on_true: T,
    on_false: F,
    _mask: PhantomData<M>,
}

impl<M, K, T, F> Select<M, K, T, F> {
    #[inline]
    pub(crate) fn new(mask: K, on_true: T, on_false: F) -> Self {
        Self { mask, on_true, on_false, _mask: PhantomData }
    }
}

impl<M, D, const V: usize, B, K, T, F> Payload<D, V, B> for Select<M, K, T, F>
    where M : MaskCategory,
          D : DataCategory,
          B : Backend,
          K : Payload<M, V, B>,
          T : Payload<D, V, B>,
          F : Payload<D, V, B>
{
    #[inline]
    fn eval_slice(&self, i: usize) -> D::Native<B> {
        const { assert!(M::ELEMENT_BITS == D::ELEMENT_BITS, "the mask and the selected values need the same lane width") };
        let mask = D::native_from_bits::<B>(self.mask.eval_slice(i).to_bits());
        let on_true = NativeBitwise::and(self.on_true.eval_slice(i), mask);
        let on_false = NativeBitwise::andnot(self.on_false.eval_slice(i), mask);
        NativeBitwise::or(on_true, on_false)
    }
}

/// Node setting all lanes to a single value
pub struct Splat<C: DataCategory> {
    val: C::Element,
}

impl<C: DataCategory> Clone for Splat<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: DataCategory> Copy for Splat<C> {}

impl<C: DataCategory, const V: usize, B: Backend> Payload<C, V, B> for Splat<C> {
    #[inline]
    fn eval_slice(&self, _i: usize) -> C::Native<B> {
        C::native_splat::<B>(self.val)
    }
}

/// Node converting a mask of category `M` to data lanes
#[derive(Clone, Copy, Debug)]
pub struct Unmask<M, A> {
    a: A,
    _mask: PhantomData<M>,
}

impl<M, const V: usize, B, A> Payload<M::Data, V, B> for Unmask<M, A>
    where M : MaskCategory,
          B : Backend,
          A : Payload<M, V, B>
{
    #[inline]
    fn eval_slice(&self, i: usize) -> <M::Data as Category>::Native<B> {
        M::mask_unmask::<B>(self.a.eval_slice(i))
    }
}

/// Node reinterpreting a payload of category `S` as another category
#[derive(Clone, Copy, Debug)]
pub struct Cast<S, A> {
    a: A,
    _src: PhantomData<S>,
}

impl<S, T, const V: usize, B, A> Payload<T, V, B> for Cast<S, A>
    where S : Category,
          T : CastFrom<S>,
          B : Backend,
          A : Payload<S, V, B>
{
    #[inline]
    fn eval_slice(&self, i: usize) -> T::Native<B> {
        <T as CastFrom<S>>::cast_native::<B>(self.a.eval_slice(i))
    }
}

/// Expression with all lanes set to `val`
#[inline]
pub fn splat<C: DataCategory, const V: usize, B: Backend>(val: C::Element) -> Expr<C, V, B, Splat<C>> {
    Expr::new(Splat { val })
}

/// Expression with all lanes set to 0
#[inline]
pub fn zero<C: DataCategory, const V: usize, B: Backend>() -> Expr<C, V, B, Splat<C>> {
    splat(C::Element::default())
}

//------------------------------------------------------------------------------------------------------------------------------

macro_rules! impl_binary_ops {
    { $bound:ident: $([$trait:ident, $fn:ident, $op:ident, $assign_trait:ident, $assign_fn:ident])* } => {
        $(
            impl<C: $bound, const V: usize, B: Backend, R: Operand<C, V, B>> $trait<R> for Vector<C, V, B> {
                type Output = Expr<C, V, B, Binary<$op, Self, R::Payload>>;

                #[inline]
                fn $fn(self, rhs: R) -> Self::Output {
                    Expr::new(Binary::new(self, rhs.into_payload()))
                }
            }

            impl<'a, C: $bound, const V: usize, B: Backend, R: Operand<C, V, B>> $trait<R> for &'a Vector<C, V, B> {
                type Output = Expr<C, V, B, Binary<$op, Self, R::Payload>>;

                #[inline]
                fn $fn(self, rhs: R) -> Self::Output {
                    Expr::new(Binary::new(self, rhs.into_payload()))
                }
            }

            impl<C: $bound, const V: usize, B: Backend, E: Payload<C, V, B>, R: Operand<C, V, B>> $trait<R> for Expr<C, V, B, E> {
                type Output = Expr<C, V, B, Binary<$op, E, R::Payload>>;

                #[inline]
                fn $fn(self, rhs: R) -> Self::Output {
                    Expr::new(Binary::new(self.e, rhs.into_payload()))
                }
            }

            impl<C: $bound, const V: usize, B: Backend, R: Operand<C, V, B>> $assign_trait<R> for Vector<C, V, B> {
                #[inline]
                fn $assign_fn(&mut self, rhs: R) {
                    let rhs = rhs.into_payload();
                    for (i, reg) in self.d.iter_mut().enumerate() {
                        *reg = <$op as BinaryOp<C>>::apply::<B>(*reg, rhs.eval_slice(i));
                    }
                }
            }
        )*
    };
}
impl_binary_ops!{ DataCategory:
    [Add, add, AddOp, AddAssign, add_assign]
    [Sub, sub, SubOp, SubAssign, sub_assign]
    [Mul, mul, MulOp, MulAssign, mul_assign]
}
impl_binary_ops!{ Category:
    [BitAnd, bitand, AndOp, BitAndAssign, bitand_assign]
    [BitOr , bitor , OrOp , BitOrAssign , bitor_assign ]
    [BitXor, bitxor, XorOp, BitXorAssign, bitxor_assign]
}

impl<C: Category, const V: usize, B: Backend> Not for Vector<C, V, B> {
    type Output = Expr<C, V, B, Unary<NotOp, Self>>;

    #[inline]
    fn not(self) -> Self::Output {
        Expr::new(Unary { a: self, _op: PhantomData })
    }
}

impl<'a, C: Category, const V: usize, B: Backend> Not for &'a Vector<C, V, B> {
    type Output = Expr<C, V, B, Unary<NotOp, Self>>;

    #[inline]
    fn not(self) -> Self::Output {
        Expr::new(Unary { a: self, _op: PhantomData })
    }
}

impl<C: Category, const V: usize, B: Backend, E: Payload<C, V, B>> Not for Expr<C, V, B, E> {
    type Output = Expr<C, V, B, Unary<NotOp, E>>;

    #[inline]
    fn not(self) -> Self::Output {
        Expr::new(Unary { a: self.e, _op: PhantomData })
    }
}

macro_rules! impl_compare_methods {
    { $($(#[$attr:meta])* [$fn:ident, $op:ident])* } => {
        impl<C: DataCategory, const V: usize, B: Backend> Vector<C, V, B> {
            $(
                $(#[$attr])*
                #[inline]
                pub fn $fn<R: Operand<C, V, B>>(self, rhs: R) -> Expr<C::Mask, V, B, Compare<C, Self, R::Payload>> {
                    Expr::new(Compare { op: CmpOp::$op, l: self, r: rhs.into_payload(), _src: PhantomData })
                }
            )*
        }

        impl<C: DataCategory, const V: usize, B: Backend, E: Payload<C, V, B>> Expr<C, V, B, E> {
            $(
                $(#[$attr])*
                #[inline]
                pub fn $fn<R: Operand<C, V, B>>(self, rhs: R) -> Expr<C::Mask, V, B, Compare<C, E, R::Payload>> {
                    Expr::new(Compare { op: CmpOp::$op, l: self.e, r: rhs.into_payload(), _src: PhantomData })
                }
            )*
        }
    };
}
impl_compare_methods!{
    /// Lane-wise `==`
    [cmp_eq, Eq]
    /// Lane-wise `!=`, true for NaN lanes
    [cmp_ne, Ne]
    /// Lane-wise `<`
    [cmp_lt, Lt]
    /// Lane-wise `<=`
    [cmp_le, Le]
    /// Lane-wise `>`
    [cmp_gt, Gt]
    /// Lane-wise `>=`
    [cmp_ge, Ge]
}

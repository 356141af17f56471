use widevec_simd::*;

fn lanes<T: Copy>(count: usize, f: impl Fn(usize) -> T) -> Vec<T> {
    (0..count).map(f).collect()
}

macro_rules! impl_op {
    { $($name:ident: $ty:ty, $elem:ty, $op:tt, $expr:expr;)* } => {
        $(
            #[test]
            fn $name() {
                let count = <$ty>::LANES;
                let arr0 = lanes(count, |i| (2 + i * 3) as $elem);
                let arr1 = lanes(count, |i| (1 + i % 7) as $elem);
                let expected_arr = lanes(count, |i| $expr(arr0[i], arr1[i]));

                let val0 = <$ty>::load(&arr0);
                let val1 = <$ty>::load(&arr1);
                let expected = <$ty>::load(&expected_arr);

                let res : $ty = (val0 $op val1).into();
                assert_eq!(res, expected);
                let res : $ty = (&val0 $op &val1).into();
                assert_eq!(res, expected);
            }
        )*
    };
}

impl_op!{
    add_i8 : Int8<2>   , i8 , +, i8::wrapping_add;
    add_u16: Uint16<2> , u16, +, u16::wrapping_add;
    add_i32: Int32<4>  , i32, +, i32::wrapping_add;
    add_u64: Uint64<2> , u64, +, u64::wrapping_add;
    add_f32: Float32<2>, f32, +, |a: f32, b: f32| a + b;
    add_f64: Float64<3>, f64, +, |a: f64, b: f64| a + b;

    sub_u8 : Uint8<2>  , u8 , -, u8::wrapping_sub;
    sub_i16: Int16<2>  , i16, -, i16::wrapping_sub;
    sub_u32: Uint32<2> , u32, -, u32::wrapping_sub;
    sub_i64: Int64<2>  , i64, -, i64::wrapping_sub;
    sub_f32: Float32<2>, f32, -, |a: f32, b: f32| a - b;

    mul_i8 : Int8<2>   , i8 , *, i8::wrapping_mul;
    mul_u8 : Uint8<1>  , u8 , *, u8::wrapping_mul;
    mul_i16: Int16<2>  , i16, *, i16::wrapping_mul;
    mul_u32: Uint32<2> , u32, *, u32::wrapping_mul;
    mul_i64: Int64<2>  , i64, *, i64::wrapping_mul;
    mul_u64: Uint64<1> , u64, *, u64::wrapping_mul;
    mul_f64: Float64<2>, f64, *, |a: f64, b: f64| a * b;

    and_u32: Uint32<2> , u32, &, |a: u32, b: u32| a & b;
    or_i16 : Int16<2>  , i16, |, |a: i16, b: i16| a | b;
    xor_u64: Uint64<2> , u64, ^, |a: u64, b: u64| a ^ b;
}

#[test]
fn wrapping_overflow() {
    let a = Uint8::<1>::splat(200);
    let res = (a + a).eval();
    assert_eq!(res, Uint8::<1>::splat(144));

    let a = Int64::<2>::splat(i64::MAX);
    let res = (a * Int64::<2>::splat(2)).eval();
    assert_eq!(res, Int64::<2>::splat(-2));
}

#[test]
fn not_flips_every_bit() {
    let a = Uint16::<2>::splat(0x00FF);
    let res : Uint16<2> = (!a).into();
    assert_eq!(res, Uint16::<2>::splat(0xFF00));

    let res : Uint16<2> = (!(a ^ Uint16::<2>::splat(0xFFFF))).into();
    assert_eq!(res, a);
}

#[test]
fn nested_expression() {
    let a = Float32::<2>::splat(2.0);
    let b = Float32::<2>::splat(3.0);
    let c = Float32::<2>::splat(0.5);

    let res : Float32<2> = ((a + b) * (b - c) - a).into();
    assert_eq!(res, Float32::<2>::splat(10.5));
}

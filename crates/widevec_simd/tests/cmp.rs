use widevec_simd::*;

fn pattern<T>(count: usize, values: &[T]) -> Vec<T>
    where T : Copy
{
    (0..count).map(|i| values[i % values.len()]).collect()
}

macro_rules! impl_test {
    { $($name:ident: $ty:ty, $elem:ty, $mask:ty;)* } => {
        $(
            #[test]
            fn $name() {
                let count = <$ty>::LANES;
                let val0 = <$ty>::load(&pattern(count, &[1 as $elem, 2 as $elem, 3 as $elem, 4 as $elem, 5 as $elem, 6 as $elem, 7 as $elem, 8 as $elem]));
                let val1 = <$ty>::load(&pattern(count, &[3 as $elem, 2 as $elem, 1 as $elem, 5 as $elem, 5 as $elem, 2 as $elem, 9 as $elem, 8 as $elem]));

                let eq_mask = <$mask>::from_bools(&pattern(count, &[false, true , false, false, true , false, false, true ]));
                let ne_mask = <$mask>::from_bools(&pattern(count, &[true , false, true , true , false, true , true , false]));
                let lt_mask = <$mask>::from_bools(&pattern(count, &[true , false, false, true , false, false, true , false]));
                let le_mask = <$mask>::from_bools(&pattern(count, &[true , true , false, true , true , false, true , true ]));
                let gt_mask = <$mask>::from_bools(&pattern(count, &[false, false, true , false, false, true , false, false]));
                let ge_mask = <$mask>::from_bools(&pattern(count, &[false, true , true , false, true , true , false, true ]));

                assert_eq!(val0.cmp_eq(val1).eval(), eq_mask);
                assert_eq!(val0.cmp_ne(val1).eval(), ne_mask);
                assert_eq!(val0.cmp_lt(val1).eval(), lt_mask);
                assert_eq!(val0.cmp_le(val1).eval(), le_mask);
                assert_eq!(val0.cmp_gt(val1).eval(), gt_mask);
                assert_eq!(val0.cmp_ge(val1).eval(), ge_mask);
            }
        )*
    };
}

impl_test!{
    cmp_i8 : Int8<2>   , i8 , MaskInt8<2>;
    cmp_u8 : Uint8<2>  , u8 , MaskInt8<2>;
    cmp_i16: Int16<2>  , i16, MaskInt16<2>;
    cmp_u16: Uint16<2> , u16, MaskInt16<2>;
    cmp_i32: Int32<2>  , i32, MaskInt32<2>;
    cmp_u32: Uint32<2> , u32, MaskInt32<2>;
    cmp_i64: Int64<4>  , i64, MaskInt64<4>;
    cmp_u64: Uint64<4> , u64, MaskInt64<4>;
    cmp_f32: Float32<2>, f32, MaskFloat32<2>;
    cmp_f64: Float64<4>, f64, MaskFloat64<4>;
}

#[test]
fn signedness_matters() {
    let neg = Int32::<2>::splat(-1);
    let one = Int32::<2>::splat(1);
    assert!(neg.cmp_lt(one).eval().all());

    let big = Uint32::<2>::splat(u32::MAX);
    let one = Uint32::<2>::splat(1);
    assert!(big.cmp_gt(one).eval().all());

    let big = Uint64::<2>::splat(u64::MAX);
    let one = Uint64::<2>::splat(1);
    assert!(!big.cmp_le(one).eval().any());
}

#[test]
fn nan_lanes() {
    let nan = Float64::<2>::splat(f64::NAN);
    let one = Float64::<2>::splat(1.0);
    assert!(!nan.cmp_eq(nan).eval().any());
    assert!(nan.cmp_ne(nan).eval().all());
    assert!(!nan.cmp_ge(one).eval().any());
    assert!(!nan.cmp_lt(one).eval().any());

    // vectors compare by bits
    assert_eq!(nan, nan);
}

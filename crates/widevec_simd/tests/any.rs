use widevec_simd::*;

/// Count the set lanes of any 32-bit integer vector or mask, without knowing if it's evaluated yet
fn count_ones<X: AnyInt32<2>>(x: &X) -> u32 {
    let bits = Uint32::<2>::from_any(x);
    (0..Uint32::<2>::LANES).map(|lane| bits.extract(lane).count_ones()).sum()
}

fn register_bytes<X: AnyVec<4>>(_: &X) -> usize {
    X::LENGTH_BYTES / X::VEC_LENGTH
}

#[test]
fn int32_family() {
    let lanes = Uint32::<2>::LANES as u32;
    let a = Int32::<2>::splat(-1);
    let b = Uint32::<2>::splat(1);

    assert_eq!(count_ones(&a), lanes * 32);
    assert_eq!(count_ones(&b), lanes);
    assert_eq!(count_ones(&(b + b + b)), lanes * 2);
    assert_eq!(count_ones(&a.cmp_eq(a)), lanes * 32);
    assert_eq!(count_ones(&MaskInt32::<2>::splat_mask(false)), 0);
}

#[test]
fn any_vec_is_width_only() {
    let expected = <DefBackend as Backend>::REGISTER_BYTES;
    assert_eq!(register_bytes(&Int8::<4>::zero()), expected);
    assert_eq!(register_bytes(&Float64::<4>::zero()), expected);
    assert_eq!(register_bytes(&(Float64::<4>::zero() * Float64::<4>::zero())), expected);
    assert_eq!(register_bytes(&MaskFloat32::<4>::splat_mask(true)), expected);
}

#[test]
fn wrapped_gives_the_concrete_value() {
    let a = Float32::<4>::splat(0.25);
    let expr = a + a;
    let by_ref = &expr;
    assert_eq!(by_ref.wrapped().eval(), Float32::<4>::splat(0.5));
    assert_eq!(AnyVec::<4, DefBackend>::wrapped(&a), &a);
}

use rand::{Rng, SeedableRng, rngs::StdRng};
use widevec_simd::*;

fn random_bytes<const V: usize>(rng: &mut StdRng) -> Uint8<V> {
    let bytes : Vec<u8> = (0..Uint8::<V>::LANES).map(|_| rng.gen()).collect();
    Uint8::load(&bytes)
}

#[test]
fn data_round_trips() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..32 {
        let bytes = random_bytes::<2>(&mut rng);

        let ints : Int32<2> = bit_cast(bytes);
        let floats : Float64<2> = bit_cast(ints);
        let halves : Uint16<2> = bit_cast(&floats);
        let back : Uint8<2> = bit_cast(halves);
        assert_eq!(back, bytes);

        let back = Uint8::<2>::from_any(&Float32::<2>::from_any(&bytes));
        assert_eq!(back, bytes);
    }
}

#[test]
fn float_bits_are_kept() {
    let mut rng = StdRng::seed_from_u64(7);
    let vals : Vec<f32> = (0..Float32::<2>::LANES).map(|_| rng.gen_range(-1.0e6..1.0e6)).collect();
    let floats = Float32::<2>::load(&vals);

    let bits = Uint32::<2>::from_any(&floats);
    for (lane, val) in vals.iter().enumerate() {
        assert_eq!(bits.extract(lane), val.to_bits());
    }
}

#[test]
fn mask_round_trips() {
    let mut rng = StdRng::seed_from_u64(99);
    let bools : Vec<bool> = (0..MaskInt32::<2>::LANES).map(|_| rng.gen()).collect();
    let mask = MaskInt32::<2>::from_bools(&bools);

    let fmask : MaskFloat32<2> = bit_cast(mask);
    let back : MaskInt32<2> = bit_cast(fmask);
    assert_eq!(back, mask);

    let data : Uint32<2> = bit_cast(mask);
    assert_eq!(data, mask.unmask());
    assert_eq!(MaskInt32::<2>::try_from_unmasked(&data), Ok(mask));
}

#[test]
fn lazy_cast_of_expression() {
    let a = Float64::<2>::splat(3.5);
    let neg = (a * expr::splat(-1.0)).bit_cast::<U64>();
    let abs = (neg & Uint64::<2>::splat(!(1 << 63))).eval();
    assert_eq!(Float64::<2>::from_any(&abs), a);
}

use rand::{Rng, SeedableRng, rngs::StdRng};
use widevec_simd::*;

type ScalarI32 = Int32<4, Scalar>;
type ScalarU8 = Uint8<4, Scalar>;
type ScalarF64 = Float64<4, Scalar>;

fn random<T>(rng: &mut StdRng, count: usize) -> Vec<T>
    where rand::distributions::Standard : rand::distributions::Distribution<T>
{
    (0..count).map(|_| rng.gen()).collect()
}

#[test]
fn default_backend_is_reported() {
    assert_eq!(DEF_BACKEND_TYPE, <DefBackend as Backend>::TYPE);
    assert_eq!(DEF_BACKEND_TYPE.to_string().parse::<BackendType>(), Ok(DEF_BACKEND_TYPE));
    assert!(has_backend(DEF_BACKEND_TYPE));
    assert_eq!(i32x16::LANES, ScalarI32::LANES);
}

#[test]
fn int_ops_agree() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..16 {
        let a : Vec<i32> = random(&mut rng, ScalarI32::LANES);
        let b : Vec<i32> = random(&mut rng, ScalarI32::LANES);

        let (sa, sb) = (ScalarI32::load(&a), ScalarI32::load(&b));
        let (da, db) = (i32x16::load(&a), i32x16::load(&b));

        let mut scalar = vec![0; ScalarI32::LANES];
        let mut native = vec![0; ScalarI32::LANES];

        ((sa * sb - sa) ^ !sb).eval().store(&mut scalar);
        ((da * db - da) ^ !db).eval().store(&mut native);
        assert_eq!(scalar, native);

        let smask = sa.cmp_gt(sb).eval();
        let dmask = da.cmp_gt(db).eval();
        for lane in 0..ScalarI32::LANES {
            assert_eq!(smask.test(lane), dmask.test(lane));
        }

        smask.select(sa, sb).eval().store(&mut scalar);
        dmask.select(da, db).eval().store(&mut native);
        assert_eq!(scalar, native);
    }
}

#[test]
fn unsigned_byte_ops_agree() {
    let mut rng = StdRng::seed_from_u64(77);
    let a : Vec<u8> = random(&mut rng, ScalarU8::LANES);
    let b : Vec<u8> = random(&mut rng, ScalarU8::LANES);

    let (sa, sb) = (ScalarU8::load(&a), ScalarU8::load(&b));
    let (da, db) = (u8x64::load(&a), u8x64::load(&b));

    let mut scalar = vec![0; ScalarU8::LANES];
    let mut native = vec![0; ScalarU8::LANES];
    (sa * sb + sa).eval().store(&mut scalar);
    (da * db + da).eval().store(&mut native);
    assert_eq!(scalar, native);

    let slt = sa.cmp_lt(sb).eval();
    let dlt = da.cmp_lt(db).eval();
    ScalarU8::from_any(&slt).store(&mut scalar);
    u8x64::from_any(&dlt).store(&mut native);
    assert_eq!(scalar, native);
}

#[test]
fn float_ops_agree() {
    let mut rng = StdRng::seed_from_u64(5);
    let a : Vec<f64> = (0..ScalarF64::LANES).map(|_| rng.gen_range(-100.0..100.0)).collect();
    let b : Vec<f64> = (0..ScalarF64::LANES).map(|_| rng.gen_range(-100.0..100.0)).collect();

    let (sa, sb) = (ScalarF64::load(&a), ScalarF64::load(&b));
    let (da, db) = (f64x8::load(&a), f64x8::load(&b));

    let scalar : Vec<u64> = {
        let res = Uint64::<4, Scalar>::from_any(&(sa * sb - sa));
        (0..ScalarF64::LANES).map(|lane| res.extract(lane)).collect()
    };
    let native : Vec<u64> = {
        let res = u64x8::from_any(&(da * db - da));
        (0..ScalarF64::LANES).map(|lane| res.extract(lane)).collect()
    };
    assert_eq!(scalar, native);

    let mut b = b;
    b[1] = f64::NAN;
    let (sb, db) = (ScalarF64::load(&b), f64x8::load(&b));
    for (smask, dmask) in [
        (sa.cmp_le(sb).eval(), da.cmp_le(db).eval()),
        (sa.cmp_ne(sb).eval(), da.cmp_ne(db).eval()),
    ] {
        for lane in 0..ScalarF64::LANES {
            assert_eq!(smask.test(lane), dmask.test(lane));
        }
    }
}

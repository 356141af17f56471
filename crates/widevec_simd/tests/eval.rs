use widevec_simd::*;

type I32x4r = Int32<4>;

fn ramp(start: i32) -> I32x4r {
    let lanes : Vec<i32> = (0..I32x4r::LANES as i32).map(|i| start + i * 7).collect();
    I32x4r::load(&lanes)
}

#[test]
fn add_matches_native_add() {
    let a = ramp(-100);
    let b = ramp(1_000_000);
    let res : I32x4r = (a + b).into();

    for i in 0..I32x4r::VEC_LENGTH {
        let expected = NativeArith::add(*a.vec(i), *b.vec(i));
        assert_eq!(I32x4r::broadcast(*res.vec(i)), I32x4r::broadcast(expected));
    }
}

#[test]
fn slices_are_independent() {
    let a = ramp(3);
    let b = ramp(-9);
    let expr = (a * b - a) ^ b;
    let full = expr.eval();

    let mut reversed = I32x4r::zero();
    for i in (0..I32x4r::VEC_LENGTH).rev() {
        *reversed.vec_mut(i) = expr.eval_slice(i);
    }
    assert_eq!(reversed, full);

    let mut shuffled = I32x4r::zero();
    for i in [2, 0, 3, 1] {
        *shuffled.vec_mut(i) = expr.eval_slice(i);
    }
    assert_eq!(shuffled, full);
}

#[test]
fn eval_is_identity() {
    let a = ramp(42);
    assert_eq!(a.eval(), a);
    assert_eq!(I32x4r::from_expr(a + I32x4r::zero()), a);

    let f = Float32::<2>::splat(f32::NAN);
    assert_eq!(f.eval(), f);
}

#[test]
fn expressions_borrow_operands() {
    let a = ramp(1);
    let b = ramp(2);
    let expr = &a + &b;
    let twice = (expr + &expr).eval();
    let once = expr.eval();
    assert_eq!(twice, (once + once).eval());
}

#[test]
fn assign_ops() {
    let mut acc = I32x4r::zero();
    let step = ramp(1);
    for _ in 0..4 {
        acc += step;
    }
    assert_eq!(acc, (step * expr::splat(4)).eval());

    acc -= &step;
    acc *= expr::splat(2);
    assert_eq!(acc, (step * expr::splat(6)).eval());
}
